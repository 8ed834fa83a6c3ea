use std::env;
use std::path::PathBuf;

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{PlaybackController, RodioBackend, Volume};
use crate::picker::NativePicker;

mod actions;
mod event_loop;
mod keys;
mod logging;
mod settings;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();
    let _log_guard = logging::init(&settings.log);
    if let Some(msg) = config_warning {
        tracing::warn!("{msg}");
    }

    let backend = RodioBackend::open_default()?;
    let mut controller = PlaybackController::new(
        backend,
        Volume::from_level(settings.audio.volume),
        settings.playback.mode.into(),
    );
    let mut app = App::new(&settings.ui);
    let mut picker = NativePicker;

    tracing::info!(mode = controller.mode().label(), "starting");

    if let Some(path) = env::args_os().nth(1).map(PathBuf::from) {
        let tracks = actions::tracks_for_path(&path, &settings.library);
        if !tracks.is_empty() {
            actions::replace_playlist(&mut app, &mut controller, tracks);
        }
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Without event types every auto-repeat arrives as a fresh press.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    tracing::debug!(enhanced, "keyboard event types");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result =
        event_loop::run(&mut terminal, &settings, &mut app, &mut controller, &mut picker);

    controller.stop();

    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    run_result
}
