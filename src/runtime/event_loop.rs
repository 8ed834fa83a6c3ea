use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioBackend, PlaybackController};
use crate::config;
use crate::picker::Picker;
use crate::ui::{self, Status};

use super::actions::{self, Flow};
use super::keys::Command;

/// Main frame loop. Each iteration feeds the audio stream, refreshes the
/// now-playing text, draws, then handles at most one key press. The input
/// poll timeout is the frame period. Returns `Ok(())` when quit is requested.
pub fn run<B: AudioBackend, P: Picker>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<B>,
    picker: &mut P,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = Duration::from_millis(settings.ui.tick_ms);

    loop {
        controller.tick(&mut app.playlist);
        app.sync_now_playing(controller.loaded_index());

        let status = Status::of(controller);
        terminal.draw(|f| ui::draw(f, app, &status))?;

        if !event::poll(frame)? {
            continue;
        }
        let Some(cmd) = command_for(&event::read()?) else {
            continue;
        };
        tracing::debug!(?cmd, "key command");
        if actions::apply(cmd, app, controller, picker, &settings.library) == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Edge-triggered input: only key presses map to commands. Auto-repeat and
/// release events are dropped, as is everything that isn't a key.
pub(super) fn command_for(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Command::from_key(key),
        _ => None,
    }
}
