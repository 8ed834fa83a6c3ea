//! UI rendering for the now-playing panel.
//!
//! Everything is drawn inside a fixed-size panel centered in the terminal:
//! wrapped title and artist on the left, a vertical volume bar on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::audio::{AudioBackend, PlaybackController, PlaybackMode, PlayerState, Volume};

pub const PANEL_WIDTH: u16 = 36;
pub const PANEL_HEIGHT: u16 = 9;
const BAR_WIDTH: u16 = 2;

const BG: Color = Color::Rgb(0x14, 0x14, 0x1b);
const PRIMARY: Color = Color::Rgb(0xb1, 0x93, 0xba);
const SECONDARY: Color = Color::Rgb(0x84, 0x66, 0x8e);
const PRIMARY_DIM: Color = Color::Gray;
const SECONDARY_DIM: Color = Color::DarkGray;

/// Controller state the renderer needs.
#[derive(Debug, Copy, Clone)]
pub struct Status {
    pub state: PlayerState,
    pub volume: Volume,
    pub mode: PlaybackMode,
}

impl Status {
    pub fn of<B: AudioBackend>(controller: &PlaybackController<B>) -> Self {
        Self {
            state: controller.state(),
            volume: controller.volume(),
            mode: controller.mode(),
        }
    }

    fn palette(&self) -> (Color, Color) {
        if self.state == PlayerState::Playing {
            (PRIMARY, SECONDARY)
        } else {
            (PRIMARY_DIM, SECONDARY_DIM)
        }
    }
}

/// Filled rows of a `rows`-tall bar for a volume at `fraction` of the maximum.
/// Any audible volume shows at least one row.
pub fn volume_bar_fill(fraction: f32, rows: u16) -> u16 {
    if rows == 0 || fraction <= 0.0 {
        return 0;
    }
    let filled = (fraction.min(1.0) * rows as f32).round() as u16;
    filled.clamp(1, rows)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn text_lines(app: &App, status: &Status) -> Vec<Line<'static>> {
    let (primary, secondary) = status.palette();

    let Some(np) = app.now_playing() else {
        return app
            .prompt_lines()
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::new().fg(PRIMARY))))
            .collect();
    };

    let title_style = Style::new().fg(primary).add_modifier(Modifier::BOLD);
    let artist_style = Style::new().fg(secondary);

    np.title
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), title_style)))
        .chain(
            np.artist
                .iter()
                .map(|l| Line::from(Span::styled(l.clone(), artist_style))),
        )
        .collect()
}

fn volume_bar(status: &Status, rows: u16) -> Vec<Line<'static>> {
    let (primary, secondary) = status.palette();
    let filled = volume_bar_fill(status.volume.fraction(), rows);
    let track = "░".repeat(BAR_WIDTH as usize);
    let fill = "█".repeat(BAR_WIDTH as usize);

    (0..rows)
        .map(|row| {
            if row < rows - filled {
                Line::from(Span::styled(track.clone(), Style::new().fg(secondary)))
            } else {
                Line::from(Span::styled(fill.clone(), Style::new().fg(primary)))
            }
        })
        .collect()
}

fn footer(app: &App, status: &Status) -> String {
    let state = match status.state {
        PlayerState::Stopped => "stopped",
        PlayerState::Playing => "playing",
        PlayerState::Paused => "paused",
    };
    match app.now_playing() {
        Some(np) => format!(
            " {}/{} {} {} ",
            np.index + 1,
            app.playlist.len(),
            status.mode.label(),
            state
        ),
        None => format!(" {} ", status.mode.label()),
    }
}

/// Render the panel into `frame`.
pub fn draw(frame: &mut Frame, app: &App, status: &Status) {
    let area = centered_rect_sized(PANEL_WIDTH, PANEL_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" lilt ")
        .title_bottom(Line::from(footer(app, status)).right_aligned())
        .border_style(Style::new().fg(SECONDARY))
        .style(Style::new().bg(BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(BAR_WIDTH),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(text_lines(app, status)), chunks[0]);
    frame.render_widget(
        Paragraph::new(volume_bar(status, chunks[2].height)),
        chunks[2],
    );
}
