use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything the keyboard can ask for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the playlist with one picked file.
    LoadFile,
    /// Replace the playlist with a picked folder, scanned recursively.
    LoadFolder,
    /// Append one picked file.
    AddFile,
    Next,
    Previous,
    TogglePause,
    VolumeUp,
    VolumeDown,
    Quit,
}

impl Command {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Quit),
                _ => None,
            };
        }

        let cmd = match key.code {
            KeyCode::Char('f') => Self::LoadFile,
            KeyCode::Char('o') => Self::LoadFolder,
            KeyCode::Char('a') => Self::AddFile,
            KeyCode::Right | KeyCode::Char('l') => Self::Next,
            KeyCode::Left | KeyCode::Char('h') => Self::Previous,
            KeyCode::Char(' ') | KeyCode::Char('p') => Self::TogglePause,
            KeyCode::Up | KeyCode::Char('k') => Self::VolumeUp,
            KeyCode::Down | KeyCode::Char('j') => Self::VolumeDown,
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}
