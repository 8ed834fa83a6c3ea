//! Small shared audio types.

/// Where the controller is in its lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Nothing loaded.
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What happens when a track plays to its end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Repeat the loaded track. Adding a file replaces the playlist.
    Single,
    /// Advance through the playlist and wrap around at the end.
    #[default]
    Folder,
    /// Advance through the playlist and stop after the last track.
    Queue,
}

impl PlaybackMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Folder => "folder",
            Self::Queue => "queue",
        }
    }
}
