//! Ordered track list with a wrapping cursor.

use thiserror::Error;

use crate::library::Track;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("playlist is empty")]
    Empty,
}

/// Tracks in insertion order plus the index of the selected one.
///
/// Whenever the list is non-empty, `cursor < len`.
#[derive(Debug, Default, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
    cursor: usize,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn extend(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks.extend(tracks);
    }

    /// Drop every track and reset the cursor.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = 0;
    }

    /// Move to the next track, wrapping to the first one past the end.
    pub fn advance(&mut self) -> Result<&Track, PlaylistError> {
        if self.tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }
        self.cursor = (self.cursor + 1) % self.tracks.len();
        Ok(&self.tracks[self.cursor])
    }

    /// Move to the previous track, wrapping to the last one before the start.
    pub fn retreat(&mut self) -> Result<&Track, PlaylistError> {
        if self.tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(self.tracks.len() - 1);
        Ok(&self.tracks[self.cursor])
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits on the last track.
    pub fn is_at_end(&self) -> bool {
        !self.tracks.is_empty() && self.cursor + 1 == self.tracks.len()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests;
