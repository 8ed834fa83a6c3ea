//! Application model types: `App` and `NowPlaying`.

use std::path::PathBuf;

use crate::config::UiSettings;
use crate::playlist::Playlist;
use crate::text::wrap_words;

/// Wrapped text for the track on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub index: usize,
    pub path: PathBuf,
    pub title: Vec<String>,
    pub artist: Vec<String>,
}

/// The main application model.
pub struct App {
    pub playlist: Playlist,
    now_playing: Option<NowPlaying>,
    prompt: Vec<String>,
    title_width: usize,
    artist_width: usize,
}

impl App {
    pub fn new(ui: &UiSettings) -> Self {
        Self {
            playlist: Playlist::new(),
            now_playing: None,
            prompt: wrap_words(&ui.prompt_text, ui.title_width),
            title_width: ui.title_width,
            artist_width: ui.artist_width,
        }
    }

    /// Index of the track to show: the loaded one, or the cursor when
    /// nothing is loaded but the playlist has tracks.
    pub fn shown_index(&self, loaded: Option<usize>) -> Option<usize> {
        loaded.or_else(|| (!self.playlist.is_empty()).then(|| self.playlist.cursor()))
    }

    /// Re-wrap the now-playing text if the shown track changed.
    ///
    /// Returns true when the text was recomputed.
    pub fn sync_now_playing(&mut self, loaded: Option<usize>) -> bool {
        let shown = self
            .shown_index(loaded)
            .and_then(|i| self.playlist.get(i).map(|t| (i, t)));

        let unchanged = match (&self.now_playing, shown) {
            (Some(np), Some((i, track))) => np.index == i && np.path == track.path,
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        self.now_playing = shown.map(|(index, track)| NowPlaying {
            index,
            path: track.path.clone(),
            title: wrap_words(&track.title, self.title_width),
            artist: wrap_words(&track.artist, self.artist_width),
        });
        true
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    /// The idle message, already wrapped.
    pub fn prompt_lines(&self) -> &[String] {
        &self.prompt
    }
}
