//! Drives an `AudioBackend` from playlist state.
//!
//! The controller owns at most one loaded stream. Every path that replaces or
//! drops that stream goes through `unload`, including `Drop`.

use crate::playlist::Playlist;

use super::backend::AudioBackend;
use super::types::{PlaybackMode, PlayerState};
use super::volume::Volume;

struct Active<S> {
    stream: S,
    index: usize,
}

pub struct PlaybackController<B: AudioBackend> {
    backend: B,
    active: Option<Active<B::Stream>>,
    state: PlayerState,
    volume: Volume,
    mode: PlaybackMode,
}

impl<B: AudioBackend> PlaybackController<B> {
    pub fn new(backend: B, volume: Volume, mode: PlaybackMode) -> Self {
        Self {
            backend,
            active: None,
            state: PlayerState::Stopped,
            volume,
            mode,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Playlist index of the loaded track.
    pub fn loaded_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Load the track under the cursor and start it.
    ///
    /// Tracks that fail to load are skipped the same way a finished track
    /// is. After a full pass of failures the controller gives up and stops.
    /// `Single` never moves the cursor, so it stops on the first failure.
    pub fn play_current(&mut self, playlist: &mut Playlist) {
        self.unload();

        let mut attempts = 0;
        while attempts < playlist.len() {
            let index = playlist.cursor();
            let Some(track) = playlist.current() else {
                break;
            };

            match self.backend.load_stream(&track.path) {
                Ok(stream) => {
                    tracing::info!(index, path = %track.path.display(), "loaded stream");
                    self.backend.set_volume(&stream, self.volume.level());
                    self.backend.play(&stream);
                    self.active = Some(Active { stream, index });
                    self.state = PlayerState::Playing;
                    return;
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unplayable track");
                    attempts += 1;
                    if self.mode == PlaybackMode::Single || !self.step_past_end(playlist) {
                        break;
                    }
                }
            }
        }

        self.state = PlayerState::Stopped;
    }

    /// Per-frame update: keeps the stream fed and moves on when it ends.
    pub fn tick(&mut self, playlist: &mut Playlist) {
        let Some(active) = &self.active else {
            return;
        };

        self.backend.pump(&active.stream);
        if self.state != PlayerState::Playing || self.backend.is_playing(&active.stream) {
            return;
        }

        tracing::debug!(index = active.index, mode = self.mode.label(), "track ended");
        self.unload();
        if self.step_past_end(playlist) {
            self.play_current(playlist);
        } else {
            tracing::info!("queue finished");
            self.state = PlayerState::Stopped;
        }
    }

    /// Move the cursor the way the mode wants after a track ends.
    /// Returns false when playback should stop instead.
    fn step_past_end(&self, playlist: &mut Playlist) -> bool {
        match self.mode {
            PlaybackMode::Single => true,
            PlaybackMode::Folder => playlist.advance().is_ok(),
            PlaybackMode::Queue => {
                let at_end = playlist.is_at_end();
                // Rewind so the next play starts the queue over.
                let _ = playlist.advance();
                !at_end
            }
        }
    }

    pub fn next(&mut self, playlist: &mut Playlist) {
        if playlist.advance().is_ok() {
            self.play_current(playlist);
        }
    }

    pub fn previous(&mut self, playlist: &mut Playlist) {
        if playlist.retreat().is_ok() {
            self.play_current(playlist);
        }
    }

    /// Pause, resume, or (when stopped) start the track under the cursor.
    pub fn toggle_pause(&mut self, playlist: &mut Playlist) {
        if let Some(active) = &self.active {
            match self.state {
                PlayerState::Playing => {
                    self.backend.pause(&active.stream);
                    self.state = PlayerState::Paused;
                    tracing::debug!("paused");
                    return;
                }
                PlayerState::Paused => {
                    self.backend.resume(&active.stream);
                    self.state = PlayerState::Playing;
                    tracing::debug!("resumed");
                    return;
                }
                PlayerState::Stopped => {}
            }
        }

        if !playlist.is_empty() {
            self.play_current(playlist);
        }
    }

    pub fn volume_up(&mut self) {
        self.volume.up();
        self.apply_volume();
    }

    pub fn volume_down(&mut self) {
        self.volume.down();
        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        if let Some(active) = &self.active {
            self.backend.set_volume(&active.stream, self.volume.level());
        }
    }

    /// Release the loaded stream, if any.
    pub fn stop(&mut self) {
        self.unload();
        self.state = PlayerState::Stopped;
    }

    fn unload(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!(index = active.index, "unloading stream");
            self.backend.unload_stream(active.stream);
        }
    }
}

impl<B: AudioBackend> Drop for PlaybackController<B> {
    fn drop(&mut self) {
        self.unload();
    }
}
