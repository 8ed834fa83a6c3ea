//! In-memory `AudioBackend` for tests.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use super::backend::{AudioBackend, AudioError};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeStream {
    id: u64,
}

#[derive(Debug, Clone)]
pub struct StreamState {
    pub path: PathBuf,
    pub playing: bool,
    pub paused: bool,
    pub ended: bool,
    pub volume: f32,
    pub pumps: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(PathBuf),
    Unload(PathBuf),
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    next_id: u64,
    pub live: BTreeMap<u64, StreamState>,
    pub calls: Vec<Call>,
    pub failing: HashSet<PathBuf>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Make every live stream run out of audio.
    pub fn finish_all(&mut self) {
        for s in self.live.values_mut() {
            s.ended = true;
        }
    }

    /// The single live stream; panics if there is not exactly one.
    pub fn only_live(&self) -> &StreamState {
        assert_eq!(self.live.len(), 1, "expected exactly one live stream");
        self.live.values().next().unwrap()
    }

    pub fn loads(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Load(p) => Some(p.clone()),
                Call::Unload(_) => None,
            })
            .collect()
    }
}

impl AudioBackend for FakeBackend {
    type Stream = FakeStream;

    fn load_stream(&mut self, path: &Path) -> Result<FakeStream, AudioError> {
        self.calls.push(Call::Load(path.to_path_buf()));
        if self.failing.contains(path) {
            return Err(AudioError::Open {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "fake failure"),
            });
        }

        self.next_id += 1;
        self.live.insert(
            self.next_id,
            StreamState {
                path: path.to_path_buf(),
                playing: false,
                paused: false,
                ended: false,
                volume: 1.0,
                pumps: 0,
            },
        );
        Ok(FakeStream { id: self.next_id })
    }

    fn unload_stream(&mut self, stream: FakeStream) {
        let state = self
            .live
            .remove(&stream.id)
            .expect("unloading a stream that is not live");
        self.calls.push(Call::Unload(state.path));
    }

    fn play(&mut self, stream: &FakeStream) {
        if let Some(s) = self.live.get_mut(&stream.id) {
            s.playing = true;
            s.paused = false;
        }
    }

    fn pause(&mut self, stream: &FakeStream) {
        if let Some(s) = self.live.get_mut(&stream.id) {
            s.paused = true;
        }
    }

    fn resume(&mut self, stream: &FakeStream) {
        if let Some(s) = self.live.get_mut(&stream.id) {
            s.paused = false;
        }
    }

    fn set_volume(&mut self, stream: &FakeStream, volume: f32) {
        if let Some(s) = self.live.get_mut(&stream.id) {
            s.volume = volume;
        }
    }

    fn is_playing(&self, stream: &FakeStream) -> bool {
        self.live
            .get(&stream.id)
            .map(|s| s.playing && !s.paused && !s.ended)
            .unwrap_or(false)
    }

    fn pump(&mut self, stream: &FakeStream) {
        if let Some(s) = self.live.get_mut(&stream.id) {
            s.pumps += 1;
        }
    }
}
