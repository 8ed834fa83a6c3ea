//! `rodio` implementation of `AudioBackend`: one `Sink` per loaded stream.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::backend::{AudioBackend, AudioError};

pub struct RodioBackend {
    stream: OutputStream,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the OutputStream is dropped, which would
        // land on top of the terminal UI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Stream = Sink;

    fn load_stream(&mut self, path: &Path) -> Result<Sink, AudioError> {
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        Ok(sink)
    }

    fn unload_stream(&mut self, stream: Sink) {
        stream.stop();
    }

    fn play(&mut self, stream: &Sink) {
        stream.play();
    }

    fn pause(&mut self, stream: &Sink) {
        stream.pause();
    }

    fn resume(&mut self, stream: &Sink) {
        stream.play();
    }

    fn set_volume(&mut self, stream: &Sink, volume: f32) {
        stream.set_volume(volume);
    }

    fn is_playing(&self, stream: &Sink) -> bool {
        !stream.empty() && !stream.is_paused()
    }
}
