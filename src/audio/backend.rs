//! The streaming-audio seam the controller drives.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device")]
    Device(#[from] rodio::StreamError),
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// A source of playable streams.
///
/// Streams are owned by the caller between `load_stream` and `unload_stream`;
/// unloading consumes the handle so it cannot be released twice.
pub trait AudioBackend {
    type Stream;

    fn load_stream(&mut self, path: &Path) -> Result<Self::Stream, AudioError>;
    fn unload_stream(&mut self, stream: Self::Stream);

    fn play(&mut self, stream: &Self::Stream);
    fn pause(&mut self, stream: &Self::Stream);
    fn resume(&mut self, stream: &Self::Stream);
    fn set_volume(&mut self, stream: &Self::Stream, volume: f32);

    /// False once the stream is paused or has run out of audio.
    fn is_playing(&self, stream: &Self::Stream) -> bool;

    /// Called once per frame while a stream is loaded.
    fn pump(&mut self, _stream: &Self::Stream) {}
}
