//! Audio playback: the backend seam, its `rodio` implementation and the
//! controller that turns playlist state into stream operations.

mod backend;
mod controller;
#[cfg(test)]
pub(crate) mod fake;
mod sink;
mod types;
mod volume;

pub use backend::{AudioBackend, AudioError};
pub use controller::PlaybackController;
pub use sink::RodioBackend;
pub use types::{PlaybackMode, PlayerState};
pub use volume::Volume;
