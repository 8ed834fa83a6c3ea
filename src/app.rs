//! Application module: the state the frame loop renders.
//!
//! `App` owns the playlist and the wrapped text for the track on screen.

mod model;

pub use model::*;
