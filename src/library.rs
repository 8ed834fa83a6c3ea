//! Track metadata: the `Track` value, tag reading and folder scanning.

mod model;
mod scan;
mod tags;

pub use model::Track;
pub use scan::scan;
pub use tags::read_track;
