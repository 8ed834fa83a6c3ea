use std::path::PathBuf;

/// A playable file and the tags read from it.
///
/// `title` and `artist` are empty when the file has no readable tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
}

impl Track {
    /// Build a track from `path` with blank metadata.
    pub fn untagged(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: String::new(),
            artist: String::new(),
        }
    }
}
