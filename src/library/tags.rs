use std::path::Path;

use lofty::prelude::*;

use super::model::Track;

/// Title and artist as read from a file's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: String,
    pub artist: String,
}

/// Read title/artist from `path`.
///
/// Unreadable files and files without tags give empty strings; the failure is
/// only logged.
pub fn read_tags(path: &Path) -> TrackTags {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable tags");
            return TrackTags::default();
        }
    };

    let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
        return TrackTags::default();
    };

    TrackTags {
        title: tag
            .title()
            .map(|v| v.trim().to_string())
            .unwrap_or_default(),
        artist: tag
            .artist()
            .map(|v| v.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Build a `Track` for `path`, reading its tags.
pub fn read_track(path: &Path) -> Track {
    let TrackTags { title, artist } = read_tags(path);
    Track {
        title,
        artist,
        ..Track::untagged(path)
    }
}
