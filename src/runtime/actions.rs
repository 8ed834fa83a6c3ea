//! Applying a `Command` to the app, the controller and the picker.

use std::path::Path;

use crate::app::App;
use crate::audio::{AudioBackend, PlaybackController, PlaybackMode};
use crate::config::LibrarySettings;
use crate::library::{Track, read_track, scan};
use crate::picker::Picker;

use super::keys::Command;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn apply<B: AudioBackend, P: Picker>(
    cmd: Command,
    app: &mut App,
    controller: &mut PlaybackController<B>,
    picker: &mut P,
    library: &LibrarySettings,
) -> Flow {
    match cmd {
        Command::LoadFile => {
            if let Some(path) = picker.pick_file(&library.extensions) {
                replace_playlist(app, controller, vec![read_track(&path)]);
            }
        }
        Command::LoadFolder => {
            if let Some(dir) = picker.pick_folder() {
                let tracks = scan(&dir, library);
                if tracks.is_empty() {
                    tracing::warn!(dir = %dir.display(), "no playable files, keeping playlist");
                } else {
                    replace_playlist(app, controller, tracks);
                }
            }
        }
        Command::AddFile => {
            if let Some(path) = picker.pick_file(&library.extensions) {
                let track = read_track(&path);
                if controller.mode() == PlaybackMode::Single {
                    replace_playlist(app, controller, vec![track]);
                } else {
                    add_track(app, controller, track);
                }
            }
        }
        Command::Next => controller.next(&mut app.playlist),
        Command::Previous => controller.previous(&mut app.playlist),
        Command::TogglePause => controller.toggle_pause(&mut app.playlist),
        Command::VolumeUp => controller.volume_up(),
        Command::VolumeDown => controller.volume_down(),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Swap in `tracks` and start the first one. The old stream is released first.
pub fn replace_playlist<B: AudioBackend>(
    app: &mut App,
    controller: &mut PlaybackController<B>,
    tracks: Vec<Track>,
) {
    controller.stop();
    app.playlist.clear();
    app.playlist.extend(tracks);
    tracing::info!(count = app.playlist.len(), "playlist replaced");
    controller.play_current(&mut app.playlist);
}

fn add_track<B: AudioBackend>(
    app: &mut App,
    controller: &mut PlaybackController<B>,
    track: Track,
) {
    let was_empty = app.playlist.is_empty();
    tracing::info!(path = %track.path.display(), "track added");
    app.playlist.append(track);
    if was_empty {
        controller.play_current(&mut app.playlist);
    }
}

/// Tracks for a path given on the command line: a folder is scanned, a file
/// becomes a one-track playlist.
pub fn tracks_for_path(path: &Path, library: &LibrarySettings) -> Vec<Track> {
    if path.is_dir() {
        scan(path, library)
    } else if path.is_file() {
        vec![read_track(path)]
    } else {
        tracing::warn!(path = %path.display(), "start path does not exist");
        Vec::new()
    }
}
