use std::path::PathBuf;

use serde::Deserialize;

use crate::audio::PlaybackMode;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lilt/config.toml` or `~/.config/lilt/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LILT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Starting volume. Clamped to `[0.025, 0.5]` and rounded to a 0.025 step.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume: 0.1 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub mode: ModeSetting,
}

#[derive(Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    #[serde(alias = "repeat-one", alias = "repeat_one", alias = "loop-one")]
    Single,
    #[default]
    #[serde(alias = "loop-all", alias = "loop_all", alias = "playlist")]
    Folder,
    #[serde(alias = "no-loop", alias = "no_loop")]
    Queue,
}

impl From<ModeSetting> for PlaybackMode {
    fn from(m: ModeSetting) -> Self {
        match m {
            ModeSetting::Single => PlaybackMode::Single,
            ModeSetting::Folder => PlaybackMode::Folder,
            ModeSetting::Queue => PlaybackMode::Queue,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: ["mp3", "ogg", "wav", "aac", "flac", "m4a"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Frame period: how long each loop iteration waits for input (milliseconds).
    pub tick_ms: u64,
    /// Wrap width for the title, in characters.
    pub title_width: usize,
    /// Wrap width for the artist, in characters.
    pub artist_width: usize,
    /// Text shown before anything has been loaded.
    pub prompt_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            title_width: 20,
            artist_width: 30,
            prompt_text: "Please use O to load a playlist or A to add one track".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `LILT_LOG` is unset.
    pub level: String,
    /// Directory for the rolling `lilt.<date>.log` files; defaults to the XDG state directory.
    pub dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}
