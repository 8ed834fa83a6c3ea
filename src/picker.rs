//! Native file/folder selection.
//!
//! Both calls block until the user answers. `None` means the dialog was
//! cancelled and is never an error.

use std::path::PathBuf;

pub trait Picker {
    /// Ask for one audio file whose extension is in `extensions`.
    fn pick_file(&mut self, extensions: &[String]) -> Option<PathBuf>;
    fn pick_folder(&mut self) -> Option<PathBuf>;
}

/// Dialogs provided by the desktop (GTK/portal, Win32 or Cocoa via `rfd`).
#[derive(Debug, Default)]
pub struct NativePicker;

impl Picker for NativePicker {
    fn pick_file(&mut self, extensions: &[String]) -> Option<PathBuf> {
        let picked = rfd::FileDialog::new()
            .set_title("Open audio file")
            .add_filter("Audio file", extensions)
            .pick_file();
        tracing::debug!(?picked, "file dialog closed");
        picked
    }

    fn pick_folder(&mut self) -> Option<PathBuf> {
        let picked = rfd::FileDialog::new()
            .set_title("Open music folder")
            .pick_folder();
        tracing::debug!(?picked, "folder dialog closed");
        picked
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::VecDeque;
    use std::path::PathBuf;

    use super::Picker;

    /// Hands out queued answers in order; an empty queue behaves like Cancel.
    #[derive(Debug, Default)]
    pub struct FakePicker {
        pub files: VecDeque<Option<PathBuf>>,
        pub folders: VecDeque<Option<PathBuf>>,
        pub file_filters: Vec<Vec<String>>,
    }

    impl FakePicker {
        pub fn cancelling() -> Self {
            Self::default()
        }

        pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
            self.files.push_back(Some(path.into()));
            self
        }

        pub fn with_folder(mut self, path: impl Into<PathBuf>) -> Self {
            self.folders.push_back(Some(path.into()));
            self
        }
    }

    impl Picker for FakePicker {
        fn pick_file(&mut self, extensions: &[String]) -> Option<PathBuf> {
            self.file_filters.push(extensions.to_vec());
            self.files.pop_front().flatten()
        }

        fn pick_folder(&mut self) -> Option<PathBuf> {
            self.folders.pop_front().flatten()
        }
    }
}
