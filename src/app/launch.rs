// src/app/launch.rs
//! Launch parameters for a picker screen.

use std::path::{Path, PathBuf};

use super::extras::{Extras, PATH_KEY, SELECTION_TYPE_KEY};

/// What a terminal selection means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Activating a file row selects it.
    #[default]
    File,
    /// The displayed directory is confirmed from the menu; files are hidden.
    Directory,
}

impl SelectionMode {
    pub const FILE_VALUE: i32 = 1;
    pub const DIRECTORY_VALUE: i32 = 2;

    /// Any unrecognised value falls back to `File`.
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::DIRECTORY_VALUE => SelectionMode::Directory,
            Self::FILE_VALUE => SelectionMode::File,
            other => {
                log::debug!("unknown selection type {other}, using file selection");
                SelectionMode::File
            }
        }
    }

    pub fn code(self) -> i32 {
        match self {
            SelectionMode::File => Self::FILE_VALUE,
            SelectionMode::Directory => Self::DIRECTORY_VALUE,
        }
    }

    /// Whether data files appear in the listing.
    pub fn includes_files(self) -> bool {
        self == SelectionMode::File
    }
}

/// Request to open a picker screen, carried as a bundle of extras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRequest {
    pub extras: Extras,
}

impl LaunchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        self.extras.put_path(PATH_KEY, path);
        self
    }

    pub fn with_selection_type(mut self, code: i32) -> Self {
        self.extras.put_int(SELECTION_TYPE_KEY, code);
        self
    }

    pub fn with_mode(self, mode: SelectionMode) -> Self {
        self.with_selection_type(mode.code())
    }

    pub fn start_path(&self) -> Option<PathBuf> {
        self.extras.get_path(PATH_KEY).map(Path::to_path_buf)
    }

    pub fn mode(&self) -> SelectionMode {
        SelectionMode::from_code(self.extras.get_int(SELECTION_TYPE_KEY, -1))
    }
}
