// src/app/adapter.rs
//! Binds a listing to list rows.

use crate::fs::{guess_category, FileCategory, FilesystemEntry, Listing};

/// Anything that can resolve a row position to the entry shown there.
pub trait RowEntryProvider {
    fn entry_at(&self, row: usize) -> Option<&FilesystemEntry>;
    fn count(&self) -> usize;
}

/// Icon shown in front of a row label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Folder,
    File(FileCategory),
}

/// Display fields of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDisplay {
    pub icon: IconKind,
    pub label: String,
}

/// Map an entry to its row fields.
pub fn row_display(entry: &FilesystemEntry) -> RowDisplay {
    let icon = if entry.is_container {
        IconKind::Folder
    } else {
        IconKind::File(guess_category(&entry.path))
    };
    RowDisplay {
        icon,
        label: entry.name(),
    }
}

/// Entries currently bound to the list.
#[derive(Debug, Clone, Default)]
pub struct FileAdapter {
    files: Listing,
}

impl FileAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bound entries.
    pub fn set_files(&mut self, files: Listing) {
        self.files = files;
    }

    pub fn file(&self, row: usize) -> Option<&FilesystemEntry> {
        self.files.get(row)
    }

    pub fn files(&self) -> &[FilesystemEntry] {
        &self.files
    }

    pub fn rows(&self) -> impl Iterator<Item = RowDisplay> + '_ {
        self.files.iter().map(row_display)
    }
}

impl RowEntryProvider for FileAdapter {
    fn entry_at(&self, row: usize) -> Option<&FilesystemEntry> {
        self.file(row)
    }

    fn count(&self) -> usize {
        self.files.len()
    }
}
