// src/fs/listing.rs
//! Directory listing: containers first, then (optionally) data files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::filters::{is_container, is_data_file};

/// Snapshot of one directory child taken at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemEntry {
    pub path: PathBuf,
    pub is_container: bool,
}

impl FilesystemEntry {
    pub fn new(path: PathBuf) -> Self {
        let is_container = is_container(&path);
        Self { path, is_container }
    }

    /// Final path component, or the whole path when there is none (e.g. `/`).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Ordered entries shown on one screen.
pub type Listing = Vec<FilesystemEntry>;

/// List the direct children of `dir` accepted by `filter`, sorted by path.
///
/// Returns `None` when the directory cannot be enumerated, the same way a
/// filtered platform listing hands back nothing on I/O failure.
pub fn list_with_filter(dir: &Path, filter: fn(&Path) -> bool) -> Option<Listing> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(err) => {
            log::debug!("cannot list {}: {}", dir.display(), err);
            return None;
        }
    };

    let mut entries: Listing = read
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| filter(p))
        .map(FilesystemEntry::new)
        .collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Some(entries)
}

/// Build the listing for `dir`. Data files are appended only when
/// `include_files` is set; an unreadable directory yields an empty listing.
pub fn build_listing(dir: &Path, include_files: bool) -> Listing {
    let mut listing = list_with_filter(dir, is_container).unwrap_or_default();

    if include_files {
        if let Some(files) = list_with_filter(dir, is_data_file) {
            listing.extend(files);
        }
    }

    log::debug!(
        "listed {} entries in {} (files included: {})",
        listing.len(),
        dir.display(),
        include_files
    );
    listing
}

/// Show the last `n` components of `path`, prefixed with `…/` when truncated.
pub fn tail_path(path: &Path, n: usize) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.len() <= n {
        return path.display().to_string();
    }
    format!("…/{}", parts[parts.len() - n..].join("/"))
}
