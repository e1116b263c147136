// src/fs/filters.rs
//! Entry predicates passed to directory listing.

use std::path::Path;

/// Accepts directories only. Missing or inaccessible paths are rejected.
pub fn is_container(path: &Path) -> bool {
    path.is_dir()
}

/// Accepts anything that is not a directory.
pub fn is_data_file(path: &Path) -> bool {
    !path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn directories_are_containers() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(is_container(&dir.path().join("sub")));
        assert!(!is_data_file(&dir.path().join("sub")));
    }

    #[test]
    fn regular_files_are_data_files() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        assert!(is_data_file(&dir.path().join("notes.txt")));
        assert!(!is_container(&dir.path().join("notes.txt")));
    }

    #[test]
    fn missing_path_is_never_a_container() {
        let dir = TempDir::new().unwrap();
        assert!(!is_container(&dir.path().join("nope")));
    }
}
