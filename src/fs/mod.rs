// src/fs/mod.rs
//! Filesystem module - directory filters, listing and file categories.

pub mod detection;
pub mod filters;
pub mod listing;

// Re-export commonly used types
pub use detection::{guess_category, FileCategory};
pub use filters::{is_container, is_data_file};
pub use listing::{build_listing, list_with_filter, tail_path, FilesystemEntry, Listing};
