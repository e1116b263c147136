// src/lib.rs
//! filechooser - a terminal file and directory picker.
//!
//! A picker screen lists one directory. Activating a subdirectory opens a
//! child screen for it; choosing a file (or confirming a directory) finishes
//! the screen, and the choice is relayed down the stack to the caller.

pub mod app;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod ui;

pub use error::{ChooserError, Result};
