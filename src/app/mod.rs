// src/app/mod.rs
//! Application module - picker screens and the result relay between them.

pub mod adapter;
pub mod extras;
pub mod handler;
pub mod launch;
pub mod navigator;
pub mod outcome;
pub mod screen;

// Re-export the types callers work with
pub use adapter::{row_display, FileAdapter, IconKind, RowDisplay, RowEntryProvider};
pub use extras::{
    Extras, ResultCode, PATH_KEY, SELECTED_FILE_KEY, SELECTION_TYPE_KEY, SELECT_FILE_REQUEST_CODE,
};
pub use handler::{on_activate, Activation};
pub use launch::{LaunchRequest, SelectionMode};
pub use navigator::{Command, Navigator};
pub use outcome::{NavigationOutcome, ScreenResult};
pub use screen::{MenuAction, Screen, ScreenState, Transition};
