// src/error.rs
//! Library error type.

use thiserror::Error;

/// Errors raised by the chooser core.
#[derive(Debug, Error)]
pub enum ChooserError {
    /// A row was activated that the bound list does not contain.
    /// This is a wiring bug in the caller, not a user-facing condition.
    #[error("row {row} is out of range for a list of {len} entries")]
    RowOutOfRange { row: usize, len: usize },

    /// A command arrived after every screen had already finished.
    #[error("no picker screen is active")]
    NoActiveScreen,
}

pub type Result<T> = std::result::Result<T, ChooserError>;
