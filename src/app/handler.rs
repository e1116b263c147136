// src/app/handler.rs
//! Reaction to a row activation.

use crate::error::{ChooserError, Result};

use super::{
    adapter::RowEntryProvider,
    launch::{LaunchRequest, SelectionMode},
    outcome::NavigationOutcome,
};

/// What the screen should do after a row was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Open a child screen.
    Navigate(LaunchRequest),
    /// Finish the current screen.
    Complete(NavigationOutcome),
}

/// Directories open a child screen in the same mode; anything else is selected.
pub fn on_activate(
    provider: &dyn RowEntryProvider,
    row: usize,
    mode: SelectionMode,
) -> Result<Activation> {
    let entry = provider.entry_at(row).ok_or(ChooserError::RowOutOfRange {
        row,
        len: provider.count(),
    })?;

    if entry.is_container {
        Ok(Activation::Navigate(
            LaunchRequest::new().with_path(&entry.path).with_mode(mode),
        ))
    } else {
        Ok(Activation::Complete(NavigationOutcome::Selected(
            entry.path.clone(),
        )))
    }
}
