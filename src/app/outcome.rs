// src/app/outcome.rs
//! Values relayed from a finished screen to whoever launched it.

use std::path::{Path, PathBuf};

use super::extras::{Extras, ResultCode, SELECTED_FILE_KEY};

/// Decision a screen hands to its launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Selected(PathBuf),
    /// Abort the whole chain with no result.
    Cancelled,
    /// Pop one level; the launcher keeps displaying itself.
    Back,
}

/// Result code plus optional payload, as seen by the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenResult {
    pub code: ResultCode,
    pub data: Option<Extras>,
}

impl ScreenResult {
    /// Path carried by an OK result.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.data
            .as_ref()
            .and_then(|d| d.get_path(SELECTED_FILE_KEY))
            .map(Path::to_path_buf)
    }
}

impl From<NavigationOutcome> for ScreenResult {
    fn from(outcome: NavigationOutcome) -> Self {
        match outcome {
            NavigationOutcome::Selected(path) => {
                let mut data = Extras::new();
                data.put_path(SELECTED_FILE_KEY, path);
                ScreenResult {
                    code: ResultCode::Ok,
                    data: Some(data),
                }
            }
            NavigationOutcome::Cancelled => ScreenResult {
                code: ResultCode::Canceled,
                data: None,
            },
            NavigationOutcome::Back => ScreenResult {
                code: ResultCode::GoBack,
                data: None,
            },
        }
    }
}

impl NavigationOutcome {
    /// Decode a delivered result. An OK result without a path carries no
    /// decision and decodes to `None`.
    pub fn from_result(result: &ScreenResult) -> Option<Self> {
        match result.code {
            ResultCode::Ok => result.selected_path().map(NavigationOutcome::Selected),
            ResultCode::Canceled => Some(NavigationOutcome::Cancelled),
            ResultCode::GoBack => Some(NavigationOutcome::Back),
        }
    }
}
