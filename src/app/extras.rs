// src/app/extras.rs
//! Key-value bundle exchanged between a screen and its launcher, plus the
//! fixed keys, request code and result codes of the launch-for-result contract.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Key for the directory to show on start. Absent means the configured default.
pub const PATH_KEY: &str = "filechooser.path";

/// Key for the selection mode (`1` = file, `2` = directory).
pub const SELECTION_TYPE_KEY: &str = "filechooser.selection_type";

/// Key for the chosen path in an OK result.
pub const SELECTED_FILE_KEY: &str = "filechooser.selected_file";

/// Request code a screen uses when it launches a child screen.
pub const SELECT_FILE_REQUEST_CODE: i32 = 400;

/// First result code available to applications.
pub const RESULT_FIRST_USER: i32 = 1;

/// One bundle value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraValue {
    /// Kept as a path so names that are not UTF-8 survive unchanged.
    Path(PathBuf),
    Int(i32),
}

/// Typed key-value bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras {
    values: BTreeMap<String, ExtraValue>,
}

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_path(&mut self, key: &str, value: impl Into<PathBuf>) -> &mut Self {
        self.values
            .insert(key.to_string(), ExtraValue::Path(value.into()));
        self
    }

    pub fn put_int(&mut self, key: &str, value: i32) -> &mut Self {
        self.values.insert(key.to_string(), ExtraValue::Int(value));
        self
    }

    /// Path value for `key`; `None` if missing or not a path.
    pub fn get_path(&self, key: &str) -> Option<&Path> {
        match self.values.get(key) {
            Some(ExtraValue::Path(p)) => Some(p),
            _ => None,
        }
    }

    /// Integer value for `key`, or `default` if missing or not an integer.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.values.get(key) {
            Some(ExtraValue::Int(v)) => *v,
            _ => default,
        }
    }
}

/// Result code delivered with a finished screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    Canceled,
    /// Pop one level without deciding anything for the caller.
    GoBack,
}

impl ResultCode {
    pub fn code(self) -> i32 {
        match self {
            ResultCode::Ok => -1,
            ResultCode::Canceled => 0,
            ResultCode::GoBack => RESULT_FIRST_USER + 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        [ResultCode::Ok, ResultCode::Canceled, ResultCode::GoBack]
            .into_iter()
            .find(|c| c.code() == code)
    }
}
