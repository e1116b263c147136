// src/config/mod.rs
//! Settings resolved once at startup and injected into every screen.

use std::path::PathBuf;

/// Environment variable naming the shared storage root.
pub const STORAGE_ROOT_VAR: &str = "EXTERNAL_STORAGE";

/// Chooser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserConfig {
    /// Directory shown when a launch request carries no start path.
    pub default_start: PathBuf,
    /// Where log records go; logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl ChooserConfig {
    pub fn new(default_start: impl Into<PathBuf>) -> Self {
        Self {
            default_start: default_start.into(),
            log_file: None,
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve the default start directory: the storage root if set, then the
    /// home directory, then `/`.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_start = [STORAGE_ROOT_VAR, "HOME"]
            .into_iter()
            .filter_map(&lookup)
            .find(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/"));
        Self::new(default_start)
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}
