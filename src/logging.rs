// src/logging.rs
//! Log setup. The terminal belongs to the UI, so records go to a file.

use std::{fs::OpenOptions, path::Path};

use anyhow::Result;
use env_logger::Env;

/// Send log records to `path`, honouring `RUST_LOG` (default `info`).
/// Without a path, logging stays disabled.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
