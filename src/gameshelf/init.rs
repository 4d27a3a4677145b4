//! # Data Directory
//!
//! gameshelf keeps one collection per user. The data directory is resolved as:
//!
//! 1. `$GAMESHELF_HOME` when set and non-empty (also how tests isolate state).
//! 2. Otherwise the OS data directory from the `directories` crate, e.g.
//!    `~/.local/share/gameshelf` on Linux.
//!
//! [`initialize`] resolves the directory, reads the config and builds the
//! [`ShelfApi`]. Nothing is created on disk until the first write.

use crate::api::ShelfApi;
use crate::commands::ShelfPaths;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const HOME_ENV: &str = "GAMESHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FsBackend>,
}

pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "gameshelf", "gameshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ShelfError::Config(format!(
                "Could not determine a data directory, set {}",
                HOME_ENV
            ))
        })
}

pub fn initialize() -> Result<ShelfContext> {
    let dir = data_dir()?;
    debug!(data_dir = %dir.display(), "resolved data directory");

    let config = match ShelfConfig::load(&dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring unreadable config: {}", e);
            ShelfConfig::default()
        }
    };

    let api = ShelfApi::new(FsBackend::new(&dir), ShelfPaths::new(dir), config);
    Ok(ShelfContext { api })
}
