use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File-per-key storage inside a single data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ShelfError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        let path = self.item_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        debug!(path = %path.display(), bytes = content.len(), "read storage item");
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.ensure_dir()?;

        let target = self.item_path(key);
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }
        debug!(path = %target.display(), bytes = value.len(), "wrote storage item");
        Ok(())
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
