use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `Collection` handles the "what" (which records exist, when to persist).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when nothing has been stored yet.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value in full.
    /// MUST NOT leave a partially written value behind.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Location of the value for `key`.
    /// For FsBackend this is the real file path; for MemBackend a virtual path.
    fn item_path(&self, key: &str) -> PathBuf;
}
