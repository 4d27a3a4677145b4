use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;
use std::fs;
use std::path::Path;

/// Writes the collection to `path` as pretty-printed JSON.
pub fn run<B: StorageBackend>(collection: &Collection<B>, path: &Path) -> Result<CmdResult> {
    let json = collection.export_json()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ShelfError::Io)?;
        }
    }
    fs::write(path, json).map_err(ShelfError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} games to {}",
        collection.len(),
        path.display()
    )));
    result.paths.push(("export".to_string(), path.to_path_buf()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::CollectionFixture;

    #[test]
    fn writes_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("out.json");
        let fixture = CollectionFixture::new().with_game("Halo", "Xbox");

        run(&fixture.collection, &file).unwrap();

        let written = fs::read_to_string(&file).unwrap();
        assert!(written.starts_with("[\n  {\n    \"id\""));
        assert!(written.contains("\"hasBox\": false"));
    }

    #[test]
    fn empty_collection_exports_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.json");
        let fixture = CollectionFixture::new();

        run(&fixture.collection, &file).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "[]");
    }
}
