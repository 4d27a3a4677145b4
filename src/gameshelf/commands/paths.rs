use crate::commands::{CmdResult, ShelfPaths};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;
use crate::store::GAMES_KEY;

pub fn run<B: StorageBackend>(collection: &Collection<B>, paths: &ShelfPaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.paths = vec![
        ("data".to_string(), paths.data_dir.clone()),
        (
            "collection".to_string(),
            collection.backend().item_path(GAMES_KEY),
        ),
        ("config".to_string(), paths.config_file()),
    ];
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs_backend::FsBackend;

    #[test]
    fn reports_snapshot_inside_data_dir() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ShelfPaths::new(temp.path());
        let collection = Collection::new(FsBackend::new(temp.path()));

        let result = run(&collection, &paths).unwrap();

        assert_eq!(result.paths.len(), 3);
        assert_eq!(result.paths[1].1, temp.path().join("games.json"));
        assert_eq!(result.paths[2].1, temp.path().join("config.json"));
    }
}
