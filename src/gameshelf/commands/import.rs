use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::GameRecord;
use crate::store::backend::StorageBackend;
use crate::store::collection::{parse_games, Collection};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Replaces the whole collection with the games in `path`.
///
/// The file is fully checked before anything changes: a read error, a
/// malformed document or a repeated id fails the import and leaves the
/// collection as it was.
pub fn run<B: StorageBackend>(collection: &mut Collection<B>, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ShelfError::Import(format!("cannot read {}: {}", path.display(), e)))?;
    let games = parse_import(&raw)?;

    let previous = collection.len();
    let count = games.len();
    collection.replace(games)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} games from {} (replaced {})",
        count,
        path.display(),
        previous
    )));
    Ok(result.with_affected_games(collection.games().to_vec()))
}

pub fn parse_import(raw: &str) -> Result<Vec<GameRecord>> {
    let games = parse_games(raw).map_err(|e| ShelfError::Import(e.to_string()))?;

    let mut seen = HashSet::new();
    for game in &games {
        if !seen.insert(game.id.as_str()) {
            return Err(ShelfError::Import(format!("duplicate id {}", game.id)));
        }
    }
    Ok(games)
}
