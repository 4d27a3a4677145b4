use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::GameRecord;
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

use super::import::parse_import;

const SEED_GAMES: &str = include_str!("../../../assets/seed_games.json");

/// The bundled starter collection.
pub fn seed_games() -> Result<Vec<GameRecord>> {
    parse_import(SEED_GAMES)
}

/// Loads the bundled games. Refuses to overwrite a non-empty collection
/// unless `force` is set.
pub fn run<B: StorageBackend>(collection: &mut Collection<B>, force: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !collection.is_empty() && !force {
        result.add_message(CmdMessage::warning(format!(
            "Collection already has {} games, use --force to replace them",
            collection.len()
        )));
        return Ok(result);
    }

    let games = seed_games()?;
    let count = games.len();
    collection.replace(games)?;
    result.add_message(CmdMessage::success(format!("Loaded {} seed games", count)));
    Ok(result.with_affected_games(collection.games().to_vec()))
}
