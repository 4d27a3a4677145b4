use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::GameSelector;
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend>(
    collection: &mut Collection<B>,
    selectors: &[GameSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(collection, selectors)?;
    let mut result = CmdResult::default();

    for target in resolved {
        if let Some(game) = collection.delete(&target.game.id)? {
            result.add_message(CmdMessage::success(format!(
                "Game deleted ({}): {}",
                target.index, game.title
            )));
            result.affected_games.push(game);
        }
    }

    Ok(result)
}
