use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::GameSelector;
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend>(
    collection: &Collection<B>,
    selectors: &[GameSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(collection, selectors)?;
    Ok(CmdResult::default().with_listed_games(resolved))
}
