use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

use super::helpers::indexed_games;

/// Case-insensitive substring search over titles.
pub fn run<B: StorageBackend>(collection: &Collection<B>, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    let mut result = CmdResult::default();

    if term.is_empty() {
        result.add_message(CmdMessage::info("Type part of a title to search."));
        return Ok(result);
    }

    let needle = term.to_lowercase();
    let matches: Vec<_> = indexed_games(collection)
        .into_iter()
        .filter(|d| d.game.title.to_lowercase().contains(&needle))
        .collect();

    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No games match \"{}\"", term)));
    }
    Ok(result.with_listed_games(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::CollectionFixture;

    #[test]
    fn matches_ignoring_case() {
        let fixture = CollectionFixture::new()
            .with_game("The Legend of Zelda", "Nintendo NES")
            .with_game("Zelda II", "Nintendo NES")
            .with_game("Metroid", "Nintendo NES");

        let result = run(&fixture.collection, "ZELDA").unwrap();
        assert_eq!(result.listed_games.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_match_leaves_a_message() {
        let fixture = CollectionFixture::new().with_game("Metroid", "Nintendo NES");
        let result = run(&fixture.collection, "kirby").unwrap();
        assert!(result.listed_games.is_empty());
        assert!(result.messages[0].content.contains("kirby"));
    }

    #[test]
    fn blank_term_lists_nothing() {
        let fixture = CollectionFixture::new().with_game("Metroid", "Nintendo NES");
        let result = run(&fixture.collection, "  ").unwrap();
        assert!(result.listed_games.is_empty());
    }
}
