use crate::error::{Result, ShelfError};
use crate::index::{index_games, DisplayGame, GameSelector};
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

pub fn indexed_games<B: StorageBackend>(collection: &Collection<B>) -> Vec<DisplayGame> {
    index_games(collection.games())
}

/// Resolves selectors against the current listing, in the order given.
///
/// Resolution is done up front, so callers that mutate can work off ids
/// without later indexes shifting under them. A game picked twice is only
/// returned once.
pub fn resolve_selectors<B: StorageBackend>(
    collection: &Collection<B>,
    selectors: &[GameSelector],
) -> Result<Vec<DisplayGame>> {
    let listing = indexed_games(collection);
    let mut results: Vec<DisplayGame> = Vec::new();

    for selector in selectors {
        let found = resolve_one(&listing, selector)?;
        if !results.iter().any(|d| d.game.id == found.game.id) {
            results.push(found);
        }
    }

    Ok(results)
}

pub fn resolve_one(listing: &[DisplayGame], selector: &GameSelector) -> Result<DisplayGame> {
    match selector {
        GameSelector::Index(index) => {
            if let Some(found) = listing.iter().find(|d| d.index == *index) {
                return Ok(found.clone());
            }
            // Out of range: the number may be a whole title, like "1942".
            let as_title = index.to_string();
            listing
                .iter()
                .find(|d| d.game.title.trim() == as_title)
                .cloned()
                .ok_or_else(|| ShelfError::Api(format!("Index {} not found", index)))
        }
        GameSelector::Id(id) => listing
            .iter()
            .find(|d| d.game.id == *id)
            .cloned()
            .ok_or_else(|| ShelfError::GameNotFound(id.clone())),
        GameSelector::Title(term) => {
            if let Some(by_id) = listing.iter().find(|d| d.game.id == *term) {
                return Ok(by_id.clone());
            }

            let term_lower = term.to_lowercase();
            let exact: Vec<&DisplayGame> = listing
                .iter()
                .filter(|d| d.game.title.to_lowercase() == term_lower)
                .collect();
            let matches: Vec<&DisplayGame> = if exact.is_empty() {
                listing
                    .iter()
                    .filter(|d| d.game.title.to_lowercase().contains(&term_lower))
                    .collect()
            } else {
                exact
            };

            match matches.len() {
                0 => Err(ShelfError::Api(format!(
                    "No game found matching \"{}\"",
                    term
                ))),
                1 => Ok(matches[0].clone()),
                n => Err(ShelfError::Api(format!(
                    "Term \"{}\" matches {} games. Use an index or be more specific.",
                    term, n
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::CollectionFixture;

    fn fixture() -> CollectionFixture {
        CollectionFixture::new()
            .with_game("Super Mario 64", "Nintendo 64")
            .with_game("Super Mario Sunshine", "Nintendo GameCube")
            .with_game("Mario Kart 64", "Nintendo 64")
    }

    #[test]
    fn resolves_index_in_listing_order() {
        let fixture = fixture();
        let found =
            resolve_selectors(&fixture.collection, &[GameSelector::Index(1)]).unwrap();
        assert_eq!(found[0].game.title, "Mario Kart 64");
    }

    #[test]
    fn unknown_index_is_an_error() {
        let fixture = fixture();
        let err = resolve_selectors(&fixture.collection, &[GameSelector::Index(9)]).unwrap_err();
        assert!(err.to_string().contains("Index 9 not found"));
    }

    #[test]
    fn numeric_title_is_reachable_past_the_last_index() {
        let fixture = CollectionFixture::new()
            .with_game("1942", "NES")
            .with_game("Contra", "NES");

        let found =
            resolve_selectors(&fixture.collection, &[GameSelector::parse("1942")]).unwrap();
        assert_eq!(found[0].game.title, "1942");

        let by_index =
            resolve_selectors(&fixture.collection, &[GameSelector::parse("2")]).unwrap();
        assert_eq!(by_index[0].game.title, "Contra");
    }

    #[test]
    fn resolves_id_and_bare_id() {
        let fixture = fixture();
        let id = fixture.games()[1].id.clone();

        let by_prefix =
            resolve_selectors(&fixture.collection, &[GameSelector::Id(id.clone())]).unwrap();
        let bare =
            resolve_selectors(&fixture.collection, &[GameSelector::Title(id.clone())]).unwrap();

        assert_eq!(by_prefix[0].game.id, id);
        assert_eq!(bare[0].game.id, id);
    }

    #[test]
    fn title_must_be_unique() {
        let fixture = fixture();
        let err = resolve_selectors(
            &fixture.collection,
            &[GameSelector::Title("super mario".into())],
        )
        .unwrap_err();
        assert!(err.to_string().contains("matches 2 games"));

        let found = resolve_selectors(
            &fixture.collection,
            &[GameSelector::Title("sunshine".into())],
        )
        .unwrap();
        assert_eq!(found[0].game.title, "Super Mario Sunshine");
    }

    #[test]
    fn exact_title_wins_over_fragments() {
        let fixture = CollectionFixture::new()
            .with_game("Doom", "PC")
            .with_game("Doom II", "PC");
        let found =
            resolve_selectors(&fixture.collection, &[GameSelector::Title("doom".into())]).unwrap();
        assert_eq!(found[0].game.title, "Doom");
    }

    #[test]
    fn duplicate_selectors_collapse() {
        let fixture = fixture();
        let found = resolve_selectors(
            &fixture.collection,
            &[GameSelector::Index(2), GameSelector::Title("Super Mario 64".into())],
        )
        .unwrap();
        assert_eq!(found.len(), 1);
    }
}
