use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::image_search::{cover_query, ImageSearch, MAX_RESULTS};
use crate::index::GameSelector;
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

use super::helpers::resolve_selectors;

/// Searches cover art for one game.
///
/// With `pick` (1-based, into the returned candidates) the chosen URL is
/// stored as the game's image. A failed search is reported as a warning and
/// never touches the collection.
pub fn run<B: StorageBackend>(
    collection: &mut Collection<B>,
    searcher: &dyn ImageSearch,
    selector: &GameSelector,
    pick: Option<usize>,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(collection, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();
    let Some(target) = resolved.into_iter().next() else {
        return Ok(result);
    };

    let query = cover_query(&target.game.title, &target.game.platform);
    let candidates = match searcher.search(&query, MAX_RESULTS) {
        Ok(urls) => urls,
        Err(e) => {
            result.add_message(CmdMessage::warning(format!(
                "Could not fetch images for {}: {}",
                target.game.title, e
            )));
            return Ok(result);
        }
    };

    if candidates.is_empty() {
        result.add_message(CmdMessage::info(format!("No images found for \"{}\"", query)));
        return Ok(result);
    }

    if let Some(choice) = pick {
        match choice.checked_sub(1).and_then(|i| candidates.get(i)) {
            Some(url) => {
                let mut updated = target.game.clone();
                updated.image_url = url.clone();
                collection.edit(updated.clone())?;
                result.add_message(CmdMessage::success(format!(
                    "Image set for {}: {}",
                    updated.title, url
                )));
                result.affected_games.push(updated);
            }
            None => result.add_message(CmdMessage::warning(format!(
                "Pick {} is out of range (1-{})",
                choice,
                candidates.len()
            ))),
        }
    }

    result.image_candidates = candidates;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ShelfError;
    use crate::store::mem_backend::fixtures::CollectionFixture;
    use std::cell::RefCell;

    struct FakeSearch {
        urls: Option<Vec<String>>,
        queries: RefCell<Vec<String>>,
    }

    impl FakeSearch {
        fn returning(urls: &[&str]) -> Self {
            Self {
                urls: Some(urls.iter().map(|u| u.to_string()).collect()),
                queries: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                urls: None,
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImageSearch for FakeSearch {
        fn search(&self, query: &str, limit: usize) -> Result<Vec<String>> {
            self.queries.borrow_mut().push(query.to_string());
            match &self.urls {
                Some(urls) => Ok(urls.iter().take(limit).cloned().collect()),
                None => Err(ShelfError::ImageSearch("network unreachable".into())),
            }
        }
    }

    #[test]
    fn returns_candidates_without_changing_game() {
        let mut fixture = CollectionFixture::new().with_game("Chrono Trigger", "Super Nintendo");
        let search = FakeSearch::returning(&["https://img/1.jpg", "https://img/2.jpg"]);

        let result = run(&mut fixture.collection, &search, &GameSelector::Index(1), None).unwrap();

        assert_eq!(result.image_candidates.len(), 2);
        assert_eq!(
            search.queries.borrow()[0],
            "Chrono Trigger Super Nintendo box art"
        );
        assert!(!fixture.games()[0].has_image());
    }

    #[test]
    fn pick_stores_the_url() {
        let mut fixture = CollectionFixture::new().with_game("Halo", "Xbox");
        let search = FakeSearch::returning(&["https://img/1.jpg", "https://img/2.jpg"]);

        run(&mut fixture.collection, &search, &GameSelector::Index(1), Some(2)).unwrap();

        assert_eq!(fixture.games()[0].image_url, "https://img/2.jpg");
    }

    #[test]
    fn out_of_range_pick_is_a_warning() {
        let mut fixture = CollectionFixture::new().with_game("Halo", "Xbox");
        let search = FakeSearch::returning(&["https://img/1.jpg"]);

        let result =
            run(&mut fixture.collection, &search, &GameSelector::Index(1), Some(5)).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(!fixture.games()[0].has_image());
    }

    #[test]
    fn failed_search_leaves_collection_untouched() {
        let mut fixture = CollectionFixture::new().with_game("Halo", "Xbox");
        let before = fixture.games();
        let writes = fixture.collection.backend().write_count();

        let result = run(
            &mut fixture.collection,
            &FakeSearch::failing(),
            &GameSelector::Index(1),
            Some(1),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.image_candidates.is_empty());
        assert_eq!(fixture.games(), before);
        assert_eq!(fixture.collection.backend().write_count(), writes);
    }
}
