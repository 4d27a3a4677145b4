//! # Collection State Manager
//!
//! [`Collection`] is the single owner of the in-memory game list for the life
//! of the process. Every mutation goes through one of its methods, and every
//! mutation ends by writing the full list back to the backend.
//!
//! ## Rules
//!
//! - `load` runs once at start-up. A missing snapshot means an empty
//!   collection. An unreadable or unparsable snapshot is logged and also yields
//!   an empty collection; it never fails the caller.
//! - `add` appends, `edit` replaces in place, `delete` removes, `replace`
//!   swaps the whole list. Edits and deletes for unknown ids are no-ops.
//! - A failed write is logged and returned, but the in-memory change is kept.
//!   Memory and disk may disagree until the next successful write.
//!
//! Mutations take `&mut self`, so they can never interleave. Readers get a
//! shared slice via [`Collection::games`].

use super::backend::StorageBackend;
use super::GAMES_KEY;
use crate::error::{Result, ShelfError};
use crate::model::{GameFields, GameRecord};
use tracing::{debug, error, warn};

/// Outcome of [`Collection::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No snapshot stored yet.
    Missing,
    /// Snapshot read and parsed; holds the number of records.
    Loaded(usize),
    /// Snapshot could not be read or parsed; the collection was left empty.
    Corrupt(String),
}

pub struct Collection<B: StorageBackend> {
    games: Vec<GameRecord>,
    backend: B,
}

impl<B: StorageBackend> Collection<B> {
    /// An empty collection. Call [`Collection::load`] to pick up a stored snapshot.
    pub fn new(backend: B) -> Self {
        Self {
            games: Vec::new(),
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn load(&mut self) -> LoadStatus {
        let raw = match self.backend.get_item(GAMES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored snapshot, starting empty");
                self.games.clear();
                return LoadStatus::Missing;
            }
            Err(e) => {
                error!("Error loading games: {}", e);
                self.games.clear();
                return LoadStatus::Corrupt(e.to_string());
            }
        };

        match parse_games(&raw) {
            Ok(games) => {
                debug!(count = games.len(), "loaded snapshot");
                self.games = games;
                LoadStatus::Loaded(self.games.len())
            }
            Err(e) => {
                error!("Error loading games: {}", e);
                self.games.clear();
                LoadStatus::Corrupt(e.to_string())
            }
        }
    }

    pub fn add(&mut self, fields: GameFields) -> Result<GameRecord> {
        let game = GameRecord::new(fields);
        if self.get(&game.id).is_some() {
            warn!(id = %game.id, "generated id already present in collection");
        }
        self.games.push(game.clone());
        self.persist()?;
        Ok(game)
    }

    /// Replaces the record with the same id, keeping its position.
    /// Returns `false` without touching storage when no record matches.
    pub fn edit(&mut self, updated: GameRecord) -> Result<bool> {
        let Some(slot) = self.games.iter_mut().find(|g| g.id == updated.id) else {
            debug!(id = %updated.id, "edit for unknown id ignored");
            return Ok(false);
        };
        *slot = updated;
        self.persist()?;
        Ok(true)
    }

    /// Removes the record with `id`. Returns `None` without touching storage when absent.
    pub fn delete(&mut self, id: &str) -> Result<Option<GameRecord>> {
        let Some(pos) = self.games.iter().position(|g| g.id == id) else {
            debug!(id, "delete for unknown id ignored");
            return Ok(None);
        };
        let removed = self.games.remove(pos);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Discards the current list and stores `games` verbatim.
    pub fn replace(&mut self, games: Vec<GameRecord>) -> Result<()> {
        self.games = games;
        self.persist()
    }

    /// Compact JSON snapshot of the current list, as written to storage.
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string(&self.games).map_err(ShelfError::Serialization)
    }

    /// Pretty-printed (2-space) JSON of the current list, as written on export.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.games).map_err(ShelfError::Serialization)
    }

    fn persist(&self) -> Result<()> {
        let result = self
            .snapshot_json()
            .and_then(|json| self.backend.set_item(GAMES_KEY, &json));
        match &result {
            Ok(()) => debug!(count = self.games.len(), "persisted snapshot"),
            Err(e) => error!("Error saving games: {}", e),
        }
        result
    }
}

/// Parses a snapshot or interchange document: a JSON array of game records.
pub fn parse_games(raw: &str) -> Result<Vec<GameRecord>> {
    serde_json::from_str(raw).map_err(ShelfError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::count_by_platform;
    use crate::store::mem_backend::fixtures::CollectionFixture;
    use crate::store::mem_backend::MemBackend;
    use std::collections::HashSet;

    fn record(id: &str, title: &str, platform: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            title: title.to_string(),
            platform: platform.to_string(),
            notes: String::new(),
            image_url: String::new(),
            has_manual: false,
            has_box: false,
        }
    }

    #[test]
    fn adds_get_unique_ids() {
        let fixture = CollectionFixture::new().with_games(25, "PC");
        let games = fixture.games();
        assert_eq!(games.len(), 25);

        let ids: HashSet<_> = games.iter().map(|g| g.id.clone()).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn add_appends_and_persists() {
        let mut collection = Collection::new(MemBackend::new());
        collection.add(GameFields::new("First", "PC")).unwrap();
        collection.add(GameFields::new("Second", "PC")).unwrap();

        assert_eq!(collection.games()[1].title, "Second");
        let stored = parse_games(&collection.backend().raw(GAMES_KEY).unwrap()).unwrap();
        assert_eq!(stored, collection.games());
    }

    #[test]
    fn add_then_delete_scenario() {
        let mut collection = Collection::new(MemBackend::new());
        let game = collection
            .add(GameFields::new("Chrono Trigger", "Super Nintendo"))
            .unwrap();

        assert_eq!(collection.len(), 1);
        assert!(!game.id.is_empty());
        assert!(!game.has_manual);
        assert!(!game.has_box);

        let removed = collection.delete(&game.id).unwrap();
        assert_eq!(removed.map(|g| g.title), Some("Chrono Trigger".to_string()));
        assert!(collection.is_empty());
        assert_eq!(collection.backend().raw(GAMES_KEY).unwrap(), "[]");
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut fixture = CollectionFixture::new()
            .with_game("A", "PC")
            .with_game("B", "PC")
            .with_game("C", "PC");
        let mut middle = fixture.games()[1].clone();
        middle.title = "B (Director's Cut)".to_string();
        middle.has_box = true;

        assert!(fixture.collection.edit(middle.clone()).unwrap());

        let games = fixture.games();
        assert_eq!(games.len(), 3);
        assert_eq!(games[1], middle);
        assert_eq!(games[0].title, "A");
        assert_eq!(games[2].title, "C");
    }

    #[test]
    fn edit_with_unknown_id_is_noop() {
        let mut fixture = CollectionFixture::new().with_game("A", "PC");
        let before = fixture.games();
        let writes = fixture.collection.backend().write_count();

        let changed = fixture
            .collection
            .edit(record("does-not-exist", "Z", "PC"))
            .unwrap();

        assert!(!changed);
        assert_eq!(fixture.games(), before);
        assert_eq!(fixture.collection.backend().write_count(), writes);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut fixture = CollectionFixture::new().with_games(3, "Xbox");
        let target = fixture.games()[0].id.clone();

        fixture.collection.delete(&target).unwrap();

        assert_eq!(fixture.collection.len(), 2);
        assert!(fixture.collection.get(&target).is_none());
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut fixture = CollectionFixture::new().with_games(2, "Xbox");
        let before = fixture.games();

        let removed = fixture.collection.delete("missing").unwrap();

        assert!(removed.is_none());
        assert_eq!(fixture.games(), before);
    }

    #[test]
    fn replace_discards_prior_contents() {
        let mut fixture = CollectionFixture::new().with_games(5, "Wii");
        let incoming = vec![record("x1", "Metroid", "Nintendo NES")];

        fixture.collection.replace(incoming.clone()).unwrap();

        assert_eq!(fixture.games(), incoming);
    }

    #[test]
    fn export_round_trips() {
        let mut fixture = CollectionFixture::new()
            .with_complete_game("Halo", "Xbox")
            .with_game("Doom", "PC");
        let mut with_image = fixture.games()[1].clone();
        with_image.image_url = "https://example.com/doom.jpg".to_string();
        fixture.collection.edit(with_image).unwrap();

        let exported = fixture.collection.export_json().unwrap();

        assert!(exported.contains("\n  {"));
        assert_eq!(parse_games(&exported).unwrap(), fixture.games());
    }

    #[test]
    fn load_reads_stored_snapshot() {
        let backend = MemBackend::with_item(
            GAMES_KEY,
            r#"[{"id":"1","title":"Halo","platform":"Xbox","hasBox":true}]"#,
        );
        let mut collection = Collection::new(backend);

        assert_eq!(collection.load(), LoadStatus::Loaded(1));
        assert!(collection.games()[0].has_box);
    }

    #[test]
    fn load_without_snapshot_starts_empty() {
        let mut collection = Collection::new(MemBackend::new());
        assert_eq!(collection.load(), LoadStatus::Missing);
        assert!(collection.is_empty());
    }

    #[test]
    fn load_of_corrupt_snapshot_degrades_to_empty() {
        let backend = MemBackend::with_item(GAMES_KEY, "{not json");
        let mut collection = Collection::new(backend);

        assert!(matches!(collection.load(), LoadStatus::Corrupt(_)));
        assert!(collection.is_empty());
    }

    #[test]
    fn load_read_error_degrades_to_empty() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        let mut collection = Collection::new(backend);

        assert!(matches!(collection.load(), LoadStatus::Corrupt(_)));
        assert!(collection.is_empty());
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let mut fixture = CollectionFixture::new().with_game("Saved", "PC");
        fixture.collection.backend().set_simulate_write_error(true);

        let result = fixture.collection.add(GameFields::new("Unsaved", "PC"));

        assert!(matches!(result, Err(ShelfError::Store(_))));
        assert_eq!(fixture.collection.len(), 2);
        let stored = parse_games(&fixture.collection.backend().raw(GAMES_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn grouping_by_platform() {
        let fixture = CollectionFixture::new()
            .with_game("Crash", "PlayStation")
            .with_game("Spyro", "PlayStation")
            .with_game("Halo", "Xbox");

        let counts = count_by_platform(fixture.collection.games());
        let pairs: Vec<_> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(pairs, vec![("PlayStation", 2), ("Xbox", 1)]);
    }
}
