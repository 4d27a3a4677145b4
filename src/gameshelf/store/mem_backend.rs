use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since gameshelf is single-threaded,
/// so the `StorageBackend` trait can keep `&self` on every method.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with a raw value, e.g. a hand-written snapshot.
    pub fn with_item(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation for testing degraded loads.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw stored value, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(ShelfError::Store("Simulated read error".to_string()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn item_path(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}.json", key))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{GameFields, GameRecord};
    use crate::store::collection::Collection;

    pub struct CollectionFixture {
        pub collection: Collection<MemBackend>,
    }

    impl Default for CollectionFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CollectionFixture {
        pub fn new() -> Self {
            Self {
                collection: Collection::new(MemBackend::new()),
            }
        }

        pub fn with_games(mut self, count: usize, platform: &str) -> Self {
            for i in 0..count {
                let fields = GameFields::new(format!("Test Game {}", i + 1), platform);
                self.collection.add(fields).unwrap();
            }
            self
        }

        pub fn with_game(mut self, title: &str, platform: &str) -> Self {
            self.collection
                .add(GameFields::new(title, platform))
                .unwrap();
            self
        }

        pub fn with_complete_game(mut self, title: &str, platform: &str) -> Self {
            let fields = GameFields {
                has_manual: true,
                has_box: true,
                notes: "Complete in box".to_string(),
                ..GameFields::new(title, platform)
            };
            self.collection.add(fields).unwrap();
            self
        }

        pub fn games(&self) -> Vec<GameRecord> {
            self.collection.games().to_vec()
        }
    }
}
