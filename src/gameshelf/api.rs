//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for gameshelf operations. It owns the
//! [`Collection`], dispatches to `commands/*.rs` and turns what the user typed
//! into [`GameSelector`]s. It never prints and never formats.
//!
//! ## Start-up
//!
//! [`ShelfApi::new`] loads the stored snapshot exactly once. When there is no
//! snapshot yet and `seed-on-first-run` is enabled, the bundled seed games are
//! stored before the first command runs.
//!
//! ## Selectors
//!
//! - `3` picks the game shown as 3 in `gameshelf list`.
//! - `id:<uuid>` picks a game by id.
//! - Anything else is a title search. When several words are given and any of
//!   them is not an index, all of them are joined into one search term, so
//!   `gameshelf view chrono trigger` works without quotes.
//!
//! ## Generic Over StorageBackend
//!
//! Production uses `ShelfApi<FsBackend>`, tests use `ShelfApi<MemBackend>`.

use crate::commands::{self, CmdResult, GameChanges, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::image_search::ImageSearch;
use crate::index::GameSelector;
use crate::model::GameFields;
use crate::store::backend::StorageBackend;
use crate::store::collection::{Collection, LoadStatus};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

pub struct ShelfApi<B: StorageBackend> {
    collection: Collection<B>,
    paths: ShelfPaths,
    config: ShelfConfig,
    load_status: LoadStatus,
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(backend: B, paths: ShelfPaths, config: ShelfConfig) -> Self {
        let mut collection = Collection::new(backend);
        let mut load_status = collection.load();

        if load_status == LoadStatus::Missing && config.seed_on_first_run {
            match commands::seed::run(&mut collection, false) {
                Ok(_) => {
                    info!(count = collection.len(), "seeded empty collection");
                    load_status = LoadStatus::Loaded(collection.len());
                }
                Err(e) => warn!("Could not seed collection: {}", e),
            }
        }

        Self {
            collection,
            paths,
            config,
            load_status,
        }
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn collection(&self) -> &Collection<B> {
        &self.collection
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn paths(&self) -> &ShelfPaths {
        &self.paths
    }

    pub fn add_game(&mut self, fields: GameFields) -> Result<CmdResult> {
        commands::add::run(&mut self.collection, fields)
    }

    pub fn edit_game<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        changes: GameChanges,
    ) -> Result<CmdResult> {
        let selector = single_selector(inputs)?;
        commands::edit::run(&mut self.collection, &selector, changes)
    }

    pub fn delete_games<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::delete::run(&mut self.collection, &selectors)
    }

    pub fn list_games(&self, platform: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.collection, platform)
    }

    pub fn search_games(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.collection, term)
    }

    pub fn view_games<I: AsRef<str>>(&self, inputs: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::view::run(&self.collection, &selectors)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.collection)
    }

    pub fn platforms(&self) -> Result<CmdResult> {
        commands::platforms::run(&self.collection)
    }

    pub fn import_games(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.collection, path)
    }

    /// Exports to `path`, or to the configured export file when `None`.
    pub fn export_games(&self, path: Option<&Path>) -> Result<CmdResult> {
        match path {
            Some(path) => commands::export::run(&self.collection, path),
            None => commands::export::run(&self.collection, Path::new(&self.config.export_file)),
        }
    }

    pub fn seed(&mut self, force: bool) -> Result<CmdResult> {
        commands::seed::run(&mut self.collection, force)
    }

    pub fn find_images<I: AsRef<str>>(
        &mut self,
        searcher: &dyn ImageSearch,
        inputs: &[I],
        pick: Option<usize>,
    ) -> Result<CmdResult> {
        let selector = single_selector(inputs)?;
        commands::image::run(&mut self.collection, searcher, &selector, pick)
    }

    pub fn config_cmd(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(updated) = &result.config {
            self.config = updated.clone();
        }
        Ok(result)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn show_paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.collection, &self.paths)
    }
}

/// Indexes and `id:` selectors stay separate; any other word turns the whole
/// input into a single title search.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<GameSelector>> {
    let words: Vec<&str> = inputs
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    if words.is_empty() {
        return Err(ShelfError::Api("No game selected".to_string()));
    }

    let parsed: Vec<GameSelector> = words.iter().map(|w| GameSelector::parse(w)).collect();
    if parsed.iter().any(|s| matches!(s, GameSelector::Title(_))) {
        return Ok(vec![GameSelector::Title(words.join(" "))]);
    }

    let mut seen = HashSet::new();
    Ok(parsed
        .into_iter()
        .filter(|s| seen.insert(s.to_string()))
        .collect())
}

fn single_selector<I: AsRef<str>>(inputs: &[I]) -> Result<GameSelector> {
    let mut selectors = parse_selectors(inputs)?;
    if selectors.len() > 1 {
        return Err(ShelfError::Api(
            "This command works on one game at a time".to_string(),
        ));
    }
    selectors
        .pop()
        .ok_or_else(|| ShelfError::Api("No game selected".to_string()))
}
