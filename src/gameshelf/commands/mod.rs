use crate::config::ShelfConfig;
use crate::index::DisplayGame;
use crate::model::GameRecord;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod image;
pub mod import;
pub mod init;
pub mod list;
pub mod paths;
pub mod platforms;
pub mod search;
pub mod seed;
pub mod stats;
pub mod view;

/// Where gameshelf keeps its files.
#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
}

impl ShelfPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(crate::config::CONFIG_FILENAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Games owned on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCount {
    pub platform: String,
    pub count: usize,
    /// Whether the platform is part of the built-in catalogue.
    pub known: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformShare {
    pub platform: String,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    pub total: usize,
    pub boxed: usize,
    pub boxed_percent: f64,
    pub with_manual: usize,
    pub manual_percent: f64,
    pub by_platform: Vec<PlatformShare>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_games: Vec<GameRecord>,
    pub listed_games: Vec<DisplayGame>,
    pub platform_groups: Vec<PlatformCount>,
    pub stats: Option<CollectionStats>,
    pub image_candidates: Vec<String>,
    pub config: Option<ShelfConfig>,
    pub paths: Vec<(String, PathBuf)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_games(mut self, games: Vec<GameRecord>) -> Self {
        self.affected_games = games;
        self
    }

    pub fn with_listed_games(mut self, games: Vec<DisplayGame>) -> Self {
        self.listed_games = games;
        self
    }

    pub fn with_platform_groups(mut self, groups: Vec<PlatformCount>) -> Self {
        self.platform_groups = groups;
        self
    }

    pub fn with_stats(mut self, stats: CollectionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Partial update for a game. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameChanges {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub has_manual: Option<bool>,
    pub has_box: Option<bool>,
}

impl GameChanges {
    pub fn is_empty(&self) -> bool {
        *self == GameChanges::default()
    }

    /// Copy of `game` with the changes applied; the id is never touched.
    pub fn apply(&self, game: &GameRecord) -> GameRecord {
        let mut updated = game.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(platform) = &self.platform {
            updated.platform = platform.clone();
        }
        if let Some(notes) = &self.notes {
            updated.notes = notes.clone();
        }
        if let Some(url) = &self.image_url {
            updated.image_url = url.clone();
        }
        if let Some(manual) = self.has_manual {
            updated.has_manual = manual;
        }
        if let Some(boxed) = self.has_box {
            updated.has_box = boxed;
        }
        updated
    }
}
