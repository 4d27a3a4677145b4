use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Platforms offered when adding or editing a game, in display order.
///
/// The data layer never checks a record's platform against this list; it only
/// drives suggestions and canonical spelling.
pub const PLATFORMS: &[&str] = &[
    "3DO",
    "Atari 2600",
    "Atari 5200",
    "Atari 7800",
    "Atari Jaguar",
    "Atari Lynx",
    "Colecovision",
    "Game Boy",
    "Game Boy Advance",
    "Hyperscan",
    "Intellivision",
    "Nintendo 3DS",
    "Nintendo 64",
    "Nintendo DS",
    "Nintendo GameCube",
    "Nintendo NES",
    "Nintendo Switch",
    "Nintendo Switch 2",
    "PC",
    "PlayStation",
    "PlayStation 2",
    "PlayStation 3",
    "PlayStation 4",
    "PlayStation 5",
    "Sega Dreamcast",
    "Sega Game Gear",
    "Sega Genesis",
    "Sega Master System",
    "Sega Saturn",
    "Steam",
    "Super Nintendo",
    "Wii",
    "Wii U",
    "Xbox",
    "Xbox 360",
    "Xbox One",
    "Xbox Series X/S",
];

const MISSING_INFO: &str = "Please enter at least the title and select a platform.";

/// One catalogued game.
///
/// Field names on the wire are camelCase (`imageUrl`, `hasManual`, `hasBox`) so
/// snapshots and export files stay interchangeable with existing collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub platform: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub has_manual: bool,
    #[serde(default)]
    pub has_box: bool,
}

impl GameRecord {
    /// Builds a record with a freshly generated id.
    pub fn new(fields: GameFields) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            platform: fields.platform,
            notes: fields.notes,
            image_url: fields.image_url,
            has_manual: fields.has_manual,
            has_box: fields.has_box,
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    /// "Manual & Box", "Manual", "Box" or an empty string.
    pub fn includes_label(&self) -> String {
        match (self.has_manual, self.has_box) {
            (true, true) => "Manual & Box".to_string(),
            (true, false) => "Manual".to_string(),
            (false, true) => "Box".to_string(),
            (false, false) => String::new(),
        }
    }
}

/// User supplied fields for a new game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFields {
    pub title: String,
    pub platform: String,
    pub notes: String,
    pub image_url: String,
    pub has_manual: bool,
    pub has_box: bool,
}

impl GameFields {
    pub fn new(title: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            platform: platform.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_required(&self.title, &self.platform)
    }
}

/// Presence check shared by the add and edit entry points.
pub fn validate_required(title: &str, platform: &str) -> Result<()> {
    if title.trim().is_empty() || platform.trim().is_empty() {
        return Err(ShelfError::Validation(MISSING_INFO.to_string()));
    }
    Ok(())
}

/// Returns the catalogue spelling of `input` when it matches a known platform
/// ignoring case and surrounding whitespace.
pub fn canonical_platform(input: &str) -> Option<&'static str> {
    let wanted = input.trim();
    PLATFORMS
        .iter()
        .copied()
        .find(|p| p.eq_ignore_ascii_case(wanted))
}

pub fn is_known_platform(platform: &str) -> bool {
    PLATFORMS.contains(&platform)
}

/// Listings group platforms by this key, so "Vectrex" and "vectrex" land
/// together and a blank platform forms its own group.
pub fn platform_key(platform: &str) -> String {
    platform.trim().to_lowercase()
}

/// Number of games per platform, keyed by platform name.
pub fn count_by_platform(games: &[GameRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for game in games {
        *counts.entry(game.platform.clone()).or_insert(0) += 1;
    }
    counts
}
