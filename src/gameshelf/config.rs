//! # Configuration
//!
//! Stored as `config.json` in the data directory, next to the collection
//! snapshot. Missing files and missing keys fall back to defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `export-file` | `games_export.json` | Target file for `gameshelf export` |
//! | `seed-on-first-run` | `false` | Load the bundled seed games when no snapshot exists |
//! | `image-search-endpoint` | Google Custom Search | Endpoint for cover art lookups |
//! | `image-search-key` | unset | API key (`GAMESHELF_IMAGE_SEARCH_KEY` overrides) |
//! | `image-search-engine` | unset | Search engine id (`cx`) |

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
pub const IMAGE_SEARCH_KEY_ENV: &str = "GAMESHELF_IMAGE_SEARCH_KEY";
const DEFAULT_EXPORT_FILE: &str = "games_export.json";
const DEFAULT_IMAGE_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

pub const KEYS: &[&str] = &[
    "export-file",
    "seed-on-first-run",
    "image-search-endpoint",
    "image-search-key",
    "image-search-engine",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    #[serde(default = "default_export_file")]
    pub export_file: String,

    #[serde(default)]
    pub seed_on_first_run: bool,

    #[serde(default)]
    pub image_search: ImageSearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSearchConfig {
    #[serde(default = "default_image_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub engine_id: Option<String>,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_image_endpoint() -> String {
    DEFAULT_IMAGE_ENDPOINT.to_string()
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_image_endpoint(),
            api_key: None,
            engine_id: None,
        }
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            export_file: default_export_file(),
            seed_on_first_run: false,
            image_search: ImageSearchConfig::default(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ShelfError::Io)?;
        Ok(())
    }

    /// API key from the environment, falling back to the stored value.
    pub fn image_search_key(&self) -> Option<String> {
        std::env::var(IMAGE_SEARCH_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.image_search.api_key.clone())
    }

    /// Display value for a key. The API key is never echoed back.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "export-file" => self.export_file.clone(),
            "seed-on-first-run" => self.seed_on_first_run.to_string(),
            "image-search-endpoint" => self.image_search.endpoint.clone(),
            "image-search-key" => match &self.image_search.api_key {
                Some(_) => "<hidden>".to_string(),
                None => "<unset>".to_string(),
            },
            "image-search-engine" => self
                .image_search
                .engine_id
                .clone()
                .unwrap_or_else(|| "<unset>".to_string()),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "export-file" => {
                if value.is_empty() {
                    return Err("export-file cannot be empty".to_string());
                }
                self.export_file = value.to_string();
            }
            "seed-on-first-run" => {
                self.seed_on_first_run = parse_bool(value)
                    .ok_or_else(|| format!("Invalid boolean for {}: {}", key, value))?;
            }
            "image-search-endpoint" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(format!("Endpoint must be an http(s) URL: {}", value));
                }
                self.image_search.endpoint = value.to_string();
            }
            "image-search-key" => self.image_search.api_key = non_empty(value),
            "image-search-engine" => self.image_search.engine_id = non_empty(value),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
