//! `gameshelf config`: read or change the settings in `config.json`.

use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::config::{ShelfConfig, KEYS};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Every setting with its current value.
    Show,
    Get(String),
    Set { key: String, value: String },
}

impl ConfigAction {
    /// Maps the `config [KEY] [VALUE]` arguments onto an action.
    pub fn from_args(key: Option<String>, value: Option<String>) -> Self {
        match (key, value) {
            (None, _) => ConfigAction::Show,
            (Some(key), None) => ConfigAction::Get(key),
            (Some(key), Some(value)) => ConfigAction::Set { key, value },
        }
    }
}

/// A rejected `Set` leaves the file untouched and reports why. Only a
/// successful `Set` or a `Show` carries the config in the result.
pub fn run(paths: &ShelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::Show => return Ok(result.with_config(config)),
        ConfigAction::Get(key) => {
            let message = match config.get(&key) {
                Some(value) => CmdMessage::info(value),
                None => unknown_key(&key),
            };
            result.add_message(message);
        }
        ConfigAction::Set { key, value } => {
            if !KEYS.contains(&key.as_str()) {
                result.add_message(unknown_key(&key));
                return Ok(result);
            }
            if let Err(reason) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(reason));
                return Ok(result);
            }
            config.save(&paths.data_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            return Ok(result.with_config(config));
        }
    }

    Ok(result)
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
