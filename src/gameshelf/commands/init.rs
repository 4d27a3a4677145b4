use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::Result;
use std::fs;

/// Creates the data directory and a default config file if none exists.
pub fn run(paths: &ShelfPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;

    let mut result = CmdResult::default();
    if !paths.config_file().exists() {
        ShelfConfig::default().save(&paths.data_dir)?;
        result.add_message(CmdMessage::info(format!(
            "Wrote default config to {}",
            paths.config_file().display()
        )));
    }

    result.add_message(CmdMessage::success(format!(
        "Initialized gameshelf at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
