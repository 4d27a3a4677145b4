use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{canonical_platform, GameFields};
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

pub fn run<B: StorageBackend>(
    collection: &mut Collection<B>,
    mut fields: GameFields,
) -> Result<CmdResult> {
    fields.validate()?;
    fields.title = fields.title.trim().to_string();

    let known = match canonical_platform(&fields.platform) {
        Some(platform) => {
            fields.platform = platform.to_string();
            true
        }
        None => {
            fields.platform = fields.platform.trim().to_string();
            false
        }
    };

    let game = collection.add(fields)?;

    let mut result = CmdResult::default();
    if !known {
        result.add_message(CmdMessage::info(format!(
            "\"{}\" is not in the platform list, storing it as typed",
            game.platform
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Game added: {} ({})",
        game.title, game.platform
    )));
    Ok(result.with_affected_games(vec![game]))
}
