use crate::commands::{CmdMessage, CmdResult, GameChanges};
use crate::error::Result;
use crate::index::GameSelector;
use crate::model::{canonical_platform, validate_required};
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend>(
    collection: &mut Collection<B>,
    selector: &GameSelector,
    mut changes: GameChanges,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(collection, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();
    let Some(target) = resolved.into_iter().next() else {
        return Ok(result);
    };

    if changes.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for {}",
            target.game.title
        )));
        return Ok(result);
    }

    if let Some(platform) = changes.platform.as_deref() {
        changes.platform = Some(
            canonical_platform(platform)
                .map(str::to_string)
                .unwrap_or_else(|| platform.trim().to_string()),
        );
    }
    if let Some(title) = changes.title.as_deref() {
        changes.title = Some(title.trim().to_string());
    }

    let updated = changes.apply(&target.game);
    validate_required(&updated.title, &updated.platform)?;

    if updated == target.game {
        result.add_message(CmdMessage::info(format!(
            "No changes for {}",
            target.game.title
        )));
        return Ok(result);
    }

    if collection.edit(updated.clone())? {
        result.add_message(CmdMessage::success(format!(
            "Game updated ({}): {}",
            target.index, updated.title
        )));
        result.affected_games.push(updated);
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Game {} is no longer in the collection",
            target.game.id
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::mem_backend::fixtures::CollectionFixture;

    #[test]
    fn applies_only_given_fields() {
        let mut fixture = CollectionFixture::new().with_complete_game("Halo", "Xbox");
        let changes = GameChanges {
            has_manual: Some(false),
            notes: Some("Manual lost".into()),
            ..Default::default()
        };

        run(&mut fixture.collection, &GameSelector::Index(1), changes).unwrap();

        let game = &fixture.games()[0];
        assert_eq!(game.title, "Halo");
        assert!(game.has_box);
        assert!(!game.has_manual);
        assert_eq!(game.notes, "Manual lost");
    }

    #[test]
    fn keeps_id_and_position() {
        let mut fixture = CollectionFixture::new()
            .with_game("A", "PC")
            .with_game("B", "PC")
            .with_game("C", "PC");
        let before = fixture.games();

        let changes = GameChanges {
            platform: Some("steam".into()),
            ..Default::default()
        };
        run(&mut fixture.collection, &GameSelector::Title("B".into()), changes).unwrap();

        let after = fixture.games();
        assert_eq!(after[1].id, before[1].id);
        assert_eq!(after[1].platform, "Steam");
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn clearing_title_is_rejected() {
        let mut fixture = CollectionFixture::new().with_game("Doom", "PC");
        let before = fixture.games();

        let changes = GameChanges {
            title: Some("  ".into()),
            ..Default::default()
        };
        let err = run(&mut fixture.collection, &GameSelector::Index(1), changes).unwrap_err();

        assert!(matches!(err, ShelfError::Validation(_)));
        assert_eq!(fixture.games(), before);
    }

    #[test]
    fn unchanged_values_skip_the_write() {
        let mut fixture = CollectionFixture::new().with_game("Doom", "PC");
        let writes = fixture.collection.backend().write_count();

        let changes = GameChanges {
            title: Some("Doom".into()),
            ..Default::default()
        };
        let result = run(&mut fixture.collection, &GameSelector::Index(1), changes).unwrap();

        assert!(result.affected_games.is_empty());
        assert_eq!(fixture.collection.backend().write_count(), writes);
    }
}
