use crate::commands::{CmdMessage, CmdResult, PlatformCount};
use crate::error::Result;
use crate::index::DisplayGame;
use crate::model::{is_known_platform, platform_key};
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

use super::helpers::indexed_games;

/// Lists the collection, or a single platform when `platform` is given.
///
/// Games keep their collection-wide index even when filtered, so the numbers
/// shown can be passed straight to `edit` or `delete`.
pub fn run<B: StorageBackend>(
    collection: &Collection<B>,
    platform: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if collection.is_empty() {
        result.add_message(CmdMessage::info("No games in your collection yet."));
        return Ok(result);
    }

    let mut listed = indexed_games(collection);
    if let Some(wanted) = platform {
        let wanted = wanted.trim();
        let key = platform_key(wanted);
        listed.retain(|d| platform_key(&d.game.platform) == key);
        if listed.is_empty() {
            result.add_message(CmdMessage::info(format!("No games for {}", wanted)));
            return Ok(result);
        }
    }

    let groups = platform_groups(&listed);
    Ok(result.with_listed_games(listed).with_platform_groups(groups))
}

/// Collapses a listing into its platform groups, in listing order.
///
/// Platforms that differ only in case share one group, named after the
/// spelling of its first game. Games without a platform form a group with an
/// empty name, so every listed game is counted under some header.
pub fn platform_groups(listed: &[DisplayGame]) -> Vec<PlatformCount> {
    let mut groups: Vec<PlatformCount> = Vec::new();
    for dg in listed {
        let platform = dg.game.platform.trim();
        match groups.last_mut() {
            Some(last) if platform_key(&last.platform) == platform_key(platform) => {
                last.count += 1
            }
            _ => groups.push(PlatformCount {
                platform: platform.to_string(),
                count: 1,
                known: is_known_platform(platform),
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::CollectionFixture;

    #[test]
    fn empty_collection_reports_it() {
        let fixture = CollectionFixture::new();
        let result = run(&fixture.collection, None).unwrap();
        assert!(result.listed_games.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn groups_count_every_listed_game() {
        let fixture = CollectionFixture::new()
            .with_game("Halo", "Xbox")
            .with_game("Mystery", "")
            .with_game("Crash", "PlayStation")
            .with_game("Unknown", "  ")
            .with_game("Spyro", "PlayStation");

        let result = run(&fixture.collection, None).unwrap();

        let groups: Vec<_> = result
            .platform_groups
            .iter()
            .map(|g| (g.platform.as_str(), g.count))
            .collect();
        assert_eq!(groups, vec![("", 2), ("PlayStation", 2), ("Xbox", 1)]);
        assert_eq!(result.listed_games.len(), 5);
        let counted: usize = result.platform_groups.iter().map(|g| g.count).sum();
        assert_eq!(counted, result.listed_games.len());
    }

    #[test]
    fn platforms_differing_in_case_share_a_group() {
        let fixture = CollectionFixture::new()
            .with_game("Mine Storm", "Vectrex")
            .with_game("Armor Attack", "vectrex")
            .with_game("Scramble", "VECTREX");

        let result = run(&fixture.collection, None).unwrap();

        assert_eq!(result.platform_groups.len(), 1);
        assert_eq!(result.platform_groups[0].count, 3);
        assert_eq!(result.platform_groups[0].platform, "vectrex");
    }

    #[test]
    fn platform_filter_sorts_by_title_and_keeps_indexes() {
        let fixture = CollectionFixture::new()
            .with_game("Halo", "Xbox")
            .with_game("Spyro", "PlayStation")
            .with_game("Crash", "PlayStation");

        let result = run(&fixture.collection, Some("xbox")).unwrap();

        assert_eq!(result.listed_games.len(), 1);
        assert_eq!(result.listed_games[0].game.title, "Halo");
        assert_eq!(result.listed_games[0].index, 3);

        let ps = run(&fixture.collection, Some("PlayStation")).unwrap();
        let titles: Vec<_> = ps.listed_games.iter().map(|d| d.game.title.as_str()).collect();
        assert_eq!(titles, vec!["Crash", "Spyro"]);
    }

    #[test]
    fn unknown_platforms_are_flagged() {
        let fixture = CollectionFixture::new().with_game("Mine Storm", "Vectrex");
        let result = run(&fixture.collection, None).unwrap();
        assert!(!result.platform_groups[0].known);
    }
}
