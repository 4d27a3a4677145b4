use crate::commands::{CmdMessage, CmdResult, CollectionStats, PlatformShare};
use crate::error::Result;
use crate::model::{count_by_platform, GameRecord};
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

pub fn run<B: StorageBackend>(collection: &Collection<B>) -> Result<CmdResult> {
    let stats = compute(collection.games());
    let mut result = CmdResult::default();
    if stats.total == 0 {
        result.add_message(CmdMessage::info("No games yet, stats will show up once you add some."));
    }
    Ok(result.with_stats(stats))
}

pub fn compute(games: &[GameRecord]) -> CollectionStats {
    let total = games.len();
    let boxed = games.iter().filter(|g| g.has_box).count();
    let with_manual = games.iter().filter(|g| g.has_manual).count();

    let mut by_platform: Vec<PlatformShare> = count_by_platform(games)
        .into_iter()
        .map(|(platform, count)| PlatformShare {
            platform,
            count,
            percent: percent(count, total),
        })
        .collect();
    by_platform.sort_by(|a, b| b.count.cmp(&a.count));

    CollectionStats {
        total,
        boxed,
        boxed_percent: percent(boxed, total),
        with_manual,
        manual_percent: percent(with_manual, total),
        by_platform,
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::CollectionFixture;

    #[test]
    fn empty_collection_has_zero_percentages() {
        let fixture = CollectionFixture::new();
        let stats = run(&fixture.collection).unwrap().stats.unwrap();

        assert_eq!(stats.total, 0);
        assert_eq!(stats.boxed_percent, 0.0);
        assert_eq!(stats.manual_percent, 0.0);
        assert!(stats.by_platform.is_empty());
    }

    #[test]
    fn counts_boxed_and_manuals() {
        let fixture = CollectionFixture::new()
            .with_complete_game("Halo", "Xbox")
            .with_game("Crash", "PlayStation")
            .with_game("Spyro", "PlayStation")
            .with_game("Doom", "PC");

        let stats = compute(fixture.collection.games());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.boxed, 1);
        assert_eq!(stats.with_manual, 1);
        assert_eq!(stats.boxed_percent, 25.0);
    }

    #[test]
    fn platforms_ordered_by_count() {
        let fixture = CollectionFixture::new()
            .with_game("Halo", "Xbox")
            .with_game("Crash", "PlayStation")
            .with_game("Spyro", "PlayStation");

        let stats = compute(fixture.collection.games());

        assert_eq!(stats.by_platform[0].platform, "PlayStation");
        assert_eq!(stats.by_platform[0].count, 2);
        assert!((stats.by_platform[1].percent - 33.333).abs() < 0.01);
    }
}
