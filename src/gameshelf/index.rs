//! # Display Indexes
//!
//! Record ids are UUIDs, which nobody wants to type. The CLI therefore shows
//! each game with a short 1-based number, assigned over the canonical listing
//! order: platform name, then title (case-insensitive), then insertion order.
//!
//! Indexes are recomputed on every run and never stored. Adding a game can
//! shift the numbers of the games listed after it.
//!
//! A [`GameSelector`] is what a user types to pick a game: an index (`3`), an
//! id (`id:<uuid>` or a bare string equal to an id), or a title fragment.
//! A number past the end of the listing is tried as a whole title, which is
//! how a game called "1942" stays reachable.

use crate::model::{platform_key, GameRecord};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGame {
    pub index: usize,
    pub game: GameRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSelector {
    Index(usize),
    Id(String),
    Title(String),
}

impl fmt::Display for GameSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameSelector::Index(i) => write!(f, "{}", i),
            GameSelector::Id(id) => write!(f, "id:{}", id),
            GameSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl GameSelector {
    /// Numbers become indexes, `id:` prefixes become ids, anything else is a title search.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return GameSelector::Index(n);
        }
        if let Some(id) = trimmed.strip_prefix("id:") {
            return GameSelector::Id(id.to_string());
        }
        GameSelector::Title(trimmed.to_string())
    }
}

/// Ordering used for listings: platform, then title, both case-insensitive.
pub fn listing_order(a: &GameRecord, b: &GameRecord) -> Ordering {
    platform_key(&a.platform)
        .cmp(&platform_key(&b.platform))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

/// Assigns display indexes. The sort is stable, so ties keep insertion order.
pub fn index_games(games: &[GameRecord]) -> Vec<DisplayGame> {
    let mut sorted: Vec<&GameRecord> = games.iter().collect();
    sorted.sort_by(|a, b| listing_order(a, b));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, game)| DisplayGame {
            index: i + 1,
            game: game.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameFields;

    fn game(title: &str, platform: &str) -> GameRecord {
        GameRecord::new(GameFields::new(title, platform))
    }

    #[test]
    fn parses_selectors() {
        assert_eq!(GameSelector::parse("3"), GameSelector::Index(3));
        assert_eq!(
            GameSelector::parse("id:abc-123"),
            GameSelector::Id("abc-123".into())
        );
        assert_eq!(
            GameSelector::parse(" zelda "),
            GameSelector::Title("zelda".into())
        );
    }

    #[test]
    fn indexes_follow_platform_then_title() {
        let games = vec![
            game("Zelda", "Nintendo 64"),
            game("Banjo", "Nintendo 64"),
            game("Doom", "PC"),
            game("Aladdin", "Sega Genesis"),
        ];

        let indexed = index_games(&games);
        let titles: Vec<_> = indexed.iter().map(|d| d.game.title.as_str()).collect();
        assert_eq!(titles, vec!["Banjo", "Zelda", "Doom", "Aladdin"]);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[3].index, 4);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let first = game("Tetris", "Game Boy");
        let second = game("tetris", "Game Boy");
        let indexed = index_games(&[first.clone(), second.clone()]);
        assert_eq!(indexed[0].game.id, first.id);
        assert_eq!(indexed[1].game.id, second.id);
    }
}
