//! Turns `CmdResult` pieces into terminal text.
//!
//! Every `render_*` function returns a `String` so output can be checked in
//! tests; callers print it.

use super::styles::platform_color;
use colored::Colorize;
use gameshelf::commands::{CmdMessage, CollectionStats, MessageLevel, PlatformCount};
use gameshelf::config::ShelfConfig;
use gameshelf::index::DisplayGame;
use gameshelf::model::platform_key;
use std::fmt::Write as _;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const INCLUDES_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Games under a header per platform, in listing order. Headers follow the
/// same case-insensitive grouping as the listing sort.
pub fn render_game_list(games: &[DisplayGame], groups: &[PlatformCount]) -> String {
    let mut out = String::new();
    let mut current: Option<String> = None;

    for dg in games {
        let key = platform_key(&dg.game.platform);
        if current.as_deref() != Some(key.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            let group = groups.iter().find(|g| platform_key(&g.platform) == key);
            let name = group.map_or(dg.game.platform.as_str(), |g| g.platform.as_str());
            let count = group.map_or(0, |g| g.count);
            let _ = writeln!(
                out,
                "{} {}",
                platform_label(name).bold(),
                format!("({})", count).dimmed()
            );
            current = Some(key);
        }
        out.push_str(&game_line(dg));
        out.push('\n');
    }

    out
}

/// One line per game with its platform, for search results.
pub fn render_flat_list(games: &[DisplayGame]) -> String {
    let mut out = String::new();
    for dg in games {
        let idx = format!("{:>4}. ", dg.index);
        let platform = format!("  {}", platform_label(&dg.game.platform));
        let available = LINE_WIDTH.saturating_sub(idx.width() + platform.width());
        let title = truncate_to_width(&dg.game.title, available);
        let padding = available.saturating_sub(title.width());
        let _ = writeln!(
            out,
            "{}{}{}{}",
            idx.yellow(),
            title,
            " ".repeat(padding),
            platform.dimmed()
        );
    }
    out
}

pub fn render_full_games(games: &[DisplayGame]) -> String {
    let mut out = String::new();
    for (i, dg) in games.iter().enumerate() {
        if i > 0 {
            out.push_str("\n--------------------------------\n\n");
        }
        let game = &dg.game;
        let _ = writeln!(
            out,
            "{} {}",
            format!("{}.", dg.index).yellow(),
            game.title.bold()
        );
        field(&mut out, "Platform:", &game.platform);
        field(&mut out, "Manual:", yes_no(game.has_manual));
        field(&mut out, "Box:", yes_no(game.has_box));
        if !game.notes.trim().is_empty() {
            field(&mut out, "Notes:", &game.notes);
        }
        if game.has_image() {
            field(&mut out, "Image:", &game.image_url);
        }
        let _ = writeln!(out, "  {} {}", pad_label("Id:").dimmed(), game.id.dimmed());
    }
    out
}

/// The platform catalogue with owned counts. Platforms outside the catalogue
/// are marked with `*`.
pub fn render_platforms(groups: &[PlatformCount]) -> String {
    let mut out = String::new();
    let mut has_unknown = false;
    for group in groups {
        let marker = if group.known {
            " "
        } else {
            has_unknown = true;
            "*"
        };
        let line = format!("{} {:<22} {:>4}", marker, group.platform, group.count);
        if group.count == 0 {
            let _ = writeln!(out, "{}", line.dimmed());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    if has_unknown {
        let _ = writeln!(out, "\n{}", "* not in the platform list".dimmed());
    }
    out
}

pub fn render_stats(stats: &CollectionStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Collection Stats".bold());
    let _ = writeln!(out, "  Total Games: {}", stats.total);
    let _ = writeln!(
        out,
        "  Boxed: {} ({:.1}%)",
        stats.boxed, stats.boxed_percent
    );
    let _ = writeln!(
        out,
        "  With Manual: {} ({:.1}%)",
        stats.with_manual, stats.manual_percent
    );

    if stats.by_platform.is_empty() {
        return out;
    }

    let _ = writeln!(out, "\n{}", "By Platform".bold());
    let name_width = stats
        .by_platform
        .iter()
        .map(|s| platform_label(&s.platform).width())
        .max()
        .unwrap_or(0);

    for share in &stats.by_platform {
        let label = platform_label(&share.platform);
        let filled = ((share.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let (r, g, b) = platform_color(&share.platform);
        let bar = "█".repeat(filled.max(1)).truecolor(r, g, b);
        let _ = writeln!(
            out,
            "  {}{}  {:>4} {:>4.0}%  {}",
            label,
            " ".repeat(name_width.saturating_sub(label.width())),
            share.count,
            share.percent,
            bar
        );
    }
    out
}

pub fn render_image_candidates(urls: &[String]) -> String {
    let mut out = String::new();
    for (i, url) in urls.iter().enumerate() {
        let _ = writeln!(out, "{} {}", format!("{:>3}.", i + 1).yellow(), url);
    }
    if !urls.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            "Use --pick N to store one of these as the cover image.".dimmed()
        );
    }
    out
}

pub fn render_config(config: &ShelfConfig) -> String {
    let mut out = String::new();
    for (key, value) in config.list_all() {
        let _ = writeln!(out, "{} {}", format!("{:<24}", key).bold(), value);
    }
    out
}

pub fn render_paths(paths: &[(String, PathBuf)]) -> String {
    let mut out = String::new();
    for (label, path) in paths {
        let label = format!("{:<12}", format!("{}:", label));
        let _ = writeln!(out, "{} {}", label.dimmed(), path.display());
    }
    out
}

fn game_line(dg: &DisplayGame) -> String {
    let idx = format!("{:>4}. ", dg.index);
    let includes = dg.game.includes_label();
    let available = LINE_WIDTH.saturating_sub(idx.width() + INCLUDES_WIDTH);
    let title = truncate_to_width(&dg.game.title, available);
    let padding = available.saturating_sub(title.width());
    format!(
        "{}{}{}{}",
        idx.yellow(),
        title,
        " ".repeat(padding),
        format!("{:>width$}", includes, width = INCLUDES_WIDTH).dimmed()
    )
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {} {}", pad_label(label).dimmed(), value);
}

fn pad_label(label: &str) -> String {
    format!("{:<10}", label)
}

fn platform_label(platform: &str) -> &str {
    if platform.trim().is_empty() {
        "(no platform)"
    } else {
        platform
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
