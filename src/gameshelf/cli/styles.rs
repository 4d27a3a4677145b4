//! Terminal colours for the CLI.
//!
//! Every catalogue platform has a fixed colour, used for its slice in the
//! `stats` breakdown. Platforms outside the catalogue fall back to
//! [`DEFAULT_PLATFORM_COLOR`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type Rgb = (u8, u8, u8);

pub const DEFAULT_PLATFORM_COLOR: Rgb = (0x70, 0x5E, 0x4E);

pub static PLATFORM_COLORS: Lazy<HashMap<&'static str, Rgb>> = Lazy::new(|| {
    HashMap::from([
        ("3DO", (0xFF, 0xD7, 0x00)),
        ("Atari 2600", (0x8B, 0x45, 0x13)),
        ("Atari 5200", (0xA0, 0x52, 0x2D)),
        ("Atari 7800", (0xD2, 0x69, 0x1E)),
        ("Atari Jaguar", (0x5C, 0x40, 0x33)),
        ("Atari Lynx", (0xCD, 0x85, 0x3F)),
        ("Colecovision", (0xC0, 0xC0, 0xC0)),
        ("Hyperscan", (0x00, 0xFF, 0xFF)),
        ("Intellivision", (0x80, 0x00, 0x20)),
        ("Nintendo NES", (0xFF, 0x00, 0x00)),
        ("Super Nintendo", (0x80, 0x00, 0x80)),
        ("Game Boy", (0x80, 0x80, 0x80)),
        ("Game Boy Advance", (0x93, 0x70, 0xDB)),
        ("Nintendo 64", (0x90, 0xEE, 0x90)),
        ("Nintendo GameCube", (0x48, 0x3D, 0x8B)),
        ("Nintendo DS", (0xB2, 0x22, 0x22)),
        ("Nintendo 3DS", (0xFF, 0x63, 0x47)),
        ("Wii", (0xFF, 0xFF, 0xFF)),
        ("Wii U", (0xAD, 0xD8, 0xE6)),
        ("Nintendo Switch", (0xFF, 0x45, 0x00)),
        ("Nintendo Switch 2", (0xDC, 0x14, 0x3C)),
        ("PlayStation", (0xA9, 0xA9, 0xA9)),
        ("PlayStation 2", (0x00, 0x00, 0xCD)),
        ("PlayStation 3", (0x1E, 0x90, 0xFF)),
        ("PlayStation 4", (0x87, 0xCE, 0xEB)),
        ("PlayStation 5", (0x00, 0x00, 0x8B)),
        ("Sega Master System", (0x8B, 0x00, 0x00)),
        ("Sega Genesis", (0x00, 0x00, 0x00)),
        ("Sega Game Gear", (0x6A, 0x5A, 0xCD)),
        ("Sega Saturn", (0x00, 0x00, 0x80)),
        ("Sega Dreamcast", (0xFF, 0xA5, 0x00)),
        ("Steam", (0xD3, 0xD3, 0xD3)),
        ("PC", (0xF5, 0xF5, 0xDC)),
        ("Xbox", (0x10, 0x7C, 0x10)),
        ("Xbox 360", (0x33, 0xA0, 0x2C)),
        ("Xbox One", (0x00, 0x64, 0x00)),
        ("Xbox Series X/S", (0x22, 0x8B, 0x22)),
    ])
});

pub fn platform_color(platform: &str) -> Rgb {
    PLATFORM_COLORS
        .get(platform)
        .copied()
        .unwrap_or(DEFAULT_PLATFORM_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameshelf::model::PLATFORMS;

    #[test]
    fn every_catalogue_platform_has_a_colour() {
        for platform in PLATFORMS {
            assert!(PLATFORM_COLORS.contains_key(platform), "{}", platform);
        }
    }

    #[test]
    fn unknown_platform_uses_default() {
        assert_eq!(platform_color("Vectrex"), DEFAULT_PLATFORM_COLOR);
    }
}
