//! Category color lookup.
//!
//! Well-known categories get a two-stop gradient; anything else falls back to
//! the category's own base color, and idle time gets a neutral gray pair.

use super::block::{Category, IDLE_CATEGORY_ID};
use crossterm::style::{style, Color, Stylize};

/// Two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub from: Color,
    pub to: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

const GRADIENTS: &[(&str, ColorPair)] = &[
    ("university", ColorPair { from: rgb(0x4A, 0x78, 0xBD), to: rgb(0x5D, 0x8A, 0xC9) }),
    ("business", ColorPair { from: rgb(0xE1, 0x9A, 0x3C), to: rgb(0xF0, 0xB0, 0x5C) }),
    ("trw", ColorPair { from: rgb(0x6B, 0xB5, 0x36), to: rgb(0x7F, 0xC8, 0x4A) }),
    ("ai-automation", ColorPair { from: rgb(0xA2, 0x3B, 0xC9), to: rgb(0xB4, 0x4F, 0xD8) }),
    (IDLE_CATEGORY_ID, ColorPair { from: rgb(0xF5, 0xF5, 0xF5), to: rgb(0xEB, 0xEB, 0xEB) }),
];

/// Color used when a category has neither a gradient nor a usable base color.
pub const FALLBACK_COLOR: Color = rgb(0xE8, 0xE8, 0xE8);

/// Resolved fill for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Gradient(ColorPair),
    Solid(Color),
}

impl Fill {
    /// The dominant color, used where only one color can be drawn.
    pub fn primary(&self) -> Color {
        match self {
            Fill::Gradient(pair) => pair.from,
            Fill::Solid(color) => *color,
        }
    }
}

/// Gradient for a well-known category id.
pub fn gradient(category_id: &str) -> Option<ColorPair> {
    GRADIENTS
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, pair)| *pair)
}

/// Fill for `category_id`, consulting the catalog when no gradient is known.
pub fn fill_for(category_id: &str, categories: &[Category]) -> Fill {
    if let Some(pair) = gradient(category_id) {
        return Fill::Gradient(pair);
    }

    let color = categories
        .iter()
        .find(|c| c.id == category_id)
        .and_then(|c| parse_hex(&c.color))
        .unwrap_or(FALLBACK_COLOR);
    Fill::Solid(color)
}

/// Reads a catalog color written as `#RRGGBB` (the `#` is optional).
pub fn parse_hex(value: &str) -> Option<Color> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
    Some(rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Styles `text` with a foreground color.
pub fn paint(text: &str, color: Color) -> String {
    style(text).with(color).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#4A78BD"), Some(rgb(0x4A, 0x78, 0xBD)));
        assert_eq!(parse_hex("e8e8e8"), Some(FALLBACK_COLOR));
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("#GG0000"), None);
    }

    #[test]
    fn test_paint_sets_foreground() {
        let painted = paint("█", rgb(0x4A, 0x78, 0xBD));
        assert!(painted.contains("38;2;74;120;189"));
        assert!(painted.contains('█'));
    }

    #[test]
    fn test_fill_for_unparseable_catalog_color() {
        let categories = vec![Category::new("garden", "Garden", "green-ish")];
        assert_eq!(fill_for("garden", &categories), Fill::Solid(FALLBACK_COLOR));
        assert_eq!(fill_for("unknown", &categories).primary(), FALLBACK_COLOR);
    }
}
