//! Random colors for the color changer screen.

use std::str::FromStr;

use rand::Rng;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A 24-bit RGB color, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

/// Error parsing a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {0}")]
pub struct ParseColorError(String);

impl HexColor {
    /// White.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    /// Creates a color from channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// A uniformly random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let [red, green, blue] = rng.random::<[u8; 3]>();
        Self::new(red, green, blue)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colors for the background and the three shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapePalette {
    /// Screen background.
    pub background: HexColor,
    /// Circle fill.
    pub circle: HexColor,
    /// Square fill.
    pub square: HexColor,
    /// Triangle fill.
    pub triangle: HexColor,
}

impl Default for ShapePalette {
    fn default() -> Self {
        Self {
            background: HexColor::WHITE,
            circle: HexColor::new(0xFF, 0x00, 0x00),
            square: HexColor::new(0x00, 0xFF, 0x00),
            triangle: HexColor::new(0x00, 0x00, 0xFF),
        }
    }
}

impl ShapePalette {
    /// Four independently random colors.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            background: HexColor::random(rng),
            circle: HexColor::random(rng),
            square: HexColor::random(rng),
            triangle: HexColor::random(rng),
        }
    }
}
