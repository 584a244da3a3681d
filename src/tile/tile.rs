//! Tile vocabulary: numbered tiles in four colors, plus wildcards.
//!
//! The full set holds 106 tiles: every (value, color) combination for
//! values 1-13 across the four colors appears exactly twice (104
//! tiles), plus two wildcards.
//!
//! Tiles are small `Copy` values. Two tiles may be equal in value and
//! color yet be distinct pieces in play, so hands address tiles by
//! position; `PartialEq`/`Hash` exist for assertions and census
//! bookkeeping, not for locating a specific piece.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Lowest value printed on a numbered tile.
pub const MIN_VALUE: u8 = 1;

/// Highest value printed on a numbered tile.
pub const MAX_VALUE: u8 = 13;

/// Copies of each (value, color) combination in the full set.
pub const COPIES_PER_KIND: usize = 2;

/// Wildcards in the full set.
pub const WILDCARD_COUNT: usize = 2;

/// Total tiles in the full set: 13 values x 4 colors x 2 copies, plus 2 wildcards.
pub const TILE_COUNT: usize = 106;

/// Nominal face value of a wildcard.
///
/// Wildcards have no printed number; this fixed value is what they
/// contribute when a play is scored against the first-play minimum.
pub const WILDCARD_SCORE: u32 = 30;

/// Tile color.
///
/// Declaration order doubles as the fixed precedence used by color
/// sorting: red before blue before yellow before black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Black,
}

impl Color {
    /// All colors, in precedence order.
    #[must_use]
    pub const fn all() -> [Color; 4] {
        [Color::Red, Color::Blue, Color::Yellow, Color::Black]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Black => "black",
        };
        write!(f, "{}", name)
    }
}

/// A single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    /// Numbered tile: a value from 1 to 13 in one of the four colors.
    Number { value: u8, color: Color },
    /// Wildcard; substitutes for any tile in a run or group.
    Wildcard,
}

impl Tile {
    /// Create a numbered tile, validating the value range.
    #[must_use]
    pub fn number(value: u8, color: Color) -> Option<Self> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Some(Tile::Number { value, color })
        } else {
            None
        }
    }

    /// The printed value, or `None` for a wildcard.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        match self {
            Tile::Number { value, .. } => Some(*value),
            Tile::Wildcard => None,
        }
    }

    /// The color, or `None` for a wildcard.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Tile::Number { color, .. } => Some(*color),
            Tile::Wildcard => None,
        }
    }

    /// Whether this tile is a wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Tile::Wildcard)
    }

    /// Face value for scoring: the printed number, or the wildcard's
    /// nominal [`WILDCARD_SCORE`].
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            Tile::Number { value, .. } => u32::from(*value),
            Tile::Wildcard => WILDCARD_SCORE,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Number { value, color } => write!(f, "{} {}", color, value),
            Tile::Wildcard => write!(f, "wildcard"),
        }
    }
}

/// Count tiles per kind.
///
/// Duplicate physical tiles collapse onto one key, so a full set maps
/// every numbered kind to 2 and `Tile::Wildcard` to 2. Tests and debug
/// audits use this to verify no tile is ever created or destroyed.
pub fn census<'a, I>(tiles: I) -> FxHashMap<Tile, usize>
where
    I: IntoIterator<Item = &'a Tile>,
{
    let mut counts = FxHashMap::default();
    for &tile in tiles {
        *counts.entry(tile).or_insert(0) += 1;
    }
    counts
}
