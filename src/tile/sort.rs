//! Hand sorting policy.
//!
//! A hand can be viewed three ways: by ascending number, by color
//! precedence, or unsorted. Choosing [`SortMode::None`] is not a no-op;
//! it re-randomizes the hand so the unsorted view does not leak the
//! order tiles happened to arrive in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::tile::tile::Tile;

/// How a player's hand is arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Unsorted; applying it shuffles the hand.
    #[default]
    None,
    /// Ascending by printed value, wildcards last.
    ByNumber,
    /// Grouped by color precedence (red, blue, yellow, black), ascending
    /// by value within each color, wildcards last.
    ByColor,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::None => "none",
            SortMode::ByNumber => "by number",
            SortMode::ByColor => "by color",
        };
        write!(f, "{}", name)
    }
}

/// Arrange `hand` according to `mode`.
///
/// Both sorts are stable: tiles that compare equal keep their relative
/// order, so re-applying the same mode leaves the hand unchanged.
pub fn sort_hand(hand: &mut [Tile], mode: SortMode, rng: &mut GameRng) {
    match mode {
        SortMode::None => rng.shuffle(hand),
        SortMode::ByNumber => {
            hand.sort_by_key(|tile| (tile.is_wildcard(), tile.value().unwrap_or(0)));
        }
        SortMode::ByColor => {
            hand.sort_by_key(|tile| {
                (tile.is_wildcard(), tile.color(), tile.value().unwrap_or(0))
            });
        }
    }
}
