//! Meld validation: runs, groups, and wildcard accounting.
//!
//! A play of tiles is legal when it forms a **run** (same-colored tiles
//! with consecutive values, wildcards filling gaps or extending the
//! ends) or a **group** (same-valued tiles in pairwise-distinct
//! colors). A player's first accepted play must additionally score at
//! least [`FIRST_PLAY_MINIMUM`] points, with wildcards counting their
//! nominal face value.
//!
//! Everything here is pure: validation never touches game state, so the
//! turn engine can reject a play and leave the hand exactly as it was.
//!
//! ## Examples
//!
//! ```
//! use rust_rummy::meld::{validate, MeldKind};
//! use rust_rummy::tile::{Color, Tile};
//!
//! let run = [
//!     Tile::Number { value: 1, color: Color::Red },
//!     Tile::Number { value: 3, color: Color::Red },
//!     Tile::Wildcard,
//! ];
//! assert_eq!(validate(&run, false), Ok(MeldKind::Run));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::tile::{Color, Tile};

/// Minimum number of tiles in any meld.
pub const MIN_MELD_TILES: usize = 3;

/// Minimum score of a player's first accepted play.
pub const FIRST_PLAY_MINIMUM: u32 = 30;

/// The shape a legal meld was recognized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeldKind {
    /// Consecutive same-colored values.
    Run,
    /// Equal values in distinct colors.
    Group,
}

/// Why a proposed play was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMeldReason {
    /// Fewer than [`MIN_MELD_TILES`] tiles were submitted.
    #[error("a meld needs at least {MIN_MELD_TILES} tiles, got {count}")]
    TooFewTiles { count: usize },
    /// The player's first play scored under [`FIRST_PLAY_MINIMUM`].
    #[error("first play must score at least {FIRST_PLAY_MINIMUM} points, got {score}")]
    FirstPlayBelowMinimum { score: u32 },
    /// The tiles form neither a run nor a group.
    #[error("tiles form neither a run nor a group")]
    NoValidMeldShape,
}

/// Why a set of tiles is not a run. See [`check_run`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunDefect {
    #[error("a run needs at least one numbered tile")]
    NoNumberTiles,
    #[error("run tiles must all share one color")]
    MixedColors,
    #[error("values cannot form one consecutive sequence")]
    BrokenSequence,
}

/// Why a set of tiles is not a group. See [`check_group`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDefect {
    #[error("a group needs at least one numbered tile")]
    NoNumberTiles,
    #[error("group tiles must all share one value")]
    MixedValues,
    #[error("group colors must be pairwise distinct")]
    RepeatedColor,
}

/// Decide whether `tiles` form a legal meld.
///
/// Checks run in a fixed order: the size floor first, then the
/// first-play minimum when `first_play` is set, then shape (run before
/// group). A play that is both too cheap and shapeless reports the
/// score problem, matching the order a player can act on it.
pub fn validate(tiles: &[Tile], first_play: bool) -> Result<MeldKind, InvalidMeldReason> {
    if tiles.len() < MIN_MELD_TILES {
        return Err(InvalidMeldReason::TooFewTiles { count: tiles.len() });
    }
    if first_play {
        let score = meld_score(tiles);
        if score < FIRST_PLAY_MINIMUM {
            return Err(InvalidMeldReason::FirstPlayBelowMinimum { score });
        }
    }
    if check_run(tiles).is_ok() {
        Ok(MeldKind::Run)
    } else if check_group(tiles).is_ok() {
        Ok(MeldKind::Group)
    } else {
        Err(InvalidMeldReason::NoValidMeldShape)
    }
}

/// Whether `tiles` form a run. Size and first-play checks are the
/// caller's business; this is shape only.
#[must_use]
pub fn is_valid_run(tiles: &[Tile]) -> bool {
    check_run(tiles).is_ok()
}

/// Whether `tiles` form a group. Shape only, as with [`is_valid_run`].
#[must_use]
pub fn is_valid_group(tiles: &[Tile]) -> bool {
    check_group(tiles).is_ok()
}

/// Run shape check with a diagnostic on failure.
///
/// Wildcards are split off and the numbered remainder must share one
/// color. The sorted values are then scanned once: a repeated value
/// rejects outright (a run holds each value at most once), while the
/// scan tracks the longest streak of +1 steps and the total interior
/// gap width. The run stands when wildcards can stretch the longest
/// streak over every numbered tile and can fill every gap:
///
/// `longest_streak + wildcards >= numbered_count` and `gaps <= wildcards`.
pub fn check_run(tiles: &[Tile]) -> Result<(), RunDefect> {
    let mut values: SmallVec<[u8; 16]> = SmallVec::new();
    let mut wildcards = 0usize;
    let mut run_color: Option<Color> = None;

    for tile in tiles {
        match tile {
            Tile::Number { value, color } => {
                match run_color {
                    Some(seen) if seen != *color => return Err(RunDefect::MixedColors),
                    _ => run_color = Some(*color),
                }
                values.push(*value);
            }
            Tile::Wildcard => wildcards += 1,
        }
    }

    if values.is_empty() {
        return Err(RunDefect::NoNumberTiles);
    }
    values.sort_unstable();

    let mut longest = 1usize;
    let mut streak = 1usize;
    let mut gaps = 0usize;
    for pair in values.windows(2) {
        match pair[1] - pair[0] {
            0 => return Err(RunDefect::BrokenSequence),
            1 => {
                streak += 1;
                longest = longest.max(streak);
            }
            step => {
                streak = 1;
                gaps += usize::from(step - 1);
            }
        }
    }

    if longest + wildcards >= values.len() && gaps <= wildcards {
        Ok(())
    } else {
        Err(RunDefect::BrokenSequence)
    }
}

/// Group shape check with a diagnostic on failure.
///
/// Numbered tiles must share one value and carry pairwise-distinct
/// colors. Wildcards ride along without joining the color check, so a
/// group of four numbered colors plus a wildcard still passes even
/// though the palette is exhausted.
pub fn check_group(tiles: &[Tile]) -> Result<(), GroupDefect> {
    let mut group_value: Option<u8> = None;
    let mut colors: SmallVec<[Color; 4]> = SmallVec::new();

    for tile in tiles {
        if let Tile::Number { value, color } = tile {
            match group_value {
                Some(seen) if seen != *value => return Err(GroupDefect::MixedValues),
                _ => group_value = Some(*value),
            }
            if colors.contains(color) {
                return Err(GroupDefect::RepeatedColor);
            }
            colors.push(*color);
        }
    }

    if colors.is_empty() {
        return Err(GroupDefect::NoNumberTiles);
    }
    Ok(())
}

/// Total face value of `tiles`, wildcards at their nominal
/// [`crate::tile::WILDCARD_SCORE`].
#[must_use]
pub fn meld_score(tiles: &[Tile]) -> u32 {
    tiles.iter().map(Tile::score).sum()
}
