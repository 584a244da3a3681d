//! Game-level errors.
//!
//! Every fallible engine operation returns one of these. They are all
//! recoverable outcomes for the caller to surface; the engine never
//! panics across its boundary and a rejected operation leaves the game
//! state untouched.

use thiserror::Error;

use crate::meld::InvalidMeldReason;
use crate::tile::PoolError;

/// Why an engine operation was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// `start_game` was asked for an unsupported number of seats.
    #[error("cannot seat {count} players")]
    InvalidPlayerCount { count: usize },
    /// The pool could not supply the requested tiles.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// A play selection held an out-of-range or repeated hand position.
    #[error("selection holds an out-of-range or repeated hand position")]
    InvalidSelection,
    /// The selected tiles do not form an acceptable meld.
    #[error(transparent)]
    Meld(#[from] InvalidMeldReason),
    /// A turn-scoped operation arrived while no turn was active.
    #[error("no turn is active")]
    NoActiveTurn,
    /// `start_game` arrived on a game already under way.
    #[error("the game has already started")]
    AlreadyStarted,
}
