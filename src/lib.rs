//! # rust-rummy
//!
//! A turn-based tile rummy engine: a 106-tile pool, meld validation
//! with wildcard accounting, and a turn state machine that owns all
//! game state.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: the crate models tiles, hands, melds, and
//!    turns. Rendering, input, and persistence belong to the caller,
//!    which drives the engine through method calls and reads back
//!    [`game::GameSnapshot`] values.
//!
//! 2. **Explicit outcomes**: every fallible operation returns a
//!    `Result` with a typed error. The engine never panics across its
//!    boundary and a rejected operation leaves state untouched.
//!
//! 3. **Deterministic by seed**: all randomness flows from one seeded
//!    RNG, so a whole session can be replayed from its seed and the
//!    operation sequence.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `tile`: tiles, the face-down pool, hand sorting
//! - `meld`: run/group recognition and scoring
//! - `game`: seats, the turn state machine, snapshots, errors
//!
//! ## Quick Start
//!
//! ```
//! use rust_rummy::game::GameEngine;
//! use rust_rummy::tile::SortMode;
//!
//! let mut engine = GameEngine::builder().build(7);
//! engine.start_game(2)?;
//!
//! engine.draw_tile()?;
//! engine.apply_sort(SortMode::ByNumber)?;
//! let snapshot = engine.end_turn()?;
//! assert_eq!(snapshot.turn_count, 2);
//! # Ok::<(), rust_rummy::game::GameError>(())
//! ```

pub mod core;
pub mod game;
pub mod meld;
pub mod tile;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::tile::{
    census, sort_hand, Color, PoolError, SortMode, Tile, TilePool, TILE_COUNT,
};

pub use crate::meld::{
    check_group, check_run, is_valid_group, is_valid_run, meld_score, validate, GroupDefect,
    InvalidMeldReason, MeldKind, RunDefect, FIRST_PLAY_MINIMUM, MIN_MELD_TILES,
};

pub use crate::game::{
    GameEngine, GameEngineBuilder, GameError, GamePhase, GameSnapshot, PlayRecord, Player,
    PlayerId, PlayerSummary,
};
