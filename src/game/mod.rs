//! Turn orchestration: seats, the state machine, errors, snapshots.

pub mod engine;
pub mod error;
pub mod player;
pub mod snapshot;

pub use engine::{GameEngine, GameEngineBuilder, GamePhase, PlayRecord};
pub use error::GameError;
pub use player::{Player, PlayerId};
pub use snapshot::{GameSnapshot, PlayerSummary};
