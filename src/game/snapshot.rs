//! Read-only views of game state for a presentation layer.
//!
//! A [`GameSnapshot`] is detached from the engine: it clones the data a
//! renderer needs (the active hand, tile counts, the board) so the
//! caller can hold it across frames without borrowing the engine.
//! Opponent hands appear only as counts.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::game::engine::GamePhase;
use crate::game::player::{Player, PlayerId};
use crate::tile::{SortMode, Tile};

/// One seat as the presentation layer sees it: name and tile count,
/// never the hand itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub tiles_held: usize,
    pub completed_first_play: bool,
}

impl PlayerSummary {
    pub(crate) fn of(player: &Player) -> Self {
        PlayerSummary {
            id: player.id(),
            name: player.name().to_owned(),
            tiles_held: player.hand_size(),
            completed_first_play: player.has_completed_first_play(),
        }
    }
}

/// Point-in-time view of the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// Seat whose turn it is, when a turn is active.
    pub current_player: Option<PlayerId>,
    pub players: Vec<PlayerSummary>,
    /// The active player's full hand in display order; empty when no
    /// turn is active.
    pub current_hand: Vec<Tile>,
    /// Every tile played so far, in play order.
    pub board: Vector<Tile>,
    pub pool_remaining: usize,
    pub sort_mode: SortMode,
    pub turn_count: u32,
}

impl GameSnapshot {
    /// The winning seat, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }
}
