//! Players: identity, hand contents, and first-play tracking.
//!
//! Hands are ordered and addressed by position. A hand may hold two
//! tiles of the same value and color, so plays select positions, not
//! tile values; removal always walks the selected positions from
//! highest to lowest so earlier removals cannot shift later ones.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;
use crate::tile::{sort_hand, SortMode, Tile};

/// Player identifier. Indices are 0-based; display is 1-based to match
/// the seat names players see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use rust_rummy::game::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(ids, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        assert!(player_count <= 255, "At most 255 players supported");
        (0..player_count as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 as u32 + 1)
    }
}

/// A seated player: name, hand, and whether their opening play has
/// cleared the first-play minimum.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Tile>,
    completed_first_play: bool,
}

impl Player {
    pub(crate) fn new(id: PlayerId, hand: Vec<Tile>) -> Self {
        Player {
            id,
            name: id.to_string(),
            hand,
            completed_first_play: false,
        }
    }

    /// This player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name of the seat ("Player 1" onward).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hand, in its current display order.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Number of tiles in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Whether this player's first play has been accepted.
    #[must_use]
    pub fn has_completed_first_play(&self) -> bool {
        self.completed_first_play
    }

    pub(crate) fn take_tile(&mut self, tile: Tile) {
        self.hand.push(tile);
    }

    pub(crate) fn mark_first_play_complete(&mut self) {
        self.completed_first_play = true;
    }

    pub(crate) fn arrange(&mut self, mode: SortMode, rng: &mut GameRng) {
        sort_hand(&mut self.hand, mode, rng);
    }

    /// Tiles at `indices`, in selection order. `None` if any index is
    /// out of range or appears more than once.
    pub(crate) fn tiles_at(&self, indices: &[usize]) -> Option<Vec<Tile>> {
        let mut seen: SmallVec<[usize; 16]> = SmallVec::from_slice(indices);
        seen.sort_unstable();
        if seen.windows(2).any(|pair| pair[0] == pair[1]) {
            return None;
        }
        indices
            .iter()
            .map(|&i| self.hand.get(i).copied())
            .collect()
    }

    /// Remove the tiles at `indices`, highest position first.
    ///
    /// Callers must have validated `indices` via [`Self::tiles_at`].
    pub(crate) fn remove_tiles(&mut self, indices: &[usize]) {
        let mut ordered: SmallVec<[usize; 16]> = SmallVec::from_slice(indices);
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        for index in ordered {
            debug_assert!(index < self.hand.len());
            self.hand.remove(index);
        }
    }
}
