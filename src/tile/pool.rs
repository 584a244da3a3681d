//! The face-down tile pool: construction, shuffling, dealing, drawing.
//!
//! A standard pool starts with the full 106-tile set in a fixed order
//! and is shuffled once before any tiles leave it. Tiles leave from the
//! front, either in bulk when opening hands are dealt or one at a time
//! when a player draws.

use thiserror::Error;

use crate::core::GameRng;
use crate::tile::tile::{
    Color, Tile, COPIES_PER_KIND, MAX_VALUE, MIN_VALUE, TILE_COUNT, WILDCARD_COUNT,
};

/// Errors raised when the pool cannot supply tiles.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// A draw was attempted on an empty pool.
    #[error("the tile pool is empty")]
    Empty,
    /// A deal asked for more tiles than the pool holds.
    #[error("pool holds {available} tiles but {requested} were requested")]
    Insufficient { requested: usize, available: usize },
}

/// The face-down pool of undealt tiles.
#[derive(Debug, Clone)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Build the full 106-tile set in canonical (unshuffled) order.
    #[must_use]
    pub fn standard() -> Self {
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        for color in Color::all() {
            for value in MIN_VALUE..=MAX_VALUE {
                for _ in 0..COPIES_PER_KIND {
                    tiles.push(Tile::Number { value, color });
                }
            }
        }
        for _ in 0..WILDCARD_COUNT {
            tiles.push(Tile::Wildcard);
        }
        TilePool { tiles }
    }

    /// Shuffle the pool in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Remove and return `count` tiles from the front of the pool.
    ///
    /// Fails without removing anything if fewer than `count` remain.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Tile>, PoolError> {
        if self.tiles.len() < count {
            return Err(PoolError::Insufficient {
                requested: count,
                available: self.tiles.len(),
            });
        }
        Ok(self.tiles.drain(..count).collect())
    }

    /// Remove and return the front tile of the pool.
    pub fn draw(&mut self) -> Result<Tile, PoolError> {
        if self.tiles.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(self.tiles.remove(0))
    }

    /// Number of tiles still in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The undealt tiles, front first. Used by audits and tests.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

// Plumbing for tests that need a specific table state.
#[cfg(test)]
impl TilePool {
    pub(crate) fn put_back(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub(crate) fn pull_matching(&mut self, tile: Tile) -> Option<Tile> {
        let position = self.tiles.iter().position(|&held| held == tile)?;
        Some(self.tiles.remove(position))
    }
}
