//! Tiles, the face-down pool, and hand sorting.

pub mod pool;
pub mod sort;
pub mod tile;

pub use pool::{PoolError, TilePool};
pub use sort::{sort_hand, SortMode};
pub use tile::{
    census, Color, Tile, COPIES_PER_KIND, MAX_VALUE, MIN_VALUE, TILE_COUNT, WILDCARD_COUNT,
    WILDCARD_SCORE,
};
