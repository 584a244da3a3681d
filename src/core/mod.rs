//! Core plumbing shared by every component.
//!
//! Currently this is the deterministic RNG; everything else in the
//! engine is domain-specific and lives in `tile`, `meld` or `game`.

pub mod rng;

pub use rng::GameRng;
