//! The turn engine: a single-writer state machine over pool, hands,
//! and board.
//!
//! The machine has three phases. It begins in `AwaitingStart`, enters
//! `TurnActive` when seats are dealt, and reaches the terminal
//! `GameOver` when a play empties a hand. Every mutating operation
//! checks the phase first and rejects cleanly, so a refused call never
//! leaves partial state behind.
//!
//! All shared state (pool, hands, board, turn index) is owned by one
//! [`GameEngine`] value and mutated only through its methods, one call
//! at a time. Callers that need cross-thread access must serialize
//! calls through a single owner.
//!
//! ## Example
//!
//! ```
//! use rust_rummy::game::GameEngine;
//!
//! let mut engine = GameEngine::builder().build(42);
//! let snapshot = engine.start_game(2)?;
//!
//! assert_eq!(snapshot.players.len(), 2);
//! assert_eq!(snapshot.current_hand.len(), 14);
//! assert_eq!(snapshot.pool_remaining, 106 - 28);
//! # Ok::<(), rust_rummy::game::GameError>(())
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::GameRng;
use crate::game::error::GameError;
use crate::game::player::{Player, PlayerId};
use crate::game::snapshot::{GameSnapshot, PlayerSummary};
use crate::meld::{validate, MeldKind};
use crate::tile::{SortMode, Tile, TilePool, TILE_COUNT};

/// Where the state machine sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No seats yet; waiting for `start_game`.
    AwaitingStart,
    /// A game is under way and the current seat may act.
    TurnActive,
    /// Terminal: a player emptied their hand.
    GameOver { winner: PlayerId },
}

/// One accepted play, kept for the game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub player: PlayerId,
    pub kind: MeldKind,
    /// The played tiles in the order they were selected.
    pub tiles: SmallVec<[Tile; 8]>,
    /// 1-based turn on which the play landed.
    pub turn: u32,
}

#[derive(Clone, Copy, Debug)]
struct EngineOptions {
    initial_hand_size: usize,
    min_players: usize,
    max_players: usize,
}

/// Builder for a [`GameEngine`].
pub struct GameEngineBuilder {
    initial_hand_size: usize,
    min_players: usize,
    max_players: usize,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            initial_hand_size: 14,
            min_players: 2,
            max_players: 4,
        }
    }
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles dealt to each seat at game start.
    pub fn initial_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be at least 1");
        self.initial_hand_size = size;
        self
    }

    /// Accepted range for `start_game`'s player count.
    pub fn player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1 && min <= max, "Player range must be non-empty");
        assert!(max <= 255, "At most 255 players supported");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Build an engine in `AwaitingStart` with a deterministic RNG.
    #[must_use]
    pub fn build(self, seed: u64) -> GameEngine {
        GameEngine::with_options(
            GameRng::new(seed),
            EngineOptions {
                initial_hand_size: self.initial_hand_size,
                min_players: self.min_players,
                max_players: self.max_players,
            },
        )
    }

    /// Build an engine seeded from OS entropy. The drawn seed stays
    /// readable through [`GameEngine::seed`] so a session can be replayed.
    #[must_use]
    pub fn build_from_entropy(self) -> GameEngine {
        let seed = GameRng::from_entropy().seed();
        self.build(seed)
    }
}

/// The game: pool, seats, board, and whose turn it is.
#[derive(Debug)]
pub struct GameEngine {
    phase: GamePhase,
    pool: TilePool,
    players: Vec<Player>,
    current: usize,
    board: Vector<Tile>,
    history: Vector<PlayRecord>,
    sort_mode: SortMode,
    turn_count: u32,
    rng: GameRng,
    options: EngineOptions,
}

impl GameEngine {
    /// An engine with default options, seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        GameEngineBuilder::new().build_from_entropy()
    }

    /// An engine with default options and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        GameEngineBuilder::new().build(seed)
    }

    /// Start configuring an engine.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    fn with_options(rng: GameRng, options: EngineOptions) -> Self {
        GameEngine {
            phase: GamePhase::AwaitingStart,
            pool: TilePool::standard(),
            players: Vec::new(),
            current: 0,
            board: Vector::new(),
            history: Vector::new(),
            sort_mode: SortMode::default(),
            turn_count: 0,
            rng,
            options,
        }
    }

    /// Seat `player_count` players, deal opening hands from a freshly
    /// shuffled pool, and hand the first turn to seat 0.
    pub fn start_game(&mut self, player_count: usize) -> Result<GameSnapshot, GameError> {
        if self.phase != GamePhase::AwaitingStart {
            return Err(GameError::AlreadyStarted);
        }
        if !(self.options.min_players..=self.options.max_players).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount { count: player_count });
        }

        let mut pool = TilePool::standard();
        pool.shuffle(&mut self.rng);
        let mut players = Vec::with_capacity(player_count);
        for id in PlayerId::all(player_count) {
            let hand = pool.deal(self.options.initial_hand_size)?;
            players.push(Player::new(id, hand));
        }

        self.pool = pool;
        self.players = players;
        self.current = 0;
        self.board = Vector::new();
        self.history = Vector::new();
        self.sort_mode = SortMode::default();
        self.turn_count = 1;
        self.phase = GamePhase::TurnActive;
        self.assert_conservation();

        info!(
            player_count,
            hand_size = self.options.initial_hand_size,
            seed = self.rng.seed(),
            "game started"
        );
        Ok(self.snapshot())
    }

    /// Draw one tile from the pool into the current hand.
    ///
    /// Drawing does not end the turn; the player may keep acting. An
    /// empty pool is reported to the caller and changes nothing.
    pub fn draw_tile(&mut self) -> Result<Tile, GameError> {
        self.require_active_turn()?;
        let tile = self.pool.draw()?;
        let player = &mut self.players[self.current];
        player.take_tile(tile);
        debug!(player = %player.id(), tile = %tile, "tile drawn");
        self.assert_conservation();
        Ok(tile)
    }

    /// Try to play the hand tiles at `indices` as one meld.
    ///
    /// On acceptance the tiles move from the hand to the board in
    /// selection order, the seat's first play is marked complete, and
    /// an emptied hand wins the game. On rejection nothing moves.
    pub fn attempt_play(&mut self, indices: &[usize]) -> Result<MeldKind, GameError> {
        self.require_active_turn()?;
        let player = &self.players[self.current];
        let tiles = player.tiles_at(indices).ok_or(GameError::InvalidSelection)?;
        let first_play = !player.has_completed_first_play();
        let kind = match validate(&tiles, first_play) {
            Ok(kind) => kind,
            Err(reason) => {
                debug!(player = %player.id(), %reason, "play rejected");
                return Err(reason.into());
            }
        };

        let player_id = player.id();
        let record = PlayRecord {
            player: player_id,
            kind,
            tiles: SmallVec::from_slice(&tiles),
            turn: self.turn_count,
        };

        let player = &mut self.players[self.current];
        player.remove_tiles(indices);
        player.mark_first_play_complete();
        self.board.extend(tiles);
        self.history.push_back(record);
        self.assert_conservation();

        info!(
            player = %player_id,
            ?kind,
            tiles = indices.len(),
            "play accepted"
        );

        if self.players[self.current].hand().is_empty() {
            self.phase = GamePhase::GameOver { winner: player_id };
            info!(winner = %player_id, turn = self.turn_count, "game over");
        }
        Ok(kind)
    }

    /// Pass the turn to the next seat, wrapping at the table's end.
    ///
    /// The sort mode resets so the next seat starts from the unsorted
    /// view; their hand is left exactly as they last arranged it.
    pub fn end_turn(&mut self) -> Result<GameSnapshot, GameError> {
        self.require_active_turn()?;
        self.current = (self.current + 1) % self.players.len();
        self.sort_mode = SortMode::None;
        self.turn_count += 1;
        debug!(
            player = %self.players[self.current].id(),
            turn = self.turn_count,
            "turn passed"
        );
        Ok(self.snapshot())
    }

    /// Rearrange the current hand and remember the mode for display.
    ///
    /// [`SortMode::None`] shuffles rather than restoring any earlier
    /// order.
    pub fn apply_sort(&mut self, mode: SortMode) -> Result<GameSnapshot, GameError> {
        self.require_active_turn()?;
        self.sort_mode = mode;
        self.players[self.current].arrange(mode, &mut self.rng);
        Ok(self.snapshot())
    }

    /// Return to `AwaitingStart` with a fresh shuffled pool and no
    /// seats. Valid from any phase.
    pub fn reset_game(&mut self) -> GameSnapshot {
        let mut pool = TilePool::standard();
        pool.shuffle(&mut self.rng);
        self.pool = pool;
        self.players.clear();
        self.current = 0;
        self.board = Vector::new();
        self.history = Vector::new();
        self.sort_mode = SortMode::default();
        self.turn_count = 0;
        self.phase = GamePhase::AwaitingStart;
        info!("game reset");
        self.snapshot()
    }

    /// A detached view of the game for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let current_player = match self.phase {
            GamePhase::TurnActive => Some(self.players[self.current].id()),
            _ => None,
        };
        let current_hand = match self.phase {
            GamePhase::TurnActive => self.players[self.current].hand().to_vec(),
            _ => Vec::new(),
        };
        GameSnapshot {
            phase: self.phase,
            current_player,
            players: self.players.iter().map(PlayerSummary::of).collect(),
            current_hand,
            board: self.board.clone(),
            pool_remaining: self.pool.len(),
            sort_mode: self.sort_mode,
            turn_count: self.turn_count,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// All seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player by ID, if seated.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The seat whose turn it is, while a turn is active.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            GamePhase::TurnActive => self.players.get(self.current),
            _ => None,
        }
    }

    /// Every tile played so far, in play order.
    #[must_use]
    pub fn board(&self) -> &Vector<Tile> {
        &self.board
    }

    /// Accepted plays, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    /// The active sort mode.
    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// 1-based ordinal of the current turn; 0 before the game starts.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The undealt pool. Exposed for audits and tests.
    #[must_use]
    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// Seed this engine was built with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Tiles across pool, hands, and board. Always [`TILE_COUNT`].
    #[must_use]
    pub fn tiles_in_circulation(&self) -> usize {
        self.pool.len()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
            + self.board.len()
    }

    fn require_active_turn(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::TurnActive => Ok(()),
            _ => Err(GameError::NoActiveTurn),
        }
    }

    fn assert_conservation(&self) {
        debug_assert_eq!(self.tiles_in_circulation(), TILE_COUNT);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GameEngine {
    /// Swap the current hand for `wanted`, routing the difference
    /// through the pool so every tile stays in circulation.
    pub(crate) fn rig_current_hand(&mut self, wanted: &[Tile]) {
        let old: Vec<Tile> = self.players[self.current].hand().to_vec();
        let positions: Vec<usize> = (0..old.len()).collect();
        self.players[self.current].remove_tiles(&positions);
        for tile in old {
            self.pool.put_back(tile);
        }
        for &tile in wanted {
            let pulled = match self.pool.pull_matching(tile) {
                Some(found) => found,
                // Both copies may have been dealt to another seat.
                None => self.pull_from_other_hand(tile),
            };
            self.players[self.current].take_tile(pulled);
        }
        self.assert_conservation();
    }

    fn pull_from_other_hand(&mut self, tile: Tile) -> Tile {
        let current = self.current;
        for (index, player) in self.players.iter_mut().enumerate() {
            if index == current {
                continue;
            }
            if let Some(position) = player.hand().iter().position(|&held| held == tile) {
                player.remove_tiles(&[position]);
                return tile;
            }
        }
        panic!("no copy of {tile} left to rig with");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meld::InvalidMeldReason;
    use crate::tile::{Color, PoolError};

    fn tile(value: u8, color: Color) -> Tile {
        Tile::Number { value, color }
    }

    fn started(seed: u64, players: usize) -> GameEngine {
        let mut engine = GameEngine::builder().build(seed);
        engine.start_game(players).unwrap();
        engine
    }

    #[test]
    fn test_operations_require_a_started_game() {
        let mut engine = GameEngine::builder().build(1);
        assert_eq!(engine.draw_tile().unwrap_err(), GameError::NoActiveTurn);
        assert_eq!(engine.attempt_play(&[0, 1, 2]).unwrap_err(), GameError::NoActiveTurn);
        assert_eq!(engine.end_turn().unwrap_err(), GameError::NoActiveTurn);
        assert_eq!(
            engine.apply_sort(SortMode::ByNumber).unwrap_err(),
            GameError::NoActiveTurn
        );
    }

    #[test]
    fn test_start_deals_hands_and_conserves_tiles() {
        let engine = started(7, 3);
        assert_eq!(engine.phase(), GamePhase::TurnActive);
        assert_eq!(engine.players().len(), 3);
        for player in engine.players() {
            assert_eq!(player.hand_size(), 14);
            assert!(!player.has_completed_first_play());
        }
        assert_eq!(engine.pool().len(), TILE_COUNT - 3 * 14);
        assert_eq!(engine.tiles_in_circulation(), TILE_COUNT);
        assert_eq!(engine.turn_count(), 1);
    }

    #[test]
    fn test_start_rejects_unsupported_player_counts() {
        let mut engine = GameEngine::builder().build(7);
        assert_eq!(
            engine.start_game(1).unwrap_err(),
            GameError::InvalidPlayerCount { count: 1 }
        );
        assert_eq!(
            engine.start_game(5).unwrap_err(),
            GameError::InvalidPlayerCount { count: 5 }
        );
        assert_eq!(engine.phase(), GamePhase::AwaitingStart);
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut engine = started(7, 2);
        assert_eq!(engine.start_game(2).unwrap_err(), GameError::AlreadyStarted);
    }

    #[test]
    #[should_panic(expected = "At most 255 players")]
    fn test_player_range_beyond_id_capacity_panics() {
        let _ = GameEngine::builder().player_range(2, 300);
    }

    #[test]
    fn test_oversized_seat_counts_cannot_wrap_player_ids() {
        let mut engine = GameEngine::builder()
            .initial_hand_size(1)
            .player_range(2, 255)
            .build(7);

        // 256 would truncate to zero seats and 258 to two if the count
        // ever reached the id cast; both stop at the range check.
        assert_eq!(
            engine.start_game(256).unwrap_err(),
            GameError::InvalidPlayerCount { count: 256 }
        );
        assert_eq!(
            engine.start_game(258).unwrap_err(),
            GameError::InvalidPlayerCount { count: 258 }
        );
        assert_eq!(engine.phase(), GamePhase::AwaitingStart);

        // A count inside the range seats every id exactly once.
        engine.start_game(106).unwrap();
        assert_eq!(engine.players().len(), 106);
        assert_eq!(engine.players().last().unwrap().id(), PlayerId::new(105));
        assert!(engine.pool().is_empty());
    }

    #[test]
    fn test_start_fails_cleanly_when_pool_cannot_cover_hands() {
        let mut engine = GameEngine::builder()
            .initial_hand_size(40)
            .player_range(2, 4)
            .build(7);
        let err = engine.start_game(3).unwrap_err();
        assert!(matches!(err, GameError::Pool(PoolError::Insufficient { .. })));
        assert_eq!(engine.phase(), GamePhase::AwaitingStart);
        assert!(engine.players().is_empty());
    }

    #[test]
    fn test_draw_appends_to_current_hand() {
        let mut engine = started(7, 2);
        let pool_before = engine.pool().len();
        let drawn = engine.draw_tile().unwrap();
        let current = engine.current_player().unwrap();
        assert_eq!(current.hand_size(), 15);
        assert_eq!(*current.hand().last().unwrap(), drawn);
        assert_eq!(engine.pool().len(), pool_before - 1);
        assert_eq!(engine.tiles_in_circulation(), TILE_COUNT);
    }

    #[test]
    fn test_draw_from_exhausted_pool_changes_nothing() {
        let mut engine = GameEngine::builder()
            .initial_hand_size(53)
            .build(7);
        engine.start_game(2).unwrap();
        assert!(engine.pool().is_empty());
        let err = engine.draw_tile().unwrap_err();
        assert_eq!(err, GameError::Pool(PoolError::Empty));
        assert_eq!(engine.current_player().unwrap().hand_size(), 53);
    }

    #[test]
    fn test_end_turn_rotates_and_wraps() {
        let mut engine = started(7, 3);
        assert_eq!(engine.current_player().unwrap().id(), PlayerId::new(0));
        engine.end_turn().unwrap();
        assert_eq!(engine.current_player().unwrap().id(), PlayerId::new(1));
        engine.end_turn().unwrap();
        assert_eq!(engine.current_player().unwrap().id(), PlayerId::new(2));
        let snapshot = engine.end_turn().unwrap();
        assert_eq!(snapshot.current_player, Some(PlayerId::new(0)));
        assert_eq!(snapshot.turn_count, 4);
    }

    #[test]
    fn test_end_turn_resets_sort_mode() {
        let mut engine = started(7, 2);
        engine.apply_sort(SortMode::ByColor).unwrap();
        assert_eq!(engine.sort_mode(), SortMode::ByColor);
        let snapshot = engine.end_turn().unwrap();
        assert_eq!(snapshot.sort_mode, SortMode::None);
    }

    #[test]
    fn test_apply_sort_orders_current_hand() {
        let mut engine = started(7, 2);
        engine.apply_sort(SortMode::ByNumber).unwrap();
        let hand = engine.current_player().unwrap().hand();
        let numbered: Vec<u8> = hand.iter().filter_map(Tile::value).collect();
        assert!(numbered.windows(2).all(|pair| pair[0] <= pair[1]));
        // Wildcards, if dealt, sit at the end.
        let first_wild = hand.iter().position(Tile::is_wildcard);
        if let Some(pos) = first_wild {
            assert!(hand[pos..].iter().all(Tile::is_wildcard));
        }
    }

    #[test]
    fn test_rejected_play_leaves_state_untouched() {
        let mut engine = started(7, 2);
        engine.rig_current_hand(&[
            tile(1, Color::Red),
            tile(2, Color::Red),
            tile(9, Color::Blue),
        ]);
        let before = engine.snapshot();
        let err = engine.attempt_play(&[0, 1, 2]).unwrap_err();
        assert_eq!(
            err,
            GameError::Meld(InvalidMeldReason::FirstPlayBelowMinimum { score: 12 })
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_invalid_selection_is_rejected_before_validation() {
        let mut engine = started(7, 2);
        assert_eq!(
            engine.attempt_play(&[0, 0, 1]).unwrap_err(),
            GameError::InvalidSelection
        );
        assert_eq!(
            engine.attempt_play(&[0, 1, 99]).unwrap_err(),
            GameError::InvalidSelection
        );
    }

    #[test]
    fn test_accepted_play_moves_tiles_to_board() {
        let mut engine = started(7, 2);
        engine.rig_current_hand(&[
            tile(10, Color::Red),
            tile(11, Color::Red),
            tile(12, Color::Red),
            tile(4, Color::Blue),
        ]);
        let kind = engine.attempt_play(&[2, 0, 1]).unwrap();
        assert_eq!(kind, MeldKind::Run);

        // Board keeps selection order.
        let board: Vec<Tile> = engine.board().iter().copied().collect();
        assert_eq!(
            board,
            vec![tile(12, Color::Red), tile(10, Color::Red), tile(11, Color::Red)]
        );
        let current = engine.current_player().unwrap();
        assert_eq!(current.hand(), &[tile(4, Color::Blue)]);
        assert!(current.has_completed_first_play());
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history()[0].kind, MeldKind::Run);
        assert_eq!(engine.tiles_in_circulation(), TILE_COUNT);
    }

    #[test]
    fn test_first_play_minimum_applies_only_once() {
        let mut engine = started(7, 2);
        engine.rig_current_hand(&[
            tile(10, Color::Red),
            tile(11, Color::Red),
            tile(12, Color::Red),
            tile(2, Color::Blue),
            tile(2, Color::Yellow),
            tile(2, Color::Black),
        ]);
        // Opening run clears the 30-point bar; the cheap group after it
        // only has to be a legal shape.
        assert_eq!(engine.attempt_play(&[0, 1, 2]).unwrap(), MeldKind::Run);
        assert_eq!(engine.attempt_play(&[0, 1, 2]).unwrap(), MeldKind::Group);
        assert_eq!(
            engine.phase(),
            GamePhase::GameOver { winner: PlayerId::new(0) }
        );
    }

    #[test]
    fn test_winning_play_locks_the_engine() {
        let mut engine = started(7, 2);
        engine.rig_current_hand(&[
            tile(10, Color::Red),
            tile(11, Color::Red),
            tile(12, Color::Red),
        ]);
        engine.attempt_play(&[0, 1, 2]).unwrap();

        let winner = PlayerId::new(0);
        assert_eq!(engine.phase(), GamePhase::GameOver { winner });
        assert_eq!(engine.snapshot().winner(), Some(winner));
        assert_eq!(engine.draw_tile().unwrap_err(), GameError::NoActiveTurn);
        assert_eq!(engine.attempt_play(&[0]).unwrap_err(), GameError::NoActiveTurn);
        assert_eq!(engine.end_turn().unwrap_err(), GameError::NoActiveTurn);
        assert_eq!(
            engine.apply_sort(SortMode::ByColor).unwrap_err(),
            GameError::NoActiveTurn
        );
    }

    #[test]
    fn test_reset_returns_to_awaiting_start_from_any_phase() {
        let mut engine = started(7, 2);
        engine.draw_tile().unwrap();
        let snapshot = engine.reset_game();
        assert_eq!(snapshot.phase, GamePhase::AwaitingStart);
        assert!(snapshot.players.is_empty());
        assert_eq!(snapshot.pool_remaining, TILE_COUNT);
        assert_eq!(snapshot.turn_count, 0);

        // A finished game resets the same way.
        engine.start_game(2).unwrap();
        engine.rig_current_hand(&[
            tile(10, Color::Red),
            tile(11, Color::Red),
            tile(12, Color::Red),
        ]);
        engine.attempt_play(&[0, 1, 2]).unwrap();
        let snapshot = engine.reset_game();
        assert_eq!(snapshot.phase, GamePhase::AwaitingStart);
        assert!(engine.start_game(2).is_ok());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = started(123, 4);
        let b = started(123, 4);
        for (pa, pb) in a.players().iter().zip(b.players()) {
            assert_eq!(pa.hand(), pb.hand());
        }
        assert_eq!(a.pool().tiles(), b.pool().tiles());
    }

    #[test]
    fn test_snapshot_hides_opponent_hands() {
        let engine = started(7, 2);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.current_hand.len(), 14);
        for summary in &snapshot.players {
            assert_eq!(summary.tiles_held, 14);
        }
        assert_eq!(snapshot.pool_remaining, TILE_COUNT - 28);
    }
}
