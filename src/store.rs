//! Per-game history store.
//!
//! Maps a game identifier to the ordered history of states produced for
//! that game. Histories are append-only: index 0 is the initial empty
//! board and each accepted move adds one snapshot, which is what makes
//! replay and audit possible. The store is an injectable component with
//! process-wide lifetime; swapping in a persistent backend is a
//! substitution, not a rewrite.

use crate::game::{GameState, MoveError, Player};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = String;

/// Error from store lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StoreError {
    /// No game exists under the requested identifier.
    #[display("Game not found.")]
    NotFound,
}

impl std::error::Error for StoreError {}

/// Error from the combined read-apply-append move path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The move was rejected by the engine.
    #[display("{}", _0)]
    Move(MoveError),
    /// The game identifier is unknown.
    #[display("{}", _0)]
    Store(StoreError),
}

impl std::error::Error for GameError {}

/// In-memory store of game histories, shared across request handlers.
#[derive(Debug, Clone)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Vec<GameState>>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game, minting a fresh identifier.
    ///
    /// The history starts as a single-element sequence holding the
    /// initial state for the given starting player.
    #[instrument(skip(self))]
    pub fn create(&self, starting_player: Player) -> (GameId, GameState) {
        let id = Uuid::new_v4().to_string();
        let state = GameState::new(starting_player);

        let mut games = self.games.lock().unwrap();
        games.insert(id.clone(), vec![state.clone()]);

        info!(game_id = %id, %starting_player, "Created new game");
        (id, state)
    }

    /// Returns the latest state for the given game.
    #[instrument(skip(self))]
    pub fn get_latest(&self, id: &str) -> Result<GameState, StoreError> {
        let games = self.games.lock().unwrap();
        let history = games.get(id).ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            StoreError::NotFound
        })?;

        // Histories are seeded with the initial state on creation and
        // only ever appended to, so the last element always exists.
        Ok(history.last().expect("history is never empty").clone())
    }

    /// Returns the full ordered history for the given game.
    #[instrument(skip(self))]
    pub fn get_history(&self, id: &str) -> Result<Vec<GameState>, StoreError> {
        let games = self.games.lock().unwrap();
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            StoreError::NotFound
        })
    }

    /// Appends a state to the given game's history.
    #[instrument(skip(self, state))]
    pub fn append(&self, id: &str, state: GameState) -> Result<(), StoreError> {
        let mut games = self.games.lock().unwrap();
        let history = games.get_mut(id).ok_or_else(|| {
            warn!(game_id = id, "Append to unknown game");
            StoreError::NotFound
        })?;

        history.push(state);
        debug!(game_id = id, length = history.len(), "State appended");
        Ok(())
    }

    /// Removes the game and its history. Returns whether it existed.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> bool {
        let mut games = self.games.lock().unwrap();
        let existed = games.remove(id).is_some();
        info!(game_id = id, existed, "Deleted game");
        existed
    }

    /// Applies a move to the latest state of the given game and appends
    /// the successor, atomically.
    ///
    /// The map lock is held across the whole read-apply-append sequence,
    /// so concurrent moves on one identifier cannot lose or duplicate a
    /// move. A rejected move leaves the history unchanged.
    #[instrument(skip(self))]
    pub fn make_move(&self, id: &str, index: usize) -> Result<GameState, GameError> {
        let mut games = self.games.lock().unwrap();
        let history = games.get_mut(id).ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            StoreError::NotFound
        })?;

        let latest = history.last().expect("history is never empty");
        let next = latest.make_move(index).map_err(|e| {
            warn!(game_id = id, index, error = %e, "Move rejected");
            e
        })?;

        history.push(next.clone());
        info!(
            game_id = id,
            index,
            length = history.len(),
            status = %next.status_string(),
            "Move accepted"
        );
        Ok(next)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
