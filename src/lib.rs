//! Tic-tac-toe game server library.
//!
//! # Architecture
//!
//! - **Game**: pure move-application engine over immutable state values
//! - **Store**: per-game append-only history, keyed by minted identifiers
//! - **Server**: REST API mapping endpoints onto engine and store calls
//!
//! # Example
//!
//! ```
//! use tictactoe_server::{GameStore, Player};
//!
//! let store = GameStore::new();
//! let (id, _initial) = store.create(Player::X);
//!
//! let state = store.make_move(&id, 4).expect("legal move");
//! assert_eq!(state.status_string(), "O's turn");
//! assert_eq!(store.get_history(&id).expect("known id").len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod server;
mod store;

// Crate-level exports - Game engine
pub use game::{Board, GameState, GameStatus, MoveError, Player, Square, check_winner, is_full};

// Crate-level exports - History store
pub use store::{GameError, GameId, GameStore, StoreError};

// Crate-level exports - REST API
pub use server::{CreateGameRequest, DeleteResponse, ErrorDetail, GameDto, MoveRequest, router};
