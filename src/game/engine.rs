//! Move application for tic-tac-toe.
//!
//! Transitions are pure: applying a move never mutates the input state,
//! it allocates and returns the successor. The store keeps every
//! snapshot, so a game can be replayed by indexing into its history.

use super::rules;
use super::types::{GameState, Square};
use tracing::{debug, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside the board.
    #[display("Index must be in range [0, 8], got {}.", _0)]
    OutOfRange(usize),

    /// The cell at the index is already occupied.
    #[display("Cell already occupied at index {}.", _0)]
    CellOccupied(usize),

    /// The game is already over: no terminal state accepts moves.
    #[display("Game is already over.")]
    GameOver,
}

impl std::error::Error for MoveError {}

impl GameState {
    /// Applies a move at the given index (0-8) for the current player.
    ///
    /// On success returns the successor state: the target cell holds the
    /// current player's mark, and win, draw, and turn are re-evaluated in
    /// that order. A full board with a completed line is a win, never a
    /// draw. When the move wins, `current_player` is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if this state is terminal.
    /// - [`MoveError::OutOfRange`] if `index` is not in [0, 8].
    /// - [`MoveError::CellOccupied`] if the target cell is occupied.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn make_move(&self, index: usize) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= 9 {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board().is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let player = self.current_player();
        let mut next = self.clone();
        next.board_mut().set(index, Square::Occupied(player));

        if let Some(winner) = rules::check_winner(next.board()) {
            next.set_winner(winner);
        } else if rules::is_full(next.board()) {
            next.set_draw();
        } else {
            next.set_current_player(player.opponent());
        }

        debug!(index, status = %next.status_string(), "Move applied");
        Ok(next)
    }

    /// Returns the indices of empty cells, ascending.
    ///
    /// This is a query over board occupancy only: a just-won game with
    /// empty cells still reports them, even though moves are rejected.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..9).filter(|&index| self.board().is_empty(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{GameStatus, Player};
    use super::*;

    #[test]
    fn test_move_does_not_mutate_input() {
        let start = GameState::new(Player::X);
        let next = start.make_move(0).expect("valid move");

        assert!(start.board().is_empty(0));
        assert!(!next.board().is_empty(0));
        assert_eq!(start.current_player(), Player::X);
    }

    #[test]
    fn test_win_leaves_current_player_unchanged() {
        let mut state = GameState::new(Player::X);
        for index in [0, 3, 1, 4, 2] {
            state = state.make_move(index).expect("valid move");
        }

        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_out_of_range_regardless_of_board() {
        let state = GameState::new(Player::X);
        assert_eq!(state.make_move(9), Err(MoveError::OutOfRange(9)));

        let state = state.make_move(4).expect("valid move");
        assert_eq!(state.make_move(42), Err(MoveError::OutOfRange(42)));
    }
}
