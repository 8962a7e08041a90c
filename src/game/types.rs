//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (default starting player).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order: index 0 is top-left,
/// index 8 is bottom-right. Occupied squares never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places a square at the given index. Crate-private: all placement
    /// goes through the engine's move validation.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }

    /// Checks if the square at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                f.write_str(if col > 0 { "|" } else { "" })?;
                write!(f, "{}", symbol)?;
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game, computed from state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state: one immutable snapshot per accepted move.
///
/// States are value types. A move never mutates its input; it allocates
/// a successor, so the store can retain every snapshot for replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    is_draw: bool,
}

impl GameState {
    /// Creates a new game with an empty board and the given starting player.
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            winner: None,
            is_draw: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Unchanged once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Returns true if no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Returns the game status. Winner takes priority over draw.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner {
            GameStatus::Won(winner)
        } else if self.is_draw {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns a status string for display: `"X wins"`, `"draw"`,
    /// or `"X's turn"`.
    pub fn status_string(&self) -> String {
        match self.status() {
            GameStatus::Won(winner) => format!("{} wins", winner),
            GameStatus::Draw => "draw".to_string(),
            GameStatus::InProgress => format!("{}'s turn", self.current_player),
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn set_winner(&mut self, winner: Player) {
        self.winner = Some(winner);
    }

    pub(crate) fn set_draw(&mut self) {
        self.is_draw = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
