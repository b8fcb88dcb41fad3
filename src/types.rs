use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Snapshot encoding: 0=empty, 1=black, 2=white.
    pub fn as_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Session snapshot the presentation layer redraws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Cells in row-major order, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: Player,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last accepted move forced the opponent to pass.
    /// - `false` after a normal move, at game start, and after reset.
    pub is_pass: bool,
    /// Positions (0..=63) flipped by the last accepted move.
    pub flipped: Vec<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` means a draw.
    pub winner: Option<Player>,
    pub black_count: u8,
    pub white_count: u8,
}

/// Why a submitted move was rejected. A rejected move leaves the session
/// untouched, so callers may discard the error to get silent no-op behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("illegal move at ({row}, {col}) for {player}")]
    IllegalMove {
        row: usize,
        col: usize,
        player: Player,
    },
}
