use crate::board::{Board, bitmask_to_indices};
use crate::types::{GameResult, GameState, MoveError, Player, Position};

/// One interactive session: the current board, whose turn it is, and the
/// pass/termination flags. All mutation goes through [`submit_move`] and
/// [`reset`]; each session owns its state, so several can run side by side.
///
/// [`submit_move`]: Game::submit_move
/// [`reset`]: Game::reset
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    pub current_player: Player,
    pub is_game_over: bool,
    pub is_pass: bool,
    pub flipped: Vec<u8>,
}

impl Game {
    /// Starts a session on the standard position, Black to move.
    ///
    /// The turn check runs once up front. The standard start always gives
    /// Black a move, but the check is kept unconditional so a hypothetical
    /// dead start would terminate instead of hanging on an unplayable turn.
    pub fn new() -> Self {
        let mut game = Self {
            board: Board::new(),
            current_player: Player::Black,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
        };
        game.step_turn();
        game
    }

    /// Reinitializes the session unconditionally.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Plays `current_player` at `(row, col)`.
    ///
    /// On success the move is applied, the turn goes to the opponent, and the
    /// pass/termination check runs. On rejection the session is untouched;
    /// the error only describes why, so discarding it yields a silent no-op.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let (next, flips) = self.board.apply_move(row, col, player);
        if flips == 0 {
            return Err(MoveError::IllegalMove { row, col, player });
        }

        self.board = next;
        self.flipped = bitmask_to_indices(flips);
        self.current_player = player.opponent();
        self.step_turn();
        Ok(())
    }

    /// Pass/termination check over the player about to move:
    /// - opponent only has moves: pass, turn goes back to the opponent;
    /// - neither side has moves: the game is over;
    /// - otherwise play continues and any pass notice is cleared.
    fn step_turn(&mut self) {
        let has_current = self.board.legal_moves(self.current_player) != 0;
        let has_opponent = self.board.legal_moves(self.current_player.opponent()) != 0;

        if !has_current && has_opponent {
            self.current_player = self.current_player.opponent();
            self.is_pass = true;
        } else if !has_current && !has_opponent {
            self.is_game_over = true;
            self.is_pass = false;
        } else {
            self.is_pass = false;
        }
    }

    /// Current board snapshot.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Legal moves for the side to move, for highlighting playable cells.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.list_legal_moves(self.current_player)
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                Some(Player::Black)
            } else if white_count > black_count {
                Some(Player::White)
            } else {
                None
            },
            black_count,
            white_count,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
