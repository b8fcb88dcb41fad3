use crate::types::{Cell, Player, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board state represented by two bitboards.
///
/// `Copy` value semantics: every move produces a new `Board`, so earlier
/// positions stay comparable without aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds an arbitrary position. The bitboards must be disjoint.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "bitboards must not overlap");
        Self { black, white }
    }

    /// Returns whether placing at `(row, col)` is legal for `player`.
    /// Out-of-range coordinates and occupied cells are never legal.
    pub fn is_legal(&self, row: usize, col: usize, player: Player) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        let (me, opp) = self.sides(player);
        Self::collect_flips(row * BOARD_SIZE + col, me, opp) != 0
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, player: Player) -> u64 {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Enumerates legal moves in row-major scan order.
    pub fn list_legal_moves(&self, player: Player) -> Vec<Position> {
        bitmask_to_indices(self.legal_moves(player))
            .into_iter()
            .map(|idx| Position {
                row: idx / BOARD_SIZE as u8,
                col: idx % BOARD_SIZE as u8,
            })
            .collect()
    }

    /// Places a disc for `player` at `(row, col)` and flips every sandwiched
    /// run, returning the resulting board and the flipped bit mask.
    ///
    /// Legality is not enforced here: when nothing flips (occupied target,
    /// out-of-range coordinate, or no sandwich) the board comes back
    /// unchanged with a zero mask. Callers check `is_legal` first or test
    /// the mask.
    pub fn apply_move(&self, row: usize, col: usize, player: Player) -> (Board, u64) {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return (*self, 0);
        }

        let (me, opp) = self.sides(player);
        let pos = row * BOARD_SIZE + col;
        let flips = Self::collect_flips(pos, me, opp);
        if flips == 0 {
            return (*self, 0);
        }

        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;
        let next = match player {
            Player::Black => Board {
                black: next_me,
                white: next_opp,
            },
            Player::White => Board {
                black: next_opp,
                white: next_me,
            },
        };

        (next, flips)
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Returns the occupant of `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        let square = bit(row * BOARD_SIZE + col);
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.get(pos / BOARD_SIZE, pos % BOARD_SIZE).as_u8();
        }
        board
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;
            let mut has_opponent = false;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    has_opponent = true;
                    line |= square;
                } else if (me & square) != 0 {
                    if has_opponent {
                        flips |= line;
                    }
                    break;
                } else {
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Expands a bit mask into ascending (row-major) square indices.
pub(crate) fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as u8;
        out.push(idx);
        bits &= bits - 1;
    }

    out
}
