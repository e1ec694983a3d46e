//! The compact board representation for the checkers engine.
//!
//! Only the 32 playable dark squares are stored: 4 logical columns per
//! row. The visual column of square (row, col) is `2*col + row % 2`.

use crate::constants::Piece;
use std::fmt;

pub const ROWS: usize = 8;
pub const COLS: usize = 4;
pub const SQUARES: usize = ROWS * COLS;

pub const fn rc_to_sq(row: usize, col: usize) -> usize {
    row * COLS + col
}

pub const fn sq_to_rc(sq: usize) -> (usize, usize) {
    (sq / COLS, sq % COLS)
}

/// Visual column of a square on the rendered 8×8 board.
pub const fn visual_col(row: usize, col: usize) -> usize {
    2 * col + row % 2
}

/// Logical column for a visual (row, column) pair, or `None` when the
/// coordinate names a light square.
pub fn logical_col(row: usize, vis: usize) -> Option<usize> {
    if (row + vis) % 2 != 0 {
        return None;
    }
    Some((vis - row % 2) / 2)
}

/// Represents the state of the checkers board at any point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; SQUARES],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Piece::Empty; SQUARES],
        }
    }

    /// The standard starting position: rows 0-2 Black men, rows 5-7
    /// White men.
    pub fn initial() -> Self {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..3 {
                board.set(rc_to_sq(row, col), Piece::BlackMan);
            }
            for row in 5..8 {
                board.set(rc_to_sq(row, col), Piece::WhiteMan);
            }
        }
        board
    }

    pub fn get(&self, sq: usize) -> Piece {
        assert!(sq < SQUARES, "square {} out of range", sq);
        self.cells[sq]
    }

    pub fn set(&mut self, sq: usize, piece: Piece) {
        assert!(sq < SQUARES, "square {} out of range", sq);
        self.cells[sq] = piece;
    }

    pub fn is_empty(&self, sq: usize) -> bool {
        self.get(sq) == Piece::Empty
    }

    /// Parses the board part of setup notation: 8 rows top to bottom
    /// separated by '/', each row 4 logical columns with piece chars
    /// and digits for runs of empty squares.
    pub fn from_setup(layout: &str) -> Option<Self> {
        let mut board = Board::new();
        let rows: Vec<&str> = layout.split('/').collect();
        if rows.len() != ROWS {
            return None;
        }
        for (row, chunk) in rows.iter().enumerate() {
            let mut col = 0;
            for ch in chunk.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    col += digit as usize;
                } else {
                    if col >= COLS {
                        return None;
                    }
                    board.set(rc_to_sq(row, col), Piece::from_char(ch)?);
                    col += 1;
                }
            }
            if col != COLS {
                return None;
            }
        }
        Some(board)
    }

    pub fn to_setup(&self) -> String {
        let mut setup = String::with_capacity(48);
        for row in 0..ROWS {
            let mut empty_count = 0;
            for col in 0..COLS {
                let piece = self.get(rc_to_sq(row, col));
                if piece == Piece::Empty {
                    empty_count += 1;
                } else {
                    if empty_count > 0 {
                        setup.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    setup.push(piece.to_char());
                }
            }
            if empty_count > 0 {
                setup.push_str(&empty_count.to_string());
            }
            if row < ROWS - 1 {
                setup.push('/');
            }
        }
        setup
    }

    /// Count of pieces belonging to one side.
    pub fn count_side(&self, side: crate::constants::Side) -> usize {
        self.cells.iter().filter(|p| p.side() == Some(side)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..ROWS {
            write!(f, "{} | ", 8 - row)?;
            for vis in 0..8 {
                match logical_col(row, vis) {
                    Some(col) => write!(f, "{} ", self.get(rc_to_sq(row, col)).to_char())?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{Piece, Side};

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        for col in 0..COLS {
            for row in 0..3 {
                assert_eq!(board.get(rc_to_sq(row, col)), Piece::BlackMan);
            }
            for row in 3..5 {
                assert_eq!(board.get(rc_to_sq(row, col)), Piece::Empty);
            }
            for row in 5..8 {
                assert_eq!(board.get(rc_to_sq(row, col)), Piece::WhiteMan);
            }
        }
        assert_eq!(board.count_side(Side::Black), 12);
        assert_eq!(board.count_side(Side::White), 12);
    }

    #[test]
    fn test_setup_round_trip() {
        let board = Board::initial();
        assert_eq!(board.to_setup(), "bbbb/bbbb/bbbb/4/4/wwww/wwww/wwww");
        assert_eq!(Board::from_setup(&board.to_setup()), Some(board));

        let sparse = Board::from_setup("4/1B2/4/2w1/4/4/W3/3b").unwrap();
        assert_eq!(sparse.get(rc_to_sq(1, 1)), Piece::BlackKing);
        assert_eq!(sparse.get(rc_to_sq(3, 2)), Piece::WhiteMan);
        assert_eq!(sparse.get(rc_to_sq(6, 0)), Piece::WhiteKing);
        assert_eq!(sparse.get(rc_to_sq(7, 3)), Piece::BlackMan);
        assert_eq!(sparse.to_setup(), "4/1B2/4/2w1/4/4/W3/3b");
    }

    #[test]
    fn test_setup_rejects_malformed() {
        assert_eq!(Board::from_setup("bbbb/bbbb"), None);
        assert_eq!(Board::from_setup("bbbbb/bbbb/bbbb/4/4/wwww/wwww/wwww"), None);
        assert_eq!(Board::from_setup("xbbb/bbbb/bbbb/4/4/wwww/wwww/wwww"), None);
        assert_eq!(Board::from_setup("3/bbbb/bbbb/4/4/wwww/wwww/wwww"), None);
    }

    #[test]
    fn test_stagger_round_trip() {
        for row in 0..ROWS {
            for col in 0..COLS {
                let vis = visual_col(row, col);
                assert!(vis < 8);
                assert_eq!((row + vis) % 2, 0);
                assert_eq!(logical_col(row, vis), Some(col));
            }
        }
        // Light squares map to no logical column.
        assert_eq!(logical_col(0, 1), None);
        assert_eq!(logical_col(1, 0), None);
    }
}
