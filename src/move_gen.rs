//! Move generation logic, including pre-computed neighbor tables.

use crate::board::{rc_to_sq, sq_to_rc, Board, COLS, ROWS, SQUARES};
use crate::constants::{Rank, Side};
use crate::movelist::MoveList;
use crate::r#move::Move;
use once_cell::sync::Lazy;

/// A diagonal step on the staggered board. North is toward row 0,
/// the direction White men advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

impl Direction {
    fn index(self) -> usize {
        match self {
            Direction::NorthWest => 0,
            Direction::NorthEast => 1,
            Direction::SouthWest => 2,
            Direction::SouthEast => 3,
        }
    }

    /// The two forward diagonals for a man of `side`.
    pub fn forward(side: Side) -> [Direction; 2] {
        match side {
            Side::White => [Direction::NorthWest, Direction::NorthEast],
            Side::Black => [Direction::SouthWest, Direction::SouthEast],
        }
    }
}

/// Pre-computed diagonal neighbors for every square and direction.
/// The tables are initialized once and then accessed globally.
pub static NEIGHBORS: Lazy<[[Option<u8>; 4]; SQUARES]> = Lazy::new(|| {
    let mut tables = [[None; 4]; SQUARES];
    for sq in 0..SQUARES {
        for dir in DIRECTIONS {
            tables[sq][dir.index()] = compute_neighbor(sq, dir);
        }
    }
    tables
});

/// The adjacent diagonal square in `dir`, or `None` at the board edge.
pub fn diagonal_neighbor(sq: usize, dir: Direction) -> Option<usize> {
    NEIGHBORS[sq][dir.index()].map(|n| n as usize)
}

// The stagger lives here and nowhere else. On even rows the logical
// column of the western neighbor is col - 1 and the eastern neighbor
// keeps col; odd rows are the reverse (col and col + 1).
fn compute_neighbor(sq: usize, dir: Direction) -> Option<u8> {
    let (row, col) = sq_to_rc(sq);
    let (row, col) = (row as isize, col as isize);

    let nr = match dir {
        Direction::NorthWest | Direction::NorthEast => row - 1,
        Direction::SouthWest | Direction::SouthEast => row + 1,
    };
    let west = matches!(dir, Direction::NorthWest | Direction::SouthWest);
    let nc = match (row % 2 == 0, west) {
        (true, true) => col - 1,
        (true, false) => col,
        (false, true) => col,
        (false, false) => col + 1,
    };

    if nr < 0 || nr >= ROWS as isize || nc < 0 || nc >= COLS as isize {
        return None;
    }
    Some(rc_to_sq(nr as usize, nc as usize) as u8)
}

/// Generates the legal moves for the piece on `sq`.
///
/// For each diagonal available to the piece: an empty adjacent square
/// is a simple move; an adjacent opposing piece with an empty square
/// beyond it in the same direction is a capture. Captures are one jump
/// deep; a capture chain does not continue within the same move.
pub fn moves_for(board: &Board, sq: usize) -> MoveList {
    let mut moves = MoveList::new();
    let piece = board.get(sq);
    let (side, rank) = match (piece.side(), piece.rank()) {
        (Some(side), Some(rank)) => (side, rank),
        _ => return moves,
    };

    let forward = Direction::forward(side);
    let dirs: &[Direction] = match rank {
        Rank::Man => &forward,
        Rank::King => &DIRECTIONS,
    };

    for &dir in dirs {
        let near = match diagonal_neighbor(sq, dir) {
            Some(near) => near,
            None => continue,
        };
        if board.is_empty(near) {
            moves.add(Move::new(sq, near, None));
        } else if board.get(near).side() == Some(side.opponent()) {
            if let Some(far) = diagonal_neighbor(near, dir) {
                if board.is_empty(far) {
                    moves.add(Move::new(sq, far, Some(near)));
                }
            }
        }
    }
    moves
}

/// Generates all legal moves for `side`. Used by the front ends to
/// detect that the side to move is stuck.
pub fn side_moves(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for sq in 0..SQUARES {
        if board.get(sq).side() == Some(side) {
            for &mv in moves_for(board, sq).as_slice() {
                moves.add(mv);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::visual_col;
    use crate::constants::Piece;

    #[test]
    fn test_neighbor_tables_stay_on_board() {
        for sq in 0..SQUARES {
            for dir in DIRECTIONS {
                if let Some(n) = diagonal_neighbor(sq, dir) {
                    assert!(n < SQUARES);
                    let (r, c) = sq_to_rc(sq);
                    let (nr, nc) = sq_to_rc(n);
                    // A diagonal step moves one row and one visual column.
                    assert_eq!(nr.abs_diff(r), 1);
                    assert_eq!(visual_col(nr, nc).abs_diff(visual_col(r, c)), 1);
                }
            }
        }
    }

    #[test]
    fn test_neighbor_edges() {
        // Row 0 has no northern neighbors, row 7 no southern ones.
        for col in 0..COLS {
            assert_eq!(diagonal_neighbor(rc_to_sq(0, col), Direction::NorthWest), None);
            assert_eq!(diagonal_neighbor(rc_to_sq(0, col), Direction::NorthEast), None);
            assert_eq!(diagonal_neighbor(rc_to_sq(7, col), Direction::SouthWest), None);
            assert_eq!(diagonal_neighbor(rc_to_sq(7, col), Direction::SouthEast), None);
        }
        // Even-row col 0 sits on the a-file: nothing to the west.
        assert_eq!(diagonal_neighbor(rc_to_sq(2, 0), Direction::NorthWest), None);
        assert_eq!(diagonal_neighbor(rc_to_sq(2, 0), Direction::SouthWest), None);
        // Odd-row col 3 sits on the h-file: nothing to the east.
        assert_eq!(diagonal_neighbor(rc_to_sq(3, 3), Direction::NorthEast), None);
        assert_eq!(diagonal_neighbor(rc_to_sq(3, 3), Direction::SouthEast), None);
    }

    #[test]
    fn test_row_parity_mapping() {
        // Even row: west decrements the logical column, east keeps it.
        assert_eq!(
            diagonal_neighbor(rc_to_sq(4, 2), Direction::NorthWest),
            Some(rc_to_sq(3, 1))
        );
        assert_eq!(
            diagonal_neighbor(rc_to_sq(4, 2), Direction::NorthEast),
            Some(rc_to_sq(3, 2))
        );
        // Odd row: west keeps the logical column, east increments it.
        assert_eq!(
            diagonal_neighbor(rc_to_sq(3, 1), Direction::SouthWest),
            Some(rc_to_sq(4, 1))
        );
        assert_eq!(
            diagonal_neighbor(rc_to_sq(3, 1), Direction::SouthEast),
            Some(rc_to_sq(4, 2))
        );
    }

    #[test]
    fn test_initial_white_man_moves() {
        let board = Board::initial();
        // The white man at (5,0) sits on b3 and can step to a4 or c4.
        let moves = moves_for(&board, rc_to_sq(5, 0));
        let targets: Vec<usize> = moves.as_slice().iter().map(|m| m.to_sq()).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&rc_to_sq(4, 0)));
        assert!(targets.contains(&rc_to_sq(4, 1)));
        assert!(moves.as_slice().iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_man_cannot_move_backward() {
        let mut board = Board::new();
        board.set(rc_to_sq(4, 1), Piece::WhiteMan);
        let moves = moves_for(&board, rc_to_sq(4, 1));
        assert!(moves.as_slice().iter().all(|m| m.to_sq() / COLS == 3));
    }

    #[test]
    fn test_king_moves_both_ways() {
        let mut board = Board::new();
        board.set(rc_to_sq(4, 1), Piece::WhiteKing);
        let moves = moves_for(&board, rc_to_sq(4, 1));
        assert_eq!(moves.len(), 4);
        let rows: Vec<usize> = moves.as_slice().iter().map(|m| m.to_sq() / COLS).collect();
        assert!(rows.contains(&3));
        assert!(rows.contains(&5));
    }

    #[test]
    fn test_capture_over_opponent() {
        let mut board = Board::new();
        board.set(rc_to_sq(5, 1), Piece::WhiteMan);
        board.set(rc_to_sq(4, 1), Piece::BlackMan);
        let moves = moves_for(&board, rc_to_sq(5, 1));
        let jump = moves
            .as_slice()
            .iter()
            .find(|m| m.is_capture())
            .expect("capture should be offered");
        assert_eq!(jump.to_sq(), rc_to_sq(3, 0));
        assert_eq!(jump.captured_sq(), Some(rc_to_sq(4, 1)));
    }

    #[test]
    fn test_no_self_capture() {
        let mut board = Board::new();
        board.set(rc_to_sq(5, 1), Piece::WhiteMan);
        board.set(rc_to_sq(4, 1), Piece::WhiteMan);
        let moves = moves_for(&board, rc_to_sq(5, 1));
        // The friendly piece blocks the north-west diagonal entirely.
        assert!(moves.as_slice().iter().all(|m| !m.is_capture()));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_sq(), rc_to_sq(4, 2));
    }

    #[test]
    fn test_blocked_landing_square() {
        let mut board = Board::new();
        board.set(rc_to_sq(5, 1), Piece::WhiteMan);
        board.set(rc_to_sq(4, 1), Piece::BlackMan);
        board.set(rc_to_sq(3, 0), Piece::BlackMan);
        let moves = moves_for(&board, rc_to_sq(5, 1));
        assert!(moves.as_slice().iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_jump_off_board_rejected() {
        let mut board = Board::new();
        // Black man on the g-file second rank: the jump over h1 would
        // leave the board.
        board.set(rc_to_sq(6, 3), Piece::BlackMan);
        board.set(rc_to_sq(7, 3), Piece::WhiteMan);
        let moves = moves_for(&board, rc_to_sq(6, 3));
        assert!(moves.as_slice().iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_side_moves_initial_count() {
        let board = Board::initial();
        // Each side's front row men have seven distinct steps available.
        assert_eq!(side_moves(&board, Side::White).len(), 7);
        assert_eq!(side_moves(&board, Side::Black).len(), 7);
    }
}
