//! The turn and selection state machine.
//!
//! A `Game` owns the board, the side to move, and the current
//! selection. Clicks arrive as logical board coordinates from a front
//! end; invalid clicks are silent no-ops.

use crate::board::{rc_to_sq, Board, COLS, ROWS};
use crate::constants::{Piece, Rank, Side};
use crate::move_gen::{moves_for, side_moves};
use crate::movelist::MoveList;
use crate::r#move::Move;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Side,
    selected: Option<usize>,
    offered: MoveList,
}

impl Game {
    /// A fresh game: standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Side::White,
            selected: None,
            offered: MoveList::new(),
        }
    }

    /// Restores a position from setup notation, e.g.
    /// "bbbb/bbbb/bbbb/4/4/wwww/wwww/wwww w".
    pub fn from_setup(setup: &str) -> Option<Self> {
        let mut parts = setup.split_whitespace();
        let board = Board::from_setup(parts.next()?)?;
        let turn = match parts.next()? {
            "w" => Side::White,
            "b" => Side::Black,
            _ => return None,
        };
        Some(Self {
            board,
            turn,
            selected: None,
            offered: MoveList::new(),
        })
    }

    pub fn to_setup(&self) -> String {
        let side = if self.turn == Side::White { 'w' } else { 'b' };
        format!("{} {}", self.board.to_setup(), side)
    }

    // --- Read-only queries for the front ends ---

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Piece {
        assert!(row < ROWS && col < COLS, "coordinate out of range");
        self.board.get(rc_to_sq(row, col))
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn offered_moves(&self) -> &[Move] {
        self.offered.as_slice()
    }

    /// Whether the side to move still has a legal move. A stuck side
    /// has lost.
    pub fn side_has_moves(&self) -> bool {
        !side_moves(&self.board, self.turn).is_empty()
    }

    // --- The click state machine ---

    /// Processes one click on the logical square (row, col). Returns
    /// the move that was applied, if the click completed one.
    pub fn handle_click(&mut self, row: usize, col: usize) -> Option<Move> {
        assert!(row < ROWS && col < COLS, "coordinate out of range");
        let sq = rc_to_sq(row, col);

        if self.selected.is_some() {
            if self.board.is_empty(sq) {
                // Only an offered target completes a move; any other
                // empty square leaves the selection in place.
                if let Some(mv) = self.offered.find_to(sq) {
                    self.apply_move(mv);
                    return Some(mv);
                }
            } else if self.board.get(sq).side() == Some(self.turn) {
                self.select(sq);
            }
        } else if self.board.get(sq).side() == Some(self.turn) {
            self.select(sq);
        }
        None
    }

    fn select(&mut self, sq: usize) {
        self.selected = Some(sq);
        self.offered = moves_for(&self.board, sq);
    }

    fn apply_move(&mut self, mv: Move) {
        if let Some(cap) = mv.captured_sq() {
            self.board.set(cap, Piece::Empty);
        }

        let mut piece = self.board.get(mv.from_sq());
        let to_row = mv.to_sq() / COLS;
        if piece.rank() == Some(Rank::Man) && to_row == self.turn.promotion_row() {
            piece = piece.promoted();
        }
        self.board.set(mv.to_sq(), piece);
        self.board.set(mv.from_sq(), Piece::Empty);

        self.selected = None;
        self.offered.clear();
        self.turn = self.turn.opponent();
    }
}
