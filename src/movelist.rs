//! A move list implementation that avoids heap allocations.

use crate::r#move::Move;
use std::ops::Index;

const MAX_MOVES: usize = 64;

#[derive(Debug, Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    count: usize,
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            moves: [Move::new(0, 0, None); MAX_MOVES],
            count: 0,
        }
    }

    pub fn add(&mut self, mv: Move) {
        if self.count < MAX_MOVES {
            self.moves[self.count] = mv;
            self.count += 1;
        }
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves[0..self.count]
    }

    /// Finds the offered move landing on `to_sq`, if any. Targets are
    /// unique, so at most one move matches.
    pub fn find_to(&self, to_sq: usize) -> Option<Move> {
        self.as_slice().iter().copied().find(|m| m.to_sq() == to_sq)
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}
