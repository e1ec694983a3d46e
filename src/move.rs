//! Defines the representation of a move in the engine.

use crate::board::{sq_to_rc, visual_col};

/// Represents a single move.
///
/// A move is encoded as a 16-bit integer:
/// - Bits 0-4:   from_sq (0-31)
/// - Bits 5-9:   to_sq (0-31)
/// - Bit 10:     capture flag
/// - Bits 11-15: captured_sq (0-31), valid only when the flag is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move(u16);

impl Move {
    /// Creates a new move. `captured_sq` is the square of the jumped
    /// piece for a capture, `None` for a simple move.
    pub fn new(from_sq: usize, to_sq: usize, captured_sq: Option<usize>) -> Self {
        let mut move_val = (from_sq as u16) | ((to_sq as u16) << 5);
        if let Some(cap) = captured_sq {
            move_val |= 1 << 10;
            move_val |= (cap as u16) << 11;
        }
        Move(move_val)
    }

    /// Gets the source square.
    pub fn from_sq(&self) -> usize {
        (self.0 & 0x1F) as usize
    }

    /// Gets the destination square.
    pub fn to_sq(&self) -> usize {
        ((self.0 >> 5) & 0x1F) as usize
    }

    /// Checks if the move is a capture.
    pub fn is_capture(&self) -> bool {
        (self.0 >> 10) & 1 != 0
    }

    /// Gets the square of the jumped piece, if any.
    pub fn captured_sq(&self) -> Option<usize> {
        if self.is_capture() {
            Some((self.0 >> 11) as usize)
        } else {
            None
        }
    }

    /// Renders the move in visual notation, e.g. "d3xb5" for a capture.
    pub fn to_notation(&self) -> String {
        let sep = if self.is_capture() { 'x' } else { '-' };
        format!(
            "{}{}{}",
            square_notation(self.from_sq()),
            sep,
            square_notation(self.to_sq())
        )
    }
}

/// Visual notation for a square: file a-h, rank 1-8 with rank 8 at row 0.
pub fn square_notation(sq: usize) -> String {
    let (row, col) = sq_to_rc(sq);
    let file = (b'a' + visual_col(row, col) as u8) as char;
    format!("{}{}", file, 8 - row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::rc_to_sq;

    #[test]
    fn test_move_encoding() {
        let simple = Move::new(rc_to_sq(5, 0), rc_to_sq(4, 0), None);
        assert_eq!(simple.from_sq(), rc_to_sq(5, 0));
        assert_eq!(simple.to_sq(), rc_to_sq(4, 0));
        assert!(!simple.is_capture());
        assert_eq!(simple.captured_sq(), None);

        let jump = Move::new(rc_to_sq(5, 1), rc_to_sq(3, 0), Some(rc_to_sq(4, 1)));
        assert!(jump.is_capture());
        assert_eq!(jump.captured_sq(), Some(rc_to_sq(4, 1)));
    }

    #[test]
    fn test_notation() {
        // (5,0) has visual column 1 -> "b3"; (4,0) visual column 0 -> "a4".
        let simple = Move::new(rc_to_sq(5, 0), rc_to_sq(4, 0), None);
        assert_eq!(simple.to_notation(), "b3-a4");

        let jump = Move::new(rc_to_sq(5, 1), rc_to_sq(3, 0), Some(rc_to_sq(4, 1)));
        assert_eq!(jump.to_notation(), "d3xb5");
    }
}
