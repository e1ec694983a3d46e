//! Piece and side definitions for the checkers engine.

/// The contents of one playable (dark) square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Empty,
    BlackMan,
    WhiteMan,
    BlackKing,
    WhiteKing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

/// Whether a piece is still a man or has been crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Man,
    King,
}

impl Piece {
    /// Get the side owning a piece.
    /// Returns `None` if the piece is `Empty`.
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::BlackMan | Piece::BlackKing => Some(Side::Black),
            Piece::WhiteMan | Piece::WhiteKing => Some(Side::White),
            Piece::Empty => None,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Piece::BlackMan | Piece::WhiteMan => Some(Rank::Man),
            Piece::BlackKing | Piece::WhiteKing => Some(Rank::King),
            Piece::Empty => None,
        }
    }

    /// The crowned version of a piece. Kings stay kings.
    pub fn promoted(self) -> Piece {
        match self {
            Piece::BlackMan => Piece::BlackKing,
            Piece::WhiteMan => Piece::WhiteKing,
            other => other,
        }
    }
}

impl Side {
    /// Get the opponent of the current side.
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// The row a man of this side promotes on. White advances toward
    /// row 0, Black toward row 7.
    pub fn promotion_row(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

// Setup-notation character conversions.
impl Piece {
    pub fn to_char(self) -> char {
        match self {
            Piece::BlackMan => 'b',
            Piece::WhiteMan => 'w',
            Piece::BlackKing => 'B',
            Piece::WhiteKing => 'W',
            Piece::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'b' => Some(Piece::BlackMan),
            'w' => Some(Piece::WhiteMan),
            'B' => Some(Piece::BlackKing),
            'W' => Some(Piece::WhiteKing),
            _ => None,
        }
    }
}
