use crate::chess::{Color, Role};
use derive_more::Display;

/// A chess piece of a certain color.
///
/// Tracks whether the piece has ever been relocated; castling eligibility
/// and the pawn's double step depend on it.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "self.figurine()")]
pub struct Piece {
    color: Color,
    role: Role,
    moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    pub fn new(color: Color, role: Role) -> Self {
        Piece {
            color,
            role,
            moved: false,
        }
    }

    /// The [`Color`] of this piece.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The [`Role`] of this piece.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether this piece has ever been relocated.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub(crate) fn set_moved(&mut self, moved: bool) {
        self.moved = moved;
    }

    fn figurine(&self) -> &'static str {
        use Color::*;
        use Role::*;
        match (self.role, self.color) {
            (Pawn, White) => "♙",
            (Knight, White) => "♘",
            (Bishop, White) => "♗",
            (Rook, White) => "♖",
            (Queen, White) => "♕",
            (King, White) => "♔",
            (Pawn, Black) => "♟",
            (Knight, Black) => "♞",
            (Bishop, Black) => "♝",
            (Rook, Black) => "♜",
            (Queen, Black) => "♛",
            (King, Black) => "♚",
        }
    }
}
