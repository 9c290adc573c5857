use crate::chess::{Color, File, Move, Movement, Piece, Rank, Role, Square};
use std::mem::replace;
use std::ops::Index;

/// The chess board, a mapping from [`Square`]s to optional [`Piece`]s.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Places a piece on a square, replacing whatever was there.
    pub fn set(&mut self, sq: Square, piece: Piece) {
        *self.square_mut(sq) = Some(piece);
    }

    /// The square occupied by the king of a [`Color`], if any.
    pub fn king(&self, color: Color) -> Option<Square> {
        Square::iter()
            .find(|&sq| self[sq].is_some_and(|p| p.role() == Role::King && p.color() == color))
    }

    /// An iterator over the squares occupied by pieces of a [`Color`].
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&sq| self[sq].is_some_and(|p| p.color() == color))
    }

    /// Relocates the piece at `m.whence` to `m.whither`.
    ///
    /// The piece is marked as moved and whatever occupied the destination is
    /// recorded as captured in the returned [`Movement`].
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty.
    pub fn relocate(&mut self, m: Move) -> Movement {
        let mut piece = self[m.whence].unwrap();
        let had_moved = piece.has_moved();
        piece.set_moved(true);

        // The source is vacated first, so relocating a piece onto its own
        // square neither destroys it nor records it as captured.
        *self.square_mut(m.whence) = None;
        let captured = replace(self.square_mut(m.whither), Some(piece));

        Movement {
            whence: m.whence,
            whither: m.whither,
            had_moved,
            captured,
        }
    }

    /// Reverses a [`Movement`], restoring the exact prior board state.
    ///
    /// # Panics
    ///
    /// Panics if the movement's destination square is empty.
    pub fn restore(&mut self, mv: Movement) {
        let mut piece = self[mv.whither].unwrap();
        piece.set_moved(mv.had_moved);

        *self.square_mut(mv.whither) = mv.captured;
        *self.square_mut(mv.whence) = Some(piece);
    }

    fn square_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.squares[sq.rank.index() as usize][sq.file.index() as usize]
    }
}

/// The standard initial position.
impl Default for Board {
    fn default() -> Self {
        use Role::*;

        let mut board = Board::empty();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for color in Color::iter() {
            let (home, front) = match color {
                Color::White => (Rank::from_index(0), Rank::from_index(1)),
                Color::Black => (Rank::from_index(7), Rank::from_index(6)),
            };

            for (file, role) in File::iter().zip(back) {
                board.set(Square::new(file, home), Piece::new(color, role));
                board.set(Square::new(file, front), Piece::new(color, Pawn));
            }
        }

        board
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.rank.index() as usize][sq.file.index() as usize]
    }
}
