use crate::chess::{Board, Color, File, Move, Rank, Role, Square};
use crate::rules::{is_attacked, is_unobstructed};

/// The pair of relocations making up a castling move, rook first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Castling {
    pub rook: Move,
    pub king: Move,
}

impl Castling {
    /// Evaluates castling eligibility for the `turn` player who picked the
    /// squares `a` and `b`, in either order.
    ///
    /// Castling requires the mover's king and rook on their home squares,
    /// neither ever moved, no piece between them, and none of the squares
    /// the king stands on, crosses, or lands on attacked by the opponent.
    pub fn detect(board: &Board, turn: Color, a: Square, b: Square) -> Option<Self> {
        let pa = board[a]?;
        let pb = board[b]?;

        let (king_sq, king, rook_sq, rook) = match (pa.role(), pb.role()) {
            (Role::King, Role::Rook) => (a, pa, b, pb),
            (Role::Rook, Role::King) => (b, pb, a, pa),
            _ => return None,
        };

        if king.color() != turn || rook.color() != turn {
            return None;
        } else if king.has_moved() || rook.has_moved() {
            return None;
        }

        let home = match turn {
            Color::White => Rank::from_index(0),
            Color::Black => Rank::from_index(7),
        };

        if king_sq != Square::new(File::from_index(4), home) || rook_sq.rank != home {
            return None;
        }

        // King's start, crossed, and landing files per side.
        let (king_to, rook_to, path) = if rook_sq.file == File::from_index(0) {
            (2, 3, [4, 3, 2])
        } else if rook_sq.file == File::from_index(7) {
            (6, 5, [4, 5, 6])
        } else {
            return None;
        };

        if !is_unobstructed(board, Move::new(rook_sq, king_sq)) {
            return None;
        }

        let attacked = path
            .into_iter()
            .any(|f| is_attacked(board, !turn, Square::new(File::from_index(f), home)));

        if attacked {
            return None;
        }

        Some(Castling {
            rook: Move::new(rook_sq, Square::new(File::from_index(rook_to), home)),
            king: Move::new(king_sq, Square::new(File::from_index(king_to), home)),
        })
    }
}
