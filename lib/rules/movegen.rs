use crate::chess::{Color, Piece, Role, Square};
use arrayvec::ArrayVec;

/// The board-bounded squares a piece's geometry reaches from a square.
///
/// A queen in the center of the board reaches at most 27 squares.
pub type Targets = ArrayVec<Square, 27>;

const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_LEAPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (-1, 1),
    (0, -1),
    (1, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];

/// The squares a piece may be relocated to, ignoring occupancy.
///
/// Sliding pieces list entire rays clipped to the board edge; obstruction is
/// a separate concern. Pawns advance straight ahead only, two squares on
/// their first move.
pub fn moves(piece: Piece, whence: Square) -> Targets {
    match piece.role() {
        Role::Pawn => pawn_advances(piece, whence),
        Role::Knight => leaps(whence, &KNIGHT_LEAPS),
        Role::Bishop => rays(whence, &BISHOP_RAYS),
        Role::Rook => rays(whence, &ROOK_RAYS),
        Role::Queen => rays(whence, &QUEEN_RAYS),
        Role::King => leaps(whence, &KING_STEPS),
    }
}

/// The squares a piece may capture on, ignoring occupancy.
///
/// Pawns capture diagonally forward and never straight ahead; for every
/// other piece the capture set equals the movement set.
pub fn takes(piece: Piece, whence: Square) -> Targets {
    match piece.role() {
        Role::Pawn => pawn_diagonals(piece, whence),
        _ => moves(piece, whence),
    }
}

fn forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn rays(whence: Square, directions: &[(i8, i8)]) -> Targets {
    let mut targets = Targets::new();

    for &(df, dr) in directions {
        let mut sq = whence;
        while let Some(next) = sq.offset(df, dr) {
            targets.push(next);
            sq = next;
        }
    }

    targets
}

fn leaps(whence: Square, offsets: &[(i8, i8)]) -> Targets {
    offsets
        .iter()
        .filter_map(|&(df, dr)| whence.offset(df, dr))
        .collect()
}

fn pawn_advances(piece: Piece, whence: Square) -> Targets {
    let dr = forward(piece.color());
    let mut targets = Targets::new();

    if let Some(one) = whence.offset(0, dr) {
        targets.push(one);

        if !piece.has_moved() {
            if let Some(two) = whence.offset(0, 2 * dr) {
                targets.push(two);
            }
        }
    }

    targets
}

fn pawn_diagonals(piece: Piece, whence: Square) -> Targets {
    let dr = forward(piece.color());
    leaps(whence, &[(-1, dr), (1, dr)])
}
