mod castling;
mod movegen;

pub use castling::*;
pub use movegen::*;

use crate::chess::{Board, Color, Move, Square};

/// Whether no piece obstructs the path strictly between `m.whence` and
/// `m.whither`.
///
/// Only sliding pieces are subject to obstruction; every other piece passes
/// trivially, as does a vacant source square. Whatever occupies the
/// destination itself is not judged here.
pub fn is_unobstructed(board: &Board, m: Move) -> bool {
    match board[m.whence] {
        Some(p) if p.role().is_sliding() => {}
        _ => return true,
    }

    let df = (m.whither.file - m.whence.file).signum();
    let dr = (m.whither.rank - m.whence.rank).signum();

    let mut sq = m.whence;
    loop {
        sq = match sq.offset(df, dr) {
            Some(next) => next,
            None => return true,
        };

        if sq == m.whither {
            return true;
        } else if board[sq].is_some() {
            return false;
        }
    }
}

/// Whether relocating the piece at `m.whence` onto `m.whither` is legal in
/// isolation, not yet accounting for the mover's own king safety.
///
/// An occupied destination is tested against the piece's capture set, an
/// empty one against its movement set; either way the trajectory must be
/// unobstructed. Whose piece occupies the destination is the caller's
/// concern, which is what makes this predicate double as the attack test.
pub fn is_legal(board: &Board, m: Move) -> bool {
    let Some(piece) = board[m.whence] else {
        return false;
    };

    let reachable = if board[m.whither].is_some() {
        takes(piece, m.whence).contains(&m.whither)
    } else {
        moves(piece, m.whence).contains(&m.whither)
    };

    reachable && is_unobstructed(board, m)
}

/// Whether any piece of the given [`Color`] reaches `sq` as a legal
/// destination.
pub fn is_attacked(board: &Board, by: Color, sq: Square) -> bool {
    board
        .by_color(by)
        .any(|whence| is_legal(board, Move::new(whence, sq)))
}

/// Whether the king of the given [`Color`] is attacked.
pub fn in_check(board: &Board, color: Color) -> bool {
    board
        .king(color)
        .is_some_and(|sq| is_attacked(board, !color, sq))
}

/// Whether the given [`Color`] is checkmated.
///
/// Every adjacent square not occupied by a friendly piece is tried by
/// hypothetically relocating the king there, captures included; mate holds
/// if the king remains attacked on all of them. Escapes through another
/// piece interposing or capturing the attacker are not considered.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !in_check(board, color) {
        return false;
    }

    let Some(king) = board.king(color) else {
        return false;
    };

    let Some(piece) = board[king] else {
        return false;
    };

    for sq in moves(piece, king) {
        if board[sq].is_some_and(|p| p.color() == color) {
            continue;
        }

        let mut hypothetical = *board;
        hypothetical.relocate(Move::new(king, sq));

        if !is_attacked(&hypothetical, !color, sq) {
            return false;
        }
    }

    true
}
