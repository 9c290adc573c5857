use crate::chess::{Piece, Square};
use derive_more::{Constructor, Display};

/// A piece relocation in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", whence, whither)]
pub struct Move {
    pub whence: Square,
    pub whither: Square,
}

/// A committed [`Move`], recorded with enough context to take it back.
///
/// Movements form the append-only game history; undoing pops the tail.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Movement {
    pub whence: Square,
    pub whither: Square,
    pub had_moved: bool,
    pub captured: Option<Piece>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_displays_as_coordinate_pair(m: Move) {
        assert_eq!(m.to_string(), format!("{}{}", m.whence, m.whither));
    }
}
