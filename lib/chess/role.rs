use derive_more::Display;

/// The chess piece type.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Role {
    #[display(fmt = "pawn")]
    Pawn,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "queen")]
    Queen,
    #[display(fmt = "king")]
    King,
}

impl Role {
    /// Whether this piece moves along unobstructed straight or diagonal lines.
    ///
    /// Sliding pieces are subject to trajectory analysis; the others either
    /// move a single step or jump over whatever is in between.
    pub fn is_sliding(&self) -> bool {
        matches!(self, Role::Bishop | Role::Rook | Role::Queen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn only_bishop_rook_and_queen_slide(r: Role) {
        assert_eq!(
            r.is_sliding(),
            [Role::Bishop, Role::Rook, Role::Queen].contains(&r)
        );
    }
}
