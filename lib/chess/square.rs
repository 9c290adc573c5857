use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Constructor, Display, Error, From};
use std::str::FromStr;

/// A square of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Returns an iterator over all 64 [`Square`]s, rank by rank from `a1`.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Rank::iter().flat_map(|r| File::iter().map(move |f| Square::new(f, r)))
    }

    /// The square displaced by `(df, dr)`, if it lies on the board.
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let f = self.file.index() as i8 + df;
        let r = self.rank.index() as i8 + dr;

        if (0..8).contains(&f) && (0..8).contains(&r) {
            Some(Square::new(
                File::from_index(f as u8),
                Rank::from_index(r as u8),
            ))
        } else {
            None
        }
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "unable to parse square; invalid file")]
    InvalidFile(ParseFileError),
    #[display(fmt = "unable to parse square; invalid rank")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);

        Ok(Square {
            file: s[..i].parse()?,
            rank: s[i..].parse()?,
        })
    }
}
