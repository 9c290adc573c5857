use derive_more::{Display, Error, From};
use std::{char::ParseCharError, ops::Sub, str::FromStr};

/// Denotes a column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "char::from(*self)")]
pub struct File(#[cfg_attr(test, strategy(0u8..8))] u8);

impl File {
    /// Constructs [`File`] from index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=7).
    pub fn from_index(i: u8) -> Self {
        i.try_into().unwrap()
    }

    /// This file's index in the range (0..=7).
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Returns an iterator over [`File`]s ordered by [index][`File::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..8).map(File)
    }
}

impl Sub for File {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse file")]
pub enum ParseFileError {
    ParseCharError(ParseCharError),
    InvalidFile(InvalidFile),
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<char>()?.try_into()?)
    }
}

/// The reason why converting [`File`] from a character failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected lower case letter in the range `('a'..='h')`")]
pub struct InvalidFile;

impl TryFrom<char> for File {
    type Error = InvalidFile;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if ('a'..='h').contains(&c) {
            Ok(File(c as u8 - b'a'))
        } else {
            Err(InvalidFile)
        }
    }
}

impl From<File> for char {
    fn from(f: File) -> char {
        (b'a' + f.0) as char
    }
}

/// The reason why converting [`File`] from index failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected integer in the range `(0..=7)`")]
pub struct FileOutOfRange;

impl TryFrom<u8> for File {
    type Error = FileOutOfRange;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        if i < 8 {
            Ok(File(i))
        } else {
            Err(FileOutOfRange)
        }
    }
}

impl From<File> for u8 {
    fn from(f: File) -> u8 {
        f.0
    }
}
