use crate::chess::{File, InvalidFile, InvalidRank, Rank};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A square on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// Constructs [`Square`] from raw file and rank numbers, both in the range `(1..=8)`.
    pub fn from_coords(file: i8, rank: i8) -> Result<Self, InvalidSquare> {
        Ok(Square::new(File::from_number(file)?, Rank::from_number(rank)?))
    }

    /// Constructs [`Square`] from its [index][`Square::index`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range `(0..64)`.
    pub fn from_index(i: usize) -> Self {
        Square::new(File::ALL[i / 8], Rank::ALL[i % 8])
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        self.file
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// This square's index in the range `(0..64)`, grouped by file.
    #[inline(always)]
    pub fn index(&self) -> usize {
        (self.file.number() as usize - 1) * 8 + (self.rank.number() as usize - 1)
    }

    /// The rendering color of this square, `1` iff the sum of its file and rank is even.
    pub fn shade(&self) -> u8 {
        ((self.file.number() + self.rank.number()) % 2 == 0).into()
    }

    /// Returns an iterator over all [`Square`]s ordered by [index][`Square::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(Square::from_index)
    }
}

/// The reason why a pair of coordinates does not denote a [`Square`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum InvalidSquare {
    #[display(fmt = "{}", _0)]
    InvalidFile(InvalidFile),
    #[display(fmt = "{}", _0)]
    InvalidRank(InvalidRank),
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square, {}", _0)]
    InvalidFile(InvalidFile),
    #[display(fmt = "failed to parse square, {}", _0)]
    InvalidRank(InvalidRank),
    #[display(fmt = "failed to parse square, expected exactly two characters")]
    #[from(ignore)]
    InvalidLength,
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(_), None) => {
                let (_, r) = s.split_at(f.len_utf8());
                Ok(Square::new(f.try_into()?, r.parse()?))
            }
            _ => Err(ParseSquareError::InvalidLength),
        }
    }
}
