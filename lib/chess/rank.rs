use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display(fmt = "1")]
    First = 1,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    /// All ranks ordered from first to eighth.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];

    /// Constructs [`Rank`] from its number in the range `(1..=8)`.
    pub fn from_number(n: i8) -> Result<Self, InvalidRank> {
        match n {
            1..=8 => Ok(Self::ALL[n as usize - 1]),
            _ => Err(InvalidRank),
        }
    }

    /// This rank's number in the range `(1..=8)`.
    #[inline(always)]
    pub fn number(&self) -> i8 {
        *self as i8
    }

    /// Returns an iterator over [`Rank`]s ordered from first to eighth.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.number() - rhs.number()
    }
}

/// The reason why constructing or parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "invalid rank, expected number in the range `({}..={})`",
    "Rank::First",
    "Rank::Eighth"
)]
pub struct InvalidRank;

/// Reads the text as an integer, which must lie in the range `(1..=8)`.
impl FromStr for Rank {
    type Err = InvalidRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i8 = s.trim().parse().map_err(|_| InvalidRank)?;
        Rank::from_number(n)
    }
}
