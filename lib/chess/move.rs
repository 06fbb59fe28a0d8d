use crate::chess::{ParseSquareError, Square};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A request to move the piece on one [`Square`] to another.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}-{}", _0, _1)]
pub struct Move(Square, Square);

impl Move {
    /// Constructs [`Move`] from its source and destination [`Square`]s.
    pub fn new(whence: Square, whither: Square) -> Self {
        Move(whence, whither)
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "expected two squares joined by `-`")]
    #[from(ignore)]
    MissingSeparator,
    #[display(fmt = "{}", _0)]
    InvalidSquare(ParseSquareError),
}

/// Parses `<file><rank>-<file><rank>`, ignoring case and surrounding whitespace.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whence, whither) = s
            .trim()
            .split_once('-')
            .ok_or(ParseMoveError::MissingSeparator)?;

        Ok(Move(whence.parse()?, whither.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_has_a_source_and_a_destination(whence: Square, whither: Square) {
        let m = Move::new(whence, whither);
        assert_eq!(m.whence(), whence);
        assert_eq!(m.whither(), whither);
    }

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_ignores_case_and_surrounding_whitespace(
        m: Move,
        #[strategy("[ \t]*")] l: String,
        #[strategy("[ \t]*")] r: String,
    ) {
        let s = [l, m.to_string().to_uppercase(), r].concat();
        assert_eq!(s.parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_without_separator(#[filter(!#s.contains('-'))] s: String) {
        assert_eq!(s.parse::<Move>(), Err(ParseMoveError::MissingSeparator));
    }

    #[test]
    fn parsing_move_fails_unless_both_tokens_are_squares() {
        assert!("e2-e".parse::<Move>().is_err());
        assert!("e2-e44".parse::<Move>().is_err());
        assert!("e2 - e4".parse::<Move>().is_err());
        assert!("e2-e4-e6".parse::<Move>().is_err());
        assert!("i2-e4".parse::<Move>().is_err());
        assert!("e9-e4".parse::<Move>().is_err());
        assert!("-".parse::<Move>().is_err());
    }
}
