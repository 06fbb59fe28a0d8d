use crate::chess::Color;
use derive_more::Display;

/// The kind of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[display(fmt = "pawn")]
    Pawn,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "queen")]
    Queen,
    #[display(fmt = "king")]
    King,
}

impl Role {
    /// The glyph that depicts this role in the given [`Color`].
    pub fn symbol(self, color: Color) -> char {
        use Color::*;
        use Role::*;
        match (self, color) {
            (Pawn, White) => '♙',
            (Rook, White) => '♖',
            (Knight, White) => '♘',
            (Bishop, White) => '♗',
            (Queen, White) => '♕',
            (King, White) => '♔',
            (Pawn, Black) => '♟',
            (Rook, Black) => '♜',
            (Knight, Black) => '♞',
            (Bishop, Black) => '♝',
            (Queen, Black) => '♛',
            (King, Black) => '♚',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn role_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Role>>(), size_of::<Role>());
    }

    #[proptest]
    fn symbol_distinguishes_color(r: Role) {
        assert_ne!(r.symbol(Color::White), r.symbol(Color::Black));
    }

    #[proptest]
    fn symbol_distinguishes_role(a: Role, #[filter(#a != #b)] b: Role, c: Color) {
        assert_ne!(a.symbol(c), b.symbol(c));
    }
}
