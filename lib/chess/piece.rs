use crate::chess::{rules, Board, Color, File, Rank, Role, Square};
use derive_more::Display;
use tracing::{debug, instrument};

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Every piece remembers the [`Square`] it was created on, which is how
/// it tells whether it is about to make its first move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "self.symbol()")]
pub struct Piece {
    role: Role,
    color: Color,
    origin: Square,
}

impl Piece {
    /// Constructs [`Piece`] standing on its origin [`Square`].
    pub fn new(role: Role, color: Color, origin: Square) -> Self {
        Piece {
            role,
            color,
            origin,
        }
    }

    /// The piece that stands on the given [`Square`] at the start of a game, if any.
    pub fn initial(sq: Square) -> Option<Self> {
        let color = match sq.rank() {
            Rank::First | Rank::Second => Color::White,
            Rank::Seventh | Rank::Eighth => Color::Black,
            _ => return None,
        };

        let role = match (sq.rank(), sq.file()) {
            (Rank::Second | Rank::Seventh, _) => Role::Pawn,
            (_, File::A | File::H) => Role::Rook,
            (_, File::B | File::G) => Role::Knight,
            (_, File::C | File::F) => Role::Bishop,
            (_, File::D) => Role::Queen,
            (_, File::E) => Role::King,
        };

        Some(Piece::new(role, color, sq))
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The [`Square`] this piece was created on.
    #[inline(always)]
    pub fn origin(&self) -> Square {
        self.origin
    }

    /// Whether moving from `sq` would be this piece's first move.
    pub fn is_first_move(&self, sq: Square) -> bool {
        sq == self.origin
    }

    /// The glyph that depicts this piece.
    pub fn symbol(&self) -> char {
        self.role.symbol(self.color)
    }

    /// Whether moving this piece from `whence` to `whither` is allowed on the given [`Board`].
    ///
    /// Only pawns obey actual movement rules, all other roles may move anywhere.
    #[instrument(level = "trace", skip(self, board), ret, fields(piece = %self))]
    pub fn is_legal(&self, board: &Board, whence: Square, whither: Square) -> bool {
        match self.role {
            Role::Pawn => match rules::pawn(self, board, whence, whither) {
                Ok(()) => true,
                Err(reason) => {
                    debug!(%whence, %whither, %reason, "illegal pawn move");
                    false
                }
            },

            Role::Rook | Role::Knight | Role::Bishop | Role::Queen | Role::King => true,
        }
    }
}
