use crate::chess::{File, InvalidSquare, Piece, Rank, Square};
use derive_more::{Display, Error};
use std::{array, fmt, ops::Index};
use tracing::instrument;

/// The reason why a [`Square`] had to be free.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "square {} is occupied", _0)]
pub struct OccupiedCell(#[error(not(source))] pub Square);

/// The reason why a piece could not be moved.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "there is no piece on square {}", _0)]
pub struct NoPieceAtSquare(#[error(not(source))] pub Square);

/// The placement of pieces on the chess board.
///
/// The board does not validate moves according to any set of chess rules,
/// that is up to the caller, see [`Piece::is_legal`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    /// The standard layout at the start of a game.
    fn default() -> Self {
        Board {
            squares: array::from_fn(|i| Piece::initial(Square::from_index(i))),
        }
    }
}

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            squares: array::from_fn(|_| None),
        }
    }

    /// The rendering color of the square at the given coordinates.
    ///
    /// Returns `1` iff the sum of `file` and `rank` is even.
    pub fn cell_color(file: i8, rank: i8) -> Result<u8, InvalidSquare> {
        Ok(Square::from_coords(file, rank)?.shade())
    }

    /// Places a [`Piece`] on a [`Square`], returning whatever stood there before.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    /// The [`Piece`] on a [`Square`], if any.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> Option<&Piece> {
        self.squares[sq.index()].as_ref()
    }

    /// Whether a [`Square`] is empty.
    #[inline(always)]
    pub fn is_free(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Fails if a [`Square`] is occupied.
    pub fn require_free(&self, sq: Square) -> Result<(), OccupiedCell> {
        if self.is_free(sq) {
            Ok(())
        } else {
            Err(OccupiedCell(sq))
        }
    }

    /// Unconditionally moves the piece on `whence` to `whither`.
    ///
    /// Whatever piece stood on `whither` is captured and ceases to exist.
    #[instrument(level = "trace", skip(self), err)]
    pub fn apply(&mut self, whence: Square, whither: Square) -> Result<(), NoPieceAtSquare> {
        let piece = self.squares[whence.index()]
            .take()
            .ok_or(NoPieceAtSquare(whence))?;

        self.squares[whither.index()] = Some(piece);
        Ok(())
    }

    /// Returns an iterator over every [`Square`] and its content.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Square, Option<&Piece>)> {
        Square::iter().zip(self.squares.iter().map(Option::as_ref))
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        labels(f)?;
        writeln!(f)?;
        writeln!(f, " ┏━━━━━━━━━━━━━━━┓")?;

        for rank in Rank::iter().rev() {
            write!(f, "{}┃", rank)?;

            for (i, file) in File::iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }

                match &self[Square::new(file, rank)] {
                    Some(piece) => write!(f, "{}", piece)?,
                    None => write!(f, " ")?,
                }
            }

            writeln!(f, "┃")?;
        }

        writeln!(f, " ┗━━━━━━━━━━━━━━━┛")?;
        labels(f)
    }
}

fn labels(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, " ")?;
    File::iter().try_for_each(|file| write!(f, " {}", file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn cell_color_depends_on_parity_of_coordinates() {
        assert_eq!(Board::cell_color(1, 1), Ok(1));
        assert_eq!(Board::cell_color(2, 1), Ok(0));
        assert_eq!(Board::cell_color(2, 2), Ok(1));
        assert_eq!(Board::cell_color(5, 2), Ok(0));
        assert_eq!(Board::cell_color(5, 4), Ok(0));
        assert_eq!(Board::cell_color(8, 8), Ok(1));
    }

    #[proptest]
    fn cell_color_fails_for_coordinates_off_the_board(
        #[filter(!(1..=8).contains(&#f))] f: i8,
        r: i8,
    ) {
        assert!(Board::cell_color(f, r).is_err());
        assert!(Board::cell_color(r, f).is_err());
    }

    #[test]
    fn default_board_has_the_standard_layout() {
        let b = Board::default();

        for f in File::iter() {
            assert_eq!(b.get(Square::new(f, Rank::Second)).map(Piece::symbol), Some('♙'));
            assert_eq!(b.get(Square::new(f, Rank::Seventh)).map(Piece::symbol), Some('♟'));

            for r in [Rank::Third, Rank::Fourth, Rank::Fifth, Rank::Sixth] {
                assert!(b.is_free(Square::new(f, r)));
            }
        }

        let back: Vec<_> = File::iter()
            .filter_map(|f| b.get(Square::new(f, Rank::First)).map(Piece::symbol))
            .collect();
        assert_eq!(back, ['♖', '♘', '♗', '♕', '♔', '♗', '♘', '♖']);

        let back: Vec<_> = File::iter()
            .filter_map(|f| b.get(Square::new(f, Rank::Eighth)).map(Piece::symbol))
            .collect();
        assert_eq!(back, ['♜', '♞', '♝', '♛', '♚', '♝', '♞', '♜']);
    }

    #[test]
    fn default_board_is_reconstructed_identically() {
        assert_eq!(Board::default(), Board::default());
    }

    #[proptest]
    fn empty_board_has_no_pieces(sq: Square) {
        assert!(Board::empty().is_free(sq));
        assert_eq!(Board::empty().require_free(sq), Ok(()));
    }

    #[proptest]
    fn place_returns_the_displaced_piece(sq: Square, a: Piece, b: Piece) {
        let mut board = Board::empty();
        assert_eq!(board.place(sq, a.clone()), None);
        assert_eq!(board.place(sq, b.clone()), Some(a));
        assert_eq!(board.get(sq), Some(&b));
    }

    #[proptest]
    fn require_free_fails_if_square_is_occupied(sq: Square, p: Piece) {
        let mut board = Board::empty();
        board.place(sq, p);
        assert!(!board.is_free(sq));
        assert_eq!(board.require_free(sq), Err(OccupiedCell(sq)));
    }

    #[proptest]
    fn apply_relocates_the_piece(
        p: Piece,
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
    ) {
        let mut board = Board::empty();
        board.place(whence, p.clone());
        assert_eq!(board.apply(whence, whither), Ok(()));
        assert_eq!(board.get(whither), Some(&p));
        assert_eq!(board.get(whence), None);
    }

    #[proptest]
    fn apply_captures_the_piece_on_the_destination(
        a: Piece,
        b: Piece,
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
    ) {
        let mut board = Board::empty();
        board.place(whence, a.clone());
        board.place(whither, b);
        assert_eq!(board.apply(whence, whither), Ok(()));
        assert_eq!(board.get(whither), Some(&a));
        assert_eq!(board.iter().filter(|(_, p)| p.is_some()).count(), 1);
    }

    #[proptest]
    fn apply_fails_if_there_is_no_piece_to_move(whence: Square, whither: Square) {
        let mut empty = Board::empty();
        assert_eq!(empty.apply(whence, whither), Err(NoPieceAtSquare(whence)));
        assert_eq!(empty, Board::empty());
    }

    #[test]
    fn apply_does_not_check_legality() {
        let mut board = Board::default();
        assert_eq!(board.apply(sq("a1"), sq("h8")), Ok(()));
        assert_eq!(board.get(sq("h8")).map(Piece::symbol), Some('♖'));
    }

    #[proptest]
    fn board_can_be_indexed_by_square(sq: Square) {
        let board = Board::default();
        assert_eq!(board[sq].as_ref(), board.get(sq));
    }

    #[test]
    fn iter_visits_every_square() {
        let board = Board::default();
        assert_eq!(board.iter().len(), 64);
        assert_eq!(board.iter().filter(|(_, p)| p.is_some()).count(), 32);
        assert!(board.iter().all(|(sq, p)| board.get(sq) == p));
    }

    #[test]
    fn board_is_displayed_with_labels_and_borders() {
        let expected = [
            "  a b c d e f g h",
            " ┏━━━━━━━━━━━━━━━┓",
            "8┃♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜┃",
            "7┃♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟┃",
            "6┃               ┃",
            "5┃               ┃",
            "4┃               ┃",
            "3┃               ┃",
            "2┃♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙┃",
            "1┃♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖┃",
            " ┗━━━━━━━━━━━━━━━┛",
            "  a b c d e f g h",
        ]
        .join("\n");

        assert_eq!(Board::default().to_string(), expected);
    }
}
