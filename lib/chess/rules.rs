use crate::chess::{Board, Color, OccupiedCell, Piece, Rank, Square};
use derive_more::{Display, Error};

/// The reason why a pawn may not move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalPawnMove {
    #[display(fmt = "the pawn must leave its square")]
    NullMove,

    #[display(fmt = "a pawn only moves forward")]
    NotForwardMove,

    #[display(fmt = "a pawn advances two squares only on its first move")]
    NotFirstMove,

    #[display(fmt = "the route is blocked, {}", _0)]
    RouteBlocked(OccupiedCell),

    #[display(fmt = "a pawn advances either one or two squares straight ahead")]
    InvalidPawnDistance,

    #[display(fmt = "a pawn moves diagonally by exactly one square")]
    NotDiagonalStep,

    #[display(fmt = "a pawn only moves diagonally to capture")]
    NoCaptureTarget,

    #[display(fmt = "a pawn may not capture a piece of its own color")]
    FriendlyFire,
}

/// Checks whether `pawn` may move from `whence` to `whither`.
pub fn pawn(
    pawn: &Piece,
    board: &Board,
    whence: Square,
    whither: Square,
) -> Result<(), IllegalPawnMove> {
    use IllegalPawnMove::*;

    let files = whither.file() - whence.file();
    let ranks = whither.rank() - whence.rank();

    if files == 0 && ranks == 0 {
        return Err(NullMove);
    }

    let forward = match pawn.color() {
        Color::White => ranks > 0,
        Color::Black => ranks < 0,
    };

    if !forward {
        return Err(NotForwardMove);
    }

    if files == 0 {
        match ranks.abs() {
            1 => board.require_free(whither).map_err(RouteBlocked),

            2 => {
                if !pawn.is_first_move(whence) {
                    return Err(NotFirstMove);
                }

                let lo = whence.rank().min(whither.rank());
                let hi = whence.rank().max(whither.rank());

                // every square past the start up to and including the destination
                Rank::iter()
                    .filter(|&r| lo <= r && r <= hi && r != whence.rank())
                    .try_for_each(|r| board.require_free(Square::new(whither.file(), r)))
                    .map_err(RouteBlocked)
            }

            _ => Err(InvalidPawnDistance),
        }
    } else if files.abs() != 1 || ranks.abs() != 1 {
        Err(NotDiagonalStep)
    } else {
        match board.get(whither) {
            None => Err(NoCaptureTarget),
            Some(p) if p.color() == pawn.color() => Err(FriendlyFire),
            Some(_) => Ok(()),
        }
    }
}
