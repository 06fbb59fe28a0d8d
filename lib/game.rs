use crate::chess::{Board, Color, Move, ParseMoveError, Square};
use derive_more::{Display, Error};
use tracing::{field::display, info, instrument, Span};

mod command;

pub use command::*;

/// Instructions on how to play.
pub const HELP: &str = "\
Move a piece by typing the square it stands on and the square it should go to, e.g. `e2-e4`.
Type `help` to read this message again or `exit` to end the game.";

/// The reason why a command did not result in a move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[error(ignore)]
pub enum CommandError {
    #[display(fmt = "wrong move format, {}", _0)]
    WrongMoveFormat(ParseMoveError),

    #[display(fmt = "{}", HELP)]
    HelpRequested,

    #[display(fmt = "game over")]
    GameOver,

    #[display(fmt = "the game has already ended")]
    GameHasEnded,

    #[display(fmt = "there is no piece on square {}", _0)]
    NoPieceAtSquare(Square),

    #[display(fmt = "it is {}'s turn to move", _0)]
    WrongColorToMove(Color),

    #[display(fmt = "the move {} is illegal", _0)]
    IllegalPieceMove(Move),
}

/// Holds the state of a game of chess.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
    finished: bool,
    history: Vec<String>,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::default(),
            turn: Color::White,
            finished: false,
            history: Vec::new(),
        }
    }
}

impl Game {
    /// Starts a new game from the standard layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether the game has been ended by the player.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The moves played so far, as they were typed.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Executes one line of input, returning the reason why no move was made if any.
    ///
    /// The game is only ever changed if the move is applied, or if the player exits.
    #[instrument(level = "debug", skip(self), err, fields(turn = %self.turn, action))]
    pub fn execute(&mut self, input: &str) -> Result<(), CommandError> {
        if self.finished {
            return Err(CommandError::GameHasEnded);
        }

        let input = input.trim();

        let m = match input.parse::<Command>().map_err(CommandError::WrongMoveFormat)? {
            Command::Help => return Err(CommandError::HelpRequested),

            Command::Exit => {
                self.finished = true;
                return Err(CommandError::GameOver);
            }

            Command::Move(m) => m,
        };

        Span::current().record("action", display(m));

        let piece = self
            .board
            .get(m.whence())
            .ok_or(CommandError::NoPieceAtSquare(m.whence()))?;

        if piece.color() != self.turn {
            return Err(CommandError::WrongColorToMove(self.turn));
        }

        if !piece.is_legal(&self.board, m.whence(), m.whither()) {
            return Err(CommandError::IllegalPieceMove(m));
        }

        self.board
            .apply(m.whence(), m.whither())
            .map_err(|e| CommandError::NoPieceAtSquare(e.0))?;

        self.history.push(input.to_string());
        info!(player = %self.turn, %m, "move applied");
        self.turn = !self.turn;

        Ok(())
    }
}
