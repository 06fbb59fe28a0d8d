use crate::chess::{Move, ParseMoveError};
use derive_more::{Display, From};
use std::str::FromStr;

/// A line of input from the player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Command {
    /// Ask for instructions.
    #[display(fmt = "help")]
    #[from(ignore)]
    Help,

    /// End the game.
    #[display(fmt = "exit")]
    #[from(ignore)]
    Exit,

    /// Move a piece on the board.
    #[display(fmt = "{}", _0)]
    Move(Move),
}

impl FromStr for Command {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("help") {
            Ok(Command::Help)
        } else if s.eq_ignore_ascii_case("exit") {
            Ok(Command::Exit)
        } else {
            Ok(Command::Move(s.parse()?))
        }
    }
}
