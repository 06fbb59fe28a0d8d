use crate::journal::{Journal, Logger};
use crate::{io::Io, paint::Paint};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::{CommandError, Game};
use std::io::{self, stdin, stdout, ErrorKind, Read, Write};
use tracing::{instrument, warn};

const PROMPT: &str = "Input your move: (e2-e4)";

/// A game of chess played on the console.
#[derive(Debug, Default, Parser)]
pub struct Play {}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self, paint: Paint) -> Result<(), Anyhow> {
        let mut game = Game::new();
        let mut io = Io::new(stdout(), stdin());
        play(&mut game, &mut io, &mut Logger, &paint)?;
        Ok(())
    }
}

/// Reads, validates, applies and renders moves until the player exits.
#[instrument(level = "debug", skip_all, err)]
fn play<W: Write, R: Read, J: Journal>(
    game: &mut Game,
    io: &mut Io<W, R>,
    journal: &mut J,
    paint: &Paint,
) -> io::Result<()> {
    io.send(paint.green("Init Chess"))?;
    io.send(game.board())?;

    while !game.is_finished() {
        io.send(PROMPT)?;
        io.flush()?;

        let line = match io.recv() {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                warn!("the console was closed before the game ended");
                break;
            }
            Err(e) => return Err(e),
        };

        journal.record(&format!("\"{}\"", line.trim()), "response", "console");

        match game.execute(&line) {
            Ok(()) => io.send(game.board())?,
            Err(e @ CommandError::HelpRequested) => io.send(e)?,
            Err(e) => io.send(paint.red(e))?,
        }
    }

    io.flush()
}
