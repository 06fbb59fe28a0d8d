use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod io;
mod journal;
mod paint;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
