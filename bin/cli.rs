use crate::{applet::Applet, paint::Paint};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use std::{cmp::min, fs::File, io::stderr, path::PathBuf, sync::Mutex};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer, writer::BoxMakeWriter};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Write logs to this file rather than to the standard error.
    #[clap(short, long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Never colorize the console output.
    #[clap(long)]
    no_color: bool,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_target("journal", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = match &self.log {
            None => BoxMakeWriter::new(stderr),
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create `{}`", path.display()))?;

                BoxMakeWriter::new(Mutex::new(file))
            }
        };

        let layer = layer()
            .pretty()
            .with_ansi(self.log.is_none())
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer);

        registry().with(filter).with(layer).init();

        let paint = if self.no_color {
            Paint::new(false)
        } else {
            Paint::from_env()
        };

        self.applet.unwrap_or_default().execute(paint)
    }
}
