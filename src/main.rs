//! waitforfile - poll a path until a check on it is satisfied

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use waitforfile::Args;

fn main() -> Result<()> {
    let args = parse_args();
    setup_logging(args.verbose);

    let config = args.into_config()?;
    config.run().context("Problem checking file")?;

    Ok(())
}

/// Like `Args::parse`, but `--help` goes to stderr so stdout stays clean for
/// the calling script.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            eprint!("{}", e.render());
            std::process::exit(0);
        }
        Err(e) => e.exit(),
    }
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}
