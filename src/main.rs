//! Doubler CLI
//!
//! Reads numbers from stdin, one per line, and writes each one doubled to
//! stdout. Lines that are not numbers come out as `NaN`.
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`
//! (`RUST_LOG=debug doubler` shows every line that fell back to `NaN`).

use anyhow::Context;
use clap::Parser;
use doubler::LineTransformer;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doubler")]
#[command(version, about = "Double every number read from stdin", long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut transformer = LineTransformer::new(stdin.lock(), stdout.lock());

    match transformer.run() {
        Ok(_) => Ok(()),
        // The reader hung up (e.g. piped into `head`); nothing left to do.
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!("{err}");
            Ok(())
        }
        Err(err) => Err(err).context("doubler stopped before end of input"),
    }
}
