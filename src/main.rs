//! This crate contains the source code for the binary for the game mergetuine.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io::{stdout, Write};

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mergetuine::{init_logging, App, Cli};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut terminal = ratatui::init();
    let result = with_mouse_capture(stdout(), || App::new(&cli).run(&mut terminal));
    ratatui::restore();

    result
}

/// Runs `play` with mouse capture enabled on `out`.
///
/// Capture is disabled again once `play` returns, whether or not it succeeded. When enabling it
/// fails, `play` never runs. Restoring the rest of the terminal is left to the caller.
///
/// # Errors
///
/// - [`std::io::Error`] if toggling mouse capture fails
/// - Any error returned by `play`
fn with_mouse_capture<W, F>(mut out: W, play: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<()>,
{
    execute!(out, EnableMouseCapture)?;
    let result = play();
    let capture = execute!(out, DisableMouseCapture);

    capture?;
    result
}
