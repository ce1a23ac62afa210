//! Diagnostic logging setup.

use std::{fs::File, path::Path, sync::Mutex};

use color_eyre::eyre::{eyre, Result, WrapErr as _};
use tracing_subscriber::EnvFilter;

/// Installs a file-backed `tracing` subscriber.
///
/// Standard output belongs to the terminal interface, so logs are only collected when a file is
/// given. The filter is read from `RUST_LOG` and falls back to `info`.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global subscriber has already been installed
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
