//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::types::TileSize;

/// Command-line options for the game.
///
/// This structure holds everything the user can configure before the terminal is taken over: the
/// seed for tile generation, the on-screen size of each tile, and an optional log file.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Seed for tile generation; the same seed always produces the same grids.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Width of each tile in terminal columns.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u16).range(4..=16))]
    pub tile_width: u16,
    /// Height of each tile in terminal rows.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(3..=8))]
    pub tile_height: u16,
    /// File to write diagnostic logs to; logging is off when absent.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Returns the configured tile size.
    pub(crate) const fn tile_size(&self) -> TileSize {
        TileSize {
            width: self.tile_width,
            height: self.tile_height,
        }
    }
}
