//! A terminal tile-merging puzzle.
//!
//! The game is played on an eight by eight grid of numbered tiles. Clicking a tile starts a
//! selection, and clicking neighbouring tiles (diagonals included) that hold the same value as the
//! first one extends it. Clicking anything else, or a tile that is already selected, attempts a
//! merge: when the selected values add up to a power of two they collapse into the last tile
//! clicked, the other tiles are replaced with fresh values, and the total is added to the score.
//! The game is over once no two orthogonally neighbouring tiles share a value.
//!
//! The rules live in [`GridEngine`], which knows nothing about terminals. [`App`] wraps it in a
//! Ratatui interface that maps mouse clicks onto tiles and renders the grid after every event.

mod app;
mod cli;
mod engine;
mod events;
mod grid;
mod logging;
mod rng;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use engine::{GridEngine, MergeOutcome, SelectOutcome};
pub use grid::{Coord, Grid, Tile, SEED_VALUES, TILE_COUNT};
pub use logging::init_logging;
