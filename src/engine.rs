//! Tile selection and merge resolution.
//!
//! This module contains the [`GridEngine`], which owns the grid, the in-progress selection and
//! the score. Input adapters feed it grid coordinates through [`GridEngine::select_tile_at`] and
//! renderers read its state back through the query methods after every call.

use tracing::{debug, info};

use crate::{
    grid::{Coord, Grid, Tile},
    rng::TileRng,
};

/// Result of feeding one coordinate to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The coordinate fell outside the grid and nothing changed.
    Ignored,
    /// The coordinate was appended to the selection.
    Selected,
    /// The coordinate triggered a merge attempt over the current selection.
    Merged(MergeOutcome),
}

/// Result of resolving the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The selection held at most one tile, so it was only cleared.
    Cleared,
    /// The selected tiles did not add up to a mergeable total.
    Rejected {
        /// Sum of the selected tile values.
        total: Tile,
    },
    /// The selected tiles were merged into the last-selected cell.
    Accepted {
        /// Value of the merged tile, also added to the score.
        total: Tile,
        /// Final score, present only when this merge ended the game for the first time.
        game_over: Option<u64>,
    },
}

/// Game state container for the merge puzzle.
///
/// This structure owns every piece of mutable game state: the tile grid, the ordered selection
/// of coordinates clicked so far, the score, and the generator used for new tiles.
#[derive(Clone, Debug)]
pub struct GridEngine {
    /// Current tile values.
    grid: Grid,
    /// Selected coordinates in click order, without duplicates.
    selection: Vec<Coord>,
    /// Accumulated score since the last initialization.
    score: u64,
    /// Generator for fresh tile values.
    rng: TileRng,
    /// Whether the game-over notification already fired for the current game.
    game_over_notified: bool,
}

impl GridEngine {
    /// Creates an engine with a freshly generated grid.
    ///
    /// Passing a seed makes the initial grid and every reseeded tile reproducible. Without one,
    /// a seed is drawn from the thread-local RNG and can be read back with
    /// [`seed`](GridEngine::seed).
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(TileRng::from_entropy, TileRng::new);
        let grid = Grid::random(&mut rng);
        info!(seed = rng.seed(), "grid initialized");

        Self {
            grid,
            selection: Vec::new(),
            score: 0,
            rng,
            game_over_notified: false,
        }
    }

    /// Creates an engine over an existing grid.
    ///
    /// The seed only drives the values of tiles reseeded by later merges or initializations.
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            selection: Vec::new(),
            score: 0,
            rng: TileRng::new(seed),
            game_over_notified: false,
        }
    }

    /// Resets the game.
    ///
    /// Every cell is refilled with a seed value, the score drops to zero, the selection is
    /// cleared and the game-over notification is re-armed. The generator keeps its stream, so
    /// successive games from one seed differ but remain reproducible.
    pub fn initialize(&mut self) {
        self.grid = Grid::random(&mut self.rng);
        self.selection.clear();
        self.score = 0;
        self.game_over_notified = false;
        info!(seed = self.rng.seed(), "grid initialized");
    }

    /// Handles a click on the tile at `(x, y)`.
    ///
    /// Coordinates outside the grid are ignored. A tile that is already selected, or one that
    /// cannot extend the selection, triggers [`resolve_merge`](GridEngine::resolve_merge).
    /// Otherwise the tile is appended to the selection.
    pub fn select_tile_at(&mut self, x: i32, y: i32) -> SelectOutcome {
        let Some(coord) = Coord::new(x, y) else {
            debug!(x, y, "ignoring click outside the grid");
            return SelectOutcome::Ignored;
        };

        if self.selection.contains(&coord) {
            return SelectOutcome::Merged(self.resolve_merge());
        }

        let extends = match self.selection.last() {
            None => true,
            Some(last) => last.is_adjacent(coord) && self.matches_selection(coord),
        };

        if extends {
            self.selection.push(coord);
            debug!(
                x,
                y,
                value = self.grid[coord],
                length = self.selection.len(),
                "tile selected"
            );
            SelectOutcome::Selected
        } else {
            SelectOutcome::Merged(self.resolve_merge())
        }
    }

    /// Attempts to merge the current selection, clearing it in every case.
    ///
    /// A merge is accepted when the selected values add up to a power of two, or when exactly
    /// three tiles valued 32, 32 and 64 are selected. On acceptance every selected cell but the
    /// last gets a fresh seed value, the last one takes the total, and the total is added to the
    /// score.
    pub fn resolve_merge(&mut self) -> MergeOutcome {
        let selection = std::mem::take(&mut self.selection);
        let Some((last, rest)) = selection.split_last() else {
            return MergeOutcome::Cleared;
        };
        if rest.is_empty() {
            return MergeOutcome::Cleared;
        }

        let total = selection
            .iter()
            .fold(0, |sum: Tile, coord| sum.saturating_add(self.grid[*coord]));

        if !total.is_power_of_two() && !self.is_special_triple(&selection) {
            debug!(total, length = selection.len(), "merge rejected");
            return MergeOutcome::Rejected { total };
        }

        for coord in rest {
            self.grid[*coord] = self.rng.seed_value();
        }
        self.grid[*last] = total;
        self.score = self.score.saturating_add(total);
        debug!(total, score = self.score, "merge accepted");

        let game_over = if !self.game_over_notified && self.is_terminal() {
            self.game_over_notified = true;
            info!(score = self.score, "game over");
            Some(self.score)
        } else {
            None
        };

        MergeOutcome::Accepted { total, game_over }
    }

    /// Checks whether the grid has no orthogonally adjacent equal tiles left.
    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }

    /// Returns the current tile grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the selected coordinates in click order.
    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    /// Checks whether the given coordinate is part of the selection.
    pub fn is_selected(&self, coord: Coord) -> bool {
        self.selection.contains(&coord)
    }

    /// Returns the score accumulated since the last initialization.
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Returns the seed of the tile generator.
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Checks whether `coord` holds the value the selection requires.
    ///
    /// With a single selected tile the candidate is compared against that tile; with more it is
    /// compared against the first one, not the most recent.
    fn matches_selection(&self, coord: Coord) -> bool {
        self.selection
            .first()
            .is_none_or(|first| self.grid[*first] == self.grid[coord])
    }

    /// Checks for exactly three selected tiles whose sorted values are 32, 32 and 64.
    fn is_special_triple(&self, selection: &[Coord]) -> bool {
        if selection.len() != 3 {
            return false;
        }

        let mut values: Vec<Tile> = selection.iter().map(|coord| self.grid[*coord]).collect();
        values.sort_unstable();

        values == [32, 32, 64]
    }
}
