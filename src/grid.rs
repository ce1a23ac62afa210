//! Tile grid data and coordinate utilities.
//!
//! This module contains the [`Grid`] and [`Coord`] types the engine works on, along with the
//! terminal-state check, which only depends on the tile values.

use std::ops::{Index, IndexMut};

use crate::rng::TileRng;

/// Number of tiles along each side of the square grid.
pub const TILE_COUNT: usize = 8;

/// Values a freshly generated tile can take.
pub const SEED_VALUES: [Tile; 5] = [2, 4, 8, 16, 32];

/// Numeric value held by a single tile.
pub type Tile = u64;

/// Position of a tile within the grid.
///
/// A coordinate can only be built through [`Coord::new`], which rejects anything outside the
/// `0..TILE_COUNT` range on either axis, so indexing the grid with it never goes out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column index, growing to the right.
    x: usize,
    /// Row index, growing downwards.
    y: usize,
}

impl Coord {
    /// Builds a coordinate from signed input, returning `None` when it falls outside the grid.
    ///
    /// Input adapters may produce negative or oversized values (a click left of the board, for
    /// instance), so the conversion is checked rather than assumed.
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let x = usize::try_from(x).ok().filter(|x| *x < TILE_COUNT)?;
        let y = usize::try_from(y).ok().filter(|y| *y < TILE_COUNT)?;

        Some(Self { x, y })
    }

    /// Returns the column index.
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row index.
    pub const fn y(self) -> usize {
        self.y
    }

    /// Checks whether two coordinates touch, diagonals included.
    ///
    /// This is a Chebyshev distance of at most one, so a coordinate is adjacent to itself.
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Returns the coordinate immediately to the right, if any.
    const fn right(self) -> Option<Self> {
        if self.x + 1 < TILE_COUNT {
            Some(Self {
                x: self.x + 1,
                y: self.y,
            })
        } else {
            None
        }
    }

    /// Returns the coordinate immediately below, if any.
    const fn below(self) -> Option<Self> {
        if self.y + 1 < TILE_COUNT {
            Some(Self {
                x: self.x,
                y: self.y + 1,
            })
        } else {
            None
        }
    }
}

/// Square matrix of tile values.
///
/// Cells are stored column-major, so `cells[x][y]` is the tile at column `x` and row `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Tile values, one inner array per column.
    cells: [[Tile; TILE_COUNT]; TILE_COUNT],
}

impl Grid {
    /// Builds a grid from explicit column data.
    pub const fn from_columns(cells: [[Tile; TILE_COUNT]; TILE_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a grid where every tile is a fresh seed value.
    pub(crate) fn random(rng: &mut TileRng) -> Self {
        let mut cells = [[0; TILE_COUNT]; TILE_COUNT];
        for column in &mut cells {
            for cell in column.iter_mut() {
                *cell = rng.seed_value();
            }
        }

        Self { cells }
    }

    /// Iterates over every coordinate of the grid, column by column.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..TILE_COUNT).flat_map(|x| (0..TILE_COUNT).map(move |y| Coord { x, y }))
    }

    /// Checks whether the grid is in a terminal state.
    ///
    /// The grid is terminal when no cell is empty (holds zero) and no two horizontally or
    /// vertically neighbouring cells hold the same value. Diagonal pairs are not considered here
    /// even though selection allows diagonal steps.
    pub fn is_terminal(&self) -> bool {
        for coord in Self::coords() {
            let value = self[coord];

            // Generated and merged tiles are never zero, but an empty cell still counts as a
            // move being available.
            if value == 0 {
                return false;
            }
            if coord.right().is_some_and(|right| self[right] == value) {
                return false;
            }
            if coord.below().is_some_and(|below| self[below] == value) {
                return false;
            }
        }

        true
    }
}

impl Index<Coord> for Grid {
    type Output = Tile;

    #[expect(
        clippy::indexing_slicing,
        reason = "Coordinates are bounds-checked on construction; there is no risk of bad indexing."
    )]
    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[coord.x][coord.y]
    }
}

impl IndexMut<Coord> for Grid {
    #[expect(
        clippy::indexing_slicing,
        reason = "Coordinates are bounds-checked on construction; there is no risk of bad indexing."
    )]
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        &mut self.cells[coord.x][coord.y]
    }
}
