//! The operations a front end needs.
//!
//! Each operation either returns a new [`Grid`], or changes exactly one
//! cell of an existing one.

use crate::{
    cells::{Coord, State},
    error::Error,
    grid::Grid,
    life,
    pattern::{self, PatternLibrary},
    save,
};
use rand::Rng;
use std::{io, path::Path};

/// Advances the grid by one generation.
#[inline]
pub fn step(grid: &Grid) -> Grid {
    life::next(grid)
}

/// Sets a single cell alive, without running the rule.
pub fn toggle_alive(grid: &mut Grid, row: isize, col: isize) -> Result<(), Error> {
    grid.set(row, col, State::Alive)
}

/// Creates a grid where each cell is alive with probability `1/2`.
///
/// The cells are filled row by row, so the same seed always gives
/// the same grid.
pub fn randomize<R: Rng + ?Sized>(
    width: isize,
    height: isize,
    rng: &mut R,
) -> Result<Grid, Error> {
    let mut grid = Grid::new(width, height)?;
    for state in grid.cells_mut() {
        *state = State::from(rng.gen_bool(0.5));
    }
    Ok(grid)
}

/// Creates a grid with all cells dead.
#[inline]
pub fn clear(width: isize, height: isize) -> Result<Grid, Error> {
    Grid::new(width, height)
}

/// Saves the living cells of the grid as a pattern with the given name.
pub fn save_to_file<P: AsRef<Path>>(path: P, grid: &Grid, name: &str) -> io::Result<()> {
    save::write_file(path, grid, name)
}

/// Loads all patterns in a file. A missing file gives an empty library.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<PatternLibrary> {
    save::read_file(path)
}

/// Creates a grid with the given cells alive, dropping those outside it.
#[inline]
pub fn apply_pattern(width: isize, height: isize, cells: &[Coord]) -> Result<Grid, Error> {
    pattern::apply(width, height, cells)
}
