//! Conway's Game of Life, rule `B3/S23`.
//!
//! For the notation, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::{cells::State, grid::Grid};

/// Offsets of the eight cells in the Moore neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of living cells among the eight neighbors of `(row, col)`.
///
/// The neighborhood wraps around both edges of the grid, so every cell,
/// including those on an edge or in a corner, has exactly eight neighbors.
/// Coordinates outside the grid are wrapped in the same way.
pub fn neighbors(grid: &Grid, row: isize, col: isize) -> u8 {
    NBHD.iter()
        .filter(|(dr, dc)| grid.get_wrapped(row + dr, col + dc).is_alive())
        .count() as u8
}

/// The state of a cell in the next generation, given its current state
/// and the number of its living neighbors.
#[inline]
pub fn next_state(state: State, neighbors: u8) -> State {
    match (state, neighbors) {
        (State::Alive, 2) | (State::Alive, 3) => State::Alive, // Survival
        (State::Dead, 3) => State::Alive,                       // Birth
        _ => State::Dead,
    }
}

/// Computes the next generation.
///
/// The argument is never modified. Every cell of the new grid is computed
/// from the old one, so no cell sees a neighbor that has already been
/// updated in the same generation.
pub fn next(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let cells = (0..height)
        .flat_map(|row| (0..width).map(move |col| (row, col)))
        .map(|(row, col)| next_state(grid.get_wrapped(row, col), neighbors(grid, row, col)))
        .collect();
    Grid::from_cells(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn grid_with(
        width: isize,
        height: isize,
        cells: &[(isize, isize)],
    ) -> Result<Grid, Error> {
        let mut grid = Grid::new(width, height)?;
        for &(row, col) in cells {
            grid.set(row, col, State::Alive)?;
        }
        Ok(grid)
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            let survive = n == 2 || n == 3;
            assert_eq!(next_state(State::Alive, n), State::from(survive));
            assert_eq!(next_state(State::Dead, n), State::from(n == 3));
        }
    }

    #[test]
    fn corner_wraps() -> Result<(), Error> {
        let grid = grid_with(5, 4, &[(3, 4)])?;
        assert_eq!(neighbors(&grid, 0, 0), 1);
        assert_eq!(neighbors(&grid, 0, 4), 1);
        assert_eq!(neighbors(&grid, 3, 0), 1);
        assert_eq!(neighbors(&grid, 1, 1), 0);
        Ok(())
    }

    #[test]
    fn edges_wrap() -> Result<(), Error> {
        // Bottom row sees the top row.
        let grid = grid_with(5, 4, &[(0, 2)])?;
        assert_eq!(neighbors(&grid, 3, 1), 1);
        assert_eq!(neighbors(&grid, 3, 2), 1);
        assert_eq!(neighbors(&grid, 3, 3), 1);
        assert_eq!(neighbors(&grid, 2, 2), 0);

        // Right column sees the left column.
        let grid = grid_with(5, 4, &[(1, 0)])?;
        assert_eq!(neighbors(&grid, 0, 4), 1);
        assert_eq!(neighbors(&grid, 1, 4), 1);
        assert_eq!(neighbors(&grid, 2, 4), 1);
        assert_eq!(neighbors(&grid, 1, 3), 0);
        Ok(())
    }

    #[test]
    fn self_not_counted() -> Result<(), Error> {
        let grid = grid_with(3, 3, &[(1, 1)])?;
        assert_eq!(neighbors(&grid, 1, 1), 0);
        Ok(())
    }

    #[test]
    fn tiny_grid_counts_wrapped_copies() -> Result<(), Error> {
        // On a 1x1 torus every neighbor is the cell itself.
        let grid = grid_with(1, 1, &[(0, 0)])?;
        assert_eq!(neighbors(&grid, 0, 0), 8);
        assert_eq!(next(&grid).population(), 0);
        Ok(())
    }

    #[test]
    fn input_untouched() -> Result<(), Error> {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)])?;
        let before = grid.clone();
        let after = next(&grid);
        assert_eq!(grid, before);
        assert_ne!(after, before);
        Ok(())
    }

    #[test]
    fn glider_crosses_edge() -> Result<(), Error> {
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let mut grid = grid_with(8, 8, &glider)?;
        // A glider moves one cell diagonally every four generations,
        // so after 32 generations it is back where it started.
        for _ in 0..32 {
            grid = next(&grid);
            assert_eq!(grid.population(), 5);
        }
        assert_eq!(grid, grid_with(8, 8, &glider)?);
        Ok(())
    }
}
