//! The grid.

use crate::{
    cells::{Coord, State},
    error::Error,
    life,
};
use std::fmt::{self, Display, Formatter};

/// A fixed-size grid of cells.
///
/// The edges wrap around: the last row is adjacent to the first row,
/// and the last column to the first column. This only matters when
/// counting neighbors; direct access through [`get`](Self::get) and
/// [`set`](Self::set) is bounds-checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Width.
    width: isize,

    /// Height.
    height: isize,

    /// The cells, row by row.
    ///
    /// Its length is always `width * height`.
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a new grid with all cells dead.
    ///
    /// Fails with [`Error::InvalidDimension`] unless both the width and
    /// the height are positive, and the grid fits in memory.
    pub fn new(width: isize, height: isize) -> Result<Self, Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension(width, height));
        }
        let size = width
            .checked_mul(height)
            .ok_or(Error::InvalidDimension(width, height))? as usize;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| Error::InvalidDimension(width, height))?;
        cells.resize(size, State::Dead);
        Ok(Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Builds a grid from its cells, row by row.
    pub(crate) fn from_cells(width: isize, height: isize, cells: Box<[State]>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Grid {
            width,
            height,
            cells,
        }
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (isize, isize) {
        (self.width, self.height)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> isize {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> isize {
        self.height
    }

    /// Index of the cell in `cells`, or `None` if it is outside the grid.
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if (0..self.height).contains(&row) && (0..self.width).contains(&col) {
            Some((row * self.width + col) as usize)
        } else {
            None
        }
    }

    /// Whether the coordinates are inside the grid.
    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        self.index(row, col).is_some()
    }

    /// Gets the state of a cell.
    pub fn get(&self, row: isize, col: isize) -> Result<State, Error> {
        self.index(row, col)
            .map(|i| self.cells[i])
            .ok_or(Error::OutOfBounds((row, col)))
    }

    /// Sets the state of a cell.
    pub fn set(&mut self, row: isize, col: isize, state: State) -> Result<(), Error> {
        let i = self
            .index(row, col)
            .ok_or(Error::OutOfBounds((row, col)))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Gets the state of a cell, wrapping the coordinates around both axes.
    #[inline]
    pub(crate) fn get_wrapped(&self, row: isize, col: isize) -> State {
        let row = row.rem_euclid(self.height);
        let col = col.rem_euclid(self.width);
        self.cells[(row * self.width + col) as usize]
    }

    /// All the cells, row by row.
    pub(crate) fn cells_mut(&mut self) -> &mut [State] {
        &mut self.cells
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Coordinates of all living cells, from top to bottom,
    /// and from left to right within each row.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(move |(i, _)| (i as isize / width, i as isize % width))
    }

    /// The next generation.
    ///
    /// See [`life::next`].
    #[inline]
    pub fn step(&self) -> Grid {
        life::next(self)
    }
}

/// Displays the grid in Plaintext style:
/// `.` for dead cells, `o` for living cells, one line per row.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for state in row {
                let c = match state {
                    State::Alive => 'o',
                    State::Dead => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank() -> Result<(), Error> {
        let grid = Grid::new(4, 3)?;
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(2, 3)?, State::Dead);
        Ok(())
    }

    #[test]
    fn invalid_dimension() {
        assert_eq!(Grid::new(0, 5), Err(Error::InvalidDimension(0, 5)));
        assert_eq!(Grid::new(5, -1), Err(Error::InvalidDimension(5, -1)));
    }

    #[test]
    fn too_large() {
        assert_eq!(
            Grid::new(isize::MAX, 2),
            Err(Error::InvalidDimension(isize::MAX, 2))
        );
        assert_eq!(
            Grid::new(2, isize::MAX),
            Err(Error::InvalidDimension(2, isize::MAX))
        );
    }

    #[test]
    fn out_of_bounds() -> Result<(), Error> {
        let mut grid = Grid::new(4, 3)?;
        assert_eq!(grid.get(3, 0), Err(Error::OutOfBounds((3, 0))));
        assert_eq!(grid.get(0, 4), Err(Error::OutOfBounds((0, 4))));
        assert_eq!(grid.get(-1, 0), Err(Error::OutOfBounds((-1, 0))));
        assert_eq!(
            grid.set(0, -1, State::Alive),
            Err(Error::OutOfBounds((0, -1)))
        );
        assert_eq!(grid.population(), 0);
        Ok(())
    }

    #[test]
    fn set_and_get() -> Result<(), Error> {
        let mut grid = Grid::new(4, 3)?;
        grid.set(2, 3, State::Alive)?;
        grid.set(0, 1, State::Alive)?;
        assert_eq!(grid.get(2, 3)?, State::Alive);
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        grid.set(2, 3, State::Dead)?;
        assert_eq!(grid.population(), 1);
        Ok(())
    }

    #[test]
    fn wrapped() -> Result<(), Error> {
        let mut grid = Grid::new(4, 3)?;
        grid.set(2, 3, State::Alive)?;
        assert_eq!(grid.get_wrapped(-1, -1), State::Alive);
        assert_eq!(grid.get_wrapped(5, 7), State::Alive);
        assert_eq!(grid.get_wrapped(0, 0), State::Dead);
        Ok(())
    }

    #[test]
    fn display() -> Result<(), Error> {
        let mut grid = Grid::new(3, 2)?;
        grid.set(0, 1, State::Alive)?;
        grid.set(1, 2, State::Alive)?;
        assert_eq!(grid.to_string(), ".o.\n..o\n");
        Ok(())
    }
}
