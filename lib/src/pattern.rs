//! Named patterns.

use crate::{
    cells::{Coord, State},
    error::Error,
    grid::Grid,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named list of living cells.
///
/// The coordinates are not checked until the pattern is applied to a grid.
/// They may be negative, out of range, or repeated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    /// Name.
    pub name: String,

    /// Coordinates of the living cells, in the order they were given.
    pub cells: Vec<Coord>,
}

impl Pattern {
    /// Creates a new pattern.
    pub fn new<S: Into<String>>(name: S, cells: Vec<Coord>) -> Self {
        Pattern {
            name: name.into(),
            cells,
        }
    }

    /// A pattern is only kept in a [`PatternLibrary`] if it has a name
    /// and at least one cell.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.cells.is_empty()
    }

    /// Applies the pattern to a new grid.
    ///
    /// See [`apply`].
    pub fn apply(&self, width: isize, height: isize) -> Result<Grid, Error> {
        apply(width, height, &self.cells)
    }
}

/// A collection of patterns, in the order they were first added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern.
    ///
    /// If there is already a pattern with the same name, its cells are
    /// replaced, and it keeps its position.
    pub fn insert(&mut self, pattern: Pattern) {
        match self.patterns.iter_mut().find(|p| p.name == pattern.name) {
            Some(old) => old.cells = pattern.cells,
            None => self.patterns.push(pattern),
        }
    }

    /// Finds a pattern by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// The first pattern.
    pub fn first(&self) -> Option<&Pattern> {
        self.patterns.first()
    }

    /// Iterates over the patterns, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Names of the patterns, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether there are no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Extend<Pattern> for PatternLibrary {
    fn extend<T: IntoIterator<Item = Pattern>>(&mut self, iter: T) {
        for pattern in iter {
            self.insert(pattern);
        }
    }
}

impl FromIterator<Pattern> for PatternLibrary {
    fn from_iter<T: IntoIterator<Item = Pattern>>(iter: T) -> Self {
        let mut library = PatternLibrary::new();
        library.extend(iter);
        library
    }
}

impl<'a> IntoIterator for &'a PatternLibrary {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Creates a new grid of the given size, and sets the given cells alive.
///
/// Cells outside the grid are silently dropped.
pub fn apply(width: isize, height: isize, cells: &[Coord]) -> Result<Grid, Error> {
    let mut grid = Grid::new(width, height)?;
    for &(row, col) in cells {
        if grid.contains((row, col)) {
            grid.set(row, col, State::Alive)?;
        }
    }
    Ok(grid)
}
