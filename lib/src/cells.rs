//! Cells in the cellular automaton.

use derivative::Derivative;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Derivative, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Dead.
    #[derivative(Default)]
    Dead,
    /// Alive.
    Alive,
}

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
///
/// They are signed, so that coordinates read from a pattern file
/// can be negative. Such cells are only dropped when the pattern
/// is applied to a grid.
pub type Coord = (isize, isize);
