//! All kinds of errors in this crate.
//!
//! Reading or writing pattern files reports [`std::io::Error`] instead.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width and height should be positive, got {0} x {1}.
    InvalidDimension(isize, isize),
    /// Cell at {0:?} is outside the grid.
    OutOfBounds(Coord),
}
