//! __Lifetorus__ runs [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a fixed-size grid whose edges wrap around, and saves and loads
//! patterns in a small plain-text format.
//!
//! # Example
//!
//! ```rust
//! use lifetorus_lib::{apply_pattern, step, State};
//!
//! // A blinker in the middle of a 5x5 grid.
//! let grid = apply_pattern(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
//! let grid = step(&grid);
//!
//! assert_eq!(grid.get(1, 2), Ok(State::Alive));
//! assert_eq!(grid.get(2, 1), Ok(State::Dead));
//! ```

mod cells;
mod config;
mod error;
mod grid;
mod interface;
pub mod life;
mod pattern;
pub mod save;

pub use cells::{Coord, State};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use interface::{
    apply_pattern, clear, load_from_file, randomize, save_to_file, step, toggle_alive,
};
pub use pattern::{apply, Pattern, PatternLibrary};
