//! Configuration.

use crate::{error::Error, grid::Grid};
use derivative::Derivative;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration.
///
/// Missing fields take their default values when deserialized.
#[derive(Clone, Debug, Derivative, PartialEq, Eq)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[derivative(Default(value = "40"))]
    pub width: isize,

    /// Height.
    #[derivative(Default(value = "20"))]
    pub height: isize,

    /// Generations per second while running.
    #[derivative(Default(value = "6"))]
    pub fps: u32,

    /// The pattern library, read once at startup.
    #[derivative(Default(value = "PathBuf::from(\"patterns.txt\")"))]
    pub library: PathBuf,

    /// The file the current grid is saved to and loaded from.
    #[derivative(Default(value = "PathBuf::from(\"saved.txt\")"))]
    pub save_file: PathBuf,

    /// The pattern name written to the save file.
    #[derivative(Default(value = "String::from(\"Saved\")"))]
    pub save_name: String,

    /// Seed for random fills.
    ///
    /// `None` means a fresh seed from the operating system on each run.
    pub seed: Option<u64>,

    /// Patterns bound to the digit keys.
    ///
    /// The first name is bound to `1`, the second to `2`, and so on.
    #[derivative(Default(value = "default_pattern_keys()"))]
    pub pattern_keys: Vec<String>,
}

fn default_pattern_keys() -> Vec<String> {
    [
        "Glider",
        "Blinker",
        "Toad",
        "Pulsar",
        "Lightweight Spaceship (LWSS)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: isize, height: isize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the number of generations per second.
    pub fn set_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Sets the path of the pattern library.
    pub fn set_library<P: Into<PathBuf>>(mut self, library: P) -> Self {
        self.library = library.into();
        self
    }

    /// Sets the path of the save file.
    pub fn set_save_file<P: Into<PathBuf>>(mut self, save_file: P) -> Self {
        self.save_file = save_file.into();
        self
    }

    /// Sets the pattern name written to the save file.
    pub fn set_save_name<S: ToString>(mut self, save_name: S) -> Self {
        self.save_name = save_name.to_string();
        self
    }

    /// Sets the seed for random fills.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the patterns bound to the digit keys.
    pub fn set_pattern_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.pattern_keys = names.into_iter().map(|s| s.to_string()).collect();
        self
    }

    /// The name of the pattern bound to a digit key.
    pub fn pattern_for_key(&self, digit: u8) -> Option<&str> {
        let i = usize::from(digit.checked_sub(1)?);
        self.pattern_keys.get(i).map(String::as_str)
    }

    /// Creates a blank grid from the configuration.
    /// Returns an error if the width or the height is not positive.
    pub fn grid(&self) -> Result<Grid, Error> {
        Grid::new(self.width, self.height)
    }

    /// A random number generator for random fills.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
