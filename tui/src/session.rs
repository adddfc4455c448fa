//! The state of a running simulation, and the commands that change it.

use lifetorus_lib::{
    apply_pattern, clear, load_from_file, randomize, save_to_file, step, toggle_alive, Config,
    Error, Grid, PatternLibrary,
};
use log::{debug, error, info};
use rand::rngs::StdRng;

/// What the user asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Starts or pauses the simulation.
    TogglePause,
    /// Advances one generation and pauses.
    Step,
    /// Kills all cells.
    Clear,
    /// Fills the grid randomly.
    Randomize,
    /// Saves the grid to the save file.
    Save,
    /// Loads the first pattern in the save file.
    LoadSaved,
    /// Loads the library pattern bound to a digit key.
    LoadPattern(u8),
    /// Sets a cell alive.
    Paint(isize, isize),
    /// Advances one generation if running.
    Tick,
    /// Quits.
    Quit,
}

pub(crate) struct Session {
    pub(crate) config: Config,
    pub(crate) library: PatternLibrary,
    pub(crate) grid: Grid,
    pub(crate) generation: u64,
    pub(crate) running: bool,

    /// The last thing worth telling the user.
    pub(crate) message: Option<String>,

    rng: StdRng,
}

impl Session {
    /// Starts with a blank grid.
    pub(crate) fn new(config: Config, library: PatternLibrary) -> Result<Self, Error> {
        let grid = config.grid()?;
        let rng = config.rng();
        Ok(Session {
            config,
            library,
            grid,
            generation: 0,
            running: false,
            message: None,
            rng,
        })
    }

    /// Replaces the grid and resets the generation counter.
    fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }

    fn advance(&mut self) {
        self.grid = step(&self.grid);
        self.generation += 1;
    }

    fn notify(&mut self, message: String) {
        info!("{}", message);
        self.message = Some(message);
    }

    /// Loads a pattern from the library by name.
    ///
    /// Returns `false` if there is no such pattern.
    pub(crate) fn load_pattern(&mut self, name: &str) -> bool {
        let grid = match self.library.get(name) {
            Some(pattern) => pattern.apply(self.config.width, self.config.height),
            None => return false,
        };
        match grid {
            Ok(grid) => {
                self.reset(grid);
                self.notify(format!("Loaded pattern: {}", name));
                true
            }
            Err(e) => {
                error!("Unable to load {}: {}", name, e);
                false
            }
        }
    }

    fn randomize(&mut self) {
        match randomize(self.config.width, self.config.height, &mut self.rng) {
            Ok(grid) => self.reset(grid),
            Err(e) => error!("Unable to randomize: {}", e),
        }
    }

    fn clear(&mut self) {
        match clear(self.config.width, self.config.height) {
            Ok(grid) => self.reset(grid),
            Err(e) => error!("Unable to clear: {}", e),
        }
    }

    fn save(&mut self) {
        let path = &self.config.save_file;
        match save_to_file(path, &self.grid, &self.config.save_name) {
            Ok(()) => self.notify(format!("Saved current pattern to {}", path.display())),
            Err(e) => {
                let message = format!("Unable to save to {}: {}", path.display(), e);
                error!("{}", message);
                self.message = Some(message);
            }
        }
    }

    fn load_saved(&mut self) {
        let path = &self.config.save_file;
        let library = match load_from_file(path) {
            Ok(library) => library,
            Err(e) => {
                let message = format!("Unable to load {}: {}", path.display(), e);
                error!("{}", message);
                self.message = Some(message);
                return;
            }
        };
        let pattern = match library.first() {
            Some(pattern) => pattern,
            None => {
                debug!("Nothing saved in {}", path.display());
                return;
            }
        };
        match apply_pattern(self.config.width, self.config.height, &pattern.cells) {
            Ok(grid) => {
                self.reset(grid);
                self.notify(format!("Loaded saved pattern: {}", pattern.name));
            }
            Err(e) => error!("Unable to load {}: {}", pattern.name, e),
        }
    }

    /// Handles a command.
    ///
    /// Returns `false` when the user wants to quit.
    pub(crate) fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::TogglePause => self.running = !self.running,
            Command::Step => {
                self.advance();
                self.running = false;
            }
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize(),
            Command::Save => self.save(),
            Command::LoadSaved => self.load_saved(),
            Command::LoadPattern(digit) => {
                if let Some(name) = self.config.pattern_for_key(digit).map(String::from) {
                    if !self.load_pattern(&name) {
                        debug!("No pattern {:?} in the library", name);
                    }
                }
            }
            Command::Paint(row, col) => {
                if let Err(e) = toggle_alive(&mut self.grid, row, col) {
                    debug!("Ignoring paint: {}", e);
                }
            }
            Command::Tick => {
                if self.running {
                    self.advance();
                }
            }
            Command::Quit => return false,
        }
        true
    }

    /// One line describing the current state.
    pub(crate) fn status(&self) -> String {
        format!(
            "{}  Generation: {:<5}  Live cells: {:<5}  FPS: {}",
            if self.running { "▶" } else { "⏸" },
            self.generation,
            self.grid.population(),
            self.config.fps
        )
    }
}
