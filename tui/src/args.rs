//! Parsing command-line arguments.

use clap::{
    command,
    error::{Error, ErrorKind},
    value_parser, Arg, ArgAction, ArgMatches, Command,
};
use lifetorus_lib::Config;
use std::{ffi::OsString, fs, path::Path, path::PathBuf};

/// How the grid looks before the first generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Start {
    Blank,
    Random,
    Pattern(String),
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) start: Start,
    pub(crate) generations: u64,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn build() -> Command {
    let app = command!()
        .long_about(
            "Conway's Game of Life on a grid whose edges wrap around.\n\
             \n\
             Patterns are stored as plain text: a line `# Pattern: <name>` \
             followed by one `row,col` line for each living cell.\n\
             \n\
             Options given on the command line override those \
             in the configuration file.\n",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Configuration file (.toml, .yaml or .json)")
                .short('C')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("WIDTH")
                .help("Width of the grid")
                .short('x')
                .long("width")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("HEIGHT")
                .help("Height of the grid")
                .short('y')
                .long("height")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("FPS")
                .help("Generations per second while running")
                .short('f')
                .long("fps")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed for random fills")
                .long_help(
                    "Seed for random fills\n\
                     Without a seed, every run gives different random grids.\n",
                )
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("PATTERNS")
                .help("Pattern library, bound to the digit keys")
                .short('p')
                .long("patterns")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SAVEFILE")
                .help("File to save the grid to, and load it from")
                .short('s')
                .long("save-file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Starts with a pattern from the library")
                .long("pattern")
                .value_name("NAME")
                .conflicts_with("RANDOM"),
        )
        .arg(
            Arg::new("RANDOM")
                .help("Starts with a random grid")
                .short('r')
                .long("random")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "tui")]
    let app = app
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run before printing the grid")
                .long_help(
                    "Number of generations to run before printing the grid\n\
                     Only useful when --no-tui is set.\n",
                )
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64))
                .requires("NOTUI"),
        )
        .arg(
            Arg::new("NOTUI")
                .help("Prints the grid without entering the TUI")
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        );

    #[cfg(not(feature = "tui"))]
    let app = app.arg(
        Arg::new("GENERATIONS")
            .help("Number of generations to run before printing the grid")
            .short('g')
            .long("generations")
            .value_parser(value_parser!(u64)),
    );

    app
}

/// Reads a configuration file. The format is chosen by the extension.
fn read_config(path: &Path) -> Result<Config, Error> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("unable to read {}: {}\n", path.display(), e),
        )
    })?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        _ => Err(String::from(
            "unknown format, expected .toml, .yaml or .json",
        )),
    };
    config.map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid configuration file {}: {}\n", path.display(), e),
        )
    })
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the given arguments. The first one is the program name.
    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };

        if let Some(&width) = matches.get_one::<u32>("WIDTH") {
            config.width = width as isize;
        }
        if let Some(&height) = matches.get_one::<u32>("HEIGHT") {
            config.height = height as isize;
        }
        if let Some(&fps) = matches.get_one::<u32>("FPS") {
            config.fps = fps;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }
        if let Some(path) = matches.get_one::<PathBuf>("PATTERNS") {
            config.library = path.clone();
        }
        if let Some(path) = matches.get_one::<PathBuf>("SAVEFILE") {
            config.save_file = path.clone();
        }

        // Values from a configuration file are not checked by clap.
        config
            .grid()
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;
        if config.fps == 0 {
            return Err(Error::raw(
                ErrorKind::InvalidValue,
                "fps must be a positive integer\n",
            ));
        }

        let start = if let Some(name) = matches.get_one::<String>("PATTERN") {
            Start::Pattern(name.clone())
        } else if matches.get_flag("RANDOM") {
            Start::Random
        } else {
            Start::Blank
        };
        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0);
        #[cfg(feature = "tui")]
        let no_tui = matches.get_flag("NOTUI");

        Ok(Args {
            config,
            start,
            generations,
            #[cfg(feature = "tui")]
            no_tui,
        })
    }
}
