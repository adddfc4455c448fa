mod args;
mod session;
#[cfg(feature = "tui")]
mod tui;

use args::{Args, Start};
use lifetorus_lib::load_from_file;
use session::{Command, Session};
use std::error::Error;

/// Runs the given number of generations, and prints the result.
fn run_headless(session: &mut Session, generations: u64) {
    for _ in 0..generations {
        session.handle(Command::Step);
    }
    print!("{}", session.grid);
    println!(
        "Generation: {}  Live cells: {}",
        session.generation,
        session.grid.population()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());

    let library = load_from_file(&args.config.library)?;
    let mut session = Session::new(args.config, library)?;

    match &args.start {
        Start::Blank => (),
        Start::Random => {
            session.handle(Command::Randomize);
        }
        Start::Pattern(name) => {
            if !session.load_pattern(name) {
                return Err(format!(
                    "no pattern {:?} in {}",
                    name,
                    session.config.library.display()
                )
                .into());
            }
        }
    }

    #[cfg(feature = "tui")]
    {
        if args.no_tui {
            run_headless(&mut session, args.generations);
        } else {
            tui::run(&mut session)?;
        }
    }

    #[cfg(not(feature = "tui"))]
    run_headless(&mut session, args.generations);

    Ok(())
}
