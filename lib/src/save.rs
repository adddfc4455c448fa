//! Saves and loads patterns.
//!
//! The format is plain text, one record per line:
//!
//! ```text
//! # Pattern: Blinker
//! 2,1
//! 2,2
//! 2,3
//! # Pattern: Block
//! 0,0
//! ...
//! ```
//!
//! Each pattern starts with a header line `# Pattern: <name>`, followed by
//! one `row,col` line for each living cell. Blank lines are ignored, and so
//! is any line that is neither a header nor a pair of integers.

use crate::{
    cells::Coord,
    grid::Grid,
    pattern::{Pattern, PatternLibrary},
};
use log::{debug, info, trace};
use std::{fs, io, mem, path::Path};

/// The beginning of a header line.
const HEADER: &str = "# Pattern:";

/// The name as it can be written on a header line: line breaks become
/// spaces, and surrounding whitespace is dropped.
fn header_name(name: &str) -> String {
    name.split(|c| c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encodes the living cells of a grid as a pattern with the given name.
///
/// Cells are listed from top to bottom, and from left to right within each row.
/// The name is written on a single line, trimmed, so that it reads back
/// unchanged.
pub fn encode(grid: &Grid, name: &str) -> String {
    let mut text = format!("{} {}\n", HEADER, header_name(name));
    for (row, col) in grid.alive_cells() {
        text.push_str(&format!("{},{}\n", row, col));
    }
    text
}

/// Parses a header line, returning the name.
fn parse_header(line: &str) -> Option<&str> {
    line.strip_prefix(HEADER).map(str::trim)
}

/// Parses a line of two comma-separated integers.
fn parse_coord(line: &str) -> Option<Coord> {
    let (row, col) = line.split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}

/// State of the decoder.
enum Parser {
    /// Looking for a header.
    ///
    /// Coordinates before the first header belong to no pattern.
    Seeking,

    /// Collecting the coordinates of a pattern.
    Collecting(Pattern),
}

impl Parser {
    /// Finishes the current pattern and adds it to the library,
    /// unless it has no name or no cells.
    fn finish(self, library: &mut PatternLibrary) {
        if let Parser::Collecting(pattern) = self {
            if pattern.is_valid() {
                library.insert(pattern);
            } else {
                debug!("Discarding empty pattern {:?}", pattern.name);
            }
        }
    }
}

/// Decodes all patterns in the text.
///
/// Malformed lines are skipped. A pattern without any cells is discarded.
/// If two patterns have the same name, the later one wins.
pub fn decode(text: &str) -> PatternLibrary {
    let mut library = PatternLibrary::new();
    let mut parser = Parser::Seeking;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = parse_header(line) {
            mem::replace(&mut parser, Parser::Seeking).finish(&mut library);
            parser = Parser::Collecting(Pattern::new(name, Vec::new()));
        } else if let Some(coord) = parse_coord(line) {
            match &mut parser {
                Parser::Collecting(pattern) => pattern.cells.push(coord),
                Parser::Seeking => {
                    trace!("Line {}: cell {:?} before any header", i + 1, coord)
                }
            }
        } else {
            trace!("Line {}: skipping {:?}", i + 1, line);
        }
    }
    parser.finish(&mut library);

    debug!("Decoded {} patterns", library.len());
    library
}

/// Encodes the living cells of a grid, and writes them to a file.
pub fn write_file<P: AsRef<Path>>(path: P, grid: &Grid, name: &str) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, encode(grid, name))?;
    info!(
        "Saved {} cells as {:?} to {}",
        grid.population(),
        name,
        path.display()
    );
    Ok(())
}

/// Reads and decodes a pattern file.
///
/// A missing file gives an empty library.
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<PatternLibrary> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            let library = decode(&text);
            info!("Loaded {} patterns from {}", library.len(), path.display());
            Ok(library)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No pattern file at {}", path.display());
            Ok(PatternLibrary::new())
        }
        Err(e) => Err(e),
    }
}
