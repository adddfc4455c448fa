use lifetorus_lib::{
    apply_pattern, clear, load_from_file, save, save_to_file, step, Error as LifeError, Grid,
    State,
};
use proptest::prelude::*;
use std::{collections::HashSet, env, error::Error, fs, path::PathBuf, process};

fn alive(grid: &Grid) -> Vec<(isize, isize)> {
    grid.alive_cells().collect()
}

/// A path in the temporary directory that no other test uses.
fn temp_file(name: &str) -> PathBuf {
    env::temp_dir().join(format!("lifetorus-{}-{}.txt", process::id(), name))
}

/// The pattern library shipped with the repository.
fn library_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../patterns.txt")
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let grid = apply_pattern(5, 5, &[(2, 1), (2, 2), (2, 3)])?;
    let grid = step(&grid);
    assert_eq!(alive(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    let grid = step(&grid);
    assert_eq!(alive(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    Ok(())
}

#[test]
fn block() -> Result<(), Box<dyn Error>> {
    let grid = apply_pattern(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)])?;
    assert_eq!(step(&grid), grid);
    Ok(())
}

#[test]
fn block_across_corner() -> Result<(), Box<dyn Error>> {
    // The four corners of a torus form a block.
    let grid = apply_pattern(6, 5, &[(0, 0), (0, 5), (4, 0), (4, 5)])?;
    assert_eq!(step(&grid), grid);
    Ok(())
}

#[test]
fn blinker_across_edge() -> Result<(), Box<dyn Error>> {
    let grid = apply_pattern(5, 5, &[(2, 4), (2, 0), (2, 1)])?;
    let grid = step(&grid);
    assert_eq!(alive(&grid), vec![(1, 0), (2, 0), (3, 0)]);
    Ok(())
}

#[test]
fn corner_diagonal() -> Result<(), Box<dyn Error>> {
    // Three cells around the corner at (0, 0), all of them on the far side
    // of an edge, bring it to life.
    let grid = apply_pattern(5, 4, &[(3, 4), (3, 0), (0, 4)])?;
    let next = step(&grid);
    assert_eq!(next.get(0, 0)?, State::Alive);
    Ok(())
}

#[test]
fn pulsar() -> Result<(), Box<dyn Error>> {
    let library = load_from_file(library_file())?;
    let pulsar = library.get("Pulsar").ok_or("no pulsar")?;
    let start = pulsar.apply(40, 20)?;
    assert_eq!(start.population(), 48);
    let mut grid = start.clone();
    for _ in 0..3 {
        grid = step(&grid);
        assert_ne!(grid.population(), 0);
    }
    assert_eq!(grid, start);
    Ok(())
}

#[test]
fn library() -> Result<(), Box<dyn Error>> {
    let library = load_from_file(library_file())?;
    assert_eq!(
        library.names().collect::<Vec<_>>(),
        vec![
            "Glider",
            "Blinker",
            "Toad",
            "Pulsar",
            "Lightweight Spaceship (LWSS)"
        ]
    );
    Ok(())
}

#[test]
fn bounds_tolerance() -> Result<(), Box<dyn Error>> {
    let (width, height) = (4, 3);
    let grid = apply_pattern(width, height, &[(-1, 0), (height, 0)])?;
    assert_eq!(grid.population(), 0);
    assert_eq!(grid.get(height, 0), Err(LifeError::OutOfBounds((height, 0))));
    Ok(())
}

#[test]
fn malformed_input() {
    let library = save::decode("# Pattern: X\n1,2\nabc\n");
    assert_eq!(library.get("X").map(|p| p.cells.len()), Some(1));
}

#[test]
fn file_round_trip() -> Result<(), Box<dyn Error>> {
    let path = temp_file("round-trip");
    let grid = apply_pattern(8, 6, &[(0, 7), (5, 0), (3, 3), (3, 4)])?;
    save_to_file(&path, &grid, "X")?;
    let library = load_from_file(&path)?;
    fs::remove_file(&path)?;

    let pattern = library.first().ok_or("no pattern")?;
    assert_eq!(pattern.name, "X");
    assert_eq!(pattern.cells, vec![(0, 7), (3, 3), (3, 4), (5, 0)]);
    assert_eq!(pattern.apply(8, 6)?, grid);
    Ok(())
}

#[test]
fn save_overwrites() -> Result<(), Box<dyn Error>> {
    let path = temp_file("overwrite");
    save_to_file(&path, &apply_pattern(4, 4, &[(0, 0)])?, "First")?;
    save_to_file(&path, &apply_pattern(4, 4, &[(1, 1)])?, "Second")?;
    let library = load_from_file(&path)?;
    fs::remove_file(&path)?;

    assert_eq!(library.names().collect::<Vec<_>>(), vec!["Second"]);
    Ok(())
}

#[test]
fn missing_file() -> Result<(), Box<dyn Error>> {
    let library = load_from_file(temp_file("does-not-exist"))?;
    assert!(library.is_empty());
    Ok(())
}

#[test]
fn invalid_dimension() {
    assert_eq!(clear(0, 10), Err(LifeError::InvalidDimension(0, 10)));
    assert_eq!(
        apply_pattern(10, -3, &[]),
        Err(LifeError::InvalidDimension(10, -3))
    );
}

/// Grids up to 12x12 with arbitrary cells.
fn grids() -> impl Strategy<Value = Grid> {
    (1isize..=12, 1isize..=12).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<bool>(), (width * height) as usize).prop_map(
            move |cells| {
                let alive: Vec<_> = cells
                    .iter()
                    .enumerate()
                    .filter(|&(_, &alive)| alive)
                    .map(|(i, _)| (i as isize / width, i as isize % width))
                    .collect();
                apply_pattern(width, height, &alive).expect("positive dimensions")
            },
        )
    })
}

proptest! {
    #[test]
    fn deterministic(grid in grids()) {
        prop_assert_eq!(step(&grid), step(&grid));
    }

    #[test]
    fn same_dimensions(grid in grids()) {
        prop_assert_eq!(step(&grid).dimensions(), grid.dimensions());
    }

    #[test]
    fn input_unchanged(grid in grids()) {
        let before = grid.clone();
        let _ = step(&grid);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn encode_decode(grid in grids()) {
        let library = save::decode(&save::encode(&grid, "X"));
        let decoded: HashSet<_> = library
            .get("X")
            .map(|p| p.cells.iter().copied().collect())
            .unwrap_or_default();
        let expected: HashSet<_> = grid.alive_cells().collect();
        prop_assert_eq!(decoded, expected);
    }
}
