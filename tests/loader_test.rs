mod common;

use common::{grid_from, SAMPLE1, SAMPLE2, SAMPLE3};
use seven_snake::grid_loader::{load_grid_from_file, parse_grid, DEFAULT_DELIMITER};
use seven_snake::SnakeSolver;

fn sample_path(name: &str) -> String {
    format!("{}/samples/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn bundled_samples_match_fixtures() {
    for (name, fixture) in [
        ("sample1.csv", SAMPLE1),
        ("sample2.csv", SAMPLE2),
        ("sample3.csv", SAMPLE3),
    ] {
        let grid = load_grid_from_file(&sample_path(name), DEFAULT_DELIMITER).unwrap();
        assert_eq!(grid, grid_from(fixture), "{}", name);
    }
}

#[test]
fn bundled_samples_are_solvable() {
    for name in ["sample1.csv", "sample2.csv", "sample3.csv"] {
        let grid = load_grid_from_file(&sample_path(name), DEFAULT_DELIMITER).unwrap();
        let (first, second) = SnakeSolver::new(&grid).solve().expect(name);
        assert_eq!(first.sum(), second.sum());
        assert!(!first.overlaps(&second));
    }
}

#[test]
fn delimited_output_parses_back() {
    let grid = grid_from(SAMPLE2);
    let text = grid.to_delimited('\t');
    assert_eq!(parse_grid(&text, '\t').unwrap(), grid);
}
