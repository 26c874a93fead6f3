//! Common fixtures and checks shared across integration tests.

#![allow(dead_code)]

use seven_snake::snake::SNAKE_LEN;
use seven_snake::{Grid, SnakePath};

/// Builds a grid from a literal matrix.
pub fn grid_from(rows: &[&[u16]]) -> Grid {
    Grid::from_rows(rows.iter().map(|row| row.to_vec()).collect()).expect("fixture grid is valid")
}

/// Checks that a snake is well formed and lies inside `grid`.
pub fn assert_valid_snake(grid: &Grid, snake: &SnakePath) {
    let points = snake.points();
    assert_eq!(points.len(), SNAKE_LEN, "{} is not complete", snake);
    let expected_sum: u32 = points
        .iter()
        .map(|p| u32::from(grid.value_at(*p).expect("snake cell inside grid")))
        .sum();
    assert_eq!(snake.sum(), expected_sum, "{} has a stale sum", snake);

    for (i, p) in points.iter().enumerate() {
        for (j, q) in points.iter().enumerate().skip(i + 1) {
            assert_ne!(p, q, "{} repeats a cell", snake);
            if j == i + 1 {
                assert!(p.is_adjacent_to(*q), "{} is broken between {} and {}", snake, p, q);
            } else {
                assert!(!p.is_adjacent_to(*q), "{} touches itself at {} and {}", snake, p, q);
            }
        }
    }
}

/// Checks the contract of a returned pair: both valid, equal sums, no shared cell.
pub fn assert_valid_pair(grid: &Grid, first: &SnakePath, second: &SnakePath) {
    assert_valid_snake(grid, first);
    assert_valid_snake(grid, second);
    assert_eq!(first.sum(), second.sum());
    for p in first.points() {
        assert!(!second.contains(*p), "{} and {} share {}", first, second, p);
    }
}

// Sample grids; each holds at least one pair of disjoint equal-sum snakes.

pub const SAMPLE1: &[&[u16]] = &[
    &[68, 32, 130, 60, 253, 230, 241, 194, 107, 48],
    &[249, 14, 199, 221, 1, 228, 136, 117, 52, 162],
    &[15, 11, 13, 4, 195, 110, 216, 14, 113, 224],
    &[253, 119, 176, 118, 112, 235, 148, 11, 213, 51],
    &[95, 151, 61, 170, 256, 216, 97, 155, 145, 255],
    &[201, 17, 245, 124, 206, 212, 88, 187, 191, 44],
    &[224, 55, 83, 201, 189, 250, 15, 240, 22, 157],
    &[201, 87, 86, 116, 6, 102, 118, 207, 176, 180],
    &[235, 137, 2, 196, 66, 105, 218, 28, 246, 186],
    &[102, 211, 248, 182, 212, 177, 0, 169, 234, 14],
];

pub const SAMPLE2: &[&[u16]] = &[
    &[28, 46, 43, 184, 86, 157, 128, 108],
    &[18, 81, 220, 201, 190, 227, 137, 18],
    &[14, 186, 238, 163, 194, 216, 84, 90],
    &[120, 118, 12, 90, 166, 88, 69, 184],
    &[93, 228, 212, 186, 181, 185, 228, 82],
    &[204, 236, 127, 250, 142, 255, 256, 181],
    &[232, 236, 179, 233, 249, 113, 166, 85],
    &[137, 245, 158, 155, 208, 159, 106, 250],
];

pub const SAMPLE3: &[&[u16]] = &[
    &[121, 66, 189, 242, 33, 6, 240, 132, 119, 98, 240, 243, 203, 77, 118],
    &[77, 199, 7, 32, 81, 21, 154, 15, 137, 242, 198, 218, 202, 227, 68],
    &[187, 49, 18, 69, 253, 111, 132, 223, 154, 215, 197, 179, 208, 118, 172],
    &[14, 143, 83, 167, 53, 108, 136, 145, 63, 32, 246, 247, 45, 176, 34],
    &[210, 77, 10, 150, 218, 212, 60, 22, 23, 193, 169, 142, 120, 18, 158],
    &[3, 39, 55, 16, 101, 208, 149, 134, 79, 21, 173, 160, 184, 70, 193],
    &[192, 235, 197, 52, 138, 220, 121, 154, 223, 132, 155, 173, 5, 212, 161],
    &[10, 192, 68, 30, 170, 238, 180, 180, 142, 250, 11, 31, 10, 189, 128],
    &[233, 152, 163, 90, 186, 94, 160, 189, 135, 153, 193, 53, 13, 67, 158],
    &[256, 113, 137, 122, 167, 95, 222, 49, 52, 164, 170, 114, 224, 86, 40],
    &[172, 111, 230, 138, 115, 61, 17, 97, 161, 93, 142, 174, 43, 176, 66],
    &[215, 149, 138, 237, 177, 213, 148, 214, 209, 18, 211, 79, 102, 2, 244],
    &[222, 113, 16, 233, 147, 174, 116, 34, 146, 61, 125, 23, 17, 101, 220],
    &[25, 6, 246, 61, 87, 153, 122, 10, 211, 27, 58, 174, 64, 129, 244],
    &[31, 180, 113, 101, 62, 61, 87, 122, 140, 65, 3, 249, 204, 25, 138],
];
