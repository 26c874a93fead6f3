//! Finds two disjoint "snakes" with equal sums in a square grid of weights.
//!
//! A snake is a path of seven distinct cells in which each cell touches the
//! previous and next cells and no other cell of the path. The search grows
//! every snake that starts at a cell and extends only right or down, then
//! buckets complete snakes by sum until two in the same bucket share no cell.
//!
//! # Modules
//!
//! - [`snake`]: points, snake paths and the per-origin explorer
//! - [`solver`]: the grid scan and the sum index
//! - [`grid`] / [`grid_loader`]: the validated grid and its delimited-text reader
//! - [`render`]: text drawing of a snake over its grid
//! - [`app`]: command-line front end

pub mod app;
pub mod grid;
pub mod grid_loader;
pub mod render;
pub mod snake;
pub mod solver;

// Re-export commonly used types
pub use grid::Grid;
pub use snake::{Point, SnakePath};
pub use solver::{SnakePair, SnakeSolver};
