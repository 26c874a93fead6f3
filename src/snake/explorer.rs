use super::point::Point;
use super::snake_path::{SnakePath, SNAKE_LEN};
use crate::grid::Grid;

/// Upper bound on complete snakes grown from one origin: two choices
/// (right or bottom) for each of the six cells after the first.
pub const MAX_SNAKES_PER_ORIGIN: usize = 1 << (SNAKE_LEN - 1);

/// `SnakeExplorer` finds every complete snake anchored at a grid cell.
///
/// Snakes only grow rightward or downward. That keeps the branching factor at
/// two per step and the result per origin at most `MAX_SNAKES_PER_ORIGIN`.
pub struct SnakeExplorer;

impl SnakeExplorer {
    /// Returns all complete snakes whose first cell is `origin`.
    ///
    /// Snakes that extend right are listed before those that extend down at
    /// every branching step, so the order is fixed for a given grid.
    pub fn paths_from_origin(grid: &Grid, origin: Point) -> Vec<SnakePath> {
        let snakes = Self::enumerate_from(grid, origin, None, SnakePath::new());
        debug_assert!(
            snakes.len() <= MAX_SNAKES_PER_ORIGIN,
            "origin {} produced {} snakes",
            origin,
            snakes.len()
        );
        snakes
    }

    /// Grows `path` by `point` and recurses into the right and bottom neighbors.
    ///
    /// `path` is owned by this branch; each child branch receives its own
    /// clone. Dead branches (off-grid cells, adjacency violations) yield
    /// nothing.
    pub fn enumerate_from(
        grid: &Grid,
        point: Point,
        predecessor: Option<Point>,
        mut path: SnakePath,
    ) -> Vec<SnakePath> {
        let Some(value) = grid.value_at(point) else {
            return Vec::new();
        };

        if !path.try_extend(point, predecessor, value) {
            return Vec::new();
        }

        if path.is_complete() {
            return vec![path];
        }

        let mut snakes = Self::enumerate_from(grid, point.right(), Some(point), path.clone());
        snakes.extend(Self::enumerate_from(grid, point.bottom(), Some(point), path));
        snakes
    }
}
