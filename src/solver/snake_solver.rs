use super::sum_index::SumIndex;
use crate::grid::Grid;
use crate::snake::{Point, SnakeExplorer, SnakePath};

/// Two disjoint complete snakes with equal sums.
///
/// The first snake is the one whose discovery completed the pair, the second
/// is its earlier-discovered partner.
pub type SnakePair = (SnakePath, SnakePath);

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Grid cells used as an origin.
    pub origins_scanned: usize,
    /// Complete snakes produced by the explorer, including the final one.
    pub snakes_discovered: usize,
    /// Snakes held by the sum index when the search stopped.
    pub snakes_indexed: usize,
    /// Distinct sums held by the sum index when the search stopped.
    pub distinct_sums: usize,
}

/// Searches a grid for two disjoint snakes with equal sums.
pub struct SnakeSolver<'g> {
    grid: &'g Grid,
}

impl<'g> SnakeSolver<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Returns the first disjoint equal-sum pair, or `None` if the grid has none.
    pub fn solve(&self) -> Option<SnakePair> {
        self.solve_with_observer(|_| {})
    }

    /// Same as [`SnakeSolver::solve`], calling `observer` with every complete
    /// snake in discovery order before it is matched or indexed.
    pub fn solve_with_observer<F>(&self, observer: F) -> Option<SnakePair>
    where
        F: FnMut(&SnakePath),
    {
        self.solve_with_stats(observer).0
    }

    /// Runs the search and also reports how much of the grid it covered.
    ///
    /// Origins are visited row by row, left to right. Each origin's snakes
    /// are checked against the index in explorer order; the search stops at
    /// the first snake that finds a disjoint partner with the same sum.
    pub fn solve_with_stats<F>(&self, mut observer: F) -> (Option<SnakePair>, SolveStats)
    where
        F: FnMut(&SnakePath),
    {
        let mut index = SumIndex::new();
        let mut stats = SolveStats::default();
        let size = self.grid.size() as i32;

        for row in 0..size {
            for col in 0..size {
                stats.origins_scanned += 1;
                let snakes = SnakeExplorer::paths_from_origin(self.grid, Point::new(col, row));

                for snake in snakes {
                    stats.snakes_discovered += 1;
                    observer(&snake);

                    if let Some(pair) = index.match_or_insert(snake) {
                        stats.snakes_indexed = index.len();
                        stats.distinct_sums = index.distinct_sums();
                        return (Some(pair), stats);
                    }
                }
            }
        }

        stats.snakes_indexed = index.len();
        stats.distinct_sums = index.distinct_sums();
        (None, stats)
    }
}
