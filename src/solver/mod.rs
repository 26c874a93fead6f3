// sum index module
mod sum_index;
// solver module
mod snake_solver;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use snake_solver::{SnakePair, SnakeSolver, SolveStats};
pub use sum_index::SumIndex;
