// point module
mod point;
// snake path module
mod snake_path;
// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{SnakeExplorer, MAX_SNAKES_PER_ORIGIN};
pub use point::Point;
pub use snake_path::{SnakePath, SNAKE_LEN};
