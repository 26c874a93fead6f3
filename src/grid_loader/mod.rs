// error module
mod error;
// loader module
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GridLoaderError;
pub use loader::{load_grid_from_file, parse_grid, tokenize, DEFAULT_DELIMITER};
