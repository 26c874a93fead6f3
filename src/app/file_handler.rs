//! File system helpers for the application layer.
//!
//! Validates the grid file path given on the command line and writes text
//! output (the optional grid dump). Uses the verbose logging macros from the
//! parent `app` module.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `grid_file_path` exists and is a regular file, returning it as `&str`.
///
/// # Arguments
/// * `grid_file_path` - Path to the grid file.
/// * `quiet_mode` - A boolean indicating whether to suppress verbose logging.
///
/// # Errors
/// Returns `AppError::General` if the path does not exist or is not a file,
/// and `AppError::InvalidPath` if it is not valid UTF-8.
pub fn validate_grid_file(grid_file_path: &Path, quiet_mode: bool) -> Result<&str, AppError> {
    if !grid_file_path.exists() {
        let error_msg = format!("File not found: {}", grid_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !grid_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", grid_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    grid_file_path.to_str().ok_or_else(|| {
        verbose_eprintln!(
            quiet_mode,
            "Input Error: Path is not valid UTF-8: {}",
            grid_file_path.display()
        );
        AppError::InvalidPath(grid_file_path.display().to_string())
    })
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// The writer is flushed before returning so the caller sees the complete
/// file immediately after a successful call.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
