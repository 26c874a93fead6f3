//! Main application orchestrator.
//!
//! Coordinates one run of the snake search:
//! 1. Initializes logging.
//! 2. Validates the grid file path.
//! 3. Loads the grid, optionally writing a copy back out.
//! 4. Searches for two disjoint snakes with equal sums, drawing discovered
//!    snakes when visualization is on.
//! 5. Prints the solution, or `FAIL` when none exists.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing::{self, VisualizeOptions};
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use std::io::{self, Write};
use std::time::Duration;

/// Runs the main application logic based on parsed command-line arguments,
/// printing the result to standard output.
///
/// # Errors
/// Returns `AppError` if the grid cannot be loaded or output cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_app_with_output(cli, &mut out)
}

/// Same as [`run_app`], writing visualization and the result to `out`.
pub fn run_app_with_output(cli: Cli, out: &mut dyn Write) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The run continues without verbose file logging.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_steps(&cli, out);

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }
    // Final flush of the log before exiting.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_steps(cli: &Cli, out: &mut dyn Write) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let grid_file = file_handler::validate_grid_file(&cli.grid_file, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Processing File: {}", grid_file);
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let grid = processing::load_grid(grid_file, cli.delimiter, quiet_mode)?;

    if let Some(save_path) = &cli.save_grid {
        file_handler::write_content_to_file(save_path, &grid.to_delimited(cli.delimiter))
            .map_err(|e| {
                verbose_eprintln!(
                    quiet_mode,
                    "[ERROR] Failed to save grid to {}: {}",
                    save_path.display(),
                    e
                );
                AppError::Io(e)
            })?;
        verbose_println!(quiet_mode, "   => Grid saved to {}", save_path.display());
    }

    let visualize = VisualizeOptions {
        enabled: cli.visualize,
        delay: Duration::from_millis(cli.delay_ms),
        use_color: cli.color,
    };
    let solution = processing::solve_grid(&grid, visualize, out, quiet_mode)?;

    if visualize.enabled {
        // Leave the last frame behind before printing the result.
        write!(out, "{}", crate::render::ANSI_CLEAR_SCREEN)?;
    }
    processing::write_report(&grid, solution.as_ref(), out, cli.color, quiet_mode)?;
    out.flush()?;
    Ok(())
}
