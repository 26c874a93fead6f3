//! Handles the core steps of a run: loading the grid, searching it for a
//! snake pair, and reporting the outcome.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grid::Grid;
use crate::grid_loader;
use crate::render::{self, ANSI_CLEAR_SCREEN};
use crate::snake::SnakePath;
use crate::solver::{SnakePair, SnakeSolver, SolveStats};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// How discovered snakes are drawn while the search runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisualizeOptions {
    /// Draw every discovered snake.
    pub enabled: bool,
    /// Pause after each frame.
    pub delay: Duration,
    /// Highlight snake cells with ANSI color.
    pub use_color: bool,
}

/// Loads and validates the grid stored at `grid_file`.
///
/// # Errors
/// Returns `AppError::GridLoad` if the file cannot be read or is malformed.
pub fn load_grid(grid_file: &str, delimiter: char, quiet_mode: bool) -> Result<Grid, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading grid from file...");
    let grid = grid_loader::load_grid_from_file(grid_file, delimiter).map_err(|e| {
        verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
        AppError::GridLoad(e)
    })?;
    verbose_println!(
        quiet_mode,
        "   => Loaded {}x{} grid.",
        grid.size(),
        grid.size()
    );
    Ok(grid)
}

/// Searches `grid` for a pair of disjoint equal-sum snakes.
///
/// With visualization enabled every discovered snake is drawn to `out`,
/// clearing the screen before each frame. Drawing never changes the search:
/// after the first write failure further frames are skipped and the error is
/// returned once the search finishes.
///
/// # Errors
/// Returns `AppError::Io` if drawing a frame failed.
pub fn solve_grid(
    grid: &Grid,
    visualize: VisualizeOptions,
    out: &mut dyn Write,
    quiet_mode: bool,
) -> Result<Option<SnakePair>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 2] Searching for two disjoint snakes with equal sums...");

    let mut draw_error: Option<std::io::Error> = None;
    let solver = SnakeSolver::new(grid);
    let (solution, stats) = solver.solve_with_stats(|snake| {
        if !visualize.enabled || draw_error.is_some() {
            return;
        }
        match draw_frame(grid, snake, out, visualize.use_color) {
            Ok(()) => {
                if !visualize.delay.is_zero() {
                    thread::sleep(visualize.delay);
                }
            }
            Err(e) => draw_error = Some(e),
        }
    });

    print_solve_summary(&stats, solution.is_some(), quiet_mode);

    if let Some(e) = draw_error {
        verbose_eprintln!(quiet_mode, "   [ERROR] Failed to draw snake: {}", e);
        return Err(AppError::Io(e));
    }
    Ok(solution)
}

/// Writes the outcome of the search to `out`.
///
/// A found pair is printed as `Solution: {A} \n      AND {B}`, preceded by a
/// drawing of both snakes unless `quiet_mode` is set. No pair prints `FAIL`.
pub fn write_report(
    grid: &Grid,
    solution: Option<&SnakePair>,
    out: &mut dyn Write,
    use_color: bool,
    quiet_mode: bool,
) -> Result<(), AppError> {
    verbose_println!(quiet_mode, "\n[STEP 3] Reporting result...");
    match solution {
        Some((first, second)) => {
            if !quiet_mode {
                writeln!(out, "Visualization of the solution:")?;
                render::write_snake_on_grid(grid, first, out, use_color)?;
                render::write_snake_on_grid(grid, second, out, use_color)?;
            }
            writeln!(out, "Solution: {} \n      AND {}", first, second)?;
            verbose_println!(quiet_mode, "   => Solution: {}", first);
            verbose_println!(quiet_mode, "   =>      AND {}", second);
        }
        None => {
            writeln!(out, "FAIL")?;
            verbose_println!(quiet_mode, "   => No pair of disjoint snakes with equal sums exists.");
        }
    }
    Ok(())
}

fn draw_frame(
    grid: &Grid,
    snake: &SnakePath,
    out: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    write!(out, "{}", ANSI_CLEAR_SCREEN)?;
    render::write_snake_on_grid(grid, snake, out, use_color)?;
    out.flush()
}

/// Logs the search counters. Only active if `quiet_mode` is false.
fn print_solve_summary(stats: &SolveStats, solved: bool, quiet_mode: bool) {
    if quiet_mode {
        return;
    }

    verbose_println!(quiet_mode, "   Search Summary:");
    verbose_println!(quiet_mode, "     Origins scanned:   {}", stats.origins_scanned);
    verbose_println!(quiet_mode, "     Snakes discovered: {}", stats.snakes_discovered);
    verbose_println!(
        quiet_mode,
        "     Snakes indexed:    {} across {} distinct sum(s)",
        stats.snakes_indexed,
        stats.distinct_sums
    );
    let status = if solved { "✅ Pair found" } else { "❌ No pair" };
    verbose_println!(quiet_mode, "     Status: {}", status);
}
