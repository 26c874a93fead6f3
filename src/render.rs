//! Text visualization of a snake laid over its grid.
//!
//! Every cell is drawn as a three-character glyph: ` X ` for cells of the
//! snake and ` O ` for the rest. With color enabled, snake glyphs are wrapped
//! in ANSI red.

use std::io::Write;

use crate::grid::Grid;
use crate::snake::{Point, SnakePath};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";
/// Clears the terminal and moves the cursor home.
pub const ANSI_CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes `grid` with the cells of `snake` highlighted, followed by a blank line.
pub fn write_snake_on_grid(
    grid: &Grid,
    snake: &SnakePath,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    writeln!(writer)?;
    for y in 0..grid.size() as i32 {
        for x in 0..grid.size() as i32 {
            if !snake.contains(Point::new(x, y)) {
                write!(writer, " O ")?;
            } else if use_color {
                write!(writer, "{} X {}", ANSI_RED, ANSI_RESET)?;
            } else {
                write!(writer, " X ")?;
            }
        }
        writeln!(writer)?;
    }
    writeln!(writer)?;
    Ok(())
}
