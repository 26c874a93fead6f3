use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds two disjoint 7-cell snakes with equal sums in a square grid.", long_about = None)]
pub struct Cli {
    /// Delimited text file holding an NxN grid of integers 0..256
    pub grid_file: PathBuf,

    /// Suppress verbose output, only printing the solution or 'FAIL'.
    #[clap(short, long)]
    pub quiet: bool,

    /// Character separating values on each line of the grid file.
    #[clap(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Draw every snake as it is discovered.
    #[clap(long)]
    pub visualize: bool,

    /// Pause after each visualized snake, in milliseconds.
    #[clap(long, default_value_t = 1)]
    pub delay_ms: u64,

    /// Highlight snake cells in red.
    #[clap(long)]
    pub color: bool,

    /// Where verbose output is written.
    #[clap(long, default_value = "sevensnake.log")]
    pub log_file: PathBuf,

    /// Write the loaded grid back out to this file.
    #[clap(long)]
    pub save_grid: Option<PathBuf>,
}
