use std::path::PathBuf;

use clap::Parser;

/// Runs Game of Life on a random grid and writes every generation to a text file.
#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(version)]
pub struct Cli {
    /// Number of rows in the grid
    pub height: Option<usize>,

    /// Number of columns in the grid
    pub width: Option<usize>,

    /// Number of generations to write
    pub generations: Option<usize>,

    /// File that receives the rendered generations (recreated on every run)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the initial pattern; a fresh random pattern is used when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON run configuration; values given on the command line take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
