//! CLI for maze generation

use anyhow::Context;
use clap::Parser;
use maze_solver::{Grid, Headless, MazeGenerator};

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of columns
    #[arg(long, default_value_t = 12)]
    cols: usize,

    /// Number of rows
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print it
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut grid = Grid::new(args.cols, args.rows)
        .with_context(|| format!("could not build a {}x{} maze", args.cols, args.rows))?;
    let mut gen = MazeGenerator::new(args.seed);
    if args.seed.is_none() {
        eprintln!("Using seed {}", gen.seed());
    }
    gen.generate(&mut grid, Headless)?;
    println!("{}", grid);
    Ok(())
}
