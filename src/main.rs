//! CLI for maze generation and solving

use anyhow::Context;
use clap::Parser;
use maze_solver::{Headless, Maze, MazeGenerator, TerminalSink};

/// Generate a perfect maze and find the way out
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

    /// Animate generation and solving on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 40)]
    frame_length: u64,
}

/// Generate maze, solve it, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut maze = Maze::new(args.cols, args.rows)
        .with_context(|| format!("could not build a {}x{} maze", args.cols, args.rows))?;
    let mut gen = MazeGenerator::new(args.seed);
    if args.seed.is_none() {
        eprintln!("Using seed {}", gen.seed());
    }

    let solution = if args.playback {
        let mut sink = TerminalSink::new(args.cols, args.rows, args.frame_length)?;
        maze.generate(&mut gen, &mut sink)?;
        maze.solve(&mut sink)?
    } else {
        maze.generate(&mut gen, Headless)?;
        maze.solve(Headless)?
    };

    println!("{}", maze.render_solution(&solution));
    solution.print_report();
    Ok(())
}
