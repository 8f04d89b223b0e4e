//! Perfect maze generation

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Neighbor, Point};
use crate::sink::DrawingSink;

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Index in `[0, n)`, with `n > 0`
    fn next_index(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Seeded maze generator
pub struct MazeGenerator {
    random: StdRng,
    seed: u64,
}

impl MazeGenerator {
    /// Create generator; without a seed, one is drawn from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            random: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed that reproduces this generator
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Carve a perfect maze into `grid`, see [generate]
    pub fn generate(&mut self, grid: &mut Grid, sink: impl DrawingSink) -> Result<(), MazeError> {
        generate(grid, &mut self.random, sink)
    }
}

/// Turn a fully walled grid into a perfect maze
///
/// The entry (top wall of the top-left cell) and the exit (bottom wall of
/// the bottom-right cell) are opened first, then passages are carved from
/// the entry with [carve]. Visited flags are cleared afterwards, so the
/// grid is ready for solving.
///
/// ## Arguments
/// - `grid`: Fully walled grid, modified in place.
/// - `rng`: Picks among candidate neighbors. A fixed seed gives a fixed maze.
/// - `sink`: Told about every cell whose walls change.
pub fn generate<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    mut sink: impl DrawingSink,
) -> Result<(), MazeError> {
    let (entry, exit) = (grid.entry(), grid.exit());
    for (point, side) in [(entry, Direction::Up), (exit, Direction::Down)] {
        let cell = grid.cell_at(point)?;
        cell.walls.remove(side);
        sink.cell_state(point, cell.walls);
    }

    carve(grid, entry, rng, &mut sink)?;
    grid.reset_visited();
    Ok(())
}

/// Randomized depth-first carving (recursive backtracker)
///
/// From the current cell, pick one unvisited neighbor uniformly at random,
/// knock down the wall pair between them and continue from the neighbor.
/// A cell with no unvisited neighbors left is popped, and the search
/// resumes at the cell it was entered from. The stack replaces call
/// recursion, so a long corridor cannot exhaust the call stack.
///
/// Every reachable cell is left visited.
pub fn carve<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    start: Point,
    rng: &mut R,
    mut sink: impl DrawingSink,
) -> Result<(), MazeError> {
    grid.cell_at(start)?.visited = true;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let neighbors = grid.neighbors_of(current, true)?;
        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        let Neighbor {
            direction,
            point: next,
        } = neighbors[rng.next_index(neighbors.len())];
        grid.clear_wall_between(current, direction, next)?;
        sink.cell_state(current, grid.cell(current)?.walls);
        sink.cell_state(next, grid.cell(next)?.walls);

        grid.cell_at(next)?.visited = true;
        stack.push(next);
    }
    Ok(())
}
