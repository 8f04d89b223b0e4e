//! Generate a perfect maze and find the way from its entry to its exit
//!
//! The entry is the top wall of the top-left cell, the exit is the bottom
//! wall of the bottom-right cell. A perfect maze has exactly one simple path
//! between any two cells, so the exit is always reachable.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use maze_solver::{Headless, Maze, MazeGenerator};
//!
//! let mut maze = Maze::new(12, 10).unwrap();
//! maze.generate(&mut MazeGenerator::new(Some(0)), Headless).unwrap();
//! let solution = maze.solve(Headless).unwrap();
//! solution.print_report();
//! println!("{}", maze.render_solution(&solution));
//! assert_eq!(solution.path.first(), Some(&maze.grid().entry()));
//! assert_eq!(solution.path.last(), Some(&maze.grid().exit()));
//! ```
//!
//! ## Observe the search
//! ```
//! use maze_solver::{Maze, MazeGenerator, Recorder};
//!
//! let mut maze = Maze::new(4, 3).unwrap();
//! maze.generate(&mut MazeGenerator::new(Some(9)), Recorder::new()).unwrap();
//!
//! let mut recorder = Recorder::new();
//! let solution = maze.solve(&mut recorder).unwrap();
//! let undone = recorder.moves().filter(|(_, _, undo)| *undo).count();
//! assert_eq!(undone, solution.backtracks);
//! ```

pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod playback;
pub mod render;
pub mod sink;
pub mod solver;

pub use error::MazeError;
pub use grid::{Cell, Direction, Grid, Neighbor, Point, Walls};
pub use maze_generator::{MazeGenerator, RandomSource};
pub use playback::TerminalSink;
pub use sink::{DrawingSink, Headless, Recorder, SinkEvent};

/// Maze with a fixed entry and exit
pub struct Maze {
    grid: Grid,
}

/// Outcome of a solver run
pub struct MazeSolution {
    /// Cells from entry to exit, inclusive; empty when there is no way out
    pub path: Vec<Point>,
    /// Moves made into a new cell, including later abandoned ones
    pub moves: usize,
    /// Moves undone on the way back out of dead ends
    pub backtracks: usize,
    /// How the search ended
    pub ending_condition: EndingCondition,
}

/// How the search ended
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum EndingCondition {
    /// Exit was reached
    Exit,
    /// Every branch from the entry ended in a dead end
    DeadEnd,
}

/// Sink wrapper counting moves before passing them on
struct MoveCounter<S> {
    inner: S,
    moves: usize,
    backtracks: usize,
}

impl<S: DrawingSink> DrawingSink for MoveCounter<S> {
    fn cell_state(&mut self, point: Point, walls: Walls) {
        self.inner.cell_state(point, walls)
    }

    fn moved(&mut self, from: Point, to: Point, undo: bool) {
        if undo {
            self.backtracks += 1;
        } else {
            self.moves += 1;
        }
        self.inner.moved(from, to, undo)
    }
}

impl Maze {
    /// Create a fully walled maze
    ///
    /// Returns error, if either dimension is zero.
    pub fn new(cols: usize, rows: usize) -> Result<Self, MazeError> {
        Ok(Self {
            grid: Grid::new(cols, rows)?,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Carve passages with `generator`
    ///
    /// Expects a fully walled maze, as returned by [Maze::new].
    pub fn generate(
        &mut self,
        generator: &mut MazeGenerator,
        sink: impl DrawingSink,
    ) -> Result<(), MazeError> {
        generator.generate(&mut self.grid, sink)
    }

    /// Solve maze
    ///
    /// Search depth-first for a path from the entry to the exit. Visited
    /// flags are cleared first, so a maze may be solved repeatedly.
    pub fn solve(&mut self, sink: impl DrawingSink) -> Result<MazeSolution, MazeError> {
        self.grid.reset_visited();
        let mut counter = MoveCounter {
            inner: sink,
            moves: 0,
            backtracks: 0,
        };
        let path = solver::find_path(&mut self.grid, &mut counter)?;

        let (path, ending_condition) = match path {
            Some(path) => (path, EndingCondition::Exit),
            None => (Vec::new(), EndingCondition::DeadEnd),
        };
        Ok(MazeSolution {
            path,
            moves: counter.moves,
            backtracks: counter.backtracks,
            ending_condition,
        })
    }

    /// Text picture of the maze with the solution path marked
    pub fn render_solution(&self, solution: &MazeSolution) -> String {
        render::render_path(&self.grid, &solution.path)
    }
}

impl MazeSolution {
    /// Print report
    pub fn print_report(&self) {
        println!("{}", self.report());
    }

    fn report(&self) -> String {
        match self.ending_condition {
            EndingCondition::Exit => format!(
                "The path to the exit is {} steps; {} moves made, {} backtracked.",
                self.path.len() - 1,
                self.moves,
                self.backtracks
            ),
            EndingCondition::DeadEnd => format!(
                "There is no way out; {} moves made, all backtracked.",
                self.moves
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Direction, EndingCondition, Headless, Maze, MazeError, MazeGenerator, Point, Recorder,
    };

    #[test]
    fn zero_sized_maze() {
        assert!(matches!(
            Maze::new(0, 0),
            Err(MazeError::InvalidDimension { cols: 0, rows: 0 })
        ));
    }

    #[test]
    fn generated_maze_reaches_exit() {
        let mut maze = Maze::new(12, 10).unwrap();
        let mut gen = MazeGenerator::new(Some(0));
        maze.generate(&mut gen, Headless).unwrap();
        let solution = maze.solve(Headless).unwrap();

        assert_eq!(solution.ending_condition, EndingCondition::Exit);
        assert_eq!(solution.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(solution.path.last(), Some(&Point::new(11, 9)));
        // Every step along the path is one forward move that was kept
        assert_eq!(solution.moves - solution.backtracks, solution.path.len() - 1);
    }

    #[test]
    fn solving_twice_gives_the_same_answer() {
        let mut maze = Maze::new(8, 8).unwrap();
        let mut gen = MazeGenerator::new(Some(21));
        maze.generate(&mut gen, Headless).unwrap();
        let first = maze.solve(Headless).unwrap();
        let second = maze.solve(Headless).unwrap();
        assert_eq!(first.path, second.path);
        assert_eq!(first.moves, second.moves);
    }

    #[test]
    fn walled_maze_is_a_dead_end() {
        let mut maze = Maze::new(3, 3).unwrap();
        let mut recorder = Recorder::new();
        let solution = maze.solve(&mut recorder).unwrap();

        assert_eq!(solution.ending_condition, EndingCondition::DeadEnd);
        assert!(solution.path.is_empty());
        assert_eq!(solution.moves, 0);
        assert_eq!(
            solution.report(),
            "There is no way out; 0 moves made, all backtracked."
        );
    }

    #[test]
    fn report_counts_steps() {
        let mut maze = Maze::new(3, 1).unwrap();
        let mut gen = MazeGenerator::new(Some(4));
        maze.generate(&mut gen, Headless).unwrap();
        let solution = maze.solve(Headless).unwrap();

        // A single row has only one possible maze
        assert_eq!(
            solution.report(),
            "The path to the exit is 2 steps; 2 moves made, 0 backtracked."
        );
        let rendered = maze.render_solution(&solution);
        assert_eq!(rendered, "+   +---+---+\n| *   *   * |\n+---+---+   +");
        let entry = maze.grid().cell(Point::new(0, 0)).unwrap();
        assert!(!entry.walls.has(Direction::Right));
    }
}
