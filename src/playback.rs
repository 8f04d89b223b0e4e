//! Terminal animation of generation and solving

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use crate::error::MazeError;
use crate::grid::{Grid, Point, Walls};
use crate::render::{render_marks, ABANDONED_MARK, PATH_MARK};
use crate::sink::DrawingSink;

/// Sink that redraws the maze on the terminal after every notification
///
/// The sink keeps its own copy of the walls, fed only by the notifications
/// it receives. All pacing happens here: each frame is followed by a pause
/// of `frame_length`.
///
/// Notifications about cells outside its `cols` x `rows` grid are ignored.
pub struct TerminalSink {
    grid: Grid,
    marks: HashMap<Point, char>,
    frame_length: Duration,
}

impl TerminalSink {
    /// Create sink for a `cols` x `rows` maze
    ///
    /// ## Arguments
    /// - `cols`, `rows`: Maze dimensions.
    /// - `frame_ms`: Pause after each frame, milliseconds.
    pub fn new(cols: usize, rows: usize, frame_ms: u64) -> Result<Self, MazeError> {
        Ok(Self {
            grid: Grid::new(cols, rows)?,
            marks: HashMap::new(),
            frame_length: Duration::from_millis(frame_ms),
        })
    }

    /// Current picture of the maze
    pub fn frame(&self) -> String {
        render_marks(&self.grid, &self.marks)
    }

    fn redraw(&self) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", self.frame());
        thread::sleep(self.frame_length);
    }
}

impl DrawingSink for TerminalSink {
    /// Notifications for cells outside the maze are dropped without a redraw
    fn cell_state(&mut self, point: Point, walls: Walls) {
        let Ok(cell) = self.grid.cell_at(point) else {
            return;
        };
        cell.walls = walls;
        self.redraw();
    }

    fn moved(&mut self, from: Point, to: Point, undo: bool) {
        self.marks.insert(from, PATH_MARK);
        self.marks
            .insert(to, if undo { ABANDONED_MARK } else { PATH_MARK });
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalSink;
    use crate::grid::{Direction, Point, Walls};
    use crate::sink::DrawingSink;

    #[test]
    fn follows_notifications() {
        let mut sink = TerminalSink::new(2, 1, 0).unwrap();

        let mut left = Walls::CLOSED;
        left.remove(Direction::Right);
        let mut right = Walls::CLOSED;
        right.remove(Direction::Left);
        sink.cell_state(Point::new(0, 0), left);
        sink.cell_state(Point::new(1, 0), right);
        sink.moved(Point::new(0, 0), Point::new(1, 0), false);
        assert_eq!(sink.frame(), "+---+---+\n| *   * |\n+---+---+");

        sink.moved(Point::new(0, 0), Point::new(1, 0), true);
        assert_eq!(sink.frame(), "+---+---+\n| *   . |\n+---+---+");
    }

    #[test]
    fn ignores_cells_outside_the_maze() {
        let mut sink = TerminalSink::new(1, 1, 0).unwrap();
        sink.cell_state(Point::new(3, 3), Walls::CLOSED);
        assert_eq!(sink.frame(), "+---+\n|   |\n+---+");
    }

    #[test]
    fn rejects_empty_maze() {
        assert!(TerminalSink::new(0, 1, 0).is_err());
    }
}
