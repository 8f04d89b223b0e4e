//! Depth-first maze solving

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Point};
use crate::sink::DrawingSink;

/// Cell on the search path, with the next direction left to try
struct Frame {
    point: Point,
    next: usize,
}

/// Whether the exit can be reached from the entry through open walls
///
/// See [find_path].
pub fn solve(grid: &mut Grid, sink: impl DrawingSink) -> Result<bool, MazeError> {
    Ok(find_path(grid, sink)?.is_some())
}

/// Depth-first search from the entry cell to the exit cell
///
/// Neighbors are tried in the order Up, Right, Down, Left, and only through
/// wall pairs that are open on both sides. The first path found is
/// returned, from entry to exit inclusive; it is the shortest one only when
/// the grid is a perfect maze.
///
/// Cells are marked visited on entry and never unmarked, so every cell is
/// entered at most once, also on grids with cycles. Call
/// [Grid::reset_visited] before solving a grid twice.
///
/// ## Arguments
/// - `grid`: Grid to search; visited flags are updated.
/// - `sink`: Told about every entered cell, every move, and every move
///   undone when a branch turns out to be a dead end.
pub fn find_path(
    grid: &mut Grid,
    mut sink: impl DrawingSink,
) -> Result<Option<Vec<Point>>, MazeError> {
    let target = grid.exit();
    let start = grid.entry();

    enter(grid, start, &mut sink)?;
    if start == target {
        return Ok(Some(vec![start]));
    }
    let mut stack = vec![Frame {
        point: start,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = Direction::ALL.get(frame.next) else {
            // Dead end, step back to where this cell was entered from
            let dead_end = frame.point;
            stack.pop();
            if let Some(parent) = stack.last() {
                sink.moved(parent.point, dead_end, true);
            }
            continue;
        };
        frame.next += 1;
        let current = frame.point;

        let Some(next) = grid.neighbor_towards(current, direction, false)? else {
            continue;
        };
        sink.moved(current, next, false);
        enter(grid, next, &mut sink)?;
        if next == target {
            let mut path: Vec<Point> = stack.iter().map(|frame| frame.point).collect();
            path.push(next);
            return Ok(Some(path));
        }
        stack.push(Frame {
            point: next,
            next: 0,
        });
    }
    Ok(None)
}

fn enter(
    grid: &mut Grid,
    point: Point,
    sink: &mut impl DrawingSink,
) -> Result<(), MazeError> {
    let cell = grid.cell_at(point)?;
    cell.visited = true;
    sink.cell_state(point, cell.walls);
    Ok(())
}
