//! Text rendering of grids
//!
//! Every cell is three characters wide, with walls drawn as `+---+` and `|`.
//! Walls are assumed consistent between neighbors, so each cell draws its
//! own top and left wall, and the outer row and column also draw their
//! bottom and right walls.

use std::collections::{HashMap, HashSet};
use std::fmt;

use itertools::Itertools;

use crate::grid::{Grid, Point};

/// Mark of a cell on the solution path
pub const PATH_MARK: char = '*';
/// Mark of a cell abandoned while backtracking
pub const ABANDONED_MARK: char = '.';

/// Render `grid`, filling the body of each cell with `mark(point)`
pub fn render_with(grid: &Grid, mark: impl Fn(Point) -> char) -> String {
    let mut lines = Vec::with_capacity(grid.rows() * 2 + 1);

    for row in 0..grid.rows() {
        let top = (0..grid.cols())
            .filter_map(|col| grid.cell(Point::new(col, row)).ok())
            .map(|cell| if cell.walls.top { "+---" } else { "+   " })
            .join("");
        lines.push(format!("{}+", top));

        let body = (0..grid.cols())
            .filter_map(|col| {
                let point = Point::new(col, row);
                let cell = grid.cell(point).ok()?;
                let left = if cell.walls.left { '|' } else { ' ' };
                Some(format!("{} {} ", left, mark(point)))
            })
            .join("");
        let right_edge = grid
            .cell(Point::new(grid.cols() - 1, row))
            .map(|cell| cell.walls.right)
            .unwrap_or(true);
        lines.push(format!("{}{}", body, if right_edge { '|' } else { ' ' }));
    }

    let bottom = (0..grid.cols())
        .filter_map(|col| grid.cell(Point::new(col, grid.rows() - 1)).ok())
        .map(|cell| if cell.walls.bottom { "+---" } else { "+   " })
        .join("");
    lines.push(format!("{}+", bottom));

    lines.iter().join("\n")
}

/// Render `grid` with the cells of `path` marked
pub fn render_path(grid: &Grid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    render_with(grid, |point| {
        if on_path.contains(&point) {
            PATH_MARK
        } else {
            ' '
        }
    })
}

/// Render `grid` with an explicit mark per cell; unmarked cells are blank
pub fn render_marks(grid: &Grid, marks: &HashMap<Point, char>) -> String {
    render_with(grid, |point| marks.get(&point).copied().unwrap_or(' '))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_with(self, |_| ' '))
    }
}

#[cfg(test)]
mod tests {
    use super::{render_path, render_with, PATH_MARK};
    use crate::grid::{Direction, Grid, Point};
    use crate::maze_generator::MazeGenerator;
    use crate::sink::Headless;
    use crate::solver::find_path;

    #[test]
    fn closed_cell() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(grid.to_string(), "+---+\n|   |\n+---+");
    }

    #[test]
    fn open_walls_are_gaps() {
        let mut grid = Grid::new(2, 1).unwrap();
        let (a, b) = (Point::new(0, 0), Point::new(1, 0));
        grid.clear_wall_between(a, Direction::Right, b).unwrap();
        grid.cell_at(Point::new(0, 0)).unwrap().walls.remove(Direction::Up);
        grid.cell_at(Point::new(1, 0)).unwrap().walls.remove(Direction::Down);

        let expected = "\
+   +---+
|       |
+---+   +";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn path_is_marked() {
        let mut grid = Grid::new(2, 2).unwrap();
        let (a, b, c) = (Point::new(0, 0), Point::new(0, 1), Point::new(1, 1));
        grid.clear_wall_between(a, Direction::Down, b).unwrap();
        grid.clear_wall_between(b, Direction::Right, c).unwrap();

        let rendered = render_path(&grid, &[a, b, c]);
        let expected = "\
+---+---+
| * |   |
+   +---+
| *   * |
+---+---+";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn custom_marks() {
        let grid = Grid::new(3, 1).unwrap();
        let rendered = render_with(&grid, |point| match point.col {
            1 => 'x',
            _ => ' ',
        });
        assert_eq!(rendered.lines().nth(1), Some("|   | x |   |"));
    }

    #[test]
    fn large_solution_is_fully_marked() {
        let mut grid = Grid::new(300, 300).unwrap();
        MazeGenerator::new(Some(1))
            .generate(&mut grid, Headless)
            .unwrap();
        let path = find_path(&mut grid, Headless).unwrap().unwrap();

        let rendered = render_path(&grid, &path);
        let lines: Vec<&[u8]> = rendered.lines().map(str::as_bytes).collect();
        assert_eq!(lines.len(), 2 * 300 + 1);

        // Body of cell (col, row) sits on line 2 * row + 1, column 4 * col + 2
        let mark_at = |point: Point| lines[2 * point.row + 1][4 * point.col + 2] as char;
        assert!(path.iter().all(|&point| mark_at(point) == PATH_MARK));

        let marked = rendered.chars().filter(|&c| c == PATH_MARK).count();
        assert_eq!(marked, path.len());
    }
}
