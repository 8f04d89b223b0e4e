//! Rectangular grid of walled cells

use crate::error::MazeError;

/// Location of a cell in the grid, zero-based
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub col: usize,
    pub row: usize,
}

impl Point {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Side of a cell, and the step towards the adjacent cell on that side
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Enumeration order used by every neighbor query
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Step one cell in this direction, if the result stays inside
    /// a `cols` x `rows` grid.
    fn step(self, from: Point, cols: usize, rows: usize) -> Option<Point> {
        let Point { col, row } = from;
        match self {
            Direction::Up => row.checked_sub(1).map(|row| Point::new(col, row)),
            Direction::Right => Some(col + 1)
                .filter(|&col| col < cols)
                .map(|col| Point::new(col, row)),
            Direction::Down => Some(row + 1)
                .filter(|&row| row < rows)
                .map(|row| Point::new(col, row)),
            Direction::Left => col.checked_sub(1).map(|col| Point::new(col, row)),
        }
    }
}

/// Wall flags of a single cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    /// All four walls standing
    pub const CLOSED: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn has(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn remove(&mut self, side: Direction) {
        match side {
            Direction::Up => self.top = false,
            Direction::Right => self.right = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }

    /// Number of walls still standing
    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|side| self.has(**side)).count()
    }
}

/// Single grid unit
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Cell {
    pub walls: Walls,
    /// Scratch flag shared by generation and solving
    pub visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: Walls::CLOSED,
            visited: false,
        }
    }
}

/// Adjacent cell reported by [Grid::neighbors_of]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Neighbor {
    /// Side of the queried cell that faces the neighbor
    pub direction: Direction,
    pub point: Point,
}

impl Neighbor {
    pub const fn new(direction: Direction, col: usize, row: usize) -> Self {
        Self {
            direction,
            point: Point::new(col, row),
        }
    }
}

/// Maze grid
///
/// Cells are stored column-major: the cell at `(col, row)` lives at
/// `col * rows + row`. Dimensions never change after construction.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid with nothing visited
    ///
    /// Returns [MazeError::InvalidDimension] if `cols` or `rows` is zero.
    pub fn new(cols: usize, rows: usize) -> Result<Self, MazeError> {
        if cols == 0 || rows == 0 {
            return Err(MazeError::InvalidDimension { cols, rows });
        }
        let size = cols
            .checked_mul(rows)
            .ok_or(MazeError::InvalidDimension { cols, rows })?;
        Ok(Self {
            cols,
            rows,
            cells: vec![Cell::default(); size],
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Top-left cell, whose top wall is the maze entry
    pub fn entry(&self) -> Point {
        Point::new(0, 0)
    }

    /// Bottom-right cell, whose bottom wall is the maze exit
    pub fn exit(&self) -> Point {
        Point::new(self.cols - 1, self.rows - 1)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.col < self.cols && point.row < self.rows
    }

    fn index(&self, point: Point) -> Result<usize, MazeError> {
        if self.contains(point) {
            Ok(point.col * self.rows + point.row)
        } else {
            Err(MazeError::OutOfBounds {
                col: point.col,
                row: point.row,
            })
        }
    }

    pub fn cell(&self, point: Point) -> Result<&Cell, MazeError> {
        let idx = self.index(point)?;
        Ok(&self.cells[idx])
    }

    pub fn cell_at(&mut self, point: Point) -> Result<&mut Cell, MazeError> {
        let idx = self.index(point)?;
        Ok(&mut self.cells[idx])
    }

    /// Adjacent cell in `direction`, if it is inside the grid and not
    /// visited yet.
    ///
    /// Unless `ignore_walls` is set, both the wall of `point` facing the
    /// neighbor and the neighbor's wall facing back must be absent.
    pub fn neighbor_towards(
        &self,
        point: Point,
        direction: Direction,
        ignore_walls: bool,
    ) -> Result<Option<Point>, MazeError> {
        let current = self.cell(point)?;
        let Some(next) = direction.step(point, self.cols, self.rows) else {
            return Ok(None);
        };
        let neighbor = self.cell(next)?;
        if neighbor.visited {
            return Ok(None);
        }
        if !ignore_walls
            && (current.walls.has(direction) || neighbor.walls.has(direction.opposite()))
        {
            return Ok(None);
        }
        Ok(Some(next))
    }

    /// Unvisited adjacent cells, in the order Up, Right, Down, Left
    ///
    /// ## Arguments
    /// - `point`: Queried cell.
    /// - `ignore_walls`: Report neighbors regardless of the walls between.
    ///
    /// Returns [MazeError::OutOfBounds] if `point` is outside the grid.
    pub fn neighbors_of(
        &self,
        point: Point,
        ignore_walls: bool,
    ) -> Result<Vec<Neighbor>, MazeError> {
        let mut neighbors = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            if let Some(next) = self.neighbor_towards(point, direction, ignore_walls)? {
                neighbors.push(Neighbor {
                    direction,
                    point: next,
                });
            }
        }
        Ok(neighbors)
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }

    /// Remove the wall of `a` facing `direction`, and the wall of `b`
    /// facing back towards `a`.
    ///
    /// Adjacency of `a` and `b` is the caller's responsibility.
    pub fn clear_wall_between(
        &mut self,
        a: Point,
        direction: Direction,
        b: Point,
    ) -> Result<(), MazeError> {
        let (a, b) = (self.index(a)?, self.index(b)?);
        self.cells[a].walls.remove(direction);
        self.cells[b].walls.remove(direction.opposite());
        Ok(())
    }

    /// All cell locations, column by column
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let rows = self.rows;
        (0..self.cols)
            .flat_map(move |col| (0..rows).map(move |row| Point::new(col, row)))
    }

    /// Cells with their locations, column by column
    pub fn cells(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.points().zip(self.cells.iter())
    }

    /// Number of internal walls removed, counting each shared wall once
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|(point, cell)| {
                [Direction::Right, Direction::Down]
                    .iter()
                    .filter(|&&dir| {
                        !cell.walls.has(dir)
                            && dir.step(point, self.cols, self.rows).is_some()
                    })
                    .count()
            })
            .sum()
    }
}
