//! Observers of maze generation and solving
//!
//! A sink only watches. Generation and solving produce the same walls,
//! the same visited flags and the same result whichever sink is attached.

use crate::grid::{Point, Walls};

/// Receiver of progress notifications
///
/// Every method defaults to doing nothing, so an observer implements only
/// what it draws.
pub trait DrawingSink {
    /// Walls of `point` changed, or the solver entered the cell
    fn cell_state(&mut self, _point: Point, _walls: Walls) {}

    /// Solver stepped from `from` to `to`; `undo` marks the step being
    /// abandoned on backtrack.
    fn moved(&mut self, _from: Point, _to: Point, _undo: bool) {}
}

impl<S: DrawingSink + ?Sized> DrawingSink for &mut S {
    fn cell_state(&mut self, point: Point, walls: Walls) {
        (**self).cell_state(point, walls)
    }

    fn moved(&mut self, from: Point, to: Point, undo: bool) {
        (**self).moved(from, to, undo)
    }
}

/// Sink for runs without any visual output
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl DrawingSink for Headless {}

/// Single notification, as captured by [Recorder]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SinkEvent {
    CellState { point: Point, walls: Walls },
    Move { from: Point, to: Point, undo: bool },
}

/// Sink that keeps every notification in order
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<SinkEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves only, as `(from, to, undo)`
    pub fn moves(&self) -> impl Iterator<Item = (Point, Point, bool)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            SinkEvent::Move { from, to, undo } => Some((from, to, undo)),
            SinkEvent::CellState { .. } => None,
        })
    }
}

impl DrawingSink for Recorder {
    fn cell_state(&mut self, point: Point, walls: Walls) {
        self.events.push(SinkEvent::CellState { point, walls });
    }

    fn moved(&mut self, from: Point, to: Point, undo: bool) {
        self.events.push(SinkEvent::Move { from, to, undo });
    }
}
