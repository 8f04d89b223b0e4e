//! Errors raised by the maze engine

use std::fmt;

/// Failure of a grid operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Grid was requested with zero columns or zero rows
    InvalidDimension { cols: usize, rows: usize },
    /// Cell index outside `[0, cols) x [0, rows)`
    OutOfBounds { col: usize, row: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { cols, rows } => write!(
                f,
                "invalid maze dimensions {}x{}: columns and rows must be at least 1",
                cols, rows
            ),
            MazeError::OutOfBounds { col, row } => {
                write!(f, "cell (col={}, row={}) is outside the maze", col, row)
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::MazeError;

    #[test]
    fn messages_name_the_offending_values() {
        let err = MazeError::InvalidDimension { cols: 0, rows: 3 };
        assert!(err.to_string().contains("0x3"));

        let err = MazeError::OutOfBounds { col: 12, row: 10 };
        assert_eq!(err.to_string(), "cell (col=12, row=10) is outside the maze");
    }

    #[test]
    fn converts_into_anyhow() {
        let res: anyhow::Result<()> = Err(MazeError::OutOfBounds { col: 1, row: 2 }.into());
        let err = res.unwrap_err();
        assert_eq!(
            err.downcast_ref::<MazeError>(),
            Some(&MazeError::OutOfBounds { col: 1, row: 2 })
        );
    }
}
