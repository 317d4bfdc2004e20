//! Errors raised while building a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Pos;

/// A maze definition that cannot be turned into a searchable grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMazeError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row does not have the same number of columns as the first row.
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Row 0 has no open cell to enter through.
    NoEntrance,
    /// The last row has no open cell to leave through.
    NoExitRow,
    /// The requested entrance lies outside the grid.
    EntranceOutOfBounds(Pos),
    /// The requested entrance is a wall.
    EntranceInWall(Pos),
    /// The grid has more than [`MAX_CELLS`](crate::MAX_CELLS) cells.
    TooLarge { rows: usize, cols: usize },
    /// A grid size that does not match `<width>x<height>`, or whose area
    /// exceeds [`MAX_CELLS`](crate::MAX_CELLS).
    InvalidGridSize(String),
    /// A malformed or out-of-grid cell reference.
    InvalidCoordinate(String),
    /// A character in a textual maze that maps to no cell state.
    InvalidChar { ch: char, pos: Pos },
}

impl InvalidMazeError {
    /// Stable reason code for callers that report failures by name.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::NotRectangular { .. } => "NOT_RECTANGULAR",
            Self::NoEntrance => "NO_ENTRANCE",
            Self::NoExitRow => "NO_EXIT_ROW",
            Self::EntranceOutOfBounds(_) => "ENTRANCE_OUT_OF_BOUNDS",
            Self::EntranceInWall(_) => "ENTRANCE_IN_WALL",
            Self::TooLarge { .. } => "GRID_TOO_LARGE",
            Self::InvalidGridSize(_) => "INVALID_GRID_SIZE",
            Self::InvalidCoordinate(_) => "INVALID_COORDINATE",
            Self::InvalidChar { .. } => "INVALID_CHAR",
        }
    }
}

impl fmt::Display for InvalidMazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid maze: grid is empty"),
            Self::NotRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid maze: row {row} has {found} columns, expected {expected}"
            ),
            Self::NoEntrance => write!(f, "invalid maze: no open cell in the first row"),
            Self::NoExitRow => write!(f, "invalid maze: no open cell in the last row"),
            Self::EntranceOutOfBounds(p) => {
                write!(f, "invalid maze: entrance {p} is out of bounds")
            }
            Self::EntranceInWall(p) => write!(f, "invalid maze: entrance {p} is in a wall"),
            Self::TooLarge { rows, cols } => {
                write!(f, "invalid maze: {rows}x{cols} grid has too many cells")
            }
            Self::InvalidGridSize(s) => write!(f, "invalid maze: bad grid size \u{201c}{s}\u{201d}"),
            Self::InvalidCoordinate(s) => {
                write!(f, "invalid maze: bad cell reference \u{201c}{s}\u{201d}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid maze: unexpected character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for InvalidMazeError {}
