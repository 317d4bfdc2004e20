//! **mazewalk-core**: the maze data model.
//!
//! This crate provides the types shared by the rest of the *mazewalk*
//! workspace: geometry primitives, cell states, the immutable [`Grid`], the
//! validator that builds it, spreadsheet-style coordinates and compact
//! [`MazeDefinition`]s.
//!
//! A grid is entered at one open cell (by default the first open cell of row
//! 0) and is left by reaching any open cell of its last row.

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod grid;
pub mod maze;
pub mod text;
pub mod validate;

pub use cell::Cell;
pub use coord::{from_column_letters, to_column_letters};
pub use error::InvalidMazeError;
pub use geom::{Direction, Pos, Range};
pub use grid::{Grid, MAX_CELLS, Neighbors, RawGrid};
pub use maze::{MazeDefinition, parse_grid_size};
pub use validate::{validate, validate_with_entrance};
