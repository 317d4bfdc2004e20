//! Textual mazes: parsing ASCII art and rendering grids with a path overlay.
//!
//! Lines are separated by `'\n'`. `#` and `1` are walls; `.`, `0` and space
//! are open. The whole input is trimmed of surrounding blank lines but
//! individual lines are kept as-is, so leading spaces remain open cells.

use std::collections::HashMap;
use std::fmt;

use crate::cell::Cell;
use crate::error::InvalidMazeError;
use crate::geom::Pos;
use crate::grid::{Grid, RawGrid};
use crate::validate::validate;

impl RawGrid {
    /// Parse ASCII art into unchecked rows.
    ///
    /// Rows may differ in width; that is reported later by
    /// [`validate`](crate::validate).
    pub fn parse(s: &str) -> Result<RawGrid, InvalidMazeError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        if s.is_empty() {
            return Ok(RawGrid::default());
        }
        let mut rows = Vec::new();
        for (r, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(InvalidMazeError::InvalidChar {
                    ch,
                    pos: Pos::new(r as i32, c as i32),
                })?;
                row.push(cell);
            }
            rows.push(row);
        }
        Ok(RawGrid::new(rows))
    }
}

impl Grid {
    /// Parse ASCII art and validate it.
    pub fn parse(s: &str) -> Result<Grid, InvalidMazeError> {
        validate(&RawGrid::parse(s)?)
    }

    /// Render the grid with `path` drawn over it.
    ///
    /// The entrance is `S`, the last path cell `E` and the cells in between
    /// `o`. An empty path only marks the entrance.
    pub fn render(&self, path: &[Pos]) -> String {
        let mut marks: HashMap<Pos, char> = HashMap::with_capacity(path.len() + 1);
        for &p in path {
            marks.insert(p, 'o');
        }
        if let Some(&last) = path.last() {
            marks.insert(last, 'E');
        }
        marks.insert(self.entrance(), 'S');

        let mut out = String::with_capacity(self.len() + self.rows() as usize);
        for (p, cell) in self.iter() {
            if p.col == 0 && p.row > 0 {
                out.push('\n');
            }
            out.push(marks.get(&p).copied().unwrap_or(cell.to_char()));
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, cell) in self.iter() {
            if p.col == 0 && p.row > 0 {
                writeln!(f)?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
