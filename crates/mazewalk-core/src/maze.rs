//! Compact maze definitions: a grid size, an entrance and a list of walls,
//! all written with spreadsheet references.
//!
//! ```
//! use mazewalk_core::{MazeDefinition, Pos};
//!
//! let def = MazeDefinition::new("3x2", "A1", ["B1", "C1"]);
//! let grid = def.to_grid().unwrap();
//! assert_eq!(grid.cols(), 3);
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.entrance(), Pos::new(0, 0));
//! ```

use crate::cell::Cell;
use crate::error::InvalidMazeError;
use crate::geom::Pos;
use crate::grid::{Grid, MAX_CELLS, RawGrid};
use crate::validate::validate_with_entrance;

/// A maze as exchanged with outer layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MazeDefinition {
    /// `<width>x<height>`, e.g. `8x8`.
    pub grid_size: String,
    /// Entrance reference, e.g. `A1`.
    pub entrance: String,
    /// Wall references.
    pub walls: Vec<String>,
}

impl MazeDefinition {
    /// Convenience constructor.
    pub fn new<I, S>(grid_size: &str, entrance: &str, walls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            grid_size: grid_size.to_string(),
            entrance: entrance.to_string(),
            walls: walls.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the grid size into `(width, height)`.
    pub fn dimensions(&self) -> Result<(usize, usize), InvalidMazeError> {
        parse_grid_size(&self.grid_size)
    }

    /// Expand the definition into unchecked rows.
    pub fn to_raw(&self) -> Result<RawGrid, InvalidMazeError> {
        let (width, height) = self.dimensions()?;
        let mut raw = RawGrid::filled(height, width, Cell::Open);
        for w in &self.walls {
            let p = Pos::parse_cell_ref(w)?;
            if raw.get(p).is_none() {
                return Err(InvalidMazeError::InvalidCoordinate(w.clone()));
            }
            raw.set(p, Cell::Wall);
        }
        Ok(raw)
    }

    /// Build a validated grid entered at the definition's entrance.
    pub fn to_grid(&self) -> Result<Grid, InvalidMazeError> {
        let raw = self.to_raw()?;
        let entrance = Pos::parse_cell_ref(&self.entrance)?;
        validate_with_entrance(&raw, entrance)
    }

    /// Describe an existing grid in definition form. Walls are listed in
    /// row-major order.
    pub fn from_grid(grid: &Grid) -> Self {
        let walls = grid
            .iter()
            .filter(|(_, c)| c.is_wall())
            .filter_map(|(p, _)| p.cell_ref())
            .collect();
        Self {
            grid_size: format!("{}x{}", grid.cols(), grid.rows()),
            entrance: grid.entrance().cell_ref().unwrap_or_default(),
            walls,
        }
    }
}

/// Parse `<width>x<height>` where both parts are positive integers without
/// leading zeros.
pub fn parse_grid_size(s: &str) -> Result<(usize, usize), InvalidMazeError> {
    let invalid = || InvalidMazeError::InvalidGridSize(s.to_string());
    let (w, h) = s.split_once('x').ok_or_else(invalid)?;
    let part = |p: &str| -> Option<usize> {
        if p.is_empty() || p.starts_with('0') || !p.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        p.parse().ok().filter(|&n: &usize| n <= i32::MAX as usize)
    };
    let width = part(w).ok_or_else(invalid)?;
    let height = part(h).ok_or_else(invalid)?;
    if width.checked_mul(height).is_none_or(|n| n > MAX_CELLS) {
        return Err(invalid());
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_parsing() {
        assert_eq!(parse_grid_size("8x8").unwrap(), (8, 8));
        assert_eq!(parse_grid_size("12x3").unwrap(), (12, 3));
        assert_eq!(parse_grid_size("4096x4096").unwrap(), (4096, 4096));
        for bad in [
            "",
            "8",
            "x8",
            "8x",
            "0x3",
            "08x3",
            "3x-1",
            "3X3",
            "3x3x3",
            " 3x3",
            "4097x4096",
            "2147483647x2147483647",
            "99999999999999999999x2",
        ] {
            let err = parse_grid_size(bad).unwrap_err();
            assert_eq!(err.code(), "INVALID_GRID_SIZE", "{bad}");
        }
    }

    #[test]
    fn definition_to_grid() {
        let def = MazeDefinition::new("4x3", "B1", ["A1", "C1", "D1", "B2", "D2"]);
        let g = def.to_grid().unwrap();
        assert_eq!(g.cols(), 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.entrance(), Pos::new(0, 1));
        assert_eq!(g.to_string(), "#.##\n.#.#\n....");
    }

    #[test]
    fn oversized_definition_is_rejected_before_allocating() {
        let def = MazeDefinition::new("2147483647x2147483647", "A1", Vec::<String>::new());
        assert_eq!(
            def.to_grid().unwrap_err(),
            InvalidMazeError::InvalidGridSize("2147483647x2147483647".to_string())
        );
    }

    #[test]
    fn entrance_in_wall() {
        let def = MazeDefinition::new("2x2", "A1", ["A1"]);
        assert_eq!(
            def.to_grid().unwrap_err(),
            InvalidMazeError::EntranceInWall(Pos::new(0, 0))
        );
    }

    #[test]
    fn entrance_out_of_bounds() {
        let def = MazeDefinition::new("2x2", "C1", Vec::<String>::new());
        assert_eq!(
            def.to_grid().unwrap_err(),
            InvalidMazeError::EntranceOutOfBounds(Pos::new(0, 2))
        );
    }

    #[test]
    fn wall_outside_grid() {
        let def = MazeDefinition::new("2x2", "A1", ["A3"]);
        assert_eq!(
            def.to_grid().unwrap_err(),
            InvalidMazeError::InvalidCoordinate("A3".to_string())
        );
    }

    #[test]
    fn blocked_exit_row() {
        let def = MazeDefinition::new("2x2", "A1", ["A2", "B2"]);
        assert_eq!(def.to_grid().unwrap_err(), InvalidMazeError::NoExitRow);
    }

    #[test]
    fn from_grid_round_trip() {
        let g = Grid::parse("#..\n.#.\n..#").unwrap();
        let def = MazeDefinition::from_grid(&g);
        assert_eq!(def.grid_size, "3x3");
        assert_eq!(def.entrance, "B1");
        assert_eq!(def.walls, vec!["A1", "B2", "C3"]);
        assert_eq!(def.to_grid().unwrap(), g);
    }
}
