//! Structural checks that turn a [`RawGrid`] into a [`Grid`].

use crate::cell::Cell;
use crate::error::InvalidMazeError;
use crate::geom::Pos;
use crate::grid::{Grid, MAX_CELLS, RawGrid};

/// Validate `raw` and build a [`Grid`] entered at the first open cell of
/// row 0.
///
/// Checks, in order: the grid is non-empty, rectangular and at most
/// [`MAX_CELLS`] cells, row 0 has an open cell, and the last row has an open
/// cell. Reachability is not
/// checked here; an entrance that cannot reach the last row is reported by
/// the searches instead.
pub fn validate(raw: &RawGrid) -> Result<Grid, InvalidMazeError> {
    let rows = raw.rows();
    let Some(first) = rows.first() else {
        return Err(InvalidMazeError::Empty);
    };
    let cols = first.len();
    if cols == 0 {
        return Err(InvalidMazeError::Empty);
    }
    for (row, cells) in rows.iter().enumerate().skip(1) {
        if cells.len() != cols {
            return Err(InvalidMazeError::NotRectangular {
                row,
                expected: cols,
                found: cells.len(),
            });
        }
    }

    let too_large = || InvalidMazeError::TooLarge {
        rows: rows.len(),
        cols,
    };
    if rows.len().checked_mul(cols).is_none_or(|n| n > MAX_CELLS) {
        return Err(too_large());
    }
    let height = i32::try_from(rows.len()).map_err(|_| too_large())?;
    let width = i32::try_from(cols).map_err(|_| too_large())?;

    let entrance_col = first
        .iter()
        .position(|c| c.is_open())
        .ok_or(InvalidMazeError::NoEntrance)?;
    let last = &rows[rows.len() - 1];
    if !last.iter().any(|c| c.is_open()) {
        return Err(InvalidMazeError::NoExitRow);
    }

    let cells: Vec<Cell> = rows.iter().flatten().copied().collect();
    Ok(Grid::from_parts(
        cells,
        height,
        width,
        Pos::new(0, entrance_col as i32),
    ))
}

/// Validate `raw` and enter it at `entrance` instead of the default.
pub fn validate_with_entrance(raw: &RawGrid, entrance: Pos) -> Result<Grid, InvalidMazeError> {
    let rows = raw.rows();
    let in_bounds = entrance.row >= 0
        && entrance.col >= 0
        && (entrance.row as usize) < rows.len()
        && rows
            .first()
            .is_some_and(|r| (entrance.col as usize) < r.len());
    if !rows.is_empty() && !in_bounds {
        return Err(InvalidMazeError::EntranceOutOfBounds(entrance));
    }
    if raw.get(entrance) == Some(Cell::Wall) {
        return Err(InvalidMazeError::EntranceInWall(entrance));
    }
    validate(raw)?.with_entrance(entrance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Cell::{Open as O, Wall as W};

    #[test]
    fn accepts_rectangular_grid() {
        let raw = RawGrid::new(vec![vec![W, O, W], vec![O, O, O]]);
        let g = validate(&raw).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.entrance(), Pos::new(0, 1));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate(&RawGrid::default()), Err(InvalidMazeError::Empty));
        let raw = RawGrid::new(vec![vec![], vec![]]);
        assert_eq!(validate(&raw), Err(InvalidMazeError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let raw = RawGrid::new(vec![vec![O, O], vec![O, O], vec![O]]);
        let err = validate(&raw).unwrap_err();
        assert_eq!(
            err,
            InvalidMazeError::NotRectangular {
                row: 2,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.code(), "NOT_RECTANGULAR");
    }

    #[test]
    fn rejects_missing_entrance() {
        let raw = RawGrid::new(vec![vec![W, W], vec![O, O]]);
        let err = validate(&raw).unwrap_err();
        assert_eq!(err, InvalidMazeError::NoEntrance);
        assert_eq!(err.code(), "NO_ENTRANCE");
    }

    #[test]
    fn rejects_missing_exit_row() {
        let raw = RawGrid::new(vec![vec![O, O], vec![W, W]]);
        let err = validate(&raw).unwrap_err();
        assert_eq!(err, InvalidMazeError::NoExitRow);
        assert_eq!(err.code(), "NO_EXIT_ROW");
    }

    #[test]
    fn entrance_checked_before_exit() {
        let raw = RawGrid::new(vec![vec![W], vec![W]]);
        assert_eq!(validate(&raw), Err(InvalidMazeError::NoEntrance));
    }

    #[test]
    fn no_reachability_check() {
        // Row 1 walls off the exit entirely; still structurally valid.
        let raw = RawGrid::new(vec![vec![O, O], vec![W, W], vec![O, O]]);
        assert!(validate(&raw).is_ok());
    }

    #[test]
    fn rejects_oversized_grid() {
        // One row longer than the cell cap; the check runs before any copy.
        let raw = RawGrid::filled(1, MAX_CELLS + 1, O);
        let err = validate(&raw).unwrap_err();
        assert_eq!(
            err,
            InvalidMazeError::TooLarge {
                rows: 1,
                cols: MAX_CELLS + 1
            }
        );
        assert_eq!(err.code(), "GRID_TOO_LARGE");
    }

    #[test]
    fn single_row_is_valid() {
        let raw = RawGrid::new(vec![vec![W, O, O]]);
        let g = validate(&raw).unwrap();
        assert!(g.is_exit_cell(g.entrance()));
    }

    #[test]
    fn explicit_entrance() {
        let raw = RawGrid::new(vec![vec![O, O], vec![O, W], vec![O, O]]);
        let g = validate_with_entrance(&raw, Pos::new(1, 0)).unwrap();
        assert_eq!(g.entrance(), Pos::new(1, 0));
        assert_eq!(
            validate_with_entrance(&raw, Pos::new(1, 1)),
            Err(InvalidMazeError::EntranceInWall(Pos::new(1, 1)))
        );
        assert_eq!(
            validate_with_entrance(&raw, Pos::new(0, 2)),
            Err(InvalidMazeError::EntranceOutOfBounds(Pos::new(0, 2)))
        );
    }
}
