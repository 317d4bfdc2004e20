//! The [`Grid`] type: an immutable maze of [`Cell`]s.
//!
//! Cells live in a shared, reference-counted buffer. Cloning a `Grid` is
//! cheap and yields another handle to the **same** storage; since nothing
//! can mutate it, handles can be sent to other threads and searched
//! concurrently.

use std::sync::Arc;

use crate::cell::Cell;
use crate::error::InvalidMazeError;
use crate::geom::{Direction, Pos, Range};

/// Largest number of cells a [`Grid`] may hold.
pub const MAX_CELLS: usize = 1 << 24;

// ---------------------------------------------------------------------------
// RawGrid
// ---------------------------------------------------------------------------

/// Unchecked row-major cell states, as supplied by a caller.
///
/// A `RawGrid` may be empty or ragged; [`validate`](crate::validate) turns
/// it into a [`Grid`] or explains why it cannot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    /// Wrap row-major cell states.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// A `rows` x `cols` grid with every cell set to `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            rows: vec![vec![cell; cols]; rows],
        }
    }

    /// Build from `0`/`1` row strings, where `1` marks a wall.
    pub fn from_bit_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidMazeError> {
        let mut out = Vec::with_capacity(rows.len());
        for (r, line) in rows.iter().enumerate() {
            let mut row = Vec::new();
            for (c, ch) in line.as_ref().chars().enumerate() {
                let cell = match ch {
                    '0' => Cell::Open,
                    '1' => Cell::Wall,
                    _ => {
                        return Err(InvalidMazeError::InvalidChar {
                            ch,
                            pos: Pos::new(r as i32, c as i32),
                        });
                    }
                };
                row.push(cell);
            }
            out.push(row);
        }
        Ok(Self { rows: out })
    }

    /// The rows as supplied.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Set a cell, growing nothing. Out-of-range positions are ignored.
    pub fn set(&mut self, p: Pos, cell: Cell) {
        if p.row < 0 || p.col < 0 {
            return;
        }
        if let Some(c) = self
            .rows
            .get_mut(p.row as usize)
            .and_then(|row| row.get_mut(p.col as usize))
        {
            *c = cell;
        }
    }

    /// Read a cell, or `None` outside the supplied rows.
    pub fn get(&self, p: Pos) -> Option<Cell> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        self.rows
            .get(p.row as usize)
            .and_then(|row| row.get(p.col as usize))
            .copied()
    }
}

impl From<Vec<Vec<Cell>>> for RawGrid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A validated, rectangular maze with an entrance.
///
/// The exit condition is reaching any open cell of the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Arc<[Cell]>,
    bounds: Range,
    entrance: Pos,
}

impl Grid {
    /// Assemble a grid from already-checked parts.
    pub(crate) fn from_parts(cells: Vec<Cell>, rows: i32, cols: i32, entrance: Pos) -> Self {
        debug_assert_eq!(cells.len(), (rows * cols) as usize);
        Self {
            cells: cells.into(),
            bounds: Range::with_size(rows, cols),
            entrance,
        }
    }

    /// Return a grid sharing the same cells but entered at `p`.
    pub fn with_entrance(&self, p: Pos) -> Result<Grid, InvalidMazeError> {
        match self.at(p) {
            None => Err(InvalidMazeError::EntranceOutOfBounds(p)),
            Some(Cell::Wall) => Err(InvalidMazeError::EntranceInWall(p)),
            Some(Cell::Open) => Ok(Grid {
                cells: Arc::clone(&self.cells),
                bounds: self.bounds,
                entrance: p,
            }),
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: validation rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The entrance cell.
    #[inline]
    pub fn entrance(&self) -> Pos {
        self.entrance
    }

    /// Index of the last row, where every open cell is an exit.
    #[inline]
    pub fn exit_row(&self) -> i32 {
        self.bounds.max.row - 1
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }

    /// Position of a flat row-major index.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols() as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Whether reaching `p` satisfies the exit condition.
    #[inline]
    pub fn is_exit_cell(&self, p: Pos) -> bool {
        p.row == self.exit_row() && self.is_open(p)
    }

    /// Open orthogonal neighbours of `p`, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors(&self, p: Pos) -> Neighbors<'_> {
        Neighbors {
            grid: self,
            from: p,
            next: 0,
        }
    }

    /// The open neighbour of `p` in direction `dir`, if any.
    #[inline]
    pub fn neighbor(&self, p: Pos, dir: Direction) -> Option<Pos> {
        let n = p.step(dir);
        self.is_open(n).then_some(n)
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Open cells of the last row, left to right.
    pub fn exit_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.bounds
            .line(self.rows() - 1)
            .iter()
            .filter(|&p| self.is_open(p))
    }

    /// Row-major iterator over `(Pos, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Copy the cells back out into a [`RawGrid`].
    pub fn to_raw(&self) -> RawGrid {
        let cols = self.cols() as usize;
        RawGrid::new(self.cells.chunks(cols).map(<[Cell]>::to_vec).collect())
    }
}

/// Iterator over the open neighbours of a cell. See [`Grid::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    grid: &'a Grid,
    from: Pos,
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        while self.next < Direction::ALL.len() {
            let dir = Direction::ALL[self.next];
            self.next += 1;
            if let Some(n) = self.grid.neighbor(self.from, dir) {
                return Some(n);
            }
        }
        None
    }
}
