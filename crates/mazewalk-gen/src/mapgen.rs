//! Random maze generators.
//!
//! Provides two ways to fill a grid:
//! - **Obstacle scatter**: every cell but the entrance independently becomes
//!   a wall with a fixed probability.
//! - **Random walk**: drunk walks from the entrance carve open cells out of
//!   a walled grid.
//!
//! Either can be followed by [`MapGen::keep_reachable`], which walls off the
//! open cells the entrance cannot reach.

use mazewalk_core::{Cell, Direction, Grid, InvalidMazeError, Pos, Range, RawGrid};
use mazewalk_paths::{FnPather, PathRange};
use rand::{Rng, RngExt};

/// Trait for choosing the next cell of a random walk.
pub trait RandomWalker {
    /// Given a position `p`, return a random neighbor using `rng`.
    fn step(&self, p: Pos, rng: &mut impl Rng) -> Pos;
}

/// Uniform choice among the four orthogonal neighbors.
pub struct FourDirectionWalker;

impl RandomWalker for FourDirectionWalker {
    fn step(&self, p: Pos, rng: &mut impl Rng) -> Pos {
        p.step(Direction::ALL[rng.random_range(0..Direction::ALL.len())])
    }
}

/// Walker that favors moving south, so walks drift toward the exit row.
pub struct DownhillWalker {
    /// Probability (0.0-1.0) of stepping south instead of a uniform step.
    pub south_bias: f64,
}

impl RandomWalker for DownhillWalker {
    fn step(&self, p: Pos, rng: &mut impl Rng) -> Pos {
        let r: f64 = rng.random();
        if r < self.south_bias {
            p.step(Direction::South)
        } else {
            FourDirectionWalker.step(p, rng)
        }
    }
}

/// Parameters for [`MapGen::random_obstacles`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleRule {
    /// Chance (0.0-1.0) for each cell to become a wall.
    pub wall_pct: f64,
    /// Wall off open cells that cannot be reached from the entrance.
    pub keep_reachable: bool,
}

impl Default for ObstacleRule {
    fn default() -> Self {
        Self {
            wall_pct: 0.3,
            keep_reachable: true,
        }
    }
}

/// Maze generator operating on a [`RawGrid`] with a fixed entrance.
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: RawGrid,
    pub entrance: Pos,
    bounds: Range,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator for an open `rows` x `cols` grid entered at the
    /// top-left corner.
    pub fn new(rows: usize, cols: usize, rng: R) -> Self {
        Self::with_grid(RawGrid::filled(rows, cols, Cell::Open), Pos::ZERO, rng)
    }

    /// Create a generator over an existing grid.
    ///
    /// The grid is taken to be rectangular, sized after its first row.
    pub fn with_grid(grid: RawGrid, entrance: Pos, rng: R) -> Self {
        let rows = grid.rows().len();
        let cols = grid.rows().first().map_or(0, Vec::len);
        Self {
            rng,
            grid,
            entrance,
            bounds: Range::with_size(rows as i32, cols as i32),
        }
    }

    /// The rectangle being generated.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Scatter walls over the whole grid.
    ///
    /// Each cell other than the entrance becomes a wall with probability
    /// `rule.wall_pct` and is opened otherwise. If that leaves the last row
    /// without an open cell, one of its cells is reopened at random. With
    /// `rule.keep_reachable` set, unreachable pockets are then walled off.
    ///
    /// Returns the number of walls in the final grid.
    pub fn random_obstacles(&mut self, rule: &ObstacleRule) -> usize {
        for p in self.bounds.iter() {
            let r: f64 = self.rng.random();
            let cell = if p != self.entrance && r < rule.wall_pct {
                Cell::Wall
            } else {
                Cell::Open
            };
            self.grid.set(p, cell);
        }

        let last = self.bounds.height() - 1;
        let exit_open = self
            .bounds
            .line(last)
            .iter()
            .any(|p| self.grid.get(p) == Some(Cell::Open));
        if !exit_open && !self.bounds.is_empty() {
            let col = self.rng.random_range(0..self.bounds.width());
            self.grid.set(Pos::new(last, col), Cell::Open);
        }

        if rule.keep_reachable {
            self.keep_reachable();
        }
        self.count(Cell::Wall)
    }

    /// Carve open cells with random walks from the entrance.
    ///
    /// The grid is first filled with walls. Each of the `walks` walks starts
    /// at the entrance and opens every cell it visits, until `fill_pct`
    /// (0.0-1.0) of the area is open. Steps that would leave the grid are
    /// skipped.
    ///
    /// Returns the number of cells carved.
    pub fn random_walk(&mut self, walker: &impl RandomWalker, fill_pct: f64, walks: usize) -> usize {
        let total = self.bounds.len();
        let target = ((total as f64 * fill_pct) as usize).max(1);
        for p in self.bounds.iter() {
            self.grid.set(p, Cell::Wall);
        }

        let mut carved = 0usize;
        for _ in 0..walks {
            let mut pos = self.entrance;
            for _ in 0..total * 4 {
                if carved >= target {
                    return carved;
                }
                if self.grid.get(pos) == Some(Cell::Wall) {
                    self.grid.set(pos, Cell::Open);
                    carved += 1;
                }
                let next = walker.step(pos, &mut self.rng);
                if self.bounds.contains(next) {
                    pos = next;
                }
            }
        }
        carved
    }

    /// Wall off every open cell that the entrance cannot reach.
    ///
    /// Returns the number of cells walled.
    pub fn keep_reachable(&mut self) -> usize {
        let mut pr = PathRange::new(self.bounds);
        {
            let grid = &self.grid;
            let pather = FnPather(|p: Pos| grid.get(p) == Some(Cell::Open));
            pr.cc_map(&pather, self.entrance);
        }

        let mut walled = 0;
        for p in self.bounds.iter() {
            if self.grid.get(p) == Some(Cell::Open) && pr.cc_at(p).is_none() {
                self.grid.set(p, Cell::Wall);
                walled += 1;
            }
        }
        walled
    }

    /// Count cells in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.bounds
            .iter()
            .filter(|&p| self.grid.get(p) == Some(cell))
            .count()
    }

    /// Validate the current grid with the generator's entrance.
    pub fn build(&self) -> Result<Grid, InvalidMazeError> {
        mazewalk_core::validate_with_entrance(&self.grid, self.entrance)
    }
}
