use mazewalk_core::{Grid, MazeDefinition, RawGrid, validate};

use crate::PathRange;
use crate::config::SearchConfig;
use crate::context::Context;
use crate::parallel::longest_path_parallel;
use crate::result::{Mode, Outcome, SearchError};

/// Validate `raw` and search it in the given mode.
///
/// Validation failures come back as [`SearchError::InvalidMaze`].
pub fn solve(
    raw: &RawGrid,
    mode: Mode,
    config: &SearchConfig,
    ctx: &Context,
) -> Result<Outcome, SearchError> {
    let grid = validate(raw)?;
    solve_grid(&grid, mode, config, ctx)
}

/// Search an already validated grid.
///
/// A shortest search always completes; `config` and `ctx` only affect the
/// longest search.
pub fn solve_grid(
    grid: &Grid,
    mode: Mode,
    config: &SearchConfig,
    ctx: &Context,
) -> Result<Outcome, SearchError> {
    match mode {
        Mode::Shortest => PathRange::new(grid.bounds())
            .shortest_path(grid)
            .map(Outcome::Complete),
        Mode::Longest if config.parallel => longest_path_parallel(grid, config, ctx),
        Mode::Longest => PathRange::new(grid.bounds()).longest_path(grid, config, ctx),
    }
}

/// Build the grid described by `def` and search it.
pub fn solve_definition(
    def: &MazeDefinition,
    mode: Mode,
    config: &SearchConfig,
    ctx: &Context,
) -> Result<Outcome, SearchError> {
    let grid = def.to_grid()?;
    solve_grid(&grid, mode, config, ctx)
}
