//! Longest-path search split across first moves.

use std::sync::atomic::AtomicUsize;

use mazewalk_core::{Direction, Grid, Pos};
use rayon::prelude::*;

use crate::PathRange;
use crate::config::SearchConfig;
use crate::context::Context;
use crate::longest::{Checkpoint, Exploration, conclude, single_row};
use crate::result::{Outcome, SearchError};

/// Longest simple path with one rayon task per first move from the entrance.
///
/// Each task owns its own [`PathRange`] and explores the paths that start
/// with its move; tasks share only the best length found so far, which lets
/// one task prune branches another has already beaten. Results are combined
/// in [`Direction::ALL`] order, so a complete search returns exactly what
/// [`PathRange::longest_path`] returns. A cancelled search may differ, since
/// the tasks do not stop at the same point.
pub fn longest_path_parallel(
    grid: &Grid,
    config: &SearchConfig,
    ctx: &Context,
) -> Result<Outcome, SearchError> {
    if let Some(trivial) = single_row(grid) {
        return Ok(trivial);
    }
    let ceiling = PathRange::new(grid.bounds()).exit_ceiling(grid)?;
    let entrance = grid.entrance();
    let firsts: Vec<Pos> = Direction::ALL
        .iter()
        .filter_map(|&d| grid.neighbor(entrance, d))
        .collect();
    log::debug!(
        "longest: {} workers from {}, at most {} steps",
        firsts.len(),
        entrance,
        ceiling
    );

    let checkpoint = Checkpoint::new(ctx, config);
    let shared = AtomicUsize::new(0);
    let runs: Vec<Exploration> = firsts
        .par_iter()
        .map(|&first| {
            PathRange::new(grid.bounds()).explore(
                grid,
                &[entrance, first],
                ceiling,
                config.prune,
                &checkpoint,
                Some(&shared),
            )
        })
        .collect();

    // Workers start one step in, so an entrance on the exit row is only
    // seen here.
    let mut best = grid.is_exit_cell(entrance).then(|| vec![entrance]);
    let mut best_len = best.as_ref().map(|p| p.len() - 1);
    let mut cancelled = false;
    let mut iterations = 0;
    for run in runs {
        iterations += run.iterations;
        cancelled |= run.cancelled;
        let Some(path) = run.best else {
            continue;
        };
        let len = path.len() - 1;
        if best_len.is_none_or(|b| len > b) {
            best_len = Some(len);
            best = Some(path);
        }
    }

    conclude(best, cancelled, iterations)
}
