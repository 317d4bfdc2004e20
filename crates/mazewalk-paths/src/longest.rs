//! Longest simple path search.
//!
//! The search is an exhaustive depth-first backtracking walk driven by an
//! explicit stack of [`Frame`]s instead of recursion, so its depth is bounded
//! by memory rather than by the call stack, and a cancellation checkpoint
//! can run between any two frame operations.
//!
//! Each frame remembers how far it got through
//! [`Direction::ALL`](mazewalk_core::Direction::ALL). A frame is pushed when
//! the walk steps onto an unvisited open cell and popped, with its visited
//! mark undone, once all four directions are spent. Whenever the top frame
//! stands on an exit cell the current path is compared with the best one;
//! only a strictly longer path replaces it, so among equally long paths the
//! first one met in direction order wins. Reaching the exit row does not end
//! a path; it may run along the row and leave it again. The exception is a
//! one-row maze, where the entrance is already the answer.
//!
//! With pruning on, a step is skipped when a flood fill over the cells not
//! on the current path shows that no exit is reachable from it, or that even
//! walking every reachable cell could not beat the best length found so far.
//! The fill only ever gives an upper bound, so pruning never changes the
//! result.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

use mazewalk_core::{Direction, Grid, Pos};

use crate::PathRange;
use crate::config::SearchConfig;
use crate::context::Context;
use crate::result::{Mode, Outcome, PathResult, SearchError};
use crate::visited::VisitedSet;

/// One entry of the explicit search stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    /// Flat index of the cell this frame stands on; unmarked on pop.
    pub(crate) idx: usize,
    /// Next entry of `Direction::ALL` to try.
    pub(crate) next_dir: u8,
}

/// Stop conditions evaluated once per loop iteration.
///
/// The iteration budget is spent from one counter, so searches sharing a
/// checkpoint share the budget.
pub(crate) struct Checkpoint<'a> {
    ctx: &'a Context,
    deadline: Option<Instant>,
    max_iterations: Option<u64>,
    spent: AtomicU64,
}

impl<'a> Checkpoint<'a> {
    pub(crate) fn new(ctx: &'a Context, config: &SearchConfig) -> Self {
        Self {
            ctx,
            deadline: config.timeout.map(|t| Instant::now() + t),
            max_iterations: config.max_iterations,
            spent: AtomicU64::new(0),
        }
    }

    /// Take one iteration from the budget; `true` means stop instead.
    #[inline]
    fn reached(&self) -> bool {
        if self.ctx.is_done() || self.deadline.is_some_and(|d| Instant::now() >= d) {
            return true;
        }
        self.max_iterations
            .is_some_and(|m| self.spent.fetch_add(1, Ordering::Relaxed) >= m)
    }
}

/// What one run of the search loop found.
pub(crate) struct Exploration {
    pub(crate) best: Option<Vec<Pos>>,
    pub(crate) iterations: u64,
    pub(crate) cancelled: bool,
}

/// Area reachable from a cell without crossing the current path.
struct Reach {
    cells: usize,
    exit: bool,
}

fn reach_from(
    grid: &Grid,
    visited: &VisitedSet,
    seen: &mut VisitedSet,
    stack: &mut Vec<usize>,
    start: usize,
) -> Reach {
    seen.clear();
    stack.clear();
    seen.insert(start);
    stack.push(start);

    let mut reach = Reach {
        cells: 0,
        exit: false,
    };
    while let Some(i) = stack.pop() {
        reach.cells += 1;
        let p = grid.pos(i);
        reach.exit |= grid.is_exit_cell(p);
        for n in grid.neighbors(p) {
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if visited.contains(ni) || !seen.insert(ni) {
                continue;
            }
            stack.push(ni);
        }
    }
    reach
}

impl PathRange {
    /// Most-steps simple path from the grid's entrance to its exit row.
    ///
    /// Returns [`Outcome::Complete`] once the search space is exhausted, or
    /// [`Outcome::Cancelled`] with the best path found so far (possibly
    /// empty) when `ctx` is cancelled or a budget from `config` runs out.
    /// Fails with [`SearchError::NoPathFound`] when no exit cell is
    /// reachable at all.
    pub fn longest_path(
        &mut self,
        grid: &Grid,
        config: &SearchConfig,
        ctx: &Context,
    ) -> Result<Outcome, SearchError> {
        if let Some(trivial) = single_row(grid) {
            return Ok(trivial);
        }
        let ceiling = self.exit_ceiling(grid)?;
        let entrance = grid.entrance();
        log::debug!(
            "longest: searching {}x{} grid from {}, at most {} steps",
            grid.rows(),
            grid.cols(),
            entrance,
            ceiling
        );

        let checkpoint = Checkpoint::new(ctx, config);
        let run = self.explore(grid, &[entrance], ceiling, config.prune, &checkpoint, None);
        conclude(run.best, run.cancelled, run.iterations)
    }

    /// Number of steps in a path visiting every cell reachable from the
    /// entrance, or `NoPathFound` if none of them is an exit cell.
    pub(crate) fn exit_ceiling(&mut self, grid: &Grid) -> Result<usize, SearchError> {
        self.fit(grid.bounds());
        self.visited.clear();
        let si = grid
            .index(grid.entrance())
            .ok_or(SearchError::NoPathFound)?;
        let reach = reach_from(
            grid,
            &self.visited,
            &mut self.fill_seen,
            &mut self.fill_stack,
            si,
        );
        if !reach.exit {
            log::debug!("longest: no exit reachable from {}", grid.entrance());
            return Err(SearchError::NoPathFound);
        }
        Ok(reach.cells - 1)
    }

    /// Run the search loop below `prefix`.
    ///
    /// Every cell of `prefix` is marked visited and only the last one gets a
    /// frame, so the walk never backtracks into the prefix. `ceiling` is the
    /// longest length possible at all; reaching it ends the search when
    /// pruning is on. `shared` holds the best length found by sibling
    /// searches and only prunes branches that are strictly worse.
    pub(crate) fn explore(
        &mut self,
        grid: &Grid,
        prefix: &[Pos],
        ceiling: usize,
        prune: bool,
        checkpoint: &Checkpoint<'_>,
        shared: Option<&AtomicUsize>,
    ) -> Exploration {
        self.fit(grid.bounds());
        let Self {
            visited,
            frames,
            fill_seen,
            fill_stack,
            ..
        } = self;
        visited.clear();
        frames.clear();

        let mut path: Vec<Pos> = Vec::with_capacity(ceiling + 1);
        for &p in prefix {
            if let Some(i) = grid.index(p) {
                visited.insert(i);
            }
            path.push(p);
        }
        let mut run = Exploration {
            best: None,
            iterations: 0,
            cancelled: false,
        };
        let Some(top) = prefix.last().and_then(|&p| grid.index(p)) else {
            return run;
        };
        frames.push(Frame {
            idx: top,
            next_dir: 0,
        });

        let mut best_len: Option<usize> = None;

        while let Some(&Frame { idx, next_dir }) = frames.last() {
            if checkpoint.reached() {
                run.cancelled = true;
                break;
            }
            run.iterations += 1;

            let cp = grid.pos(idx);
            if next_dir == 0 && grid.is_exit_cell(cp) {
                let len = path.len() - 1;
                if best_len.is_none_or(|b| len > b) {
                    log::trace!("longest: {} steps after {} iterations", len, run.iterations);
                    best_len = Some(len);
                    run.best.get_or_insert_with(Vec::new).clone_from(&path);
                    if let Some(shared) = shared {
                        shared.fetch_max(len, Ordering::Relaxed);
                    }
                    if prune && len >= ceiling {
                        break;
                    }
                }
            }

            let mut dir = next_dir as usize;
            let mut step = None;
            while dir < Direction::ALL.len() {
                let d = Direction::ALL[dir];
                dir += 1;
                let Some(np) = grid.neighbor(cp, d) else {
                    continue;
                };
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if visited.contains(ni) {
                    continue;
                }
                if prune {
                    let reach = reach_from(grid, visited, fill_seen, fill_stack, ni);
                    if !reach.exit {
                        continue;
                    }
                    let bound = path.len() + reach.cells - 1;
                    if best_len.is_some_and(|b| bound <= b) {
                        continue;
                    }
                    if shared.is_some_and(|s| bound < s.load(Ordering::Relaxed)) {
                        continue;
                    }
                }
                step = Some((np, ni));
                break;
            }

            if let Some(top) = frames.last_mut() {
                top.next_dir = dir as u8;
            }
            match step {
                Some((np, ni)) => {
                    visited.insert(ni);
                    path.push(np);
                    frames.push(Frame {
                        idx: ni,
                        next_dir: 0,
                    });
                }
                None => {
                    frames.pop();
                    visited.remove(idx);
                    path.pop();
                }
            }
        }

        run
    }
}

/// A one-row maze is solved where it starts; walking along the row does not
/// count as a longer path.
pub(crate) fn single_row(grid: &Grid) -> Option<Outcome> {
    if grid.rows() != 1 {
        return None;
    }
    log::debug!("longest: entrance {} is on the exit row", grid.entrance());
    Some(Outcome::Complete(PathResult::new(
        vec![grid.entrance()],
        Mode::Longest,
    )))
}

/// Turn the best path of a finished search into its outcome.
pub(crate) fn conclude(
    best: Option<Vec<Pos>>,
    cancelled: bool,
    iterations: u64,
) -> Result<Outcome, SearchError> {
    let result = PathResult::new(best.unwrap_or_default(), Mode::Longest);
    if cancelled {
        log::info!(
            "longest: stopped after {} iterations with {} steps",
            iterations,
            result.length()
        );
        return Ok(Outcome::Cancelled(result));
    }
    if result.is_empty() {
        return Err(SearchError::NoPathFound);
    }
    log::debug!(
        "longest: {} steps after {} iterations",
        result.length(),
        iterations
    );
    Ok(Outcome::Complete(result))
}
