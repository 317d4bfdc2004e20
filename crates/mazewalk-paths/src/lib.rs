//! Path searches over maze grids.
//!
//! Two searches run from a grid's entrance to its exit row:
//!
//! - **Shortest** breadth-first search ([`PathRange::shortest_path`])
//! - **Longest** simple path by explicit-stack backtracking
//!   ([`PathRange::longest_path`], or [`longest_path_parallel`] with one
//!   rayon task per first move)
//!
//! plus the helpers they build on: BFS distance maps
//! ([`PathRange::bfs_map`]) and connected components
//! ([`PathRange::cc_map_all`], [`PathRange::cc_map`]).
//!
//! All searches operate through [`PathRange`], which owns and reuses its
//! internal caches so that repeated queries incur no allocations after
//! warm-up. The [`solve`] family validates input, picks the search for a
//! [`Mode`] and reports an [`Outcome`].
//!
//! Longest searches can be stopped early through a [`Context`] or the
//! budgets in [`SearchConfig`]; they then return [`Outcome::Cancelled`]
//! holding the best path found so far.

mod bfs;
mod cc;
mod config;
mod context;
mod longest;
mod parallel;
mod pathrange;
mod result;
mod solve;
mod traits;
mod visited;

pub use config::SearchConfig;
pub use context::Context;
pub use parallel::longest_path_parallel;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use result::{Mode, Outcome, PathResult, SearchError, UnknownMode};
pub use solve::{solve, solve_definition, solve_grid};
pub use traits::{FnPather, Pather};
pub use visited::VisitedSet;
