//! Randomized checks of the path searches against brute force.

use mazewalk_core::{Grid, Pos, validate};
use mazewalk_paths::{
    Context, Mode, Outcome, PathRange, SearchConfig, SearchError, UNREACHABLE, longest_path_parallel,
    solve_grid,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::{MapGen, ObstacleRule};

fn random_grid(seed: u64) -> Option<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = rng.random_range(2..=4);
    let cols = rng.random_range(2..=5);
    let mut mg = MapGen::new(rows, cols, rng);
    mg.random_obstacles(&ObstacleRule {
        wall_pct: 0.3,
        keep_reachable: false,
    });
    validate(&mg.grid).ok()
}

/// Shortest and longest exit-terminating simple path lengths, found by
/// enumerating every simple path from the entrance.
fn brute_force(grid: &Grid) -> Option<(usize, usize)> {
    fn walk(grid: &Grid, seen: &mut [bool], path: &mut Vec<Pos>, best: &mut Option<(usize, usize)>) {
        let p = *path.last().unwrap();
        let i = grid.index(p).unwrap();
        seen[i] = true;
        if grid.is_exit_cell(p) {
            let len = path.len() - 1;
            *best = Some(match *best {
                None => (len, len),
                Some((lo, hi)) => (lo.min(len), hi.max(len)),
            });
        }
        for n in grid.neighbors(p) {
            if !seen[grid.index(n).unwrap()] {
                path.push(n);
                walk(grid, seen, path, best);
                path.pop();
            }
        }
        seen[i] = false;
    }

    let mut seen = vec![false; grid.len()];
    let mut path = vec![grid.entrance()];
    let mut best = None;
    walk(grid, &mut seen, &mut path, &mut best);
    best
}

fn assert_simple_exit_path(grid: &Grid, path: &[Pos]) {
    assert_eq!(path.first(), Some(&grid.entrance()));
    assert!(grid.is_exit_cell(*path.last().unwrap()));
    for (k, p) in path.iter().enumerate() {
        assert!(grid.is_open(*p));
        assert!(!path[..k].contains(p), "{p} repeated");
    }
    for w in path.windows(2) {
        let d = w[1] - w[0];
        assert_eq!(d.row.abs() + d.col.abs(), 1);
    }
}

#[test]
fn searches_match_brute_force() {
    let cfg = SearchConfig::default();
    let ctx = Context::new();
    let mut checked = 0;
    for seed in 0..300 {
        let Some(grid) = random_grid(seed) else {
            continue;
        };
        let short = solve_grid(&grid, Mode::Shortest, &cfg, &ctx);
        let long = solve_grid(&grid, Mode::Longest, &cfg, &ctx);
        match brute_force(&grid) {
            None => {
                assert_eq!(short, Err(SearchError::NoPathFound), "seed {seed}\n{grid}");
                assert_eq!(long, Err(SearchError::NoPathFound), "seed {seed}\n{grid}");
            }
            Some((lo, hi)) => {
                let short = short.unwrap().into_result();
                let long = long.unwrap();
                assert!(!long.is_cancelled());
                let long = long.into_result();
                assert_eq!(short.length(), lo, "seed {seed}\n{grid}");
                assert_eq!(long.length(), hi, "seed {seed}\n{grid}");
                assert!(short.length() <= long.length());
                assert_simple_exit_path(&grid, short.path());
                assert_simple_exit_path(&grid, long.path());
                checked += 1;
            }
        }
    }
    assert!(checked > 50, "only {checked} solvable grids");
}

/// Nearest exit by distance map, or `None` if no exit is reached.
fn nearest_exit(grid: &Grid) -> Option<usize> {
    let mut pr = PathRange::new(grid.bounds());
    let reached = pr.bfs_map(grid, &[grid.entrance()], i32::MAX);
    assert_eq!(reached.first().map(|n| n.pos), Some(grid.entrance()));
    grid.exit_cells()
        .map(|p| pr.bfs_at(p))
        .filter(|&d| d != UNREACHABLE)
        .min()
        .map(|d| d as usize)
}

#[test]
fn distance_map_agrees_with_shortest_path() {
    let cfg = SearchConfig::default();
    let ctx = Context::new();
    for seed in 0..200 {
        let Some(grid) = random_grid(seed) else {
            continue;
        };
        let short = solve_grid(&grid, Mode::Shortest, &cfg, &ctx);
        match nearest_exit(&grid) {
            None => assert_eq!(short, Err(SearchError::NoPathFound), "seed {seed}\n{grid}"),
            Some(d) => {
                let short = short.unwrap().into_result();
                assert_eq!(short.length(), d, "seed {seed}\n{grid}");
                // Each cell along the path sits exactly one step further out.
                let mut pr = PathRange::new(grid.bounds());
                pr.bfs_map(&grid, &[grid.entrance()], i32::MAX);
                for (k, &p) in short.path().iter().enumerate() {
                    assert_eq!(pr.bfs_at(p), k as i32, "seed {seed}");
                }
            }
        }
    }
}

#[test]
fn variants_agree() {
    let ctx = Context::new();
    let pruned = SearchConfig::default();
    let unpruned = SearchConfig::default().with_prune(false);
    for seed in 0..100 {
        let Some(grid) = random_grid(seed) else {
            continue;
        };
        let mut pr = PathRange::new(grid.bounds());
        let base = pr.longest_path(&grid, &pruned, &ctx);
        assert_eq!(pr.longest_path(&grid, &pruned, &ctx), base, "seed {seed}");
        assert_eq!(pr.longest_path(&grid, &unpruned, &ctx), base, "seed {seed}");
        assert_eq!(longest_path_parallel(&grid, &pruned, &ctx), base, "seed {seed}");
        assert_eq!(longest_path_parallel(&grid, &unpruned, &ctx), base, "seed {seed}");
    }
}

#[test]
fn budgeted_search_returns_valid_prefix_result() {
    let ctx = Context::new();
    for seed in 0..50 {
        let Some(grid) = random_grid(seed) else {
            continue;
        };
        let Ok(full) = PathRange::new(grid.bounds()).longest_path(&grid, &SearchConfig::default(), &ctx)
        else {
            continue;
        };
        let cfg = SearchConfig::default().with_max_iterations(10);
        match PathRange::new(grid.bounds()).longest_path(&grid, &cfg, &ctx).unwrap() {
            Outcome::Complete(r) => assert_eq!(&r, full.result()),
            Outcome::Cancelled(r) => {
                if !r.is_empty() {
                    assert_simple_exit_path(&grid, r.path());
                }
                assert!(r.length() <= full.result().length());
            }
        }
    }
}
