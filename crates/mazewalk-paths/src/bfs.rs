use mazewalk_core::{Grid, Pos};

use crate::PathRange;
use crate::pathrange::{NO_PARENT, PathNode, UNREACHABLE};
use crate::result::{Mode, PathResult, SearchError};
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes in visiting order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Pos],
        max_dist: i32,
    ) -> &[PathNode] {
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_results.clear();
        self.bfs_queue.clear();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                self.bfs_queue.push_back(si);
                self.bfs_results.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.bfs_queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                self.bfs_queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last BFS.
    pub fn bfs_at(&self, p: Pos) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }

    /// Fewest-steps path from the grid's entrance to its exit row.
    ///
    /// Neighbors are expanded in [`Direction::ALL`](mazewalk_core::Direction::ALL)
    /// order from a FIFO frontier, and the search stops at the first exit
    /// cell discovered, so among several equally short paths the result is
    /// always the same one.
    pub fn shortest_path(&mut self, grid: &Grid) -> Result<PathResult, SearchError> {
        self.fit(grid.bounds());
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_results.clear();
        self.bfs_queue.clear();

        let start = grid.entrance();
        let si = self.idx(start).ok_or(SearchError::NoPathFound)?;
        self.bfs_map[si] = 0;
        self.bfs_parent[si] = NO_PARENT;

        let found = if grid.is_exit_cell(start) {
            Some(si)
        } else {
            self.bfs_queue.push_back(si);
            self.bfs_exit_search(grid)
        };

        let Some(goal) = found else {
            log::debug!(
                "shortest: no path from {} in {}x{} grid",
                start,
                grid.rows(),
                grid.cols()
            );
            return Err(SearchError::NoPathFound);
        };

        let mut path = Vec::with_capacity(self.bfs_map[goal] as usize + 1);
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.bfs_parent[ci];
        }
        path.reverse();

        log::debug!(
            "shortest: {} steps from {} to {}",
            path.len() - 1,
            start,
            self.point(goal)
        );
        Ok(PathResult::new(path, Mode::Shortest))
    }

    /// Drain the frontier until an exit cell is enqueued.
    fn bfs_exit_search(&mut self, grid: &Grid) -> Option<usize> {
        while let Some(ci) = self.bfs_queue.pop_front() {
            let cp = self.point(ci);
            let nd = self.bfs_map[ci] + 1;
            for np in grid.neighbors(cp) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = nd;
                self.bfs_parent[ni] = ci;
                if grid.is_exit_cell(np) {
                    return Some(ni);
                }
                self.bfs_queue.push_back(ni);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::Range;

    fn search(s: &str) -> Result<PathResult, SearchError> {
        let g = Grid::parse(s).unwrap();
        PathRange::new(g.bounds()).shortest_path(&g)
    }

    #[test]
    fn open_3x3_goes_straight_down() {
        let r = search("...\n...\n...").unwrap();
        assert_eq!(r.length(), 2);
        assert_eq!(r.path(), &[Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
        assert_eq!(r.mode(), Mode::Shortest);
    }

    #[test]
    fn single_row_is_trivial() {
        let r = search("#..#").unwrap();
        assert_eq!(r.length(), 0);
        assert_eq!(r.path(), &[Pos::new(0, 1)]);
    }

    #[test]
    fn corridor_length() {
        let r = search("#.#\n#.#\n#.#\n#.#\n#.#").unwrap();
        assert_eq!(r.length(), 4);
        assert!(r.path().iter().all(|p| p.col == 1));
    }

    #[test]
    fn winding_path() {
        let maze = "\
.####
.#...
.#.#.
...#.
####.";
        let r = search(maze).unwrap();
        assert_eq!(r.length(), 12);
        assert_eq!(r.end(), Some(Pos::new(4, 4)));
    }

    #[test]
    fn tie_break_prefers_first_direction() {
        // (2,0) and (2,2) are both three steps away. East is expanded before
        // west at (1,1), so the right-hand exit is discovered first.
        let maze = "\
#.#
...
.#.";
        let r = search(maze).unwrap();
        assert_eq!(r.length(), 3);
        assert_eq!(
            r.path(),
            &[Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 2), Pos::new(2, 2)]
        );
    }

    #[test]
    fn unreachable_exit() {
        let err = search("..\n##\n..").unwrap_err();
        assert_eq!(err, SearchError::NoPathFound);
    }

    #[test]
    fn workspace_is_reusable_across_grids() {
        let a = Grid::parse("...\n...\n...").unwrap();
        let b = Grid::parse(".#\n.#\n.#\n..").unwrap();
        let mut pr = PathRange::new(Range::with_size(1, 1));
        assert_eq!(pr.shortest_path(&a).unwrap().length(), 2);
        assert_eq!(pr.shortest_path(&b).unwrap().length(), 3);
        assert_eq!(pr.shortest_path(&a).unwrap().length(), 2);
    }

    #[test]
    fn bfs_map_distances() {
        let g = Grid::parse("...\n.#.\n...").unwrap();
        let mut pr = PathRange::new(g.bounds());
        let nodes = pr.bfs_map(&g, &[Pos::new(0, 0)], i32::MAX).to_vec();
        assert_eq!(nodes.len(), 8);
        assert_eq!(nodes[0], PathNode { pos: Pos::new(0, 0), cost: 0 });
        assert_eq!(pr.bfs_at(Pos::new(2, 2)), 4);
        assert_eq!(pr.bfs_at(Pos::new(1, 1)), UNREACHABLE);
        assert_eq!(pr.bfs_at(Pos::new(9, 9)), UNREACHABLE);
    }

    #[test]
    fn bfs_map_respects_max_dist() {
        let g = Grid::parse("....\n....").unwrap();
        let mut pr = PathRange::new(g.bounds());
        let n = pr.bfs_map(&g, &[Pos::new(0, 0)], 1).len();
        assert_eq!(n, 3);
        assert_eq!(pr.bfs_at(Pos::new(1, 1)), UNREACHABLE);
    }
}
