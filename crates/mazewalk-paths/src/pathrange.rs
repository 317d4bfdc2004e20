use std::collections::VecDeque;

use mazewalk_core::{Pos, Range};

use crate::longest::Frame;
use crate::visited::VisitedSet;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Pos,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index for search roots.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search workspace for one grid rectangle.
///
/// `PathRange` owns every piece of mutable search state (frontier, parent
/// map, visited markers, frame stack, component labels) so that repeated
/// queries incur no allocations after the first use. Searches take
/// `&mut self`, which makes a workspace exclusive to one running search;
/// concurrent searches each use their own `PathRange` over a shared
/// [`Grid`](mazewalk_core::Grid).
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_parent: Vec<usize>,
    pub(crate) bfs_queue: VecDeque<usize>,
    pub(crate) bfs_results: Vec<PathNode>,
    // CC caches
    pub(crate) cc_labels: Vec<i32>,
    pub(crate) cc_stack: Vec<usize>,
    // longest-path caches
    pub(crate) visited: VisitedSet,
    pub(crate) frames: Vec<Frame>,
    pub(crate) fill_seen: VisitedSet,
    pub(crate) fill_stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pos>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            bfs_map: vec![UNREACHABLE; len],
            bfs_parent: vec![NO_PARENT; len],
            bfs_queue: VecDeque::new(),
            bfs_results: Vec::new(),
            cc_labels: vec![-1; len],
            cc_stack: Vec::new(),
            visited: VisitedSet::new(len),
            frames: Vec::new(),
            fill_seen: VisitedSet::new(len),
            fill_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are kept and
    /// only marker generations are bumped. Otherwise caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.bfs_map.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.bfs_results.clear();
        self.frames.clear();

        if new_len <= old_capacity {
            self.visited.clear();
            self.fill_seen.clear();
            return;
        }

        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
        self.bfs_parent.clear();
        self.bfs_parent.resize(new_len, NO_PARENT);
        self.bfs_queue.clear();

        self.cc_labels.clear();
        self.cc_labels.resize(new_len, -1);
        self.cc_stack.clear();

        self.visited.resize(new_len);
        self.fill_seen.resize(new_len);
        self.fill_stack.clear();
    }

    /// Switch to `rng` unless it is already the current range.
    pub(crate) fn fit(&mut self, rng: Range) {
        if self.rng != rng {
            self.set_range(rng);
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Pos` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let col = (p.col - self.rng.min.col) as usize;
        let row = (p.row - self.rng.min.row) as usize;
        Some(row * self.width + col)
    }

    /// Convert a flat index back to a `Pos`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Pos {
        let col = (idx % self.width) as i32 + self.rng.min.col;
        let row = (idx / self.width) as i32 + self.rng.min.row;
        Pos::new(row, col)
    }
}
