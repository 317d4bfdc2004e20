use mazewalk_core::{Grid, Pos};

/// Minimal pathfinding interface: provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// A maze grid moves orthogonally between open cells, in
/// [`Direction::ALL`](mazewalk_core::Direction::ALL) order.
impl Pather for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

/// Adapter turning a passability predicate into a 4-way [`Pather`].
pub struct FnPather<F>(pub F);

impl<F: Fn(Pos) -> bool> Pather for FnPather<F> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| (self.0)(n)));
    }
}
