/// Marker set over flat cell indices.
///
/// Clearing bumps a generation counter instead of touching every slot, so a
/// set can be reused across searches for free. Each running search owns its
/// sets exclusively.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    marks: Vec<u32>,
    generation: u32,
}

impl VisitedSet {
    /// Create an empty set able to hold indices `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![0; len],
            generation: 1,
        }
    }

    /// Number of indices the set can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.marks.len()
    }

    /// Grow to hold at least `len` indices, clearing the set.
    pub fn resize(&mut self, len: usize) {
        if len > self.marks.len() {
            self.marks.clear();
            self.marks.resize(len, 0);
            self.generation = 1;
        } else {
            self.clear();
        }
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale stamps could now collide.
            self.marks.fill(0);
            self.generation = 1;
        }
    }

    /// Mark `i`. Returns `false` if it was already marked.
    #[inline]
    pub fn insert(&mut self, i: usize) -> bool {
        let was = self.marks[i] == self.generation;
        self.marks[i] = self.generation;
        !was
    }

    /// Unmark `i`.
    #[inline]
    pub fn remove(&mut self, i: usize) {
        if self.marks[i] == self.generation {
            self.marks[i] = 0;
        }
    }

    /// Whether `i` is marked.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.marks[i] == self.generation
    }
}
