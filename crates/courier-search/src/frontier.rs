//! Min-priority frontier shared by both planners.
//!
//! `BinaryHeap` is a max-heap, so [`FrontierEntry`]'s `Ord` is reversed on
//! priority.  Ties are broken by larger `g` first (the entry closer to the
//! goal along its own path), then by coordinate, so pop order is fully
//! deterministic.
//!
//! There is no decrease-key: a cheaper route to a coordinate is pushed as a
//! new entry and the old one goes stale.  Planners discard stale entries on
//! pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use courier_core::Coord;

#[derive(Copy, Clone, Debug)]
pub(crate) struct FrontierEntry {
    /// Ordering key: `g + h` for A*, `h` for greedy.
    pub priority: f64,
    /// Accumulated cost carried by this entry.  Always 0 for greedy search.
    pub g:        u32,
    pub coord:    Coord,
}

impl FrontierEntry {
    #[inline]
    pub fn new(priority: f64, g: u32, coord: Coord) -> Self {
        Self { priority, g, coord }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Thin wrapper so planners read as `frontier.push(..)` / `frontier.pop()`.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
