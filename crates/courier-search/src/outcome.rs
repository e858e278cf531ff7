//! Search results and run limits.

use std::fmt;
use std::time::Instant;

use courier_core::Coord;

/// How a search call ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was reached; `path` is set.
    Found,
    /// The frontier emptied first: the goal is unreachable.
    Exhausted,
    /// [`SearchLimits::max_expansions`] was hit before either of the above.
    LimitReached,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Found => f.write_str("found"),
            SearchStatus::Exhausted => f.write_str("no route"),
            SearchStatus::LimitReached => f.write_str("expansion limit"),
        }
    }
}

/// Optional bounds on a single search call.
///
/// The default is unbounded: a search runs until it finds the goal or
/// exhausts every reachable cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after this many cells have been expanded.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max_expansions(n: usize) -> Self {
        Self { max_expansions: Some(n) }
    }

    /// `true` once `expanded` cells have used up the budget.
    #[inline]
    pub(crate) fn reached(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}

/// Result of one planner call.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// Start-to-goal cells, both inclusive.  `Some` only when `Found`.
    pub path: Option<Vec<Coord>>,
    /// Cells popped from the frontier and expanded.  Stale entries that were
    /// discarded on pop are not counted.
    pub visited: usize,
    /// Wall-clock duration of the search call.
    pub elapsed_ms: f64,
    /// Total entry cost of `path`.
    pub cost: Option<u32>,
}

impl SearchOutcome {
    pub(crate) fn found(path: Vec<Coord>, cost: u32, visited: usize, started: Instant) -> Self {
        Self {
            status: SearchStatus::Found,
            path: Some(path),
            visited,
            elapsed_ms: elapsed_ms(started),
            cost: Some(cost),
        }
    }

    pub(crate) fn unfinished(status: SearchStatus, visited: usize, started: Instant) -> Self {
        Self {
            status,
            path: None,
            visited,
            elapsed_ms: elapsed_ms(started),
            cost: None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    #[inline]
    pub fn path(&self) -> Option<&[Coord]> {
        self.path.as_deref()
    }

    /// Number of cells on the path, start and goal included.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

#[inline]
fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1_000.0
}
