//! Distance estimates used to order the frontier.
//!
//! Both estimates are admissible and consistent on a four-connected grid
//! whose cheapest step costs 1: moving one cell changes either estimate by
//! at most 1, which never exceeds the cost of that move.  A* relies on
//! consistency to close a cell the first time it is popped.

use std::fmt;
use std::str::FromStr;

use courier_core::Coord;

use crate::SearchError;

/// Straight-line distance between two cells.
#[inline]
pub fn euclidean(from: Coord, to: Coord) -> f64 {
    from.euclidean(to)
}

/// Selectable goal-distance estimate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Grid (L1) distance.  Tighter than Euclidean on a four-connected grid.
    Manhattan,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> f64 {
        match self {
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Manhattan => from.manhattan(to) as f64,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Euclidean => f.write_str("euclidean"),
            Heuristic::Manhattan => f.write_str("manhattan"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(SearchError::UnknownHeuristic(s.to_string())),
        }
    }
}
