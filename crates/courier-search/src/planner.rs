//! Planner trait and helpers shared by the search implementations.
//!
//! # Pluggability
//!
//! Both planners expose the same call shape through [`Planner`], so callers
//! (the comparison report, batch runs, the demo) can treat them uniformly.
//!
//! # Thread safety
//!
//! Implementations must be `Send + Sync`.  A planner holds only its settings;
//! all node state is allocated inside `search` and dropped on return, so one
//! planner and one `&CityGrid` can serve many threads at once.

use rustc_hash::FxHashMap;

use courier_core::Coord;
use courier_grid::CityGrid;

use crate::{Endpoint, SearchError, SearchOutcome, SearchResult};

/// A route planner over a [`CityGrid`].
pub trait Planner: Send + Sync {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Search for a route from `start` to `goal`.
    ///
    /// Returns `Err` only if an endpoint is out of bounds or on an obstacle.
    /// An unreachable goal is an `Ok` outcome with no path.
    fn search(&self, grid: &CityGrid, start: Coord, goal: Coord) -> SearchResult<SearchOutcome>;
}

/// Fail fast on endpoints no route could ever touch.
pub(crate) fn check_endpoints(grid: &CityGrid, start: Coord, goal: Coord) -> SearchResult<()> {
    for (role, coord) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.is_traversable(coord) {
            return Err(SearchError::InvalidEndpoint { role, coord });
        }
    }
    Ok(())
}

/// Follow back-pointers from `goal` to `start` and return the path in travel
/// order.
pub(crate) fn reconstruct(parents: &FxHashMap<Coord, Coord>, start: Coord, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        let Some(&prev) = parents.get(&cur) else {
            break;
        };
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
