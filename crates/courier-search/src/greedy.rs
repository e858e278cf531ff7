//! Greedy best-first search.
//!
//! The frontier is ordered by the heuristic alone; accumulated cost is never
//! tracked.  Each cell gets one back-pointer, set the first time it is
//! discovered, and is never relaxed afterwards.  The search therefore heads
//! straight for whatever looks closest to the goal and usually expands far
//! fewer cells than A*, but the route it returns can be longer or run
//! through heavier traffic than the optimum.

use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};

use courier_core::Coord;
use courier_grid::CityGrid;

use crate::frontier::{Frontier, FrontierEntry};
use crate::planner::{check_endpoints, reconstruct};
use crate::{Heuristic, Planner, SearchLimits, SearchOutcome, SearchResult, SearchStatus};

/// Greedy best-first planner.  Fast, not cost-optimal.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyPlanner {
    pub heuristic: Heuristic,
    pub limits:    SearchLimits,
}

impl GreedyPlanner {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic, limits: SearchLimits::default() }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Planner for GreedyPlanner {
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn search(&self, grid: &CityGrid, start: Coord, goal: Coord) -> SearchResult<SearchOutcome> {
        check_endpoints(grid, start, goal)?;
        Ok(greedy(grid, start, goal, self.heuristic, self.limits))
    }
}

/// Greedy best-first search with the Euclidean heuristic and no limits.
pub fn search(grid: &CityGrid, start: Coord, goal: Coord) -> SearchResult<SearchOutcome> {
    GreedyPlanner::default().search(grid, start, goal)
}

fn greedy(
    grid:      &CityGrid,
    start:     Coord,
    goal:      Coord,
    heuristic: Heuristic,
    limits:    SearchLimits,
) -> SearchOutcome {
    let started = Instant::now();

    let mut parents:    FxHashMap<Coord, Coord> = FxHashMap::default();
    // Every closed cell was discovered first, so this doubles as the closed
    // check for neighbours.
    let mut discovered: FxHashSet<Coord>        = FxHashSet::default();
    let mut closed:     FxHashSet<Coord>        = FxHashSet::default();
    let mut frontier = Frontier::new();
    let mut visited  = 0usize;

    discovered.insert(start);
    frontier.push(FrontierEntry::new(heuristic.estimate(start, goal), 0, start));

    while let Some(entry) = frontier.pop() {
        let current = entry.coord;

        if !closed.insert(current) {
            continue;
        }

        if limits.reached(visited) {
            warn!(visited, %start, %goal, "greedy expansion limit reached");
            return SearchOutcome::unfinished(SearchStatus::LimitReached, visited, started);
        }
        visited += 1;

        if current == goal {
            let path = reconstruct(&parents, start, goal);
            let cost = grid.path_cost(&path);
            let outcome = SearchOutcome::found(path, cost, visited, started);
            debug!(visited, cost, elapsed_ms = outcome.elapsed_ms, "greedy found route");
            return outcome;
        }

        trace!(%current, h = entry.priority, open = frontier.len(), "greedy expand");

        for neighbor in current.neighbors() {
            if !grid.is_traversable(neighbor) || !discovered.insert(neighbor) {
                continue;
            }
            parents.insert(neighbor, current);
            frontier.push(FrontierEntry::new(heuristic.estimate(neighbor, goal), 0, neighbor));
        }
    }

    let outcome = SearchOutcome::unfinished(SearchStatus::Exhausted, visited, started);
    debug!(visited, elapsed_ms = outcome.elapsed_ms, "greedy found no route");
    outcome
}
