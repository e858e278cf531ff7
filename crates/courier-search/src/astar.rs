//! Cost-optimal A* search.
//!
//! The frontier is ordered by `f = g + h`.  With an admissible heuristic the
//! first time the goal is popped its `g` is the minimum route cost.
//!
//! # Closed set
//!
//! A popped cell is closed and never expanded again.  That is only sound
//! because both heuristics are consistent (`h(a) <= cost(a, b) + h(b)` for
//! every step `a → b`): consistency makes `f` non-decreasing along any path,
//! so the first pop of a cell already carries its optimal `g`.  Switching to
//! an inconsistent heuristic would require reopening closed cells.
//!
//! # Stale entries
//!
//! Relaxation pushes a fresh entry instead of decreasing a key.  On pop, an
//! entry for a closed cell, or one whose `g` is worse than the best known
//! `g`, is discarded and not counted as a visit.
//!
//! Route costs saturate at `u32::MAX` rather than wrapping.

use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};

use courier_core::Coord;
use courier_grid::CityGrid;

use crate::frontier::{Frontier, FrontierEntry};
use crate::planner::{check_endpoints, reconstruct};
use crate::{Heuristic, Planner, SearchLimits, SearchOutcome, SearchResult, SearchStatus};

/// A* planner.  Finds a minimum-cost route.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarPlanner {
    pub heuristic: Heuristic,
    pub limits:    SearchLimits,
}

impl AStarPlanner {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic, limits: SearchLimits::default() }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Planner for AStarPlanner {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &CityGrid, start: Coord, goal: Coord) -> SearchResult<SearchOutcome> {
        check_endpoints(grid, start, goal)?;
        Ok(astar(grid, start, goal, self.heuristic, self.limits))
    }
}

/// A* with the Euclidean heuristic and no limits.
pub fn search(grid: &CityGrid, start: Coord, goal: Coord) -> SearchResult<SearchOutcome> {
    AStarPlanner::default().search(grid, start, goal)
}

fn astar(
    grid:      &CityGrid,
    start:     Coord,
    goal:      Coord,
    heuristic: Heuristic,
    limits:    SearchLimits,
) -> SearchOutcome {
    let started = Instant::now();

    // best_g[c] = cheapest known cost to reach c.
    let mut best_g:   FxHashMap<Coord, u32>   = FxHashMap::default();
    let mut parents:  FxHashMap<Coord, Coord> = FxHashMap::default();
    let mut closed:   FxHashSet<Coord>        = FxHashSet::default();
    let mut frontier = Frontier::new();
    let mut visited  = 0usize;

    best_g.insert(start, 0);
    frontier.push(FrontierEntry::new(heuristic.estimate(start, goal), 0, start));

    while let Some(entry) = frontier.pop() {
        let current = entry.coord;

        if closed.contains(&current) || best_g.get(&current).is_some_and(|&g| entry.g > g) {
            continue;
        }

        if limits.reached(visited) {
            warn!(visited, %start, %goal, "A* expansion limit reached");
            return SearchOutcome::unfinished(SearchStatus::LimitReached, visited, started);
        }
        visited += 1;

        if current == goal {
            let path = reconstruct(&parents, start, goal);
            let outcome = SearchOutcome::found(path, entry.g, visited, started);
            debug!(visited, cost = entry.g, elapsed_ms = outcome.elapsed_ms, "A* found route");
            return outcome;
        }

        closed.insert(current);
        trace!(%current, g = entry.g, f = entry.priority, open = frontier.len(), "A* expand");

        for neighbor in current.neighbors() {
            if !grid.is_traversable(neighbor) || closed.contains(&neighbor) {
                continue;
            }
            let tentative = entry.g.saturating_add(grid.edge_cost(current, neighbor));
            if best_g.get(&neighbor).is_none_or(|&g| tentative < g) {
                best_g.insert(neighbor, tentative);
                parents.insert(neighbor, current);
                let f = tentative as f64 + heuristic.estimate(neighbor, goal);
                frontier.push(FrontierEntry::new(f, tentative, neighbor));
            }
        }
    }

    let outcome = SearchOutcome::unfinished(SearchStatus::Exhausted, visited, started);
    debug!(visited, elapsed_ms = outcome.elapsed_ms, "A* found no route");
    outcome
}
