//! Side-by-side planner comparison and batch queries.

use std::fmt;

use courier_core::Coord;
use courier_grid::CityGrid;

use crate::{AStarPlanner, GreedyPlanner, Heuristic, Planner, SearchLimits, SearchOutcome, SearchResult};

/// Both planners run on the same grid, start and goal.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub start:   Coord,
    pub goal:    Coord,
    pub optimal: SearchOutcome,
    pub greedy:  SearchOutcome,
}

impl Comparison {
    /// Run A* and greedy search with the same heuristic and limits.
    pub fn run(
        grid:      &CityGrid,
        start:     Coord,
        goal:      Coord,
        heuristic: Heuristic,
        limits:    SearchLimits,
    ) -> SearchResult<Self> {
        let optimal = AStarPlanner::new(heuristic).with_limits(limits).search(grid, start, goal)?;
        let greedy = GreedyPlanner::new(heuristic).with_limits(limits).search(grid, start, goal)?;
        Ok(Self { start, goal, optimal, greedy })
    }

    /// How much more the greedy route costs than the optimal one.
    ///
    /// `None` unless both planners found a route.  Never negative when A*
    /// ran without a limit.
    pub fn cost_gap(&self) -> Option<i64> {
        Some(self.greedy.cost? as i64 - self.optimal.cost? as i64)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route {} -> {}", self.start, self.goal)?;
        writeln!(
            f,
            "{:<8} {:<16} {:>6} {:>6} {:>8} {:>10}",
            "Planner", "Status", "Steps", "Cost", "Visited", "Time (ms)"
        )?;
        for (name, o) in [("A*", &self.optimal), ("Greedy", &self.greedy)] {
            writeln!(
                f,
                "{:<8} {:<16} {:>6} {:>6} {:>8} {:>10.3}",
                name,
                o.status.to_string(),
                o.steps().map_or_else(|| "-".to_string(), |s| s.to_string()),
                o.cost.map_or_else(|| "-".to_string(), |c| c.to_string()),
                o.visited,
                o.elapsed_ms,
            )?;
        }
        Ok(())
    }
}

/// Run `planner` on every `(start, goal)` pair against one shared grid.
///
/// Results come back in query order.  With the `parallel` feature the
/// queries run on Rayon's thread pool; each query still allocates its own
/// node state.
pub fn search_many<P: Planner>(
    planner: &P,
    grid:    &CityGrid,
    queries: &[(Coord, Coord)],
) -> Vec<SearchResult<SearchOutcome>> {
    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|&(start, goal)| planner.search(grid, start, goal))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|&(start, goal)| planner.search(grid, start, goal))
            .collect()
    }
}
