//! `courier-search` — route planners over the courier city grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`planner`]   | `Planner` trait                                           |
//! | [`astar`]     | `AStarPlanner`: cost-optimal, ordered by `g + h`         |
//! | [`greedy`]    | `GreedyPlanner`: ordered by `h` only, not optimal        |
//! | [`heuristic`] | `Heuristic` (Euclidean default, Manhattan)                |
//! | [`outcome`]   | `SearchOutcome`, `SearchStatus`, `SearchLimits`           |
//! | [`report`]    | `Comparison`, `search_many`                               |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                          |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `search_many` batches on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use courier_core::Coord;
//! use courier_grid::CityGrid;
//! use courier_search::{AStarPlanner, Planner};
//!
//! let mut grid = CityGrid::new(10, 10);
//! grid.place_traffic(4, 4, 5);
//! let outcome = AStarPlanner::default().search(&grid, Coord::new(0, 0), Coord::new(9, 9))?;
//! println!("{} cells, cost {:?}", outcome.visited, outcome.cost);
//! ```

pub mod astar;
pub mod error;
mod frontier;
pub mod greedy;
pub mod heuristic;
pub mod outcome;
pub mod planner;
pub mod report;


pub use astar::AStarPlanner;
pub use error::{Endpoint, SearchError, SearchResult};
pub use greedy::GreedyPlanner;
pub use heuristic::{Heuristic, euclidean};
pub use outcome::{SearchLimits, SearchOutcome, SearchStatus};
pub use planner::Planner;
pub use report::{Comparison, search_many};
