//! Search-subsystem error type.
//!
//! An unreachable goal is *not* an error: it is reported as
//! [`SearchStatus::Exhausted`](crate::SearchStatus::Exhausted) inside an
//! `Ok` outcome.  Errors are reserved for calls that could never succeed.

use std::fmt;

use thiserror::Error;

use courier_core::Coord;

/// Which end of a query an endpoint error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors produced by `courier-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{role} {coord} is out of bounds or blocked by an obstacle")]
    InvalidEndpoint { role: Endpoint, coord: Coord },

    #[error("unknown heuristic {0:?} (expected \"euclidean\" or \"manhattan\")")]
    UnknownHeuristic(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
