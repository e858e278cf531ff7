//! Workspace error type.
//!
//! Sub-crates define their own error enums where they have their own failure
//! modes (see `courier_search::SearchError`) and wrap `CourierError` as one
//! variant when they need to surface configuration problems.

use thiserror::Error;

/// The top-level error type for `courier-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `courier-*` crates.
pub type CourierResult<T> = Result<T, CourierError>;
