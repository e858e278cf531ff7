//! `courier-core` — foundational types for the `courier` delivery-routing
//! workspace.
//!
//! This crate is a dependency of every other `courier-*` crate.  It has no
//! `courier-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`coord`]   | `Coord`, `Direction`                                  |
//! | [`config`]  | `ScenarioConfig`                                      |
//! | [`rng`]     | `ScenarioRng` (seeded, injectable)                    |
//! | [`error`]   | `CourierError`, `CourierResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScenarioConfig;
pub use coord::{Coord, Direction};
pub use error::{CourierError, CourierResult};
pub use rng::ScenarioRng;
