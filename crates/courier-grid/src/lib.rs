//! `courier-grid` — the weighted city grid and its collaborators.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`grid`]     | `CityGrid`, `Cell`, `Landmark`, cost constants            |
//! | [`scenario`] | `generate`, `regenerate`: seeded random map with rejection sampling |
//! | [`render`]   | text rendering and path overlay (`Display` for `CityGrid`)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Cell` and `Landmark`.  |

pub mod grid;
pub mod render;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use grid::{BASE_ENTRY_COST, Cell, CityGrid, DEFAULT_TRAFFIC_WEIGHT, Landmark, MIN_TRAFFIC_WEIGHT};
pub use render::PATH_MARKER;
pub use scenario::{generate, regenerate};
