//! Scenario configuration.

use crate::{CourierError, CourierResult};

/// Parameters for generating a random delivery scenario.
///
/// Typically built from CLI flags or loaded from a TOML file by the demo
/// binary and passed to `courier_grid::scenario::generate`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Number of restaurants, named `R1..`.
    pub restaurants: usize,
    /// Number of customers, named `C1..`.
    pub customers: usize,
    /// Number of traffic cells.
    pub traffic: usize,
    /// Number of obstacle cells.
    pub obstacles: usize,
    /// Smallest traffic entry cost (inclusive).  Must be at least 2.
    pub traffic_weight_min: u32,
    /// Largest traffic entry cost (inclusive).
    pub traffic_weight_max: u32,
    /// Master RNG seed.  The same seed always produces the same map.
    pub seed: u64,
}

impl Default for ScenarioConfig {
    /// A 15×15 city with 3 restaurants, 5 customers, 8 traffic cells and
    /// 10 obstacles.
    fn default() -> Self {
        Self {
            width:              15,
            height:             15,
            restaurants:        3,
            customers:          5,
            traffic:            8,
            obstacles:          10,
            traffic_weight_min: 2,
            traffic_weight_max: 5,
            seed:               42,
        }
    }
}

impl ScenarioConfig {
    /// Total number of cells the generator has to fill.
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.restaurants + self.customers + self.traffic + self.obstacles
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Reject configs the generator cannot satisfy.
    ///
    /// Rejection sampling only terminates if there are at least as many cells
    /// as entities, so that is checked here rather than in the retry loop.
    pub fn validate(&self) -> CourierResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CourierError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(CourierError::Config(format!(
                "grid {}x{} exceeds coordinate range",
                self.width, self.height
            )));
        }
        if self.traffic_weight_min < 2 {
            return Err(CourierError::Config(format!(
                "traffic_weight_min must be >= 2, got {}",
                self.traffic_weight_min
            )));
        }
        if self.traffic_weight_min > self.traffic_weight_max {
            return Err(CourierError::Config(format!(
                "traffic weight range {}..={} is empty",
                self.traffic_weight_min, self.traffic_weight_max
            )));
        }
        if self.entity_count() > self.cell_count() {
            return Err(CourierError::Config(format!(
                "scenario needs {} cells but the {}x{} grid only has {}",
                self.entity_count(),
                self.width,
                self.height,
                self.cell_count()
            )));
        }
        Ok(())
    }
}
