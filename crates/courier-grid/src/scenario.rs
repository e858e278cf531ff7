//! Random scenario generation.
//!
//! Entities are placed in a fixed order: restaurants, customers, traffic,
//! obstacles.  Each one lands on a uniformly random cell; if that cell is
//! already occupied the draw is rejected and repeated, so no two entities of
//! the same generation pass ever share a cell.
//!
//! [`ScenarioConfig::validate`] guarantees there are at least as many cells
//! as entities, so every retry loop terminates.

use rand::Rng;
use tracing::debug;

use courier_core::{CourierResult, ScenarioConfig};

use crate::CityGrid;

/// Build a fresh grid populated according to `config`.
///
/// Any `Rng` may be injected; use `ScenarioRng::new(config.seed)` for
/// reproducible maps.
pub fn generate<R: Rng + ?Sized>(config: &ScenarioConfig, rng: &mut R) -> CourierResult<CityGrid> {
    config.validate()?;

    let mut grid = CityGrid::new(config.width, config.height);
    populate(&mut grid, config, rng);
    Ok(grid)
}

/// Wipe `grid` and populate it again according to `config`.
///
/// A grid whose dimensions differ from `config` is replaced by one of the
/// configured size.  On a config error the grid is left untouched.
pub fn regenerate<R: Rng + ?Sized>(
    grid:   &mut CityGrid,
    config: &ScenarioConfig,
    rng:    &mut R,
) -> CourierResult<()> {
    config.validate()?;

    if (grid.width(), grid.height()) == (config.width, config.height) {
        grid.clear();
    } else {
        *grid = CityGrid::new(config.width, config.height);
    }
    populate(grid, config, rng);
    Ok(())
}

fn populate<R: Rng + ?Sized>(grid: &mut CityGrid, config: &ScenarioConfig, rng: &mut R) {
    for i in 1..=config.restaurants {
        let (x, y) = random_empty_cell(grid, rng);
        grid.place_restaurant(format!("R{i}"), x, y);
    }

    for i in 1..=config.customers {
        let (x, y) = random_empty_cell(grid, rng);
        grid.place_customer(format!("C{i}"), x, y);
    }

    for _ in 0..config.traffic {
        let (x, y) = random_empty_cell(grid, rng);
        let weight = rng.gen_range(config.traffic_weight_min..=config.traffic_weight_max);
        grid.place_traffic(x, y, weight);
    }

    for _ in 0..config.obstacles {
        let (x, y) = random_empty_cell(grid, rng);
        grid.place_obstacle(x, y);
    }

    debug!(
        width = config.width,
        height = config.height,
        restaurants = grid.restaurants().len(),
        customers = grid.customers().len(),
        obstacles = grid.obstacle_count(),
        "generated scenario"
    );
}

/// Rejection-sample a cell that is still empty.
///
/// The caller must ensure at least one empty cell exists.
fn random_empty_cell<R: Rng + ?Sized>(grid: &CityGrid, rng: &mut R) -> (i32, i32) {
    loop {
        let x = rng.gen_range(0..grid.width()) as i32;
        let y = rng.gen_range(0..grid.height()) as i32;
        if grid.cell((x, y).into()).is_some_and(|c| c.is_empty()) {
            return (x, y);
        }
    }
}
