//! Unit tests for courier-grid.
//!
//! All tests build small grids by hand or from a fixed seed, so results are
//! stable across runs.

#[cfg(test)]
mod helpers {
    use crate::CityGrid;

    /// 5×3 grid:
    ///
    /// ```text
    /// R . T . .
    /// . # T . C
    /// . . . . .
    /// ```
    pub fn small_city() -> CityGrid {
        let mut g = CityGrid::new(5, 3);
        assert!(g.place_restaurant("R1", 0, 0));
        assert!(g.place_customer("C1", 4, 1));
        assert!(g.place_traffic(2, 0, 4));
        assert!(g.place_traffic(2, 1, 2));
        assert!(g.place_obstacle(1, 1));
        g
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use courier_core::Coord;

    use crate::{BASE_ENTRY_COST, Cell, CityGrid};

    #[test]
    fn new_grid_is_empty() {
        let g = CityGrid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.traversable_count(), 12);
        assert_eq!(g.cell(Coord::new(3, 2)), Some(Cell::Empty));
        assert_eq!(g.cell(Coord::new(4, 0)), None);
    }

    #[test]
    fn valid_position_gate() {
        let g = super::helpers::small_city();
        assert!(g.is_valid_position(0, 0));
        assert!(g.is_valid_position(4, 2));
        assert!(!g.is_valid_position(1, 1), "obstacle");
        assert!(!g.is_valid_position(-1, 0));
        assert!(!g.is_valid_position(0, -1));
        assert!(!g.is_valid_position(5, 0));
        assert!(!g.is_valid_position(0, 3));
    }

    #[test]
    fn edge_cost_uses_destination_only() {
        let g = super::helpers::small_city();
        let plain = Coord::new(1, 0);
        let jam = Coord::new(2, 0);
        assert_eq!(g.edge_cost(plain, jam), 4);
        assert_eq!(g.edge_cost(Coord::new(3, 0), jam), 4);
        // Leaving a traffic cell costs whatever the destination costs.
        assert_eq!(g.edge_cost(jam, plain), BASE_ENTRY_COST);
        assert_eq!(g.edge_cost(jam, Coord::new(2, 1)), 2);
    }

    #[test]
    fn path_cost_skips_start_cell() {
        let g = super::helpers::small_city();
        let path = [Coord::new(2, 0), Coord::new(3, 0), Coord::new(3, 1), Coord::new(4, 1)];
        assert_eq!(g.path_cost(&path), 3);
        assert_eq!(g.path_cost(&path[..1]), 0);
        assert_eq!(g.path_cost(&[]), 0);
    }

    #[test]
    fn path_cost_saturates() {
        let mut g = CityGrid::new(3, 1);
        assert!(g.place_traffic(1, 0, u32::MAX));
        assert!(g.place_traffic(2, 0, u32::MAX));
        let path = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)];
        assert_eq!(g.path_cost(&path), u32::MAX);
        assert_eq!(g.path_cost(&path[..2]), u32::MAX);
    }

    #[test]
    fn traffic_triples() {
        let g = super::helpers::small_city();
        let t: Vec<_> = g.traffic().collect();
        assert_eq!(t, vec![(2, 0, 4), (2, 1, 2)]);
    }

    #[test]
    fn landmark_lookup() {
        let g = super::helpers::small_city();
        assert_eq!(g.restaurant("R1"), Some(Coord::new(0, 0)));
        assert_eq!(g.customer("C1"), Some(Coord::new(4, 1)));
        assert_eq!(g.restaurant("R9"), None);
        assert_eq!(g.obstacle_count(), 1);
        assert_eq!(g.traversable_count(), 14);
    }
}

// ── Mutators ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mutators {
    use courier_core::Coord;

    use crate::{Cell, CityGrid, DEFAULT_TRAFFIC_WEIGHT};

    #[test]
    fn out_of_bounds_rejected_without_change() {
        let mut g = super::helpers::small_city();
        let before = g.clone();
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 3), (i32::MAX, i32::MAX)] {
            assert!(!g.place_obstacle(x, y));
            assert!(!g.place_restaurant("Rx", x, y));
            assert!(!g.place_customer("Cx", x, y));
            assert!(!g.place_traffic(x, y, DEFAULT_TRAFFIC_WEIGHT));
        }
        assert_eq!(g, before);
    }

    #[test]
    fn light_traffic_rejected() {
        let mut g = CityGrid::new(2, 2);
        assert!(!g.place_traffic(0, 0, 1));
        assert!(!g.place_traffic(0, 0, 0));
        assert_eq!(g.cell(Coord::new(0, 0)), Some(Cell::Empty));
        assert!(g.place_traffic(0, 0, 2));
        assert_eq!(g.cell(Coord::new(0, 0)), Some(Cell::Traffic(2)));
    }

    #[test]
    fn last_write_wins() {
        let mut g = CityGrid::new(3, 1);
        assert!(g.place_traffic(1, 0, 5));
        assert!(g.place_obstacle(1, 0));
        assert_eq!(g.cell(Coord::new(1, 0)), Some(Cell::Obstacle));
        assert_eq!(g.traffic().count(), 0, "overwritten traffic loses its weight");

        assert!(g.place_traffic(1, 0, 3));
        assert_eq!(g.cell(Coord::new(1, 0)), Some(Cell::Traffic(3)));
        assert!(g.is_valid_position(1, 0));
    }

    #[test]
    fn overwritten_landmark_leaves_registry() {
        let mut g = CityGrid::new(3, 1);
        assert!(g.place_restaurant("R1", 0, 0));
        assert!(g.place_customer("C1", 2, 0));
        assert!(g.place_obstacle(0, 0));
        assert!(g.restaurants().is_empty());
        assert!(g.place_restaurant("R2", 2, 0));
        assert!(g.customers().is_empty());
        assert_eq!(g.restaurant("R2"), Some(Coord::new(2, 0)));
    }

    #[test]
    fn reused_name_moves_entry() {
        let mut g = CityGrid::new(3, 1);
        assert!(g.place_customer("C1", 0, 0));
        assert!(g.place_customer("C2", 1, 0));
        assert!(g.place_customer("C1", 2, 0));
        let names: Vec<_> = g.customers().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2"]);
        assert_eq!(g.customer("C1"), Some(Coord::new(2, 0)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut g = super::helpers::small_city();
        g.clear();
        assert_eq!(g, CityGrid::new(5, 3));
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use courier_core::Coord;

    use crate::CityGrid;

    #[test]
    fn plain_render() {
        let g = super::helpers::small_city();
        assert_eq!(g.render(None), "R . T . .\n. # T . C\n. . . . .\n");
        assert_eq!(g.to_string(), g.render(None));
    }

    #[test]
    fn overlay_keeps_landmarks() {
        let g = super::helpers::small_city();
        let path = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0),
            Coord::new(4, 0),
            Coord::new(4, 1),
        ];
        assert_eq!(g.render(Some(&path)), "R + + + +\n. # T . C\n. . . . .\n");
    }

    #[test]
    fn overlay_ignores_out_of_bounds() {
        let g = CityGrid::new(2, 1);
        let path = [Coord::new(-1, 0), Coord::new(0, 0), Coord::new(7, 7)];
        assert_eq!(g.render(Some(&path)), "+ .\n");
    }

    #[test]
    fn empty_path_is_plain() {
        let g = super::helpers::small_city();
        assert_eq!(g.render(Some(&[])), g.render(None));
    }
}

// ── Scenario generation ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use courier_core::{CourierError, ScenarioConfig, ScenarioRng};

    use crate::{Cell, CityGrid, generate, regenerate};

    #[test]
    fn default_counts_exact() {
        let cfg = ScenarioConfig::default();
        let g = generate(&cfg, &mut ScenarioRng::new(cfg.seed)).unwrap();

        assert_eq!(g.restaurants().len(), 3);
        assert_eq!(g.customers().len(), 5);
        assert_eq!(g.traffic().count(), 8);
        assert_eq!(g.obstacle_count(), 10);

        let names: Vec<_> = g.restaurants().iter().map(|l| l.name.clone()).collect();
        assert_eq!(names, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn no_overlap() {
        let cfg = ScenarioConfig { seed: 7, ..ScenarioConfig::default() };
        let g = generate(&cfg, &mut ScenarioRng::new(cfg.seed)).unwrap();
        let mut seen = HashSet::new();
        for l in g.restaurants().iter().chain(g.customers()) {
            assert!(seen.insert(l.pos), "landmark overlap at {}", l.pos);
        }
        let non_empty = (0..g.cell_count())
            .filter(|i| {
                let c = courier_core::Coord::new((i % g.width()) as i32, (i / g.width()) as i32);
                g.cell(c) != Some(Cell::Empty)
            })
            .count();
        assert_eq!(non_empty, cfg.entity_count());
    }

    #[test]
    fn traffic_weights_in_range() {
        let cfg = ScenarioConfig {
            traffic: 40,
            traffic_weight_min: 3,
            traffic_weight_max: 4,
            ..ScenarioConfig::default()
        };
        let g = generate(&cfg, &mut ScenarioRng::new(11)).unwrap();
        assert!(g.traffic().all(|(_, _, w)| (3..=4).contains(&w)));
    }

    #[test]
    fn reproducible_by_seed() {
        let cfg = ScenarioConfig::default();
        let a = generate(&cfg, &mut ScenarioRng::new(123)).unwrap();
        let b = generate(&cfg, &mut ScenarioRng::new(123)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn injected_rng() {
        let cfg = ScenarioConfig::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let g = generate(&cfg, &mut rng).unwrap();
        assert_eq!(g.obstacle_count(), cfg.obstacles);
    }

    #[test]
    fn completely_full_grid() {
        let cfg = ScenarioConfig {
            width: 3,
            height: 2,
            restaurants: 1,
            customers: 1,
            traffic: 2,
            obstacles: 2,
            ..ScenarioConfig::default()
        };
        let g = generate(&cfg, &mut ScenarioRng::new(0)).unwrap();
        assert!(g.render(None).chars().all(|c| c != '.'));
    }

    #[test]
    fn oversubscribed_rejected() {
        let cfg = ScenarioConfig { width: 4, height: 4, ..ScenarioConfig::default() };
        let result = generate(&cfg, &mut ScenarioRng::new(0));
        assert!(matches!(result, Err(CourierError::Config(_))));
    }

    #[test]
    fn regenerate_wipes_previous_map() {
        let cfg = ScenarioConfig::default();
        let mut g = generate(&cfg, &mut ScenarioRng::new(1)).unwrap();
        regenerate(&mut g, &cfg, &mut ScenarioRng::new(2)).unwrap();

        let fresh = generate(&cfg, &mut ScenarioRng::new(2)).unwrap();
        assert_eq!(g, fresh);
        assert_eq!(g.obstacle_count(), cfg.obstacles);
    }

    #[test]
    fn regenerate_resizes_grid() {
        let cfg = ScenarioConfig::default();
        let mut g = CityGrid::new(4, 4);
        g.place_obstacle(0, 0);
        regenerate(&mut g, &cfg, &mut ScenarioRng::new(3)).unwrap();
        assert_eq!((g.width(), g.height()), (cfg.width, cfg.height));
        assert_eq!(g, generate(&cfg, &mut ScenarioRng::new(3)).unwrap());
    }

    #[test]
    fn regenerate_keeps_grid_on_bad_config() {
        let cfg = ScenarioConfig { width: 2, height: 2, ..ScenarioConfig::default() };
        let mut g = super::helpers::small_city();
        let before = g.clone();
        assert!(regenerate(&mut g, &cfg, &mut ScenarioRng::new(0)).is_err());
        assert_eq!(g, before);
    }
}
