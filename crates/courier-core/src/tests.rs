//! Unit tests for courier-core primitives.

#[cfg(test)]
mod coord {
    use crate::{Coord, Direction};

    #[test]
    fn step_offsets() {
        let c = Coord::new(2, 2);
        assert_eq!(c.step(Direction::West), Coord::new(1, 2));
        assert_eq!(c.step(Direction::South), Coord::new(2, 3));
        assert_eq!(c.step(Direction::East), Coord::new(3, 2));
        assert_eq!(c.step(Direction::North), Coord::new(2, 1));
    }

    #[test]
    fn neighbors_in_expansion_order() {
        let n: Vec<_> = Coord::new(0, 0).neighbors().collect();
        assert_eq!(
            n,
            vec![Coord::new(-1, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(0, -1)]
        );
    }

    #[test]
    fn distances() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert!((a.euclidean(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for x in -4..=4 {
            for y in -4..=4 {
                let c = Coord::new(x, y);
                assert!(Coord::default().euclidean(c) <= Coord::default().manhattan(c) as f64);
            }
        }
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(Coord::new(2, 2)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn ordering_and_display() {
        assert!(Coord::new(0, 5) < Coord::new(1, 0));
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Coord::from((4, 2)), Coord::new(4, 2));
    }
}

#[cfg(test)]
mod config {
    use crate::{CourierError, ScenarioConfig};

    #[test]
    fn default_is_valid() {
        let cfg = ScenarioConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.entity_count(), 26);
        assert_eq!(cfg.cell_count(), 225);
    }

    #[test]
    fn empty_grid_rejected() {
        let cfg = ScenarioConfig { width: 0, ..ScenarioConfig::default() };
        assert!(matches!(cfg.validate(), Err(CourierError::Config(_))));
    }

    #[test]
    fn oversubscribed_rejected() {
        let cfg = ScenarioConfig {
            width: 3,
            height: 3,
            restaurants: 5,
            customers: 5,
            traffic: 0,
            obstacles: 0,
            ..ScenarioConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("needs 10 cells"), "got {err}");
    }

    #[test]
    fn exactly_full_is_allowed() {
        let cfg = ScenarioConfig {
            width: 2,
            height: 2,
            restaurants: 1,
            customers: 1,
            traffic: 1,
            obstacles: 1,
            ..ScenarioConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bad_weights_rejected() {
        let low = ScenarioConfig { traffic_weight_min: 1, ..ScenarioConfig::default() };
        assert!(low.validate().is_err());
        let inverted = ScenarioConfig {
            traffic_weight_min: 5,
            traffic_weight_max: 3,
            ..ScenarioConfig::default()
        };
        assert!(inverted.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::ScenarioRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ScenarioRng::new(7);
        let mut b = ScenarioRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = ScenarioRng::new(1);
        let mut b = ScenarioRng::new(2);
        let xs: Vec<u64> = (0..8).map(|_| a.r#gen()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.r#gen()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn usable_as_generic_rng() {
        fn roll<R: Rng + ?Sized>(rng: &mut R) -> u8 {
            rng.gen_range(1..=6)
        }
        let mut a = ScenarioRng::new(99);
        let mut b = ScenarioRng::new(99);
        let xs: Vec<u8> = (0..8).map(|_| roll(&mut a)).collect();
        let ys: Vec<u8> = (0..8).map(|_| roll(&mut b)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| (1..=6).contains(&x)));
    }
}

#[cfg(test)]
mod error {
    use crate::CourierError;

    #[test]
    fn display() {
        let err = CourierError::Config("bad".to_string());
        assert_eq!(err.to_string(), "configuration error: bad");
    }
}
