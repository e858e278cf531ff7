//! Grid coordinates and the four-way move set.
//!
//! `Coord` is `Copy + Ord + Hash` so it can be used as a map key and as a
//! deterministic tie-break key in priority queues without ceremony.
//! Components are signed so that stepping off the west or north edge yields
//! a negative coordinate the grid can reject, instead of wrapping.

use std::fmt;

/// A cell position on the city grid.  `x` grows east, `y` grows south.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `dir`.  May be out of bounds.
    #[inline]
    pub fn step(self, dir: Direction) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx, self.y + dy)
    }

    /// All four neighbours in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().map(move |d| self.step(d))
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn euclidean(self, other: Coord) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// L1 distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` is exactly one four-way step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four axis-aligned moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    West,
    South,
    East,
    North,
}

impl Direction {
    /// Expansion order used by the planners.  Only tie-breaking depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::South,
        Direction::East,
        Direction::North,
    ];

    /// `(dx, dy)` offset of this move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::West  => (-1, 0),
            Direction::South => (0, 1),
            Direction::East  => (1, 0),
            Direction::North => (0, -1),
        }
    }
}
