//! City grid representation.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec<Cell>`:
//!
//! ```text
//! cells[ y * width + x ]
//! ```
//!
//! Each cell holds exactly one marker.  A traffic cell carries its entry
//! weight inside the marker, so overwriting it with any other marker also
//! removes its weight.
//!
//! # Cost model
//!
//! Entering a cell costs its traffic weight if it is a traffic cell, and
//! [`BASE_ENTRY_COST`] otherwise.  The cost is a function of the
//! *destination* cell only: `edge_cost(a, b)` ignores `a`, so travelling
//! `a → b` and `b → a` generally cost different amounts.

use courier_core::Coord;

/// Cost of entering any traversable non-traffic cell.
pub const BASE_ENTRY_COST: u32 = 1;

/// Traffic weight used when the caller does not pick one.
pub const DEFAULT_TRAFFIC_WEIGHT: u32 = 3;

/// Smallest accepted traffic weight.  Lower values would make a traffic cell
/// no worse than an empty one.
pub const MIN_TRAFFIC_WEIGHT: u32 = 2;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// The single marker held by a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Restaurant,
    Customer,
    /// Congested cell; the payload is the cost to enter it (`>= 2`).
    Traffic(u32),
    /// Impassable.
    Obstacle,
}

impl Cell {
    /// One-character marker used by the text renderer.
    #[inline]
    pub fn marker(self) -> char {
        match self {
            Cell::Empty      => '.',
            Cell::Restaurant => 'R',
            Cell::Customer   => 'C',
            Cell::Traffic(_) => 'T',
            Cell::Obstacle   => '#',
        }
    }

    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, Cell::Obstacle)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// `true` for restaurants and customers, whose markers survive path overlays.
    #[inline]
    pub fn is_landmark(self) -> bool {
        matches!(self, Cell::Restaurant | Cell::Customer)
    }

    /// Cost of stepping into this cell.
    #[inline]
    pub fn entry_cost(self) -> u32 {
        match self {
            Cell::Traffic(weight) => weight,
            _ => BASE_ENTRY_COST,
        }
    }
}

// ── Landmark ──────────────────────────────────────────────────────────────────

/// A named restaurant or customer location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Landmark {
    pub name: String,
    pub pos: Coord,
}

// ── CityGrid ──────────────────────────────────────────────────────────────────

/// Fixed-size city map: one marker per cell plus name registries for
/// restaurants and customers.
///
/// The grid is owned by the caller and lent to planners as `&CityGrid`; no
/// planner mutates it, so one grid can serve any number of concurrent
/// searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityGrid {
    width:       usize,
    height:      usize,
    cells:       Vec<Cell>,
    restaurants: Vec<Landmark>,
    customers:   Vec<Landmark>,
}

impl CityGrid {
    /// Create a `width × height` grid of empty cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            restaurants: Vec::new(),
            customers: Vec::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of `(x, y)`, or `None` when out of bounds.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    fn coord_of(&self, idx: usize) -> Coord {
        Coord::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Marker at `pos`, or `None` when out of bounds.
    #[inline]
    pub fn cell(&self, pos: Coord) -> Option<Cell> {
        self.index(pos.x, pos.y).map(|i| self.cells[i])
    }

    /// `true` iff `(x, y)` is in bounds and not an obstacle.
    ///
    /// This is the only admissibility check planners apply before expanding
    /// a neighbour.
    #[inline]
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| !self.cells[i].is_obstacle())
    }

    /// [`is_valid_position`](Self::is_valid_position) for a `Coord`.
    #[inline]
    pub fn is_traversable(&self, pos: Coord) -> bool {
        self.is_valid_position(pos.x, pos.y)
    }

    /// Cost of moving from `_current` into `neighbor`.
    ///
    /// Only the destination matters: the traffic weight of `neighbor` if it
    /// is a traffic cell, else [`BASE_ENTRY_COST`].
    #[inline]
    pub fn edge_cost(&self, _current: Coord, neighbor: Coord) -> u32 {
        self.cell(neighbor).map_or(BASE_ENTRY_COST, Cell::entry_cost)
    }

    /// Total entry cost along `path`.  The first cell is free; each later
    /// cell costs what it takes to enter it.
    ///
    /// Saturates at `u32::MAX`; traffic weights are unbounded above.
    pub fn path_cost(&self, path: &[Coord]) -> u32 {
        path.windows(2)
            .map(|w| self.edge_cost(w[0], w[1]))
            .fold(0, u32::saturating_add)
    }

    /// Every registered traffic cell as an `(x, y, weight)` triple, in
    /// row-major order.
    pub fn traffic(&self) -> impl Iterator<Item = (i32, i32, u32)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| match *cell {
            Cell::Traffic(w) => {
                let c = self.coord_of(i);
                Some((c.x, c.y, w))
            }
            _ => None,
        })
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstacle()).count()
    }

    /// Number of cells a planner may stand on.
    pub fn traversable_count(&self) -> usize {
        self.cell_count() - self.obstacle_count()
    }

    /// Restaurants in placement order.
    #[inline]
    pub fn restaurants(&self) -> &[Landmark] {
        &self.restaurants
    }

    /// Customers in placement order.
    #[inline]
    pub fn customers(&self) -> &[Landmark] {
        &self.customers
    }

    pub fn restaurant(&self, name: &str) -> Option<Coord> {
        self.restaurants.iter().find(|l| l.name == name).map(|l| l.pos)
    }

    pub fn customer(&self, name: &str) -> Option<Coord> {
        self.customers.iter().find(|l| l.name == name).map(|l| l.pos)
    }

    // ── Mutators ──────────────────────────────────────────────────────────
    //
    // All mutators check bounds first and return `false` without touching
    // the grid when the write is rejected.  Writing over an occupied cell is
    // allowed; the last write wins.

    /// Mark `(x, y)` as restaurant `name`.
    ///
    /// Re-using an existing name moves that registry entry to the new cell.
    pub fn place_restaurant(&mut self, name: impl Into<String>, x: i32, y: i32) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.write(idx, Cell::Restaurant);
        Self::register(&mut self.restaurants, name.into(), Coord::new(x, y));
        true
    }

    /// Mark `(x, y)` as customer `name`.
    ///
    /// Re-using an existing name moves that registry entry to the new cell.
    pub fn place_customer(&mut self, name: impl Into<String>, x: i32, y: i32) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.write(idx, Cell::Customer);
        Self::register(&mut self.customers, name.into(), Coord::new(x, y));
        true
    }

    /// Mark `(x, y)` as a traffic cell costing `weight` to enter.
    ///
    /// Returns `false` for out-of-bounds cells and for `weight` below
    /// [`MIN_TRAFFIC_WEIGHT`].
    pub fn place_traffic(&mut self, x: i32, y: i32, weight: u32) -> bool {
        if weight < MIN_TRAFFIC_WEIGHT {
            return false;
        }
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.write(idx, Cell::Traffic(weight));
        true
    }

    /// Mark `(x, y)` as impassable.
    pub fn place_obstacle(&mut self, x: i32, y: i32) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.write(idx, Cell::Obstacle);
        true
    }

    /// Reset every cell to [`Cell::Empty`] and forget all landmarks.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.restaurants.clear();
        self.customers.clear();
    }

    /// Overwrite a cell, dropping any landmark that lived there.
    fn write(&mut self, idx: usize, cell: Cell) {
        if self.cells[idx].is_landmark() {
            let pos = self.coord_of(idx);
            self.restaurants.retain(|l| l.pos != pos);
            self.customers.retain(|l| l.pos != pos);
        }
        self.cells[idx] = cell;
    }

    fn register(registry: &mut Vec<Landmark>, name: String, pos: Coord) {
        match registry.iter_mut().find(|l| l.name == name) {
            Some(existing) => existing.pos = pos,
            None => registry.push(Landmark { name, pos }),
        }
    }
}
