//! Plain-text rendering of a [`CityGrid`].
//!
//! One line per grid row, markers separated by single spaces:
//!
//! ```text
//! R . . T .
//! . # . + +
//! . . + + C
//! ```
//!
//! A path overlay draws [`PATH_MARKER`] on every path cell except
//! restaurants and customers, which keep their own markers.

use std::fmt;

use courier_core::Coord;

use crate::CityGrid;

/// Marker drawn on cells covered by a path overlay.
pub const PATH_MARKER: char = '+';

impl CityGrid {
    /// Marker rows, with `path` drawn over them if given.
    fn marker_rows(&self, path: Option<&[Coord]>) -> Vec<Vec<char>> {
        let mut rows: Vec<Vec<char>> = (0..self.height() as i32)
            .map(|y| {
                (0..self.width() as i32)
                    .filter_map(|x| self.cell(Coord::new(x, y)))
                    .map(|c| c.marker())
                    .collect()
            })
            .collect();

        for &pos in path.unwrap_or_default() {
            let Some(cell) = self.cell(pos) else {
                continue;
            };
            if !cell.is_landmark() {
                rows[pos.y as usize][pos.x as usize] = PATH_MARKER;
            }
        }
        rows
    }

    /// Render the grid as text, optionally overlaying `path`.
    ///
    /// Path cells outside the grid are ignored.
    pub fn render(&self, path: Option<&[Coord]>) -> String {
        let mut out = String::with_capacity(self.cell_count() * 2);
        for row in self.marker_rows(path) {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for CityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
