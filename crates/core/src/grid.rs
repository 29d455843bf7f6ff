//! Fixed-size cell grid produced by every generator.

use std::fmt;

use serde::{Serialize, Serializer};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{GenerationResult, ensure_dimensions};
use crate::rect::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Filled => '#',
        }
    }
}

/// Row-major `width × height` grid. `(0, 0)` is the bottom-left cell for side views
/// and the top-left cell for top-down views; the grid itself does not care.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> GenerationResult<Self> {
        ensure_dimensions(width, height)?;
        let len = (width as usize) * (height as usize);
        Ok(Self { width, height, cells: vec![Cell::Empty; len] })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Out-of-range reads report `Cell::Empty`.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::Empty;
        }
        self.cells[self.index(x, y)]
    }

    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Cell::Filled
    }

    /// Writes one cell. Returns `false` and leaves the grid untouched when out of range.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let index = self.index(x, y);
        self.cells[index] = cell;
        true
    }

    /// Writes `[x, x_max) × [y, y_max)` clipped to the grid.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        let clipped = rect.clipped_to(self.width, self.height);
        for y in clipped.y..clipped.y_max() {
            for x in clipped.x..clipped.x_max() {
                let index = self.index(x, y);
                self.cells[index] = cell;
            }
        }
    }

    /// Fills rows `0..=top` of column `x`, clipped to the grid.
    pub fn fill_column(&mut self, x: i32, top: i32) {
        if x < 0 || x >= self.width || top < 0 {
            return;
        }
        for y in 0..=top.min(self.height - 1) {
            let index = self.index(x, y);
            self.cells[index] = Cell::Filled;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn clear(&mut self) {
        self.fill(Cell::Empty);
    }

    /// Copy with every cell flipped.
    pub fn inverted(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => Cell::Filled,
                Cell::Filled => Cell::Empty,
            })
            .collect();
        Self { width: self.width, height: self.height, cells }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Filled).count()
    }

    /// Filled coordinates in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter(|(_, cell)| **cell == Cell::Filled).map(
            move |(index, _)| ((index % width) as i32, (index / width) as i32),
        )
    }

    /// Highest filled row in column `x`, if any.
    pub fn column_top(&self, x: i32) -> Option<i32> {
        (0..self.height).rev().find(|&y| self.is_filled(x, y))
    }

    pub fn row_string(&self, y: i32) -> String {
        (0..self.width).map(|x| self.get(x, y).glyph()).collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Empty => 0,
                Cell::Filled => 1,
            });
        }
        bytes
    }

    /// Stable 64-bit digest of [`Grid::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

/// Renders the highest row first so side-view terrain reads right side up.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            writeln!(f, "{}", self.row_string(y))?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct GridRows {
    width: i32,
    height: i32,
    rows: Vec<String>,
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRows {
            width: self.width,
            height: self.height,
            rows: (0..self.height).map(|y| self.row_string(y)).collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 3).expect("positive dimensions");
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.get(3, 2), Cell::Empty);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GenerationError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(Grid::new(5, -1).is_err());
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut grid = Grid::new(3, 3).expect("positive dimensions");
        assert!(!grid.set(-1, 0, Cell::Filled));
        assert!(!grid.set(0, 3, Cell::Filled));
        assert!(grid.set(2, 2, Cell::Filled));
        assert_eq!(grid.filled_count(), 1);
        assert_eq!(grid.get(5, 5), Cell::Empty);
    }

    #[test]
    fn fill_rect_is_half_open_and_clipped() {
        let mut grid = Grid::new(5, 5).expect("positive dimensions");
        grid.fill_rect(Rect::new(3, 3, 4, 4), Cell::Filled);
        assert_eq!(grid.filled_count(), 4);
        assert!(grid.is_filled(4, 4));
        assert!(!grid.is_filled(2, 3));

        grid.fill_rect(Rect::new(3, 3, 1, 1), Cell::Empty);
        assert_eq!(grid.filled_count(), 3);
    }

    #[test]
    fn fill_column_covers_ground_and_clips_top() {
        let mut grid = Grid::new(2, 4).expect("positive dimensions");
        grid.fill_column(0, 9);
        grid.fill_column(1, 1);
        assert_eq!(grid.column_top(0), Some(3));
        assert_eq!(grid.column_top(1), Some(1));
        assert_eq!(grid.filled_count(), 6);
    }

    #[test]
    fn inverted_flips_every_cell() {
        let mut grid = Grid::new(3, 2).expect("positive dimensions");
        grid.set(1, 1, Cell::Filled);
        let flipped = grid.inverted();
        assert_eq!(flipped.filled_count(), 5);
        assert!(!flipped.is_filled(1, 1));
    }

    #[test]
    fn filled_cells_are_row_major() {
        let mut grid = Grid::new(3, 3).expect("positive dimensions");
        grid.set(2, 0, Cell::Filled);
        grid.set(0, 1, Cell::Filled);
        let cells: Vec<_> = grid.filled_cells().collect();
        assert_eq!(cells, vec![(2, 0), (0, 1)]);
    }

    #[test]
    fn display_puts_highest_row_first() {
        let mut grid = Grid::new(3, 2).expect("positive dimensions");
        grid.fill_column(0, 0);
        assert_eq!(grid.to_string(), "...\n#..\n");
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let mut grid = Grid::new(6, 6).expect("positive dimensions");
        let blank = grid.fingerprint();
        grid.set(3, 3, Cell::Filled);
        assert_ne!(blank, grid.fingerprint());
        grid.clear();
        assert_eq!(blank, grid.fingerprint());
    }

    #[test]
    fn serializes_rows_bottom_first() {
        let mut grid = Grid::new(2, 2).expect("positive dimensions");
        grid.set(1, 0, Cell::Filled);
        let json = serde_json::to_value(&grid).expect("grid serializes");
        assert_eq!(json["width"], 2);
        assert_eq!(json["rows"][0], ".#");
        assert_eq!(json["rows"][1], "..");
    }
}
