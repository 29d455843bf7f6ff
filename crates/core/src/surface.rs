//! Hand-off to whatever draws tiles: the core only says which cells to place or clear.

use crate::grid::{Cell, Grid};

/// A tile layer owned by the host renderer.
pub trait TileSurface {
    fn place(&mut self, x: i32, y: i32);
    fn clear(&mut self, x: i32, y: i32);
}

/// Places a tile on the surface for every filled cell.
pub fn rasterize(grid: &Grid, surface: &mut impl TileSurface) {
    for (x, y) in grid.filled_cells() {
        surface.place(x, y);
    }
}

/// Clears the surface under every filled cell, carving the grid out of existing tiles.
pub fn erase(grid: &Grid, surface: &mut impl TileSurface) {
    for (x, y) in grid.filled_cells() {
        surface.clear(x, y);
    }
}

/// Wall layer for a top-down level: a solid block with the carved mask erased.
pub fn compose_walls(mask: &Grid) -> Grid {
    let mut walls = mask.clone();
    walls.fill(Cell::Filled);
    erase(mask, &mut walls);
    walls
}

/// A `Grid` is itself a usable surface, which is how layers are composed in memory.
impl TileSurface for Grid {
    fn place(&mut self, x: i32, y: i32) {
        self.set(x, y, Cell::Filled);
    }

    fn clear(&mut self, x: i32, y: i32) {
        self.set(x, y, Cell::Empty);
    }
}
