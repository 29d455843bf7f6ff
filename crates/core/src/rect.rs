//! Integer rectangles used for partitions, rooms and corridors.

use serde::Serialize;

/// Half-open rectangle covering `[x, x_max) × [y, y_max)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn x_max(self) -> i32 {
        self.x + self.width
    }

    pub const fn y_max(self) -> i32 {
        self.y + self.height
    }

    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn area(self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        i64::from(self.width) * i64::from(self.height)
    }

    pub const fn center(self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub const fn contains_point(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x_max() && y >= self.y && y < self.y_max()
    }

    /// True when `inner` fits inside `self` leaving at least `margin` cells on every side.
    pub const fn contains_with_margin(self, inner: Rect, margin: i32) -> bool {
        inner.x >= self.x + margin
            && inner.y >= self.y + margin
            && inner.x_max() <= self.x_max() - margin
            && inner.y_max() <= self.y_max() - margin
    }

    pub const fn intersects(self, other: Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }

    /// Portion of `self` that lies inside a `width × height` grid anchored at the origin.
    pub fn clipped_to(self, width: i32, height: i32) -> Rect {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let x_max = self.x_max().min(width);
        let y_max = self.y_max().min(height);
        Rect { x, y, width: (x_max - x).max(0), height: (y_max - y).max(0) }
    }
}

/// Overlap of two half-open extents `[start, end)`, or `None` when they share no cell.
pub fn overlap_1d(a: (i32, i32), b: (i32, i32)) -> Option<(i32, i32)> {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    (start < end).then_some((start, end))
}
