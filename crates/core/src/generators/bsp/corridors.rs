//! Overlap-gated corridor carving between BSP rooms.

use log::trace;

use crate::grid::{Cell, Grid};
use crate::random::SeededRandom;
use crate::rect::{Rect, overlap_1d};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    /// Rooms share columns; the corridor runs up/down.
    Vertical,
    /// Rooms share rows; the corridor runs left/right.
    Horizontal,
}

/// For each room, carves at most one corridor per axis towards the first later room whose
/// extent on that axis overlaps its own.
pub(super) fn connect_rooms(
    grid: &mut Grid,
    rooms: &[Rect],
    max_corridor_width: i32,
    random: &mut SeededRandom,
) -> Vec<Rect> {
    let mut corridors = Vec::new();
    for (index, &room) in rooms.iter().enumerate() {
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let partner = rooms[index + 1..].iter().find_map(|&other| {
                shared_extent(room, other, axis).map(|shared| (other, shared))
            });
            let Some((other, shared)) = partner else {
                continue;
            };
            let corridor =
                corridor_between(room, other, shared, axis, max_corridor_width, random);
            if let Some(corridor) = corridor {
                trace!("corridor {corridor:?} joins {room:?} and {other:?}");
                grid.fill_rect(corridor, Cell::Filled);
                corridors.push(corridor);
            }
        }
    }
    corridors
}

fn shared_extent(a: Rect, b: Rect, axis: Axis) -> Option<(i32, i32)> {
    match axis {
        Axis::Vertical => overlap_1d((a.x, a.x_max()), (b.x, b.x_max())),
        Axis::Horizontal => overlap_1d((a.y, a.y_max()), (b.y, b.y_max())),
    }
}

/// Corridor spanning the gap between two rooms inside their shared extent. Rooms that
/// already touch need no corridor.
fn corridor_between(
    a: Rect,
    b: Rect,
    (start, end): (i32, i32),
    axis: Axis,
    max_corridor_width: i32,
    random: &mut SeededRandom,
) -> Option<Rect> {
    let offset = random.range(start, end);
    let breadth = (end - offset).clamp(1, max_corridor_width);
    match axis {
        Axis::Vertical => {
            let (lower, upper) = if a.y_max() <= b.y { (a, b) } else { (b, a) };
            let length = upper.y - lower.y_max();
            (length > 0).then(|| Rect::new(offset, lower.y_max(), breadth, length))
        }
        Axis::Horizontal => {
            let (left, right) = if a.x_max() <= b.x { (a, b) } else { (b, a) };
            let length = right.x - left.x_max();
            (length > 0).then(|| Rect::new(left.x_max(), offset, length, breadth))
        }
    }
}
