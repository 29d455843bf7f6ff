//! Binary space partitioning dungeons: split, carve one room per leaf, then join rooms
//! whose extents overlap.

mod corridors;
mod tree;

use log::debug;
use serde::Deserialize;

pub use tree::{BspNode, BspTree, NodeKey};

use crate::error::{GenerationError, GenerationResult};
use crate::grid::{Cell, Grid};
use crate::random::SeededRandom;
use crate::rect::Rect;

use corridors::connect_rooms;

/// Smallest room side carved when the leaf has space for it.
const MIN_ROOM_SIDE: i32 = 3;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BspParams {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    /// A partition is split only while both sides exceed this size.
    pub min_partition_size: i32,
    pub max_corridor_width: i32,
}

impl Default for BspParams {
    fn default() -> Self {
        Self { width: 10, height: 10, seed: 42, min_partition_size: 5, max_corridor_width: 2 }
    }
}

impl BspParams {
    fn validate(&self) -> GenerationResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_partition_size < 1 {
            return Err(GenerationError::parameter(
                "min_partition_size",
                format!("{} is less than 1", self.min_partition_size),
            ));
        }
        if self.max_corridor_width < 1 {
            return Err(GenerationError::parameter(
                "max_corridor_width",
                format!("{} is less than 1", self.max_corridor_width),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct BspDungeon {
    pub grid: Grid,
    pub tree: BspTree,
    /// Carved rooms in depth-first, left-before-right leaf order.
    pub rooms: Vec<Rect>,
    pub corridors: Vec<Rect>,
}

pub fn bsp_dungeon(params: &BspParams) -> GenerationResult<BspDungeon> {
    params.validate()?;
    let mut grid = Grid::new(params.width, params.height)?;
    let mut random = SeededRandom::new(params.seed);

    let mut tree =
        BspTree::new(Rect::new(1, 1, (params.width - 2).max(0), (params.height - 2).max(0)));
    let root = tree.root();
    tree.split(root, params.min_partition_size, &mut random);

    let rooms = carve_rooms(&mut tree, &mut grid, &mut random);
    let corridors = connect_rooms(&mut grid, &rooms, params.max_corridor_width, &mut random);

    debug!(
        "bsp dungeon {}x{} seed={} nodes={} rooms={} corridors={}",
        params.width,
        params.height,
        params.seed,
        tree.len(),
        rooms.len(),
        corridors.len()
    );
    Ok(BspDungeon { grid, tree, rooms, corridors })
}

/// Places one room in every leaf and returns the drawable ones in traversal order.
fn carve_rooms(tree: &mut BspTree, grid: &mut Grid, random: &mut SeededRandom) -> Vec<Rect> {
    let mut rooms = Vec::new();
    for leaf in tree.leaves() {
        let Some(area) = tree.node(leaf).map(|node| node.area) else {
            continue;
        };
        let room = room_within(area, random);
        tree.set_room(leaf, room);
        if room.is_empty() {
            continue;
        }
        grid.fill_rect(room, Cell::Filled);
        rooms.push(room);
    }
    rooms
}

/// Random room keeping a one-cell margin inside `area`. Areas too thin for any margin
/// get a zero-sized room at their center.
fn room_within(area: Rect, random: &mut SeededRandom) -> Rect {
    let max_width = area.width - 2;
    let max_height = area.height - 2;
    if max_width < 1 || max_height < 1 {
        let (x, y) = area.center();
        return Rect::new(x, y, 0, 0);
    }
    let width = random.range_inclusive(MIN_ROOM_SIDE.min(max_width), max_width);
    let height = random.range_inclusive(MIN_ROOM_SIDE.min(max_height), max_height);
    let x = random.range_inclusive(area.x + 1, area.x_max() - 1 - width);
    let y = random.range_inclusive(area.y + 1, area.y_max() - 1 - height);
    Rect::new(x, y, width, height)
}
