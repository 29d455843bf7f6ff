//! Top-down area carving by wandering walkers.

use log::debug;
use serde::Deserialize;

use crate::error::{GenerationError, GenerationResult, ensure_dimensions, ensure_probability};
use crate::grid::{Cell, Grid};
use crate::random::SeededRandom;
use crate::rect::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn random(random: &mut SeededRandom) -> Self {
        Self::ALL[random.range(0, 4) as usize]
    }

    fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RandomWalkParams {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    pub steps: u32,
}

impl Default for RandomWalkParams {
    fn default() -> Self {
        Self { width: 10, height: 10, seed: 42, steps: 2_000 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentWalkParams {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    pub steps: u32,
    /// Steps the walker must keep its heading before it may turn.
    pub min_dwell: u32,
    /// Chance per eligible step that the walker turns.
    pub turn_chance: f64,
    /// Chance that a turn also carves a room.
    pub room_chance: f64,
    pub room_min_size: i32,
    /// Inclusive upper bound on the room side.
    pub room_max_size: i32,
}

impl Default for AgentWalkParams {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: 42,
            steps: 2_000,
            min_dwell: 0,
            turn_chance: 0.5,
            room_chance: 0.5,
            room_min_size: 3,
            room_max_size: 7,
        }
    }
}

impl AgentWalkParams {
    fn validate(&self) -> GenerationResult<()> {
        ensure_dimensions(self.width, self.height)?;
        ensure_probability("turn_chance", self.turn_chance)?;
        ensure_probability("room_chance", self.room_chance)?;
        if self.room_min_size < 1 {
            return Err(GenerationError::parameter(
                "room_min_size",
                format!("{} is less than 1", self.room_min_size),
            ));
        }
        if self.room_max_size < self.room_min_size {
            return Err(GenerationError::parameter(
                "room_max_size",
                format!("{} is below room_min_size {}", self.room_max_size, self.room_min_size),
            ));
        }
        Ok(())
    }
}

/// Unconstrained drunkard's walk. Moves that would leave the grid are skipped and the
/// walker stays put for that step.
pub fn random_walk(params: &RandomWalkParams) -> GenerationResult<Grid> {
    let mut grid = Grid::new(params.width, params.height)?;
    let mut random = SeededRandom::new(params.seed);
    let mut position = (random.range(0, params.width), random.range(0, params.height));
    grid.set(position.0, position.1, Cell::Filled);

    let mut rejected = 0_u32;
    for _ in 0..params.steps {
        let next = Direction::random(&mut random).step(position);
        if grid.set(next.0, next.1, Cell::Filled) {
            position = next;
        } else {
            rejected += 1;
        }
    }

    debug!(
        "random walk {}x{} seed={} steps={} rejected={} filled={}",
        params.width,
        params.height,
        params.seed,
        params.steps,
        rejected,
        grid.filled_count()
    );
    Ok(grid)
}

/// Cells a walker may occupy: everything except the outer one-cell ring.
fn interior(width: i32, height: i32) -> Rect {
    Rect::new(1, 1, width - 2, height - 2)
}

/// Square room of side `size` centered on `(x, y)`.
fn room_around((x, y): (i32, i32), size: i32) -> Rect {
    Rect::new(x - size / 2, y - size / 2, size, size)
}

/// Walker with a persistent heading that turns only after `min_dwell` steps and may
/// stamp a square room each time it turns. Rooms and moves never touch the outer ring,
/// so a grid narrower than three cells on either side comes back empty.
pub fn agent_walk(params: &AgentWalkParams) -> GenerationResult<Grid> {
    params.validate()?;
    let mut grid = Grid::new(params.width, params.height)?;
    let walkable = interior(params.width, params.height);
    if walkable.is_empty() {
        debug!("agent walk {}x{} has no interior to walk", params.width, params.height);
        return Ok(grid);
    }

    let mut random = SeededRandom::new(params.seed);
    let mut position =
        (random.range(walkable.x, walkable.x_max()), random.range(walkable.y, walkable.y_max()));
    let mut direction = Direction::random(&mut random);
    grid.set(position.0, position.1, Cell::Filled);

    let mut dwell = 0_u32;
    let mut rooms = 0_u32;
    for _ in 0..params.steps {
        dwell += 1;
        if dwell > params.min_dwell && random.chance(params.turn_chance) {
            direction = Direction::random(&mut random);
            dwell = 0;
            if random.chance(params.room_chance) {
                let size = random.range_inclusive(params.room_min_size, params.room_max_size);
                let room = room_around(position, size);
                if walkable.contains_with_margin(room, 0) {
                    grid.fill_rect(room, Cell::Filled);
                    rooms += 1;
                }
            }
        }

        let next = direction.step(position);
        if walkable.contains_point(next.0, next.1) {
            position = next;
            grid.set(position.0, position.1, Cell::Filled);
        }
    }

    debug!(
        "agent walk {}x{} seed={} steps={} rooms={} filled={}",
        params.width,
        params.height,
        params.seed,
        params.steps,
        rooms,
        grid.filled_count()
    );
    Ok(grid)
}
