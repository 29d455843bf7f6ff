//! One entry point over every generator, driven by a deserializable request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationResult;
use crate::generators::{
    AgentWalkParams, BspParams, DriftTerrainParams, NoiseFieldParams, PerlinTerrainParams,
    RandomWalkParams, SectionDriftTerrainParams, SmoothPerlinTerrainParams, TerrainProfile,
    agent_walk, bsp_dungeon, drift_terrain, noise_field, perlin_terrain, random_walk,
    section_drift_terrain, smooth_perlin_terrain,
};
use crate::grid::Grid;
use crate::rect::Rect;
use crate::surface::compose_walls;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    PerlinTerrain,
    SmoothPerlinTerrain,
    DriftTerrain,
    SectionDriftTerrain,
    RandomWalk,
    AgentWalk,
    Bsp,
    NoiseField,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Self::PerlinTerrain,
        Self::SmoothPerlinTerrain,
        Self::DriftTerrain,
        Self::SectionDriftTerrain,
        Self::RandomWalk,
        Self::AgentWalk,
        Self::Bsp,
        Self::NoiseField,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::PerlinTerrain => "perlin_terrain",
            Self::SmoothPerlinTerrain => "smooth_perlin_terrain",
            Self::DriftTerrain => "drift_terrain",
            Self::SectionDriftTerrain => "section_drift_terrain",
            Self::RandomWalk => "random_walk",
            Self::AgentWalk => "agent_walk",
            Self::Bsp => "bsp",
            Self::NoiseField => "noise_field",
        }
    }

    /// Walkers and dungeons mark floor; every other generator marks solid cells.
    pub const fn carves_floor(self) -> bool {
        matches!(self, Self::RandomWalk | Self::AgentWalk | Self::Bsp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL.into_iter().find(|algorithm| algorithm.name() == normalized).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|algorithm| algorithm.name()).collect();
            format!("unknown algorithm '{raw}', expected one of: {}", known.join(", "))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum LevelRequest {
    PerlinTerrain(PerlinTerrainParams),
    SmoothPerlinTerrain(SmoothPerlinTerrainParams),
    DriftTerrain(DriftTerrainParams),
    SectionDriftTerrain(SectionDriftTerrainParams),
    RandomWalk(RandomWalkParams),
    AgentWalk(AgentWalkParams),
    Bsp(BspParams),
    NoiseField(NoiseFieldParams),
}

impl LevelRequest {
    pub fn with_defaults(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::PerlinTerrain => Self::PerlinTerrain(PerlinTerrainParams::default()),
            Algorithm::SmoothPerlinTerrain => {
                Self::SmoothPerlinTerrain(SmoothPerlinTerrainParams::default())
            }
            Algorithm::DriftTerrain => Self::DriftTerrain(DriftTerrainParams::default()),
            Algorithm::SectionDriftTerrain => {
                Self::SectionDriftTerrain(SectionDriftTerrainParams::default())
            }
            Algorithm::RandomWalk => Self::RandomWalk(RandomWalkParams::default()),
            Algorithm::AgentWalk => Self::AgentWalk(AgentWalkParams::default()),
            Algorithm::Bsp => Self::Bsp(BspParams::default()),
            Algorithm::NoiseField => Self::NoiseField(NoiseFieldParams::default()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::PerlinTerrain(_) => Algorithm::PerlinTerrain,
            Self::SmoothPerlinTerrain(_) => Algorithm::SmoothPerlinTerrain,
            Self::DriftTerrain(_) => Algorithm::DriftTerrain,
            Self::SectionDriftTerrain(_) => Algorithm::SectionDriftTerrain,
            Self::RandomWalk(_) => Algorithm::RandomWalk,
            Self::AgentWalk(_) => Algorithm::AgentWalk,
            Self::Bsp(_) => Algorithm::Bsp,
            Self::NoiseField(_) => Algorithm::NoiseField,
        }
    }

    fn size_mut(&mut self) -> (&mut i32, &mut i32) {
        match self {
            Self::PerlinTerrain(p) => (&mut p.width, &mut p.height),
            Self::SmoothPerlinTerrain(p) => (&mut p.width, &mut p.height),
            Self::DriftTerrain(p) => (&mut p.width, &mut p.height),
            Self::SectionDriftTerrain(p) => (&mut p.width, &mut p.height),
            Self::RandomWalk(p) => (&mut p.width, &mut p.height),
            Self::AgentWalk(p) => (&mut p.width, &mut p.height),
            Self::Bsp(p) => (&mut p.width, &mut p.height),
            Self::NoiseField(p) => (&mut p.width, &mut p.height),
        }
    }

    pub fn set_width(&mut self, width: i32) {
        *self.size_mut().0 = width;
    }

    pub fn set_height(&mut self, height: i32) {
        *self.size_mut().1 = height;
    }

    /// Integer seed of the random-driven generators; noise-driven ones have none.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::DriftTerrain(p) => Some(p.seed),
            Self::SectionDriftTerrain(p) => Some(p.seed),
            Self::RandomWalk(p) => Some(p.seed),
            Self::AgentWalk(p) => Some(p.seed),
            Self::Bsp(p) => Some(p.seed),
            Self::PerlinTerrain(_) | Self::SmoothPerlinTerrain(_) | Self::NoiseField(_) => None,
        }
    }

    /// Reseeds the request. Perlin terrain maps the seed onto its sampling row in
    /// `[0.0001, 0.9999]`; the noise field maps it onto a sampling offset in `[0, 256)`,
    /// one full period of the noise lattice.
    pub fn set_seed(&mut self, seed: u64) {
        let noise_seed = 0.0001 + (seed % 9_999) as f64 / 10_000.0;
        let noise_offset = (seed % 25_600) as f64 / 100.0;
        match self {
            Self::DriftTerrain(p) => p.seed = seed,
            Self::SectionDriftTerrain(p) => p.seed = seed,
            Self::RandomWalk(p) => p.seed = seed,
            Self::AgentWalk(p) => p.seed = seed,
            Self::Bsp(p) => p.seed = seed,
            Self::PerlinTerrain(p) => p.noise_seed = noise_seed,
            Self::SmoothPerlinTerrain(p) => p.noise_seed = noise_seed,
            Self::NoiseField(p) => p.offset = noise_offset,
        }
    }
}

/// Everything a generator produced, flattened for callers that do not care which one ran.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedLevel {
    pub algorithm: Algorithm,
    pub grid: Grid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heights: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rooms: Vec<Rect>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub corridors: Vec<Rect>,
}

impl GeneratedLevel {
    fn from_grid(algorithm: Algorithm, grid: Grid) -> Self {
        Self { algorithm, grid, heights: None, rooms: Vec::new(), corridors: Vec::new() }
    }

    fn from_profile(algorithm: Algorithm, profile: TerrainProfile) -> Self {
        Self { heights: Some(profile.heights), ..Self::from_grid(algorithm, profile.grid) }
    }

    /// Solid tiles to draw: the grid itself, or the walls left around a carved floor.
    pub fn solid_layer(&self) -> Grid {
        if self.algorithm.carves_floor() {
            compose_walls(&self.grid)
        } else {
            self.grid.clone()
        }
    }
}

pub fn generate(request: &LevelRequest) -> GenerationResult<GeneratedLevel> {
    let algorithm = request.algorithm();
    Ok(match request {
        LevelRequest::PerlinTerrain(p) => GeneratedLevel::from_profile(algorithm, perlin_terrain(p)?),
        LevelRequest::SmoothPerlinTerrain(p) => {
            GeneratedLevel::from_profile(algorithm, smooth_perlin_terrain(p)?)
        }
        LevelRequest::DriftTerrain(p) => GeneratedLevel::from_profile(algorithm, drift_terrain(p)?),
        LevelRequest::SectionDriftTerrain(p) => {
            GeneratedLevel::from_profile(algorithm, section_drift_terrain(p)?)
        }
        LevelRequest::RandomWalk(p) => GeneratedLevel::from_grid(algorithm, random_walk(p)?),
        LevelRequest::AgentWalk(p) => GeneratedLevel::from_grid(algorithm, agent_walk(p)?),
        LevelRequest::Bsp(p) => {
            let dungeon = bsp_dungeon(p)?;
            GeneratedLevel {
                rooms: dungeon.rooms,
                corridors: dungeon.corridors,
                ..GeneratedLevel::from_grid(algorithm, dungeon.grid)
            }
        }
        LevelRequest::NoiseField(p) => GeneratedLevel::from_grid(algorithm, noise_field(p)?),
    })
}
