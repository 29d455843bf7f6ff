//! Generator families. Each takes its own parameter struct and returns a fresh `Grid`.

pub mod area;
pub mod bsp;
pub mod noise_field;
pub mod terrain;

pub use area::{AgentWalkParams, Direction, RandomWalkParams, agent_walk, random_walk};
pub use bsp::{BspDungeon, BspNode, BspParams, BspTree, NodeKey, bsp_dungeon};
pub use noise_field::{NoiseFieldParams, noise_field};
pub use terrain::{
    DriftTerrainParams, PerlinTerrainParams, SectionDriftTerrainParams,
    SmoothPerlinTerrainParams, TerrainProfile, drift_terrain, perlin_terrain, rasterize_profile,
    section_drift_terrain, smooth_perlin_terrain,
};
