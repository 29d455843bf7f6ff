//! Side-view height profiles: every column gets a surface height and is filled down to row 0.

use log::debug;
use serde::Deserialize;

use crate::error::{GenerationError, GenerationResult, ensure_dimensions, ensure_finite};
use crate::grid::Grid;
use crate::noise::perlin;
use crate::random::SeededRandom;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerlinTerrainParams {
    pub width: i32,
    pub height: i32,
    /// Second noise coordinate; different values give unrelated silhouettes.
    pub noise_seed: f64,
    /// Multiplier on the column index before sampling. Smaller is smoother.
    pub reduction: f64,
}

impl Default for PerlinTerrainParams {
    fn default() -> Self {
        Self { width: 200, height: 10, noise_seed: 0.1, reduction: 0.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothPerlinTerrainParams {
    pub width: i32,
    pub height: i32,
    pub noise_seed: f64,
    pub reduction: f64,
    /// Columns per interpolation interval; `<= 1` disables smoothing.
    pub interval: i32,
}

impl Default for SmoothPerlinTerrainParams {
    fn default() -> Self {
        Self { width: 200, height: 10, noise_seed: 0.1, reduction: 0.5, interval: 5 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriftTerrainParams {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
}

impl Default for DriftTerrainParams {
    fn default() -> Self {
        Self { width: 200, height: 10, seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionDriftTerrainParams {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    /// Columns that share one height before the walker may step again.
    pub section_width: i32,
}

impl Default for SectionDriftTerrainParams {
    fn default() -> Self {
        Self { width: 200, height: 10, seed: 42, section_width: 5 }
    }
}

/// A rasterized side-view level together with the column heights it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainProfile {
    pub grid: Grid,
    pub heights: Vec<i32>,
}

/// Fills rows `0..=heights[col]` of every column.
pub fn rasterize_profile(grid: &mut Grid, heights: &[i32]) {
    for (col, &top) in heights.iter().enumerate() {
        grid.fill_column(col as i32, top);
    }
}

fn build_profile(width: i32, height: i32, heights: Vec<i32>) -> GenerationResult<TerrainProfile> {
    let mut grid = Grid::new(width, height)?;
    rasterize_profile(&mut grid, &heights);
    Ok(TerrainProfile { grid, heights })
}

fn noise_height(col: i32, params_height: i32, noise_seed: f64, reduction: f64) -> i32 {
    let sample = perlin(f64::from(col) * reduction, noise_seed);
    ((sample * f64::from(params_height)).floor() as i32).min(params_height - 1)
}

fn ensure_noise_inputs(noise_seed: f64, reduction: f64) -> GenerationResult<()> {
    ensure_finite("noise_seed", noise_seed)?;
    ensure_finite("reduction", reduction)
}

pub fn perlin_heights(params: &PerlinTerrainParams) -> GenerationResult<Vec<i32>> {
    ensure_dimensions(params.width, params.height)?;
    ensure_noise_inputs(params.noise_seed, params.reduction)?;
    Ok((0..params.width)
        .map(|col| noise_height(col, params.height, params.noise_seed, params.reduction))
        .collect())
}

pub fn perlin_terrain(params: &PerlinTerrainParams) -> GenerationResult<TerrainProfile> {
    let heights = perlin_heights(params)?;
    debug!(
        "perlin terrain {}x{} noise_seed={} reduction={}",
        params.width, params.height, params.noise_seed, params.reduction
    );
    build_profile(params.width, params.height, heights)
}

/// Samples noise only at interval boundaries and interpolates the columns between them.
pub fn smooth_perlin_heights(params: &SmoothPerlinTerrainParams) -> GenerationResult<Vec<i32>> {
    if params.interval <= 1 {
        return perlin_heights(&PerlinTerrainParams {
            width: params.width,
            height: params.height,
            noise_seed: params.noise_seed,
            reduction: params.reduction,
        });
    }
    ensure_dimensions(params.width, params.height)?;
    ensure_noise_inputs(params.noise_seed, params.reduction)?;

    let interval = params.interval;
    let sample = |col| noise_height(col, params.height, params.noise_seed, params.reduction);
    let mut heights = Vec::with_capacity(params.width as usize);
    let mut start = 0;
    while start < params.width {
        let start_height = f64::from(sample(start));
        let end_height = f64::from(sample(start + interval));
        let step = (end_height - start_height) / f64::from(interval);
        for offset in 0..interval.min(params.width - start) {
            heights.push((start_height + step * f64::from(offset)).floor() as i32);
        }
        start += interval;
    }
    Ok(heights)
}

pub fn smooth_perlin_terrain(params: &SmoothPerlinTerrainParams) -> GenerationResult<TerrainProfile> {
    let heights = smooth_perlin_heights(params)?;
    debug!(
        "smoothed perlin terrain {}x{} interval={}",
        params.width, params.height, params.interval
    );
    build_profile(params.width, params.height, heights)
}

/// Proposes a one-step height change and keeps it only strictly inside `(0, max_height)`.
fn drift(random: &mut SeededRandom, current: i32, max_height: i32) -> i32 {
    let proposal = current + random.range(-1, 2);
    if proposal > 0 && proposal < max_height { proposal } else { current }
}

pub fn drift_heights(params: &DriftTerrainParams) -> GenerationResult<Vec<i32>> {
    ensure_dimensions(params.width, params.height)?;
    let mut random = SeededRandom::new(params.seed);
    let mut current = random.range(0, params.height);
    let mut heights = Vec::with_capacity(params.width as usize);
    for _ in 0..params.width {
        current = drift(&mut random, current, params.height);
        heights.push(current);
    }
    Ok(heights)
}

pub fn drift_terrain(params: &DriftTerrainParams) -> GenerationResult<TerrainProfile> {
    let heights = drift_heights(params)?;
    debug!("drift terrain {}x{} seed={}", params.width, params.height, params.seed);
    build_profile(params.width, params.height, heights)
}

pub fn section_drift_heights(params: &SectionDriftTerrainParams) -> GenerationResult<Vec<i32>> {
    ensure_dimensions(params.width, params.height)?;
    if params.section_width < 1 {
        return Err(GenerationError::parameter(
            "section_width",
            format!("{} is less than 1", params.section_width),
        ));
    }
    let mut random = SeededRandom::new(params.seed);
    let mut current = random.range(0, params.height);
    let mut heights = Vec::with_capacity(params.width as usize);
    for col in 0..params.width {
        if col > 0 && col % params.section_width == 0 {
            current = drift(&mut random, current, params.height);
        }
        heights.push(current);
    }
    Ok(heights)
}

pub fn section_drift_terrain(params: &SectionDriftTerrainParams) -> GenerationResult<TerrainProfile> {
    let heights = section_drift_heights(params)?;
    debug!(
        "section drift terrain {}x{} seed={} section_width={}",
        params.width, params.height, params.seed, params.section_width
    );
    build_profile(params.width, params.height, heights)
}
