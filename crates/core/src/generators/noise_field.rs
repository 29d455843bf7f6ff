//! Top-down wall/floor classification straight from 2D noise.

use log::debug;
use serde::Deserialize;

use crate::error::{GenerationResult, ensure_dimensions, ensure_finite, ensure_probability};
use crate::grid::{Cell, Grid};
use crate::noise::perlin;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoiseFieldParams {
    pub width: i32,
    pub height: i32,
    /// Multiplier on both cell coordinates before sampling.
    pub scale: f64,
    /// Cells whose noise is strictly above this value are filled.
    pub threshold: f64,
    /// Shift added to both scaled coordinates, selecting which part of the field is read.
    pub offset: f64,
}

impl Default for NoiseFieldParams {
    fn default() -> Self {
        Self { width: 10, height: 10, scale: 0.1, threshold: 0.5, offset: 0.0 }
    }
}

pub fn noise_field(params: &NoiseFieldParams) -> GenerationResult<Grid> {
    ensure_dimensions(params.width, params.height)?;
    ensure_finite("scale", params.scale)?;
    ensure_finite("offset", params.offset)?;
    ensure_probability("threshold", params.threshold)?;

    let mut grid = Grid::new(params.width, params.height)?;
    for y in 0..params.height {
        for x in 0..params.width {
            let sample = perlin(
                f64::from(x) * params.scale + params.offset,
                f64::from(y) * params.scale + params.offset,
            );
            if sample > params.threshold {
                grid.set(x, y, Cell::Filled);
            }
        }
    }

    debug!(
        "noise field {}x{} scale={} threshold={} offset={} filled={}",
        params.width,
        params.height,
        params.scale,
        params.threshold,
        params.offset,
        grid.filled_count()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    #[test]
    fn cells_follow_the_noise_threshold() {
        let params =
            NoiseFieldParams { width: 32, height: 24, scale: 0.13, threshold: 0.55, offset: 0.0 };
        let grid = noise_field(&params).expect("valid params");
        for y in 0..24 {
            for x in 0..32 {
                let sample = perlin(f64::from(x) * 0.13, f64::from(y) * 0.13);
                assert_eq!(grid.is_filled(x, y), sample > 0.55);
            }
        }
    }

    #[test]
    fn integer_scale_lands_on_lattice_and_stays_open() {
        let params =
            NoiseFieldParams { width: 8, height: 8, scale: 1.0, threshold: 0.5, offset: 3.0 };
        assert_eq!(noise_field(&params).expect("valid params").filled_count(), 0);
    }

    #[test]
    fn threshold_extremes() {
        let everything = NoiseFieldParams {
            width: 20,
            height: 20,
            scale: 0.37,
            threshold: 0.0,
            offset: 0.0,
        };
        let grid = noise_field(&everything).expect("valid params");
        assert!(grid.filled_count() > 300);

        let nothing = NoiseFieldParams { threshold: 1.0, ..everything };
        assert_eq!(noise_field(&nothing).expect("valid params").filled_count(), 0);
    }

    #[test]
    fn offset_moves_the_sampled_window() {
        let base = NoiseFieldParams {
            width: 24,
            height: 24,
            scale: 0.21,
            threshold: 0.5,
            offset: 0.0,
        };
        let shifted = NoiseFieldParams { offset: 37.5, ..base.clone() };
        let base_grid = noise_field(&base).expect("valid params");
        let shifted_grid = noise_field(&shifted).expect("valid params");
        assert_ne!(base_grid.fingerprint(), shifted_grid.fingerprint());
        for (x, y) in [(0, 0), (5, 11), (23, 23)] {
            let sample = perlin(f64::from(x) * 0.21 + 37.5, f64::from(y) * 0.21 + 37.5);
            assert_eq!(shifted_grid.is_filled(x, y), sample > 0.5);
        }
    }

    #[test]
    fn non_finite_offset_is_rejected() {
        let params = NoiseFieldParams { offset: f64::INFINITY, ..NoiseFieldParams::default() };
        assert!(matches!(
            noise_field(&params),
            Err(GenerationError::InvalidParameter { name: "offset", .. })
        ));
    }

    #[test]
    fn threshold_outside_unit_range_is_rejected() {
        let params = NoiseFieldParams { threshold: -0.2, ..NoiseFieldParams::default() };
        assert!(matches!(
            noise_field(&params),
            Err(GenerationError::InvalidParameter { name: "threshold", .. })
        ));
    }
}
