//! Caller-facing failures raised before any generation work starts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Width or height was zero or negative.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// An algorithm-specific knob is outside the range its generator supports.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GenerationError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;

pub(crate) fn ensure_dimensions(width: i32, height: i32) -> GenerationResult<()> {
    if width <= 0 || height <= 0 {
        return Err(GenerationError::InvalidDimensions { width, height });
    }
    Ok(())
}

pub(crate) fn ensure_probability(name: &'static str, value: f64) -> GenerationResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GenerationError::parameter(name, format!("{value} is not within [0, 1]")));
    }
    Ok(())
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> GenerationResult<()> {
    if !value.is_finite() {
        return Err(GenerationError::parameter(name, format!("{value} is not a finite number")));
    }
    Ok(())
}
