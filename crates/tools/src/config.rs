//! Level configuration files: one TOML table naming the algorithm and its parameters.
//!
//! ```toml
//! algorithm = "bsp"
//! width = 60
//! height = 40
//! min_partition_size = 6
//! ```
//!
//! Omitted parameters keep the generator's defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use levelgen_core::{Algorithm, LevelRequest};

pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Bsp;

pub fn parse_request(content: &str) -> Result<LevelRequest> {
    toml::from_str(content).context("Failed to parse level configuration")
}

pub fn load_request(path: &Path) -> Result<LevelRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_request(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Starting request before command-line overrides: the file if given, else the
/// defaults of the named (or default) algorithm. Naming a different algorithm than
/// the file does is an error rather than a silent reset of the file's parameters.
pub fn base_request(config: Option<&Path>, algorithm: Option<Algorithm>) -> Result<LevelRequest> {
    let Some(path) = config else {
        return Ok(LevelRequest::with_defaults(algorithm.unwrap_or(DEFAULT_ALGORITHM)));
    };
    let request = load_request(path)?;
    if let Some(requested) = algorithm
        && requested != request.algorithm()
    {
        bail!(
            "--algorithm {requested} conflicts with algorithm {} in {}",
            request.algorithm(),
            path.display()
        );
    }
    Ok(request)
}
