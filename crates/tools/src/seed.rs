//! Seed selection for the command line: an explicit value, or fresh entropy per run.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Picks the seed that overrides the request, if any. The argument parser keeps
/// `--seed` and `--fresh-seed` exclusive.
pub fn resolve_seed(
    cli_seed: Option<u64>,
    fresh: bool,
    generate: impl FnOnce() -> u64,
) -> Option<SeedChoice> {
    match cli_seed {
        Some(seed) => Some(SeedChoice::Cli(seed)),
        None if fresh => Some(SeedChoice::Generated(generate())),
        None => None,
    }
}

/// Accepts decimal or `0x`-prefixed hexadecimal seeds.
pub fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    let trimmed = raw_value.trim().replace('_', "");
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
