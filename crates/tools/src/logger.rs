//! Stderr logging for the CLI: `-v` flags pick the level, `RUST_LOG` may refine it.

use env_logger::{Builder, Env, Target};
use log::{LevelFilter, SetLoggerError};

/// Maps repeated `-v` flags onto a level: warnings by default, up to trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn builder(verbose: u8) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for_verbosity(verbose))
        .format_timestamp(None)
        .target(Target::Stderr);
    builder
}

/// Installs the global logger; fails if one is already installed.
pub fn init(verbose: u8) -> Result<(), SetLoggerError> {
    let mut builder = builder(verbose);
    builder.parse_env(Env::default());
    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn built_logger_filters_at_the_verbosity_level() {
        assert_eq!(builder(0).build().filter(), LevelFilter::Warn);
        assert_eq!(builder(3).build().filter(), LevelFilter::Trace);
    }
}
