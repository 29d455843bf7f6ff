mod config;
mod logger;
mod seed;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use levelgen_core::{Algorithm, GeneratedLevel, generate};
use log::info;

use crate::seed::{generate_runtime_seed, parse_seed_value, resolve_seed};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one level and print it
    Generate {
        /// TOML file holding the algorithm and its parameters
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Algorithm to run when no config file names one
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,

        #[arg(long)]
        width: Option<i32>,

        #[arg(long)]
        height: Option<i32>,

        /// Seed override, decimal or 0x-prefixed hex
        #[arg(short, long, value_parser = parse_seed_value, conflicts_with = "fresh_seed")]
        seed: Option<u64>,

        /// Replace the seed with a fresh runtime seed
        #[arg(long)]
        fresh_seed: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the wall layer of carved levels instead of the carved floor
        #[arg(long)]
        walls: bool,
    },
    /// Print a fresh runtime seed
    Seed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_algorithm(raw: &str) -> Result<Algorithm, String> {
    raw.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_logger(cli.verbose)?;

    match cli.command {
        Commands::Generate { config, algorithm, width, height, seed, fresh_seed, format, walls } => {
            let mut request = config::base_request(config.as_deref(), algorithm)?;
            if let Some(width) = width {
                request.set_width(width);
            }
            if let Some(height) = height {
                request.set_height(height);
            }
            if let Some(choice) = resolve_seed(seed, fresh_seed, generate_runtime_seed) {
                info!("using seed {choice:?}");
                request.set_seed(choice.value());
            }

            let level = generate(&request)
                .with_context(|| format!("Failed to generate {}", request.algorithm()))?;
            info!(
                "generated {} {}x{}: {} filled cells, {} rooms, {} corridors, fingerprint {:#018x}",
                level.algorithm,
                level.grid.width(),
                level.grid.height(),
                level.grid.filled_count(),
                level.rooms.len(),
                level.corridors.len(),
                level.grid.fingerprint()
            );
            print!("{}", render(&level, format, walls)?);
        }
        Commands::Seed => println!("{}", generate_runtime_seed()),
    }
    Ok(())
}

fn install_logger(verbose: u8) -> Result<()> {
    logger::init(verbose).context("Failed to install logger")
}

fn render(level: &GeneratedLevel, format: OutputFormat, walls: bool) -> Result<String> {
    let level = if walls {
        GeneratedLevel { grid: level.solid_layer(), ..level.clone() }
    } else {
        level.clone()
    };
    match format {
        OutputFormat::Text => Ok(level.grid.to_string()),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&level).context("Failed to serialize level")?;
            json.push('\n');
            Ok(json)
        }
    }
}
