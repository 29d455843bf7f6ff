use anyhow::{Result, bail, ensure};
use clap::Parser;
use levelgen_core::{
    AgentWalkParams, Algorithm, BspParams, DriftTerrainParams, Grid, LevelRequest,
    NoiseFieldParams, PerlinTerrainParams, RandomWalkParams, SectionDriftTerrainParams,
    SeededRandom, SmoothPerlinTerrainParams, bsp_dungeon, generate,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
}

fn random_request(random: &mut SeededRandom, algorithm: Algorithm) -> LevelRequest {
    let width = random.range_inclusive(1, 96);
    let height = random.range_inclusive(1, 64);
    let seed = random.next_u64();
    match algorithm {
        Algorithm::PerlinTerrain => LevelRequest::PerlinTerrain(PerlinTerrainParams {
            width,
            height,
            noise_seed: random.next_float(),
            reduction: random.next_float() * 2.0,
        }),
        Algorithm::SmoothPerlinTerrain => {
            LevelRequest::SmoothPerlinTerrain(SmoothPerlinTerrainParams {
                width,
                height,
                noise_seed: random.next_float(),
                reduction: random.next_float() * 2.0,
                interval: random.range_inclusive(-1, 12),
            })
        }
        Algorithm::DriftTerrain => {
            LevelRequest::DriftTerrain(DriftTerrainParams { width, height, seed })
        }
        Algorithm::SectionDriftTerrain => {
            LevelRequest::SectionDriftTerrain(SectionDriftTerrainParams {
                width,
                height,
                seed,
                section_width: random.range_inclusive(1, 16),
            })
        }
        Algorithm::RandomWalk => LevelRequest::RandomWalk(RandomWalkParams {
            width,
            height,
            seed,
            steps: random.range_inclusive(0, 3000) as u32,
        }),
        Algorithm::AgentWalk => {
            let room_min_size = random.range_inclusive(1, 6);
            LevelRequest::AgentWalk(AgentWalkParams {
                width,
                height,
                seed,
                steps: random.range_inclusive(0, 3000) as u32,
                min_dwell: random.range_inclusive(0, 8) as u32,
                turn_chance: random.next_float(),
                room_chance: random.next_float(),
                room_min_size,
                room_max_size: room_min_size + random.range_inclusive(0, 6),
            })
        }
        Algorithm::Bsp => LevelRequest::Bsp(BspParams {
            width,
            height,
            seed,
            min_partition_size: random.range_inclusive(1, 12),
            max_corridor_width: random.range_inclusive(1, 4),
        }),
        Algorithm::NoiseField => LevelRequest::NoiseField(NoiseFieldParams {
            width,
            height,
            scale: random.next_float(),
            threshold: random.next_float(),
            offset: random.next_float() * 256.0,
        }),
    }
}

fn check_terrain(grid: &Grid, heights: &[i32]) -> Result<()> {
    ensure!(heights.len() == grid.width() as usize, "one height per column");
    for (col, &top) in heights.iter().enumerate() {
        ensure!((0..grid.height()).contains(&top), "column {col} height {top} out of range");
        ensure!(grid.column_top(col as i32) == Some(top), "column {col} not filled to {top}");
    }
    Ok(())
}

fn check_bsp(params: &BspParams) -> Result<()> {
    let dungeon = bsp_dungeon(params)?;
    for (_, node) in dungeon.tree.nodes() {
        match (node.children, node.room) {
            (Some(_), Some(room)) => bail!("internal node holds room {room:?}"),
            (None, None) => bail!("leaf {:?} has no room", node.area),
            (None, Some(room)) if !room.is_empty() => {
                ensure!(node.area.contains_with_margin(room, 1), "{room:?} escapes {node:?}");
            }
            _ => {}
        }
    }
    for corridor in &dungeon.corridors {
        ensure!(!corridor.is_empty(), "degenerate corridor {corridor:?}");
        ensure!(
            corridor.width.min(corridor.height) <= params.max_corridor_width,
            "corridor {corridor:?} wider than {}",
            params.max_corridor_width
        );
    }
    Ok(())
}

fn check(request: &LevelRequest) -> Result<()> {
    let level = generate(request)?;
    let replay = generate(request)?;
    ensure!(level == replay, "{} is not deterministic", level.algorithm);

    if let Some(heights) = &level.heights {
        check_terrain(&level.grid, heights)?;
    }
    if let LevelRequest::Bsp(params) = request {
        check_bsp(params)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} runs per algorithm...", args.seed, args.runs);
    let mut random = SeededRandom::new(args.seed);

    for run in 0..args.runs {
        for algorithm in Algorithm::ALL {
            let request = random_request(&mut random, algorithm);
            check(&request).map_err(|err| {
                err.context(format!("run {run} failed invariants for {request:?}"))
            })?;
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
