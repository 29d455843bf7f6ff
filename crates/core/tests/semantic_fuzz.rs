use levelgen_core::{
    AgentWalkParams, BspParams, DriftTerrainParams, NoiseFieldParams, PerlinTerrainParams,
    RandomWalkParams, SectionDriftTerrainParams, SmoothPerlinTerrainParams, agent_walk,
    bsp_dungeon, drift_terrain, noise_field, perlin_terrain, random_walk, section_drift_terrain,
    smooth_perlin_terrain,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};

fn runner() -> TestRunner {
    TestRunner::new(ProptestConfig::with_cases(64))
}

fn check_heights(heights: &[i32], grid_height: i32, label: &str) -> Result<(), String> {
    for (col, &top) in heights.iter().enumerate() {
        if !(0..grid_height).contains(&top) {
            return Err(format!("{label}: column {col} height {top} outside 0..{grid_height}"));
        }
    }
    Ok(())
}

#[test]
fn test_fuzz_drift_profiles_step_by_at_most_one() {
    let inputs = (1_i32..120, 1_i32..40, any::<u64>(), 1_i32..12);
    runner()
        .run(&inputs, |(width, height, seed, section_width)| {
            let drift = drift_terrain(&DriftTerrainParams { width, height, seed })
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            check_heights(&drift.heights, height, "drift").map_err(TestCaseError::fail)?;
            for pair in drift.heights.windows(2) {
                if (pair[1] - pair[0]).abs() > 1 {
                    return Err(TestCaseError::fail(format!("drift jumped {pair:?}")));
                }
            }

            let sections = section_drift_terrain(&SectionDriftTerrainParams {
                width,
                height,
                seed,
                section_width,
            })
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
            check_heights(&sections.heights, height, "sections").map_err(TestCaseError::fail)?;
            for (col, pair) in sections.heights.windows(2).enumerate() {
                let next = col as i32 + 1;
                let boundary = next % section_width == 0;
                if !boundary && pair[0] != pair[1] {
                    return Err(TestCaseError::fail(format!("changed mid-section at {next}")));
                }
                if (pair[1] - pair[0]).abs() > 1 {
                    return Err(TestCaseError::fail(format!("section jumped {pair:?}")));
                }
            }
            Ok(())
        })
        .expect("drift profiles should stay bounded and smooth");
}

#[test]
fn test_fuzz_noise_profiles_fill_columns_from_the_bottom() {
    let inputs = (1_i32..100, 1_i32..30, 0.0001_f64..0.9999, 0.01_f64..2.0, -2_i32..10);
    runner()
        .run(&inputs, |(width, height, noise_seed, reduction, interval)| {
            let raw = perlin_terrain(&PerlinTerrainParams { width, height, noise_seed, reduction })
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            let smooth = smooth_perlin_terrain(&SmoothPerlinTerrainParams {
                width,
                height,
                noise_seed,
                reduction,
                interval,
            })
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
            for profile in [raw, smooth] {
                check_heights(&profile.heights, height, "noise").map_err(TestCaseError::fail)?;
                if profile.heights.len() != width as usize {
                    return Err(TestCaseError::fail("one height per column"));
                }
                for (col, &top) in profile.heights.iter().enumerate() {
                    if profile.grid.column_top(col as i32) != Some(top) {
                        return Err(TestCaseError::fail(format!("column {col} not filled to {top}")));
                    }
                    let filled = (0..height).filter(|&y| profile.grid.is_filled(col as i32, y));
                    if filled.count() != top as usize + 1 {
                        return Err(TestCaseError::fail(format!("column {col} has gaps")));
                    }
                }
            }
            Ok(())
        })
        .expect("noise profiles should be monotonic columns");
}

#[test]
fn test_fuzz_walkers_stay_on_the_grid() {
    let inputs = (1_i32..50, 1_i32..50, any::<u64>(), 0_u32..1500, 0_u32..6);
    runner()
        .run(&inputs, |(width, height, seed, steps, min_dwell)| {
            let walk = random_walk(&RandomWalkParams { width, height, seed, steps })
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            if walk.filled_count() == 0 || walk.filled_count() > steps as usize + 1 {
                return Err(TestCaseError::fail("walk cell count outside 1..=steps+1"));
            }

            let agent = agent_walk(&AgentWalkParams {
                width,
                height,
                seed,
                steps,
                min_dwell,
                ..AgentWalkParams::default()
            })
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
            for (x, y) in agent.filled_cells() {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    return Err(TestCaseError::fail(format!("agent touched the ring at {x},{y}")));
                }
            }
            Ok(())
        })
        .expect("walkers should respect grid bounds");
}

#[test]
fn test_fuzz_bsp_rooms_and_corridors_stay_well_formed() {
    let inputs = (5_i32..90, 5_i32..70, any::<u64>(), 2_i32..12, 1_i32..4);
    runner()
        .run(&inputs, |(width, height, seed, min_partition_size, max_corridor_width)| {
            let dungeon = bsp_dungeon(&BspParams {
                width,
                height,
                seed,
                min_partition_size,
                max_corridor_width,
            })
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
            let inner = dungeon.grid.bounds();
            for room in &dungeon.rooms {
                if room.is_empty() || !inner.contains_with_margin(*room, 1) {
                    return Err(TestCaseError::fail(format!("room {room:?} off the map")));
                }
            }
            for corridor in &dungeon.corridors {
                if corridor.is_empty() {
                    return Err(TestCaseError::fail(format!("empty corridor {corridor:?}")));
                }
                if corridor.width.min(corridor.height) > max_corridor_width {
                    return Err(TestCaseError::fail(format!("corridor too wide {corridor:?}")));
                }
            }
            for (_, node) in dungeon.tree.nodes() {
                if let Some(room) = node.room.filter(|room| !room.is_empty())
                    && !node.area.contains_with_margin(room, 1)
                {
                    return Err(TestCaseError::fail(format!("{room:?} escapes {:?}", node.area)));
                }
            }
            Ok(())
        })
        .expect("bsp dungeons should stay inside their partitions");
}

#[test]
fn test_fuzz_noise_field_only_fills_above_threshold() {
    let inputs = (1_i32..40, 1_i32..40, 0.01_f64..1.0, 0.0_f64..=1.0, 0.0_f64..256.0);
    runner()
        .run(&inputs, |(width, height, scale, threshold, offset)| {
            let grid = noise_field(&NoiseFieldParams { width, height, scale, threshold, offset })
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            if threshold >= 1.0 && grid.filled_count() != 0 {
                return Err(TestCaseError::fail("nothing exceeds a threshold of one"));
            }
            Ok(())
        })
        .expect("noise field should honour its threshold");
}
