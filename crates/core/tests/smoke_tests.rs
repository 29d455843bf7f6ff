use levelgen_core::{
    AgentWalkParams, Algorithm, BspParams, GenerationError, LevelRequest, RandomWalkParams,
    TileSurface, generate, rasterize,
};

#[derive(Default)]
struct CountingSurface {
    placed: usize,
    cleared: usize,
}

impl TileSurface for CountingSurface {
    fn place(&mut self, _x: i32, _y: i32) {
        self.placed += 1;
    }

    fn clear(&mut self, _x: i32, _y: i32) {
        self.cleared += 1;
    }
}

#[test]
fn test_smoke_every_algorithm_renders_at_a_common_size() {
    for algorithm in Algorithm::ALL {
        let mut request = LevelRequest::with_defaults(algorithm);
        request.set_width(48);
        request.set_height(24);
        request.set_seed(2024);
        let level = generate(&request).expect("defaults resized should be valid");
        assert_eq!((level.grid.width(), level.grid.height()), (48, 24), "{algorithm}");

        let rendered = level.grid.to_string();
        assert_eq!(rendered.lines().count(), 24, "{algorithm}");
        assert!(rendered.lines().all(|line| line.chars().count() == 48), "{algorithm}");

        let mut surface = CountingSurface::default();
        rasterize(&level.solid_layer(), &mut surface);
        assert_eq!(surface.placed, level.solid_layer().filled_count());
        assert_eq!(surface.cleared, 0);
    }
}

#[test]
fn test_smoke_bsp_level_connects_a_large_map() {
    let request = LevelRequest::Bsp(BspParams {
        width: 120,
        height: 80,
        seed: 7,
        min_partition_size: 8,
        max_corridor_width: 2,
    });
    let level = generate(&request).expect("valid request");
    assert!(level.rooms.len() >= 2, "a large map should split at least once");
    assert!(level.grid.filled_count() > 0);
}

#[test]
fn test_smoke_agent_walk_stamps_rooms() {
    let request = LevelRequest::AgentWalk(AgentWalkParams {
        width: 64,
        height: 64,
        seed: 5,
        steps: 300,
        min_dwell: 2,
        turn_chance: 0.5,
        room_chance: 1.0,
        room_min_size: 3,
        room_max_size: 5,
    });
    let level = generate(&request).expect("valid request");
    let has_room = level.grid.filled_cells().any(|(x, y)| {
        (0..3).all(|dy| (0..3).all(|dx| level.grid.is_filled(x + dx, y + dy)))
    });
    assert!(has_room, "expected at least one 3x3 block:\n{}", level.grid);
}

#[test]
fn test_smoke_invalid_requests_surface_typed_errors() {
    let request = LevelRequest::RandomWalk(RandomWalkParams {
        width: -4,
        ..RandomWalkParams::default()
    });
    assert_eq!(
        generate(&request).expect_err("negative width"),
        GenerationError::InvalidDimensions { width: -4, height: 10 }
    );
}
