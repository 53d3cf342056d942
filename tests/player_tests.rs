//! Player controller - bounds and pitch hold for every intent combination

use std::f32::consts::FRAC_PI_2;

use tui_voxel::core::{spawn_player, update_player, VoxelGrid};
use tui_voxel::types::{Config, Intent, Intents, PlayerState, Vec3, ViewAngles};

/// Movement and edit intents (everything but quit).
fn frame_intents() -> Vec<Intent> {
    Intent::ALL
        .into_iter()
        .filter(|i| *i != Intent::Quit)
        .collect()
}

fn combination(bits: u32, intents: &[Intent]) -> Intents {
    intents
        .iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, intent)| *intent)
        .collect()
}

fn assert_in_bounds(player: &PlayerState, config: &Config) {
    let extent = config.world.extent();
    let p = player.position;
    assert!(p.x >= 0.0 && p.x < extent.x, "x {p}");
    assert!(p.y >= 0.0 && p.y < extent.y, "y {p}");
    assert!(p.z >= config.eye_height && p.z < extent.z, "z {p}");
    assert!(
        (-FRAC_PI_2..=FRAC_PI_2).contains(&player.view.pitch),
        "pitch {}",
        player.view.pitch
    );
}

#[test]
fn every_intent_combination_keeps_player_in_world() {
    let config = Config::default();
    let mut grid = VoxelGrid::new(config.world);
    grid.fill_layers(0..config.ground_layers, config.ground_block);

    let intents = frame_intents();
    assert_eq!(intents.len(), 10);

    let starts = [
        spawn_player(&config),
        PlayerState::new(Vec3::new(0.0, 0.0, 9.99), ViewAngles::new(1.5, -0.3)),
        PlayerState::new(Vec3::new(19.99, 19.99, 1.5), ViewAngles::new(-1.5, 2.0)),
    ];

    for bits in 0..(1u32 << intents.len()) {
        let combo = combination(bits, &intents);
        for start in starts {
            let mut player = start;
            for _ in 0..40 {
                player = update_player(player, &combo, &grid, &config);
                assert_in_bounds(&player, &config);
            }
        }
    }
}

#[test]
fn walking_off_the_map_stops_at_the_edge() {
    let config = Config::default();
    let mut grid = VoxelGrid::new(config.world);
    grid.fill_layers(0..config.ground_layers, config.ground_block);

    let forward = Intents {
        move_forward: true,
        ..Intents::default()
    };
    let mut player = spawn_player(&config);
    for _ in 0..200 {
        player = update_player(player, &forward, &grid, &config);
    }
    assert!(player.position.x > 19.9);
    assert!(player.position.x < 20.0);
    assert_eq!(player.position.z, config.spawn_position().z);
}

#[test]
fn falls_into_a_hole_one_cell_per_frame() {
    let config = Config::default();
    let mut grid = VoxelGrid::new(config.world);
    grid.fill_layers(0..config.ground_layers, config.ground_block);
    for z in 1..4 {
        grid.set(5, 5, z, None);
    }

    let mut player = spawn_player(&config);
    let idle = Intents::default();
    let mut heights = Vec::new();
    for _ in 0..4 {
        player = update_player(player, &idle, &grid, &config);
        heights.push(player.position.z);
    }
    assert_eq!(heights, vec![4.5, 3.5, 2.5, 2.5]);
}
