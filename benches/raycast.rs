use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_voxel::core::{
    angles_to_vect, raytrace, spawn_player, update_player, FrameComposer, Picture, VoxelGrid,
};
use tui_voxel::types::{
    Config, Intents, Vec3, ViewAngles, BORDER_THRESHOLD, DEFAULT_PICTURE_COLS,
    DEFAULT_PICTURE_ROWS,
};

fn seeded_world(config: &Config) -> VoxelGrid {
    let mut grid = VoxelGrid::new(config.world);
    grid.fill_layers(0..config.ground_layers, config.ground_block);
    grid
}

fn bench_compose_frame(c: &mut Criterion) {
    let config = Config::default();
    let grid = seeded_world(&config);
    let mut player = spawn_player(&config);
    player.view = ViewAngles::new(-0.4, 0.6);

    let mut composer = FrameComposer::new();
    let mut picture = Picture::new(DEFAULT_PICTURE_ROWS, DEFAULT_PICTURE_COLS);

    c.bench_function("compose_40x120", |b| {
        b.iter(|| {
            composer.compose_into(black_box(&player), &grid, None, &config, &mut picture);
        })
    });
}

fn bench_single_trace(c: &mut Criterion) {
    let config = Config::default();
    let grid = seeded_world(&config);
    let origin = Vec3::new(5.3, 5.7, 5.5);
    let dir = angles_to_vect(ViewAngles::new(-0.2, 0.9));

    c.bench_function("raytrace_long_ray", |b| {
        b.iter(|| raytrace(black_box(origin), black_box(dir), &grid, Some(BORDER_THRESHOLD)))
    });
}

fn bench_update_player(c: &mut Criterion) {
    let config = Config::default();
    let grid = seeded_world(&config);
    let intents = Intents {
        move_forward: true,
        look_right: true,
        ..Intents::default()
    };
    let mut player = spawn_player(&config);

    c.bench_function("update_player", |b| {
        b.iter(|| {
            player = update_player(black_box(player), &intents, &grid, &config);
        })
    });
}

criterion_group!(
    benches,
    bench_compose_frame,
    bench_single_trace,
    bench_update_player
);
criterion_main!(benches);
