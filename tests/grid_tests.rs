//! Grid tests - bounds, layout and seeding

use tui_voxel::core::{cell_of, VoxelGrid};
use tui_voxel::types::{Block, GridDims, IVec3, Vec3, WORLD_X, WORLD_Y, WORLD_Z};

#[test]
fn test_grid_new_empty() {
    let grid = VoxelGrid::new(GridDims::default());
    assert_eq!(grid.dims(), GridDims::new(WORLD_X, WORLD_Y, WORLD_Z));
    assert_eq!(grid.cells().len(), 20 * 20 * 10);
    assert_eq!(grid.occupied_count(), 0);

    for z in 0..WORLD_Z as i32 {
        for y in 0..WORLD_Y as i32 {
            for x in 0..WORLD_X as i32 {
                assert_eq!(grid.get(x, y, z), Some(None), "cell ({x}, {y}, {z})");
            }
        }
    }
}

#[test]
fn test_grid_out_of_bounds_reads() {
    let grid = VoxelGrid::new(GridDims::default());

    assert_eq!(grid.get(-1, 0, 0), None);
    assert_eq!(grid.get(0, -1, 0), None);
    assert_eq!(grid.get(0, 0, -1), None);
    assert_eq!(grid.get(20, 0, 0), None);
    assert_eq!(grid.get(0, 20, 0), None);
    assert_eq!(grid.get(0, 0, 10), None);
}

#[test]
fn test_grid_out_of_bounds_writes_are_noops() {
    let mut grid = VoxelGrid::new(GridDims::default());
    let before = grid.clone();

    assert!(!grid.set(-1, 0, 0, Some(Block::STONE)));
    assert!(!grid.set(0, 0, 10, Some(Block::STONE)));
    assert!(!grid.set_cell(IVec3::new(20, 5, 5), Some(Block::STONE)));

    assert_eq!(grid, before);
}

#[test]
fn test_grid_layout_is_layer_major() {
    let mut grid = VoxelGrid::new(GridDims::new(3, 4, 5));
    assert!(grid.set(2, 1, 3, Some(Block::STONE)));

    let index = (3 * 4 + 1) * 3 + 2;
    assert_eq!(grid.cells()[index], Some(Block::STONE));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_fill_layers_clamps_to_height() {
    let mut grid = VoxelGrid::new(GridDims::new(4, 4, 3));
    grid.fill_layers(1..99, Block::STONE);

    assert_eq!(grid.occupied_count(), 4 * 4 * 2);
    assert!(grid.is_free(IVec3::new(0, 0, 0)));
    assert!(grid.is_occupied(IVec3::new(3, 3, 2)));
}

#[test]
fn test_point_lookup_uses_containing_cell() {
    let mut grid = VoxelGrid::new(GridDims::default());
    grid.set(5, 5, 3, Some(Block::STONE));

    assert_eq!(cell_of(Vec3::new(5.9, 5.1, 3.99)), IVec3::new(5, 5, 3));
    assert_eq!(grid.block_at(Vec3::new(5.9, 5.1, 3.99)), Some(Block::STONE));
    assert_eq!(grid.block_at(Vec3::new(5.9, 5.1, 4.0)), None);
    assert_eq!(grid.block_at(Vec3::new(-3.0, 5.0, 3.0)), None);
}
