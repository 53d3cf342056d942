//! Player controller - movement, turning and ground collision.
//!
//! Each frame the player is settled onto the ground, turned, walked in the
//! horizontal plane, then clamped back into the world. Vertical motion only
//! ever comes from the ground step; input cannot fly.

use std::f32::consts::FRAC_PI_2;

use glam::{IVec3, Vec3};

use crate::grid::VoxelGrid;
use crate::optics::angles_to_vect;
use crate::types::{Config, GridDims, Intents, PlayerState, ViewAngles, RAY_EPSILON};

/// Spawn a player at the configured position, looking level along +x.
pub fn spawn_player(config: &Config) -> PlayerState {
    let mut player = PlayerState::new(config.spawn_position(), ViewAngles::default());
    player.position = clamp_to_world(player.position, config.world, config.eye_height);
    player
}

/// Advance the player by one frame of intents.
pub fn update_player(
    state: PlayerState,
    intents: &Intents,
    grid: &VoxelGrid,
    config: &Config,
) -> PlayerState {
    let mut next = state;
    next.position = settle_on_ground(next.position, grid, config.eye_height);
    next.view = turn(next.view, intents, config.turn_step);

    let dir = angles_to_vect(next.view);
    next.position += walk_offset(dir, intents, config.move_step);
    next.position = clamp_to_world(next.position, grid.dims(), config.eye_height);
    next
}

/// Step up when the feet are inside a block, fall when there is a gap below.
///
/// Moves at most one cell per call.
pub fn settle_on_ground(position: Vec3, grid: &VoxelGrid, eye_height: f32) -> Vec3 {
    let feet = position.z - eye_height;
    let column = |z: f32| IVec3::new(position.x as i32, position.y as i32, z as i32);

    let mut settled = position;
    if grid.is_occupied(column(feet + RAY_EPSILON)) {
        settled.z += 1.0;
    } else if grid.is_free(column(feet - RAY_EPSILON)) {
        settled.z -= 1.0;
    }
    settled
}

/// Apply turn intents and clamp pitch to straight up/down.
pub fn turn(view: ViewAngles, intents: &Intents, step: f32) -> ViewAngles {
    let mut view = view;
    if intents.look_up {
        view.pitch += step;
    }
    if intents.look_down {
        view.pitch -= step;
    }
    if intents.look_right {
        view.yaw += step;
    }
    if intents.look_left {
        view.yaw -= step;
    }
    view.pitch = view.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    view
}

/// Horizontal displacement for the walk intents along view direction `dir`.
pub fn walk_offset(dir: Vec3, intents: &Intents, step: f32) -> Vec3 {
    let forward = Vec3::new(dir.x, dir.y, 0.0);
    let left = Vec3::new(dir.y, -dir.x, 0.0);

    let mut offset = Vec3::ZERO;
    if intents.move_forward {
        offset += forward;
    }
    if intents.move_backward {
        offset -= forward;
    }
    if intents.strafe_left {
        offset += left;
    }
    if intents.strafe_right {
        offset -= left;
    }
    offset * step
}

/// Clamp an eye position into `[0, dim - eps]` horizontally and
/// `[eye_height, Z - eps]` vertically.
pub fn clamp_to_world(position: Vec3, dims: GridDims, eye_height: f32) -> Vec3 {
    let max = dims.extent() - Vec3::splat(RAY_EPSILON);
    // max() before min() so NaN collapses to the lower bound
    Vec3::new(
        position.x.max(0.0).min(max.x),
        position.y.max(0.0).min(max.y),
        position.z.max(eye_height).min(max.z),
    )
}
