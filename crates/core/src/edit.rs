//! Block editing - target selection, placement and removal.
//!
//! The target is the first occupied cell along the player's view ray. New
//! blocks go into the neighbour across the face of the target cell nearest to
//! the hit point.

use glam::{IVec3, Vec3};

use crate::grid::{cell_of, VoxelGrid};
use crate::optics::angles_to_vect;
use crate::trace::{cast, Hit};
use crate::types::{Block, Intents, PlayerState};

/// A face of a cell, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Offset from a cell to its neighbour across this face
    pub fn offset(self) -> IVec3 {
        match self {
            Face::PosX => IVec3::X,
            Face::NegX => IVec3::NEG_X,
            Face::PosY => IVec3::Y,
            Face::NegY => IVec3::NEG_Y,
            Face::PosZ => IVec3::Z,
            Face::NegZ => IVec3::NEG_Z,
        }
    }
}

/// Distances from `point` to the six faces of its cell, in [`Face::ALL`] order.
pub fn face_distances(point: Vec3) -> [f32; 6] {
    let cell = cell_of(point).as_vec3();
    [
        (cell.x + 1.0 - point.x).abs(),
        (point.x - cell.x).abs(),
        (cell.y + 1.0 - point.y).abs(),
        (point.y - cell.y).abs(),
        (cell.z + 1.0 - point.z).abs(),
        (point.z - cell.z).abs(),
    ]
}

/// Face closest to `point`. Ties go to the earlier face in [`Face::ALL`].
pub fn nearest_face(point: Vec3) -> Face {
    let distances = face_distances(point);
    let mut best = 0;
    for i in 1..distances.len() {
        if distances[i] < distances[best] {
            best = i;
        }
    }
    Face::ALL[best]
}

/// First occupied cell in the player's view direction.
pub fn find_target(player: &PlayerState, grid: &VoxelGrid) -> Option<Hit> {
    cast(player.position, angles_to_vect(player.view), grid)
}

/// Place `block` next to the cell containing `point`, across its nearest face.
///
/// Returns the written cell, or `None` when the hit cell or its neighbour lies
/// outside the grid (nothing is written then).
pub fn place_block(point: Vec3, grid: &mut VoxelGrid, block: Block) -> Option<IVec3> {
    let cell = cell_of(point);
    if !grid.contains(cell) {
        return None;
    }
    let target = cell + nearest_face(point).offset();
    grid.set_cell(target, Some(block)).then_some(target)
}

/// Clear the cell containing `point`, returning what was there.
pub fn remove_block(point: Vec3, grid: &mut VoxelGrid) -> Option<Block> {
    let cell = cell_of(point);
    let previous = grid.get_cell(cell).flatten();
    grid.set_cell(cell, None);
    previous
}

/// Result of one frame of editing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EditOutcome {
    /// What the player was looking at before any edit
    pub target: Option<Hit>,
    /// Cell cleared this frame
    pub removed: Option<IVec3>,
    /// Cell filled this frame
    pub placed: Option<IVec3>,
    /// Cell to draw highlighted (the target, unless it was removed)
    pub highlight: Option<IVec3>,
}

/// Apply this frame's edit intents.
///
/// Removal runs before placement; both use the same hit point, so holding
/// both keys swaps the target for a block on its nearest face.
pub fn edit_world(
    player: &PlayerState,
    grid: &mut VoxelGrid,
    intents: &Intents,
    block: Block,
) -> EditOutcome {
    let Some(hit) = find_target(player, grid) else {
        return EditOutcome::default();
    };

    let mut outcome = EditOutcome {
        target: Some(hit),
        ..EditOutcome::default()
    };

    if intents.remove_block {
        remove_block(hit.point, grid);
        outcome.removed = Some(hit.cell);
    }
    if intents.place_block {
        outcome.placed = place_block(hit.point, grid, block);
    }
    if !intents.remove_block {
        outcome.highlight = Some(hit.cell);
    }
    outcome
}
