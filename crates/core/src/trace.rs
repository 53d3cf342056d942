//! Voxel ray traversal (DDA).
//!
//! A ray is advanced from boundary to boundary: each step moves to the nearest
//! axis-aligned cell boundary ahead of it (capped at [`MAX_RAY_STEP`]) plus a
//! small overshoot so the new sample lies strictly inside the next cell.
//! Sampling stops at the first occupied cell or when the ray leaves the grid.
//!
//! [`RayWalk`] yields the sample points and is shared by rendering
//! ([`raytrace`]) and editing ([`cast`]).

use glam::{IVec3, Vec3};

use crate::grid::{cell_of, VoxelGrid};
use crate::types::{Block, GridDims, Pixel, BORDER_THRESHOLD, MAX_RAY_STEP, RAY_EPSILON};

/// True when any coordinate is below 0 or at/above its axis dimension.
///
/// NaN coordinates count as outside.
#[inline(always)]
pub fn ray_outside(p: Vec3, dims: GridDims) -> bool {
    let extent = dims.extent();
    !(p.x >= 0.0
        && p.y >= 0.0
        && p.z >= 0.0
        && p.x < extent.x
        && p.y < extent.y
        && p.z < extent.z)
}

/// True when at least two coordinates lie within `threshold` of an integer,
/// i.e. the point is near a cell edge or corner rather than inside a face.
#[inline(always)]
pub fn near_cell_edge(p: Vec3, threshold: f32) -> bool {
    let close = |v: f32| (v - v.round()).abs() < threshold;
    let count = close(p.x) as u8 + close(p.y) as u8 + close(p.z) as u8;
    count >= 2
}

/// [`near_cell_edge`] with the default [`BORDER_THRESHOLD`].
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use tui_voxel_core::trace::on_block_border;
///
/// assert!(on_block_border(Vec3::new(5.0, 5.02, 3.5)));
/// assert!(!on_block_border(Vec3::new(5.0, 5.5, 3.5)));
/// ```
pub fn on_block_border(p: Vec3) -> bool {
    near_cell_edge(p, BORDER_THRESHOLD)
}

/// Distance along `dir` to the nearest cell boundary ahead of `pos`.
///
/// Axes whose direction component is within [`RAY_EPSILON`] of zero are
/// skipped. The result is capped at [`MAX_RAY_STEP`].
#[inline(always)]
pub fn next_boundary_distance(pos: Vec3, dir: Vec3) -> f32 {
    let mut dist = MAX_RAY_STEP;
    for axis in 0..3 {
        let (p, d) = (pos[axis], dir[axis]);
        if d > RAY_EPSILON {
            dist = dist.min(((p + 1.0).trunc() - p) / d);
        } else if d < -RAY_EPSILON {
            dist = dist.min((p.trunc() - p) / d);
        }
    }
    dist
}

/// Iterator over the sample points of a ray inside the grid.
///
/// The first item is the origin itself (if inside). A zero or non-finite
/// direction produces at most that single sample.
#[derive(Debug, Clone)]
pub struct RayWalk {
    pos: Vec3,
    dir: Vec3,
    dims: GridDims,
    stalled: bool,
    done: bool,
}

impl RayWalk {
    pub fn new(origin: Vec3, dir: Vec3, dims: GridDims) -> Self {
        let stalled = !dir.is_finite() || dir.length_squared() <= f32::EPSILON;
        Self {
            pos: origin,
            dir,
            dims,
            stalled,
            done: false,
        }
    }
}

impl Iterator for RayWalk {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.done || ray_outside(self.pos, self.dims) {
            self.done = true;
            return None;
        }
        let current = self.pos;
        if self.stalled {
            self.done = true;
        } else {
            let step = next_boundary_distance(current, self.dir) + RAY_EPSILON;
            self.pos = current + self.dir * step;
        }
        Some(current)
    }
}

/// First occupied cell along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Sample point inside the hit cell
    pub point: Vec3,
    pub cell: IVec3,
    pub block: Block,
}

/// Walk a ray until it enters an occupied cell.
///
/// Returns `None` when the ray leaves the grid first.
pub fn cast(origin: Vec3, dir: Vec3, grid: &VoxelGrid) -> Option<Hit> {
    RayWalk::new(origin, dir, grid.dims()).find_map(|point| {
        grid.block_at(point).map(|block| Hit {
            point,
            cell: cell_of(point),
            block,
        })
    })
}

/// Trace one pixel: the hit block, a border marker, or empty.
///
/// `border_threshold` of `None` disables edge detection.
pub fn raytrace(origin: Vec3, dir: Vec3, grid: &VoxelGrid, border_threshold: Option<f32>) -> Pixel {
    match cast(origin, dir, grid) {
        None => Pixel::Empty,
        Some(hit) => match border_threshold {
            Some(t) if near_cell_edge(hit.point, t) => Pixel::Border,
            _ => Pixel::Block(hit.block),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dims() -> GridDims {
        GridDims::new(20, 20, 10)
    }

    #[test]
    fn boundary_distance_positive_and_negative() {
        let pos = Vec3::new(2.25, 3.5, 1.0);
        assert_relative_eq!(next_boundary_distance(pos, Vec3::X), 0.75);
        assert_relative_eq!(next_boundary_distance(pos, Vec3::NEG_X), 0.25);
        // Exactly on a boundary moving down: zero, the overshoot does the crossing.
        assert_eq!(next_boundary_distance(pos, Vec3::NEG_Z), 0.0);
    }

    #[test]
    fn boundary_distance_skips_tiny_components() {
        let pos = Vec3::new(2.5, 2.5, 2.5);
        let dir = Vec3::new(0.005, -0.005, 0.0);
        assert_eq!(next_boundary_distance(pos, dir), MAX_RAY_STEP);
    }

    #[test]
    fn walk_stops_on_zero_direction() {
        let samples: Vec<_> = RayWalk::new(Vec3::splat(1.5), Vec3::ZERO, dims()).collect();
        assert_eq!(samples, vec![Vec3::splat(1.5)]);

        let nan = RayWalk::new(Vec3::splat(1.5), Vec3::new(f32::NAN, 0.0, 0.0), dims());
        assert_eq!(nan.count(), 1);
    }

    #[test]
    fn walk_from_outside_is_empty() {
        assert_eq!(RayWalk::new(Vec3::new(-1.0, 1.0, 1.0), Vec3::X, dims()).count(), 0);
    }

    #[test]
    fn walk_visits_each_cell_once_along_axis() {
        let cells: Vec<_> = RayWalk::new(Vec3::new(0.5, 0.5, 0.5), Vec3::X, dims())
            .map(cell_of)
            .collect();
        let xs: Vec<_> = cells.iter().map(|c| c.x).collect();
        assert_eq!(xs, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn raytrace_reports_block_or_border() {
        let mut grid = VoxelGrid::new(dims());
        grid.set(5, 5, 2, Some(Block::STONE));

        let centre = raytrace(Vec3::new(5.5, 5.5, 6.0), Vec3::NEG_Z, &grid, Some(BORDER_THRESHOLD));
        assert_eq!(centre, Pixel::Block(Block::STONE));

        let edge = raytrace(Vec3::new(5.01, 5.5, 6.0), Vec3::NEG_Z, &grid, Some(BORDER_THRESHOLD));
        assert_eq!(edge, Pixel::Border);

        let no_borders = raytrace(Vec3::new(5.01, 5.5, 6.0), Vec3::NEG_Z, &grid, None);
        assert_eq!(no_borders, Pixel::Block(Block::STONE));

        let miss = raytrace(Vec3::new(5.5, 5.5, 6.0), Vec3::Z, &grid, Some(BORDER_THRESHOLD));
        assert_eq!(miss, Pixel::Empty);
    }
}
