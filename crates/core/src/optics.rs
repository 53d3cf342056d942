//! View-ray generation.
//!
//! Builds one normalized ray per picture pixel from the player's view angles.
//! The rays form a linear sampling grid spanned by two basis vectors (not a
//! perspective-correct lens): pixel (0, 0) is the top-left extreme ray and
//! pixel (rows-1, cols-1) the bottom-right one.

use glam::Vec3;

use crate::types::{FieldOfView, ViewAngles};

/// Convert view angles to a unit direction.
///
/// `(cos pitch * cos yaw, cos pitch * sin yaw, sin pitch)`
///
/// # Examples
///
/// ```
/// use tui_voxel_core::optics::angles_to_vect;
/// use tui_voxel_core::types::ViewAngles;
///
/// let ahead = angles_to_vect(ViewAngles::new(0.0, 0.0));
/// assert!((ahead.x - 1.0).abs() < 1e-6);
///
/// let down = angles_to_vect(ViewAngles::new(-std::f32::consts::FRAC_PI_2, 0.0));
/// assert!((down.z + 1.0).abs() < 1e-6);
/// ```
pub fn angles_to_vect(view: ViewAngles) -> Vec3 {
    let (sp, cp) = view.pitch.sin_cos();
    let (sy, cy) = view.yaw.sin_cos();
    Vec3::new(cp * cy, cp * sy, sp)
}

/// Basis of the screen plane for one view orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBasis {
    /// Average of the left and right boundary rays
    pub mid_horizontal: Vec3,
    /// Left boundary ray minus `mid_horizontal`
    pub to_left: Vec3,
    /// Upper boundary ray minus the vertical midpoint
    pub to_up: Vec3,
}

impl ScreenBasis {
    pub fn new(view: ViewAngles, fov: FieldOfView) -> Self {
        let half_v = fov.vertical / 2.0;
        let half_h = fov.horizontal / 2.0;

        let down = angles_to_vect(ViewAngles::new(view.pitch - half_v, view.yaw));
        let up = angles_to_vect(ViewAngles::new(view.pitch + half_v, view.yaw));
        let left = angles_to_vect(ViewAngles::new(view.pitch, view.yaw - half_h));
        let right = angles_to_vect(ViewAngles::new(view.pitch, view.yaw + half_h));

        let mid_vertical = (up + down) * 0.5;
        let mid_horizontal = (left + right) * 0.5;

        Self {
            mid_horizontal,
            to_left: left - mid_horizontal,
            to_up: up - mid_vertical,
        }
    }

    /// Unnormalized ray for fractional screen coordinates in [0, 1].
    #[inline(always)]
    pub fn ray(&self, row_frac: f32, col_frac: f32) -> Vec3 {
        self.mid_horizontal + self.to_left + self.to_up
            - self.to_left * (2.0 * col_frac)
            - self.to_up * (2.0 * row_frac)
    }
}

/// Position of index `i` along an axis of `n` samples, in [0, 1].
///
/// A single sample sits in the centre.
#[inline(always)]
pub fn axis_fraction(i: usize, n: usize) -> f32 {
    if n <= 1 {
        0.5
    } else {
        i as f32 / (n - 1) as f32
    }
}

/// One ray direction per output pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionTable {
    rows: usize,
    cols: usize,
    dirs: Vec<Vec3>,
}

impl DirectionTable {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            dirs: vec![Vec3::ZERO; rows * cols],
        }
    }

    /// Build a table for the given view in one go.
    pub fn for_view(rows: usize, cols: usize, view: ViewAngles, fov: FieldOfView) -> Self {
        let mut table = Self::new(rows, cols);
        table.generate(view, fov);
        table
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Resize the table, keeping the allocation when possible.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.rows == rows && self.cols == cols {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.dirs.resize(rows * cols, Vec3::ZERO);
    }

    /// Recompute every direction for the current view.
    ///
    /// Must run every frame; the table only reflects the angles it was last
    /// generated with.
    pub fn generate(&mut self, view: ViewAngles, fov: FieldOfView) {
        let basis = ScreenBasis::new(view, fov);
        let cols = self.cols;
        if cols == 0 {
            return;
        }
        for (r, row) in self.dirs.chunks_exact_mut(cols).enumerate() {
            let row_frac = axis_fraction(r, self.rows);
            for (c, dir) in row.iter_mut().enumerate() {
                *dir = basis.ray(row_frac, axis_fraction(c, cols)).normalize_or_zero();
            }
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Vec3> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.dirs[row * self.cols + col])
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn angles_to_vect_is_unit() {
        for &(pitch, yaw) in &[(0.0, 0.0), (0.3, 1.2), (-1.1, -4.0), (FRAC_PI_2, 2.0)] {
            let v = angles_to_vect(ViewAngles::new(pitch, yaw));
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn axis_fraction_spans_unit_interval() {
        assert_eq!(axis_fraction(0, 5), 0.0);
        assert_eq!(axis_fraction(2, 5), 0.5);
        assert_eq!(axis_fraction(4, 5), 1.0);
        assert_eq!(axis_fraction(0, 1), 0.5);
    }

    #[test]
    fn table_rays_are_normalized() {
        let table = DirectionTable::for_view(7, 11, ViewAngles::new(0.4, 2.5), FieldOfView::default());
        assert_eq!(table.as_slice().len(), 77);
        for dir in table.as_slice() {
            assert_relative_eq!(dir.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn corners_match_boundary_extremes() {
        let fov = FieldOfView::default();
        let view = ViewAngles::new(0.0, 0.0);
        let table = DirectionTable::for_view(5, 9, view, fov);
        let top_left = table.get(0, 0).unwrap();
        let bottom_right = table.get(4, 8).unwrap();

        // Top row looks up, bottom row looks down.
        assert!(top_left.z > 0.0);
        assert!(bottom_right.z < 0.0);
        // First column sits on the negative-yaw side.
        assert!(top_left.y < 0.0);
        assert!(bottom_right.y > 0.0);
        assert_relative_eq!(top_left.z, -bottom_right.z, epsilon = 1e-5);
        assert_relative_eq!(top_left.y, -bottom_right.y, epsilon = 1e-5);
    }

    #[test]
    fn resize_keeps_generation_consistent() {
        let fov = FieldOfView::default();
        let view = ViewAngles::new(-0.2, 0.7);
        let mut table = DirectionTable::new(3, 3);
        table.resize(6, 10);
        table.generate(view, fov);
        assert_eq!(table, DirectionTable::for_view(6, 10, view, fov));
        assert_eq!(table.get(6, 0), None);
    }
}
