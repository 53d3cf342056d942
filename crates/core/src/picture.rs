//! Picture composition - one traced [`Pixel`] per screen cell.
//!
//! [`FrameComposer`] owns the direction table and refills it every frame, then
//! traces every pixel from the player's eye. The targeted cell is drawn as
//! [`Pixel::Highlight`] through an overlay; the grid itself is never modified
//! for highlighting.

use glam::IVec3;

use crate::grid::VoxelGrid;
use crate::optics::DirectionTable;
use crate::trace::{cast, near_cell_edge};
use crate::types::{Config, Pixel, PlayerState};

/// Row-major grid of traced pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    rows: usize,
    cols: usize,
    pixels: Vec<Pixel>,
}

impl Picture {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![Pixel::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Resize the picture, keeping the allocation when possible.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.rows == rows && self.cols == cols {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.pixels.resize(rows * cols, Pixel::Empty);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.pixels[row * self.cols + col])
    }

    /// Overwrite one pixel; out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        if row < self.rows && col < self.cols {
            self.pixels[row * self.cols + col] = pixel;
        }
    }

    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.cols;
        &self.pixels[start..start + self.cols]
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Count pixels matching a predicate
    pub fn count(&self, f: impl Fn(Pixel) -> bool) -> usize {
        self.pixels.iter().filter(|p| f(**p)).count()
    }

    /// Render as plain text, one line per row
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|p| p.as_char()).collect())
            .collect()
    }
}

/// Fills pictures by tracing one ray per pixel.
#[derive(Debug, Clone)]
pub struct FrameComposer {
    directions: DirectionTable,
}

impl FrameComposer {
    pub fn new() -> Self {
        Self {
            directions: DirectionTable::new(0, 0),
        }
    }

    /// Trace a full frame into an existing picture.
    ///
    /// This is the allocation-free hot path once the picture size settles.
    pub fn compose_into(
        &mut self,
        player: &PlayerState,
        grid: &VoxelGrid,
        highlight: Option<IVec3>,
        config: &Config,
        picture: &mut Picture,
    ) {
        self.directions.resize(picture.rows(), picture.cols());
        self.directions.generate(player.view, config.fov);

        let border = config.borders.then_some(config.border_threshold);
        let origin = player.position;

        for (pixel, &dir) in picture.pixels.iter_mut().zip(self.directions.as_slice()) {
            *pixel = match cast(origin, dir, grid) {
                None => Pixel::Empty,
                Some(hit) if border.is_some_and(|t| near_cell_edge(hit.point, t)) => {
                    Pixel::Border
                }
                Some(hit) if Some(hit.cell) == highlight => Pixel::Highlight,
                Some(hit) => Pixel::Block(hit.block),
            };
        }
    }

    /// Convenience helper that allocates a new picture.
    pub fn compose(
        &mut self,
        player: &PlayerState,
        grid: &VoxelGrid,
        highlight: Option<IVec3>,
        config: &Config,
        rows: usize,
        cols: usize,
    ) -> Picture {
        let mut picture = Picture::new(rows, cols);
        self.compose_into(player, grid, highlight, config, &mut picture);
        picture
    }
}

impl Default for FrameComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one frame with a throwaway composer.
pub fn render_frame(
    player: &PlayerState,
    grid: &VoxelGrid,
    highlight: Option<IVec3>,
    config: &Config,
    rows: usize,
    cols: usize,
) -> Picture {
    FrameComposer::new().compose(player, grid, highlight, config, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Block, GridDims, ViewAngles};
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    fn looking_down_at_slab() -> (PlayerState, VoxelGrid) {
        let mut grid = VoxelGrid::new(GridDims::new(20, 20, 10));
        grid.fill_layers(0..4, Block::STONE);
        let player = PlayerState::new(Vec3::new(5.5, 5.5, 5.5), ViewAngles::new(-FRAC_PI_2, 0.0));
        (player, grid)
    }

    #[test]
    fn picture_lines_match_pixels() {
        let mut picture = Picture::new(2, 3);
        picture.pixels[4] = Pixel::Block(Block::STONE);
        picture.pixels[0] = Pixel::Border;
        assert_eq!(picture.to_lines(), vec!["-  ".to_string(), " @ ".to_string()]);
        assert_eq!(picture.get(1, 1), Some(Pixel::Block(Block::STONE)));
        assert_eq!(picture.get(2, 0), None);
    }

    #[test]
    fn composer_fills_every_pixel_when_facing_ground() {
        let (player, grid) = looking_down_at_slab();
        let picture = render_frame(&player, &grid, None, &Config::default(), 9, 15);
        assert_eq!(picture.count(|p| p == Pixel::Empty), 0);
        assert!(picture.count(|p| p == Pixel::Block(Block::STONE)) > 0);
    }

    #[test]
    fn highlight_is_an_overlay() {
        let (player, grid) = looking_down_at_slab();
        let before = grid.clone();
        let picture = render_frame(
            &player,
            &grid,
            Some(IVec3::new(5, 5, 3)),
            &Config::default(),
            9,
            9,
        );
        assert_eq!(picture.get(4, 4), Some(Pixel::Highlight));
        assert_eq!(grid, before);
    }

    #[test]
    fn borders_can_be_disabled() {
        let (player, grid) = looking_down_at_slab();
        let config = Config {
            borders: false,
            ..Config::default()
        };
        let picture = render_frame(&player, &grid, None, &config, 21, 41);
        assert_eq!(picture.count(|p| p == Pixel::Border), 0);
    }

    #[test]
    fn resize_reuses_composer() {
        let (player, grid) = looking_down_at_slab();
        let config = Config::default();
        let mut composer = FrameComposer::new();
        let mut picture = Picture::new(3, 3);
        composer.compose_into(&player, &grid, None, &config, &mut picture);
        picture.resize(5, 7);
        composer.compose_into(&player, &grid, None, &config, &mut picture);
        assert_eq!(picture, render_frame(&player, &grid, None, &config, 5, 7));
    }
}
