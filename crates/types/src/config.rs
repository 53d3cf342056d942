//! Runtime configuration with compile-time defaults.
//!
//! `Config::default()` mirrors the constants in the crate root.
//! `Config::from_env()` lets a few values be overridden without rebuilding:
//!
//! | Variable | Format | Effect |
//! |----------|--------|--------|
//! | `TUI_VOXEL_WORLD` | `XxYxZ` | World dimensions |
//! | `TUI_VOXEL_FRAME_MS` | integer | Frame interval |
//! | `TUI_VOXEL_BORDERS` | `0`/`false`/`off` | Disable edge lines |
//!
//! Unparseable values fall back to the defaults.

use std::f32::consts::PI;

use glam::Vec3;
use thiserror::Error;

use crate::{
    Block, GridDims, BORDER_THRESHOLD, EYE_HEIGHT, FRAME_MS, GROUND_LAYERS, MAX_WORLD_AXIS,
    MOVE_STEP, SPAWN_X, SPAWN_Y, TURN_STEP, VIEW_HEIGHT, VIEW_WIDTH,
};

/// Angular extent of the sampled view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    /// Vertical extent in radians
    pub vertical: f32,
    /// Horizontal extent in radians
    pub horizontal: f32,
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self {
            vertical: VIEW_HEIGHT,
            horizontal: VIEW_WIDTH,
        }
    }
}

/// Everything the core and engine need that is fixed for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub world: GridDims,
    pub eye_height: f32,
    pub fov: FieldOfView,
    pub move_step: f32,
    pub turn_step: f32,
    pub border_threshold: f32,
    /// Draw cell edges as grid lines
    pub borders: bool,
    pub ground_layers: u16,
    pub ground_block: Block,
    pub build_block: Block,
    pub frame_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: GridDims::default(),
            eye_height: EYE_HEIGHT,
            fov: FieldOfView::default(),
            move_step: MOVE_STEP,
            turn_step: TURN_STEP,
            border_threshold: BORDER_THRESHOLD,
            borders: true,
            ground_layers: GROUND_LAYERS,
            ground_block: Block::STONE,
            build_block: Block::STONE,
            frame_ms: FRAME_MS,
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("world dimensions {x}x{y}x{z} must be between 1 and {max} on every axis")]
    WorldSize { x: u16, y: u16, z: u16, max: u16 },
    #[error("eye height {0} must be positive and below the world height")]
    EyeHeight(f32),
    #[error("field of view {vertical}x{horizontal} must be within (0, pi) on both axes")]
    FieldOfView { vertical: f32, horizontal: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    Step { name: &'static str, value: f32 },
    #[error("border threshold {0} must be within [0, 0.5)")]
    BorderThreshold(f32),
    #[error("ground of {layers} layers does not fit a world {height} cells tall")]
    Ground { layers: u16, height: u16 },
    #[error("frame interval must be at least 1 ms")]
    FrameInterval,
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(world) = lookup("TUI_VOXEL_WORLD").and_then(|s| parse_dims(&s)) {
            config.world = world;
        }

        if let Some(ms) = lookup("TUI_VOXEL_FRAME_MS").and_then(|s| s.trim().parse().ok()) {
            config.frame_ms = ms;
        }

        if let Some(flag) = lookup("TUI_VOXEL_BORDERS") {
            let flag = flag.trim().to_lowercase();
            config.borders = !matches!(flag.as_str(), "0" | "false" | "off" | "no");
        }

        config
    }

    /// Check every invariant the core relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridDims { x, y, z } = self.world;
        let axis_ok = |v: u16| v >= 1 && v <= MAX_WORLD_AXIS;
        if !(axis_ok(x) && axis_ok(y) && axis_ok(z)) {
            return Err(ConfigError::WorldSize {
                x,
                y,
                z,
                max: MAX_WORLD_AXIS,
            });
        }

        if !(self.eye_height > 0.0 && self.eye_height < z as f32) {
            return Err(ConfigError::EyeHeight(self.eye_height));
        }

        let fov_ok = |a: f32| a > 0.0 && a < PI;
        if !(fov_ok(self.fov.vertical) && fov_ok(self.fov.horizontal)) {
            return Err(ConfigError::FieldOfView {
                vertical: self.fov.vertical,
                horizontal: self.fov.horizontal,
            });
        }

        for (name, value) in [("move step", self.move_step), ("turn step", self.turn_step)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Step { name, value });
            }
        }

        if !(self.border_threshold >= 0.0 && self.border_threshold < 0.5) {
            return Err(ConfigError::BorderThreshold(self.border_threshold));
        }

        if self.ground_layers > z {
            return Err(ConfigError::Ground {
                layers: self.ground_layers,
                height: z,
            });
        }

        if self.frame_ms == 0 {
            return Err(ConfigError::FrameInterval);
        }

        Ok(())
    }

    /// Eye position of a freshly spawned player, standing on the ground slab.
    ///
    /// Not clamped; the player controller clamps it into the world.
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::new(
            SPAWN_X,
            SPAWN_Y,
            self.ground_layers as f32 + self.eye_height,
        )
    }
}

/// Parse `XxYxZ` (also accepts `X,Y,Z`).
pub fn parse_dims(s: &str) -> Option<GridDims> {
    let mut parts = s
        .split(|c: char| c == 'x' || c == 'X' || c == ',')
        .map(|p| p.trim().parse::<u16>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(GridDims::new(x, y, z))
}
