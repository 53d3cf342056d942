//! Session: the world, the player and the per-frame state machine.
//!
//! One call to [`Session::step`] runs
//! `UpdatePlayer -> Raycast -> (Edit | Highlight) -> Compose` on an intent
//! snapshot. Quit handling lives in the loop driving the session.

use glam::IVec3;
use log::{debug, info, trace};

use crate::core::{
    edit_world, spawn_player, update_player, EditOutcome, FrameComposer, Picture, VoxelGrid,
};
use crate::types::{Config, ConfigError, Intents, PlayerState};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// Zero-based index of the frame
    pub frame: u64,
    pub edit: EditOutcome,
}

impl FrameReport {
    pub fn highlight(&self) -> Option<IVec3> {
        self.edit.highlight
    }
}

/// A running world.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    grid: VoxelGrid,
    player: PlayerState,
    composer: FrameComposer,
    picture: Picture,
    frames: u64,
}

impl Session {
    /// Create a session with a seeded ground slab and a spawned player.
    pub fn new(config: Config, rows: usize, cols: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = VoxelGrid::new(config.world);
        grid.fill_layers(0..config.ground_layers, config.ground_block);
        let player = spawn_player(&config);
        info!(
            "session started: world {}x{}x{}, {} ground layers, picture {}x{}",
            config.world.x, config.world.y, config.world.z, config.ground_layers, cols, rows
        );
        Ok(Self::with_world(config, grid, player, rows, cols))
    }

    /// Create a session around an existing grid and player.
    ///
    /// The config is trusted as-is; world dimensions come from the grid.
    pub fn with_world(
        config: Config,
        grid: VoxelGrid,
        player: PlayerState,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            config,
            grid,
            player,
            composer: FrameComposer::new(),
            picture: Picture::new(rows, cols),
            frames: 0,
        }
    }

    /// Run one frame on an intent snapshot.
    pub fn step(&mut self, intents: &Intents) -> FrameReport {
        self.player = update_player(self.player, intents, &self.grid, &self.config);

        let edit = edit_world(&self.player, &mut self.grid, intents, self.config.build_block);
        if let Some(cell) = edit.removed {
            debug!("removed block at {cell}");
        }
        if let Some(cell) = edit.placed {
            debug!("placed block at {cell}");
        }

        self.composer.compose_into(
            &self.player,
            &self.grid,
            edit.highlight,
            &self.config,
            &mut self.picture,
        );

        let report = FrameReport {
            frame: self.frames,
            edit,
        };
        trace!(
            "frame {}: eye {} pitch {:.2} yaw {:.2} target {:?}",
            report.frame,
            self.player.position,
            self.player.view.pitch,
            self.player.view.yaw,
            edit.target.map(|h| h.cell)
        );
        self.frames += 1;
        report
    }

    /// Change the picture size for following frames.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.picture.rows() != rows || self.picture.cols() != cols {
            debug!("picture resized to {cols}x{rows}");
            self.picture.resize(rows, cols);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Mutable grid access for seeding terrain between frames
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Number of frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Block, GridDims, Pixel, ViewAngles};
    use glam::Vec3;

    #[test]
    fn new_rejects_invalid_config() {
        let config = Config {
            world: GridDims::new(0, 1, 1),
            ..Config::default()
        };
        assert!(Session::new(config, 4, 4).is_err());
    }

    #[test]
    fn new_seeds_ground_and_spawns_on_it() {
        let session = Session::new(Config::default(), 4, 4).unwrap();
        assert_eq!(session.grid().occupied_count(), 20 * 20 * 4);
        assert_eq!(session.player().position.z, 5.5);
    }

    #[test]
    fn remove_then_place_in_one_session() {
        let config = Config::default();
        let mut grid = VoxelGrid::new(config.world);
        grid.fill_layers(0..4, Block::STONE);
        let player = PlayerState::new(
            Vec3::new(5.5, 5.5, 5.5),
            ViewAngles::new(-std::f32::consts::FRAC_PI_2, 0.0),
        );
        let mut session = Session::with_world(config, grid, player, 9, 9);
        let before = session.grid().occupied_count();

        let remove = Intents {
            remove_block: true,
            ..Intents::default()
        };
        let report = session.step(&remove);
        assert_eq!(report.edit.removed, Some(IVec3::new(5, 5, 3)));
        assert_eq!(report.highlight(), None);
        assert_eq!(session.grid().occupied_count(), before - 1);

        // The player drops into the hole, then fills it back from below.
        let place = Intents {
            place_block: true,
            ..Intents::default()
        };
        let report = session.step(&place);
        assert_eq!(session.player().position.z, 4.5);
        assert_eq!(report.edit.target.map(|h| h.cell), Some(IVec3::new(5, 5, 2)));
        assert_eq!(report.edit.placed, Some(IVec3::new(5, 5, 3)));
        assert_eq!(report.highlight(), Some(IVec3::new(5, 5, 2)));
        assert_eq!(session.grid().occupied_count(), before);
        assert_eq!(session.frames(), 2);
    }

    #[test]
    fn picture_follows_resize() {
        let mut session = Session::new(Config::default(), 3, 3).unwrap();
        session.resize(5, 8);
        session.step(&Intents::default());
        assert_eq!(session.picture().rows(), 5);
        assert_eq!(session.picture().cols(), 8);
        assert!(session.picture().count(|p| p == Pixel::Block(Block::STONE)) > 0);
    }
}
