//! Core voxel logic - pure, deterministic, and testable
//!
//! This crate contains the raycasting renderer and the world-interaction rules.
//! It has **no dependencies** on terminals, input devices, or clocks, so every
//! frame can be reproduced from a grid, a player state and an intent snapshot.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size 3D occupancy store with bounds-checked access
//! - [`optics`]: per-pixel view-ray generation from view angles
//! - [`trace`]: DDA grid traversal and edge (border) detection
//! - [`player`]: turning, walking, ground collision and world clamps
//! - [`edit`]: target raycast, block placement and removal
//! - [`picture`]: frame composition into a grid of [`types::Pixel`]s
//!
//! # Frame Order
//!
//! 1. [`update_player`] with the frame's intents (reads only real world state)
//! 2. [`edit_world`] for removal/placement and the highlight cell
//! 3. [`FrameComposer::compose_into`] with that highlight as an overlay
//!
//! # Example
//!
//! ```
//! use tui_voxel_core::{edit_world, render_frame, spawn_player, update_player, VoxelGrid};
//! use tui_voxel_core::types::{Config, Intents, Pixel};
//!
//! let config = Config::default();
//! let mut grid = VoxelGrid::new(config.world);
//! grid.fill_layers(0..config.ground_layers, config.ground_block);
//!
//! let mut player = spawn_player(&config);
//! let intents = Intents { look_down: true, ..Intents::default() };
//! for _ in 0..10 {
//!     player = update_player(player, &intents, &grid, &config);
//! }
//!
//! let edit = edit_world(&player, &mut grid, &Intents::default(), config.build_block);
//! assert!(edit.highlight.is_some());
//!
//! let picture = render_frame(&player, &grid, edit.highlight, &config, 11, 31);
//! assert!(picture.count(|p| p == Pixel::Highlight) > 0);
//! ```

pub mod edit;
pub mod grid;
pub mod optics;
pub mod picture;
pub mod player;
pub mod trace;

pub use tui_voxel_types as types;

// Re-export commonly used items for convenience
pub use edit::{edit_world, find_target, nearest_face, place_block, remove_block, EditOutcome, Face};
pub use grid::{cell_of, VoxelGrid};
pub use optics::{angles_to_vect, DirectionTable};
pub use picture::{render_frame, FrameComposer, Picture};
pub use player::{spawn_player, update_player};
pub use trace::{cast, on_block_border, ray_outside, raytrace, Hit, RayWalk};
