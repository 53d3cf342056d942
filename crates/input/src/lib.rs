//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s and collects them
//! into one [`crate::types::Intents`] snapshot per frame.

pub mod keyboard;
pub mod map;

pub use tui_voxel_engine as engine;
pub use tui_voxel_types as types;

pub use keyboard::KeyboardInput;
pub use map::{map_key, should_quit};
