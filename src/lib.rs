//! TUI Voxel (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_voxel::{core,engine,input,term,types}`
//! so binaries, integration tests and benches depend on one package.

pub mod logging;

pub use tui_voxel_core as core;
pub use tui_voxel_engine as engine;
pub use tui_voxel_input as input;
pub use tui_voxel_term as term;
pub use tui_voxel_types as types;
