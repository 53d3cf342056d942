//! Frame engine: owns the world and drives the per-frame state machine.
//!
//! ```text
//! Idle -> ReadIntents -> (quit?) -> UpdatePlayer -> Raycast
//!      -> (Edit | Highlight) -> Compose -> Present -> Idle
//! ```
//!
//! The engine is platform-agnostic. Terminals, keyboards or test scripts plug
//! in through [`InputSource`] and [`FrameSink`].

pub mod runner;
pub mod session;

pub use tui_voxel_core as core;
pub use tui_voxel_types as types;

pub use runner::{run, Exit, Frame, FrameSink, InputSource, RunOptions};
pub use session::{FrameReport, Session};
