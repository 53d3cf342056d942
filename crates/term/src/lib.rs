//! Terminal presentation for the voxel engine.
//!
//! Traced pictures are mapped into a styled framebuffer by [`WorldView`] and
//! flushed by [`TerminalRenderer`], which only rewrites changed cells after
//! the first frame. No widget toolkit is involved.

pub mod fb;
pub mod renderer;
pub mod sink;
pub mod world_view;

pub use tui_voxel_core as core;
pub use tui_voxel_engine as engine;
pub use tui_voxel_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
pub use world_view::{Palette, Viewport, WorldView};
