//! TerminalSink: presents engine frames on the real terminal.

use anyhow::Result;
use crossterm::terminal;
use log::{debug, warn};

use crate::engine::{Frame, FrameSink};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::world_view::{Viewport, WorldView};

pub struct TerminalSink {
    renderer: TerminalRenderer,
    view: WorldView,
    fb: FrameBuffer,
    viewport: Viewport,
}

impl TerminalSink {
    pub fn new(view: WorldView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            viewport: current_viewport(),
        }
    }

    /// Take over the terminal.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.renderer.invalidate();
        Ok(())
    }

    /// Give the terminal back.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl FrameSink for TerminalSink {
    fn picture_size(&self) -> Option<(usize, usize)> {
        Some(WorldView::picture_size(current_viewport()))
    }

    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        let viewport = current_viewport();
        if viewport != self.viewport {
            debug!(
                "terminal resized to {}x{}",
                viewport.width, viewport.height
            );
            self.viewport = viewport;
            self.renderer.invalidate();
        }
        self.view.render_into(frame, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

fn current_viewport() -> Viewport {
    match terminal::size() {
        Ok((width, height)) => Viewport::new(width, height),
        Err(err) => {
            warn!("terminal size unavailable ({err}), using 120x41");
            Viewport::new(120, 41)
        }
    }
}
