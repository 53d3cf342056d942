//! WorldView: maps a traced frame into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::engine::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Pixel;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Styles for each kind of pixel plus the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: CellStyle,
    pub border: CellStyle,
    pub highlight: CellStyle,
    pub block: CellStyle,
    pub status: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: CellStyle::default(),
            border: CellStyle {
                dim: true,
                ..CellStyle::fg(Rgb::new(130, 130, 130))
            },
            highlight: CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(0, 205, 0))
            },
            block: CellStyle::fg(Rgb::new(200, 200, 200)),
            status: CellStyle {
                fg: Rgb::new(20, 20, 20),
                bg: Rgb::new(180, 180, 180),
                bold: false,
                dim: false,
            },
        }
    }
}

impl Palette {
    pub fn style_for(&self, pixel: Pixel) -> CellStyle {
        match pixel {
            Pixel::Empty => self.empty,
            Pixel::Border => self.border,
            Pixel::Highlight => self.highlight,
            Pixel::Block(_) => self.block,
        }
    }
}

const KEY_HELP: &str = "wasd look  ijkl move  x remove  space place  q quit";
const STATUS_CAPACITY: usize = 192;

/// Draws the traced picture with a one-line status bar below it.
#[derive(Debug)]
pub struct WorldView {
    palette: Palette,
    status: String,
}

impl Default for WorldView {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl WorldView {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            status: String::with_capacity(STATUS_CAPACITY),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Picture size `(rows, cols)` that fills the viewport above the status line.
    pub fn picture_size(viewport: Viewport) -> (usize, usize) {
        (
            viewport.height.saturating_sub(1) as usize,
            viewport.width as usize,
        )
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport. Pictures larger than the
    /// viewport are clipped, smaller ones leave the rest blank.
    pub fn render_into(&mut self, frame: &Frame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.palette.empty.into_cell(' '));
        if viewport.height == 0 {
            return;
        }

        let picture = frame.picture;
        let rows = picture.rows().min(viewport.height as usize - 1);
        for r in 0..rows {
            for (x, &pixel) in (0..viewport.width).zip(picture.row(r)) {
                fb.put_char(x, r as u16, pixel.as_char(), self.palette.style_for(pixel));
            }
        }

        let status_y = viewport.height - 1;
        for x in 0..viewport.width {
            fb.put_char(x, status_y, ' ', self.palette.status);
        }
        self.fill_status(frame);
        fb.put_str(0, status_y, &self.status, self.palette.status);
    }

    /// Allocate a framebuffer and render a frame into it.
    pub fn render(&mut self, frame: &Frame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn fill_status(&mut self, frame: &Frame<'_>) {
        let p = frame.player;
        self.status.clear();
        // Writing to a String cannot fail.
        let _ = write!(
            self.status,
            " pos {:.1} {:.1} {:.1}  pitch {:+.2} yaw {:+.2}  ",
            p.position.x, p.position.y, p.position.z, p.view.pitch, p.view.yaw
        );
        match frame.report.edit.target {
            Some(hit) => {
                let _ = write!(
                    self.status,
                    "target {} {} {}",
                    hit.cell.x, hit.cell.y, hit.cell.z
                );
            }
            None => self.status.push_str("target -"),
        }
        self.status.push_str("  | ");
        self.status.push_str(KEY_HELP);
    }
}
