//! Frame loop and the capabilities it drives.
//!
//! The loop is: sample intents, stop on quit, step the session, present the
//! picture, sleep out the rest of the frame interval. Platform code plugs in
//! through [`InputSource`] and [`FrameSink`].

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use crate::session::{FrameReport, Session};
use crate::types::{Intents, PlayerState};
use crate::core::Picture;

/// Yields one intent snapshot per frame.
pub trait InputSource {
    /// Collect everything pressed since the previous call without blocking.
    fn poll(&mut self) -> Result<Intents>;
}

/// Everything a sink needs to show one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub picture: &'a Picture,
    pub player: &'a PlayerState,
    pub report: &'a FrameReport,
}

/// Accepts finished frames.
pub trait FrameSink {
    /// Picture size the sink wants as `(rows, cols)`, if it has a preference.
    ///
    /// Checked before every frame so sinks can follow terminal resizes.
    fn picture_size(&self) -> Option<(usize, usize)> {
        None
    }

    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// A quit intent was sampled
    Quit,
    /// The frame limit was reached
    FrameLimit,
}

/// Loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub frame_interval: Duration,
    /// Stop after this many frames (None runs until quit)
    pub max_frames: Option<u64>,
}

impl RunOptions {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            max_frames: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }
}

/// Drive a session until quit (or the frame limit).
pub fn run(
    session: &mut Session,
    input: &mut dyn InputSource,
    sink: &mut dyn FrameSink,
    options: RunOptions,
) -> Result<Exit> {
    let mut frames = 0u64;
    loop {
        if options.max_frames.is_some_and(|max| frames >= max) {
            debug!("frame limit {frames} reached");
            return Ok(Exit::FrameLimit);
        }

        let started = Instant::now();

        let intents = input.poll()?;
        if intents.quit {
            info!("quit after {} frames", session.frames());
            return Ok(Exit::Quit);
        }

        if let Some((rows, cols)) = sink.picture_size() {
            session.resize(rows, cols);
        }

        let report = session.step(&intents);
        sink.present(&Frame {
            picture: session.picture(),
            player: session.player(),
            report: &report,
        })?;
        frames += 1;

        if let Some(rest) = options.frame_interval.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}
