//! Terminal voxel explorer (default binary).
//!
//! Raw-mode keyboard input, a traced picture sized to the terminal and a
//! status line. Quit with `q` or Ctrl-C.

use std::time::Duration;

use anyhow::Result;
use log::info;

use tui_voxel::engine::{run, Exit, RunOptions, Session};
use tui_voxel::input::KeyboardInput;
use tui_voxel::term::{TerminalSink, WorldView};
use tui_voxel::types::Config;

fn main() -> Result<()> {
    tui_voxel::logging::init()?;

    let config = Config::from_env();
    let mut sink = TerminalSink::new(WorldView::default());
    let (rows, cols) = WorldView::picture_size(sink.viewport());
    let mut session = Session::new(config, rows, cols)?;

    sink.enter()?;
    let result = play(&mut session, &mut sink);

    // Always try to restore terminal state.
    let _ = sink.exit();

    let exit = result?;
    info!("exit {:?} after {} frames", exit, session.frames());
    Ok(())
}

fn play(session: &mut Session, sink: &mut TerminalSink) -> Result<Exit> {
    let mut input = KeyboardInput::new();
    let options = RunOptions::new(Duration::from_millis(u64::from(session.config().frame_ms)));
    run(session, &mut input, sink, options)
}
