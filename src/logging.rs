//! Logger setup for the binaries.
//!
//! Stdout is the game screen, so logs go to the file named by
//! `TUI_VOXEL_LOG_PATH` when it is set. Otherwise they go to stderr and stay
//! off unless `RUST_LOG` asks for them.

use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const LOG_PATH_VAR: &str = "TUI_VOXEL_LOG_PATH";

/// Log file path from the environment, ignoring blank values.
pub fn log_path() -> Option<String> {
    env::var(LOG_PATH_VAR)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Install the global logger.
pub fn init() -> Result<()> {
    let mut builder = match log_path() {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("off"));
            builder.target(Target::Stderr);
            builder
        }
    };
    builder
        .try_init()
        .context("installing logger")
}
