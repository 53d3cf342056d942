//! Key mapping from terminal events to intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the intent it requests.
///
/// Letters are matched case-insensitively. Arrow keys double as look keys.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if should_quit(key) {
        return Some(Intent::Quit);
    }
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    match code {
        // Look
        KeyCode::Up | KeyCode::Char('w') => Some(Intent::LookUp),
        KeyCode::Down | KeyCode::Char('s') => Some(Intent::LookDown),
        KeyCode::Left | KeyCode::Char('a') => Some(Intent::LookLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Intent::LookRight),

        // Move
        KeyCode::Char('i') => Some(Intent::MoveForward),
        KeyCode::Char('k') => Some(Intent::MoveBackward),
        KeyCode::Char('j') => Some(Intent::StrafeLeft),
        KeyCode::Char('l') => Some(Intent::StrafeRight),

        // Edit
        KeyCode::Char('x') => Some(Intent::RemoveBlock),
        KeyCode::Char(' ') => Some(Intent::PlaceBlock),

        _ => None,
    }
}

/// Check if a key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
