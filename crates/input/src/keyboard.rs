//! Keyboard input source.
//!
//! Terminals do not reliably report key releases, so an intent is active for
//! a frame when a press or auto-repeat for its key arrived since the previous
//! frame. Holding a key keeps the intent active through auto-repeat.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::InputSource;
use crate::map::map_key;
use crate::types::Intents;

#[derive(Debug, Default)]
pub struct KeyboardInput {
    pending: Intents,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one key event into the pending snapshot.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(intent) = map_key(key) {
            self.pending.set(intent);
        }
    }

    /// Hand out the pending snapshot and start a new one.
    pub fn take(&mut self) -> Intents {
        std::mem::take(&mut self.pending)
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<Intents> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(self.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn event(c: char, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn presses_accumulate_until_taken() {
        let mut input = KeyboardInput::new();
        input.handle_key(event('w', KeyEventKind::Press));
        input.handle_key(event('i', KeyEventKind::Repeat));
        input.handle_key(event('x', KeyEventKind::Release));

        let intents = input.take();
        assert!(intents.look_up);
        assert!(intents.move_forward);
        assert!(!intents.remove_block);
        assert!(input.take().is_idle());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut input = KeyboardInput::new();
        input.handle_key(event('z', KeyEventKind::Press));
        assert!(input.take().is_idle());
    }
}
