//! Input capture
//!
//! Event listeners write into an `InputState` whenever the host delivers an
//! event; the frame loop turns it into one `TickInput` snapshot per tick.
//! Key state is last-writer-wins, discrete actions are latched until taken.

use std::collections::HashMap;

use glam::Vec2;

use crate::settings::KeyBindings;
use crate::sim::tick::TickInput;

/// Asynchronously captured key state
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
    process_requested: bool,
    reset_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition (`key` is a `KeyboardEvent.key` value)
    pub fn set_key(&mut self, key: &str, down: bool, bindings: &KeyBindings) {
        let key = key.to_lowercase();
        if down && !self.is_down(&key) {
            if bindings.process.contains(&key) {
                self.process_requested = true;
            }
            if bindings.reset.contains(&key) {
                self.reset_requested = true;
            }
        }
        self.keys.insert(key, down);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    fn any_down(&self, bound: &[String]) -> bool {
        bound.iter().any(|k| self.is_down(k))
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Snapshot for the next tick; consumes a pending process request
    pub fn take_tick_input(&mut self, bindings: &KeyBindings) -> TickInput {
        let mut movement = Vec2::ZERO;
        if self.any_down(&bindings.up) {
            movement.y -= 1.0;
        }
        if self.any_down(&bindings.down) {
            movement.y += 1.0;
        }
        if self.any_down(&bindings.left) {
            movement.x -= 1.0;
        }
        if self.any_down(&bindings.right) {
            movement.x += 1.0;
        }
        TickInput {
            movement,
            process: std::mem::take(&mut self.process_requested),
        }
    }

    /// True once per reset key press
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }
}
