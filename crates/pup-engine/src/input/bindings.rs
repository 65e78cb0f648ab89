use std::collections::HashSet;

use crate::api::types::Command;
use crate::input::queue::InputEvent;

/// Browser key codes for the default bindings.
pub const KEY_SPACE: u32 = 32;
pub const KEY_A: u32 = 65;
pub const KEY_D: u32 = 68;

/// Maps raw key events to character commands.
///
/// Tracks held keys so auto-repeated key-downs and stray key-ups never
/// unbalance the start/stop run pairs.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub jump: u32,
    pub run_left: u32,
    pub run_right: u32,
    held: HashSet<u32>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: KEY_SPACE,
            run_left: KEY_A,
            run_right: KEY_D,
            held: HashSet::new(),
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The command for `event`, if it is bound and changes key state.
    pub fn translate(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown { key_code } => {
                if !self.held.insert(key_code) {
                    return None;
                }
                if key_code == self.jump {
                    Some(Command::Jump)
                } else if key_code == self.run_left {
                    Some(Command::StartRunLeft)
                } else if key_code == self.run_right {
                    Some(Command::StartRunRight)
                } else {
                    None
                }
            }
            InputEvent::KeyUp { key_code } => {
                if !self.held.remove(&key_code) {
                    return None;
                }
                if key_code == self.run_left {
                    Some(Command::StopRunLeft)
                } else if key_code == self.run_right {
                    Some(Command::StopRunRight)
                } else {
                    None
                }
            }
        }
    }
}
