/// Keyboard transition reported by the host, keyed by browser key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
}

impl InputEvent {
    pub fn key_code(self) -> u32 {
        match self {
            InputEvent::KeyDown { key_code } | InputEvent::KeyUp { key_code } => key_code,
        }
    }
}

/// Key events collected between two ticks, in arrival order.
///
/// The host pushes as events happen; the game reads the whole batch during
/// its update and the runner empties it afterwards.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.pending.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
