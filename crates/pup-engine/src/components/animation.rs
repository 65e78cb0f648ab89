//! Frame-counted animation state.
//!
//! An animation advances one step per simulation tick. Each frame stays on
//! screen for `frame_delay` ticks before the next one is shown.

use std::sync::Arc;

use crate::components::sprite::ImageHandle;
use crate::error::EngineError;

/// A looping image sequence with its playback counters.
///
/// Frames are shared between every state built from the same sequence;
/// only the counters are per-instance.
#[derive(Debug, Clone)]
pub struct AnimationState {
    frames: Arc<[ImageHandle]>,
    frame_delay: u32,
    /// Ticks spent on the current frame, in `[0, frame_delay)`.
    elapsed: u32,
    /// Index of the displayed frame, in `[0, frames.len())`.
    frame_index: usize,
}

impl AnimationState {
    /// Start a sequence at frame 0. Fails on an empty frame list or a zero delay.
    pub fn new(frames: Arc<[ImageHandle]>, frame_delay: u32) -> Result<Self, EngineError> {
        if frames.is_empty() {
            return Err(EngineError::EmptyAnimation);
        }
        if frame_delay == 0 {
            return Err(EngineError::ZeroFrameDelay);
        }
        Ok(Self {
            frames,
            frame_delay,
            elapsed: 0,
            frame_index: 0,
        })
    }

    /// Fresh copy of this sequence restarted at frame 0.
    pub fn restarted(&self) -> Self {
        Self {
            frames: Arc::clone(&self.frames),
            frame_delay: self.frame_delay,
            elapsed: 0,
            frame_index: 0,
        }
    }

    /// Advance one tick. Returns true if the displayed frame changed.
    pub fn tick(&mut self) -> bool {
        self.elapsed = (self.elapsed + 1) % self.frame_delay;
        if self.elapsed != 0 {
            return false;
        }
        let previous = self.frame_index;
        self.frame_index = (self.frame_index + 1) % self.frames.len();
        self.frame_index != previous
    }

    pub fn current_frame(&self) -> ImageHandle {
        self.frames[self.frame_index]
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn frame_delay(&self) -> u32 {
        self.frame_delay
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &Arc<[ImageHandle]> {
        &self.frames
    }
}
