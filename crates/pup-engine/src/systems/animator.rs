//! Character animation state machine.
//!
//! A character shows exactly one pose at a time. Each tick the current
//! animation advances, then the pose is re-derived from the body's velocity.
//! Facing is part of the pose identity: "run left" and "run right" are
//! distinct states with their own (mirrored) frames.

use std::sync::Arc;

use glam::DVec2;

use crate::components::animation::AnimationState;
use crate::components::character::CharacterSheet;
use crate::components::sprite::ImageHandle;
use crate::core::units::FALL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn opposite(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Animation category, independent of facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    Idle,
    Run,
    Jump,
    Fall,
}

impl Pose {
    pub const ALL: [Pose; 4] = [Pose::Idle, Pose::Run, Pose::Jump, Pose::Fall];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterPose {
    IdleLeft,
    IdleRight,
    RunLeft,
    RunRight,
    JumpLeft,
    JumpRight,
    FallLeft,
    FallRight,
}

impl CharacterPose {
    pub const COUNT: usize = 8;

    pub const ALL: [CharacterPose; Self::COUNT] = [
        CharacterPose::IdleLeft,
        CharacterPose::IdleRight,
        CharacterPose::RunLeft,
        CharacterPose::RunRight,
        CharacterPose::JumpLeft,
        CharacterPose::JumpRight,
        CharacterPose::FallLeft,
        CharacterPose::FallRight,
    ];

    pub fn new(pose: Pose, facing: Facing) -> Self {
        use CharacterPose::*;
        match (pose, facing) {
            (Pose::Idle, Facing::Left) => IdleLeft,
            (Pose::Idle, Facing::Right) => IdleRight,
            (Pose::Run, Facing::Left) => RunLeft,
            (Pose::Run, Facing::Right) => RunRight,
            (Pose::Jump, Facing::Left) => JumpLeft,
            (Pose::Jump, Facing::Right) => JumpRight,
            (Pose::Fall, Facing::Left) => FallLeft,
            (Pose::Fall, Facing::Right) => FallRight,
        }
    }

    pub fn pose(self) -> Pose {
        use CharacterPose::*;
        match self {
            IdleLeft | IdleRight => Pose::Idle,
            RunLeft | RunRight => Pose::Run,
            JumpLeft | JumpRight => Pose::Jump,
            FallLeft | FallRight => Pose::Fall,
        }
    }

    pub fn facing(self) -> Facing {
        use CharacterPose::*;
        match self {
            IdleLeft | RunLeft | JumpLeft | FallLeft => Facing::Left,
            IdleRight | RunRight | JumpRight | FallRight => Facing::Right,
        }
    }

    /// Dense index in `[0, COUNT)`, matching the order of `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pose to switch to for the given velocity, or `None` to stay.
    ///
    /// Velocity is in physics convention (positive y is up). A strongly
    /// negative vertical speed selects the fall pose, any upward speed the
    /// jump pose. Airborne poses only flip facing; they never start running.
    pub fn next(self, v: DVec2) -> Option<Self> {
        use CharacterPose::*;
        match self {
            IdleLeft | IdleRight => {
                let facing = self.facing();
                if v.y < FALL_THRESHOLD {
                    Some(Self::new(Pose::Fall, facing))
                } else if v.y > 0.0 {
                    Some(Self::new(Pose::Jump, facing))
                } else if v.x < 0.0 {
                    Some(RunLeft)
                } else if v.x > 0.0 {
                    Some(RunRight)
                } else {
                    None
                }
            }
            RunLeft => {
                if v.y < FALL_THRESHOLD {
                    Some(FallLeft)
                } else if v.y > 0.0 {
                    Some(JumpLeft)
                } else if v.x > 0.0 {
                    Some(RunRight)
                } else if v.x == 0.0 {
                    Some(IdleLeft)
                } else {
                    None
                }
            }
            RunRight => {
                if v.y < FALL_THRESHOLD {
                    Some(FallRight)
                } else if v.y > 0.0 {
                    Some(JumpRight)
                } else if v.x < 0.0 {
                    Some(RunLeft)
                } else if v.x == 0.0 {
                    Some(IdleRight)
                } else {
                    None
                }
            }
            JumpLeft | JumpRight => {
                let facing = self.facing();
                if v.y < 0.0 {
                    Some(Self::new(Pose::Fall, facing))
                } else if moving_against(facing, v.x) {
                    Some(Self::new(Pose::Jump, facing.opposite()))
                } else {
                    None
                }
            }
            FallLeft | FallRight => {
                let facing = self.facing();
                if v.y == 0.0 {
                    Some(Self::new(Pose::Idle, facing))
                } else if moving_against(facing, v.x) {
                    Some(Self::new(Pose::Fall, facing.opposite()))
                } else {
                    None
                }
            }
        }
    }
}

/// Horizontal speed points away from `facing`.
fn moving_against(facing: Facing, vx: f64) -> bool {
    match facing {
        Facing::Left => vx > 0.0,
        Facing::Right => vx < 0.0,
    }
}

/// Owns the single active animation of one character.
///
/// Transitions replace the active state wholesale; nothing of the previous
/// state survives.
#[derive(Debug, Clone)]
pub struct AnimationStateMachine {
    sheet: Arc<CharacterSheet>,
    pose: CharacterPose,
    state: AnimationState,
}

impl AnimationStateMachine {
    pub fn new(sheet: Arc<CharacterSheet>, initial: CharacterPose) -> Self {
        let state = sheet.state(initial);
        Self {
            sheet,
            pose: initial,
            state,
        }
    }

    /// Advance the current animation one tick, then apply at most one
    /// transition. Returns the new pose if one was entered.
    pub fn update(&mut self, velocity: DVec2) -> Option<CharacterPose> {
        self.state.tick();
        let next = self.pose.next(velocity)?;
        log::debug!("animation: {:?} -> {:?}", self.pose, next);
        self.transition_to(next);
        Some(next)
    }

    /// Enter `pose` from its first frame.
    pub fn transition_to(&mut self, pose: CharacterPose) {
        self.pose = pose;
        self.state = self.sheet.state(pose);
    }

    pub fn pose(&self) -> CharacterPose {
        self.pose
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn current_image(&self) -> ImageHandle {
        self.state.current_frame()
    }
}
