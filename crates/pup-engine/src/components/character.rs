//! Preloaded animation frames for one kind of character.

use std::sync::Arc;

use glam::DVec2;

use crate::assets::registry::ImageSource;
use crate::components::animation::AnimationState;
use crate::components::sprite::ImageHandle;
use crate::core::units::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::error::EngineError;
use crate::systems::animator::{CharacterPose, Facing, Pose};

/// Image paths and timing for one pose.
#[derive(Debug, Clone, Copy)]
pub struct PoseDesc {
    pub frames: &'static [&'static str],
    /// Ticks each frame stays on screen.
    pub frame_delay: u32,
}

/// Everything needed to load a character's animations.
#[derive(Debug, Clone, Copy)]
pub struct SheetDesc {
    /// Drawn size of every frame in pixels.
    pub width: f64,
    pub height: f64,
    /// Direction the source images face. The other facing is drawn mirrored.
    pub native_facing: Facing,
    pub idle: PoseDesc,
    pub run: PoseDesc,
    pub jump: PoseDesc,
    pub fall: PoseDesc,
}

impl SheetDesc {
    pub fn pose(&self, pose: Pose) -> &PoseDesc {
        match pose {
            Pose::Idle => &self.idle,
            Pose::Run => &self.run,
            Pose::Jump => &self.jump,
            Pose::Fall => &self.fall,
        }
    }

    /// Every image path referenced by this sheet.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        Pose::ALL
            .into_iter()
            .flat_map(move |pose| self.pose(pose).frames.iter().copied())
    }
}

pub const PLAYER_SHEET: SheetDesc = SheetDesc {
    width: PLAYER_WIDTH,
    height: PLAYER_HEIGHT,
    native_facing: Facing::Left,
    idle: PoseDesc {
        frames: &["assets/player/idle/1.png", "assets/player/idle/2.png"],
        frame_delay: 10,
    },
    run: PoseDesc {
        frames: &[
            "assets/player/run/1.png",
            "assets/player/run/2.png",
            "assets/player/run/3.png",
            "assets/player/run/4.png",
            "assets/player/run/5.png",
        ],
        frame_delay: 5,
    },
    jump: PoseDesc {
        frames: &["assets/player/jump/1.png"],
        frame_delay: 10,
    },
    fall: PoseDesc {
        frames: &["assets/player/fall/1.png"],
        frame_delay: 10,
    },
};

/// Loaded animations for every pose and facing of a character.
///
/// Built once, outside the game loop. States handed out by [`state`] share
/// this sheet's frame lists.
///
/// [`state`]: CharacterSheet::state
#[derive(Debug, Clone)]
pub struct CharacterSheet {
    /// Indexed by `CharacterPose::index()`.
    states: Vec<AnimationState>,
    frame_size: DVec2,
}

impl CharacterSheet {
    /// Load, scale and mirror every frame described by `desc`.
    ///
    /// Fails before anything is usable if an image is missing or a pose has
    /// no frames.
    pub fn load(source: &dyn ImageSource, desc: &SheetDesc) -> Result<Self, EngineError> {
        let mut states: Vec<Option<AnimationState>> = vec![None; CharacterPose::COUNT];

        for pose in Pose::ALL {
            let pose_desc = desc.pose(pose);
            let native: Vec<ImageHandle> = pose_desc
                .frames
                .iter()
                .map(|path| {
                    source
                        .load(path)
                        .map(|image| source.scale(image, desc.width, desc.height))
                })
                .collect::<Result<_, _>>()?;
            let mirrored: Vec<ImageHandle> =
                native.iter().map(|&image| source.flip(image, true)).collect();

            for facing in [Facing::Left, Facing::Right] {
                let frames: Arc<[ImageHandle]> = if facing == desc.native_facing {
                    native.clone().into()
                } else {
                    mirrored.clone().into()
                };
                let state = AnimationState::new(frames, pose_desc.frame_delay)?;
                states[CharacterPose::new(pose, facing).index()] = Some(state);
            }
        }

        log::debug!(
            "character sheet loaded: {} images at {}x{}",
            desc.paths().count(),
            desc.width,
            desc.height
        );

        Ok(Self {
            states: states.into_iter().flatten().collect(),
            frame_size: DVec2::new(desc.width, desc.height),
        })
    }

    /// A fresh state for `pose`, starting at frame 0.
    pub fn state(&self, pose: CharacterPose) -> AnimationState {
        self.states[pose.index()].restarted()
    }

    pub fn frame_size(&self) -> DVec2 {
        self.frame_size
    }
}
