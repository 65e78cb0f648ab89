pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod error;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig};
pub use api::types::{Command, EntityId};
pub use error::EngineError;
pub use crate::core::body::{KinematicBody, StepReport};
pub use crate::core::geometry::Rect;
pub use crate::core::levels::{level_one_grid, LEVEL_ONE_SPAWN};
pub use crate::core::scene::Level;
pub use crate::core::time::FrameClock;
pub use components::animation::AnimationState;
pub use components::character::{CharacterSheet, PoseDesc, SheetDesc, PLAYER_SHEET};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{ImageHandle, ImageId};
pub use components::tilemap::{Tile, TileKind, TileMap};
pub use systems::animator::{AnimationStateMachine, CharacterPose, Facing, Pose};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::bindings::KeyBindings;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, ImageDescriptor};
pub use assets::registry::{ImageRegistry, ImageSource};
