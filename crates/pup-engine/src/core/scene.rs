use std::sync::Arc;

use crate::api::types::EntityId;
use crate::components::character::CharacterSheet;
use crate::components::entity::Entity;
use crate::components::tilemap::TileMap;
use crate::core::levels::{level_one_grid, LEVEL_ONE_SPAWN};
use crate::error::EngineError;
use crate::input::bindings::KeyBindings;
use crate::input::queue::InputEvent;
use crate::renderer::instance::RenderBuffer;
use crate::systems::render::draw_tilemap;

/// A playable level: a static tile map and the player moving through it.
///
/// Each tick runs input, then simulation, then drawing, in that order.
pub struct Level {
    map: TileMap,
    player: Entity,
    bindings: KeyBindings,
}

impl Level {
    pub fn new(map: TileMap, player: Entity) -> Self {
        Self {
            map,
            player,
            bindings: KeyBindings::default(),
        }
    }

    /// The first level with the player at its spawn point.
    pub fn level_one(sheet: Arc<CharacterSheet>) -> Result<Self, EngineError> {
        let map = TileMap::from_grid(&level_one_grid());
        let player = Entity::player(EntityId(1), LEVEL_ONE_SPAWN, sheet)?;
        log::info!(
            "level one: {}x{} tiles ({} blocking), player at {:?}",
            map.width(),
            map.height(),
            map.blocking_count(),
            LEVEL_ONE_SPAWN
        );
        Ok(Self::new(map, player))
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Forward a key event to the player as a command, if it maps to one.
    pub fn handle_input(&mut self, event: InputEvent) {
        match self.bindings.translate(event) {
            Some(command) => self.player.handle_command(command),
            None => log::trace!("ignored key {}", event.key_code()),
        }
    }

    pub fn update(&mut self, dt: f64) {
        self.player.update(dt, &self.map);
    }

    /// Tiles first, then the player on top.
    pub fn draw(&self, buffer: &mut RenderBuffer) {
        draw_tilemap(&self.map, buffer);
        self.player.draw(buffer);
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }
}
