use std::sync::Arc;

use glam::DVec2;

use crate::api::types::{Command, EntityId};
use crate::components::character::CharacterSheet;
use crate::components::layer::RenderLayer;
use crate::components::sprite::ImageHandle;
use crate::components::tilemap::TileMap;
use crate::core::body::{KinematicBody, StepReport};
use crate::core::geometry::Rect;
use crate::core::units::{PLAYER_JUMP_HEIGHT, PLAYER_MASS, PLAYER_RUN_SPEED};
use crate::error::EngineError;
use crate::renderer::instance::RenderBuffer;
use crate::systems::animator::{AnimationStateMachine, CharacterPose};
use crate::systems::render::draw_sprite;

/// A character in the level: a kinematic body driven by commands, shown
/// through an animation state machine.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    body: KinematicBody,
    animation: AnimationStateMachine,
    /// Horizontal speed added while a run key is held, in pixels/s.
    pub run_speed: f64,
    /// Apex height of a jump, in pixels.
    pub jump_height: f64,
}

impl Entity {
    /// Create a character at rest, showing `initial` pose.
    pub fn new(
        id: EntityId,
        position: DVec2,
        mass: f64,
        sheet: Arc<CharacterSheet>,
        initial: CharacterPose,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            id,
            body: KinematicBody::new(position, mass)?,
            animation: AnimationStateMachine::new(sheet, initial),
            run_speed: 0.0,
            jump_height: 0.0,
        })
    }

    /// The player character, idle and facing right.
    pub fn player(id: EntityId, position: DVec2, sheet: Arc<CharacterSheet>) -> Result<Self, EngineError> {
        Ok(Self::new(id, position, PLAYER_MASS, sheet, CharacterPose::IdleRight)?
            .with_run_speed(PLAYER_RUN_SPEED)
            .with_jump_height(PLAYER_JUMP_HEIGHT))
    }

    // -- Builder pattern --

    pub fn with_run_speed(mut self, run_speed: f64) -> Self {
        self.run_speed = run_speed;
        self
    }

    pub fn with_jump_height(mut self, jump_height: f64) -> Self {
        self.jump_height = jump_height;
        self
    }

    // -- Commands --

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Jump => self.jump(),
            Command::StartRunLeft => self.start_run_left(),
            Command::StopRunLeft => self.stop_run_left(),
            Command::StartRunRight => self.start_run_right(),
            Command::StopRunRight => self.stop_run_right(),
        }
    }

    /// Jump if standing on something. Repeated presses in the air do nothing.
    pub fn jump(&mut self) {
        if self.body.jump(self.jump_height) {
            log::debug!("{:?} jumped", self.id);
        }
    }

    pub fn start_run_left(&mut self) {
        self.body.velocity.x -= self.run_speed;
    }

    pub fn stop_run_left(&mut self) {
        self.body.velocity.x += self.run_speed;
    }

    pub fn start_run_right(&mut self) {
        self.body.velocity.x += self.run_speed;
    }

    pub fn stop_run_right(&mut self) {
        self.body.velocity.x -= self.run_speed;
    }

    // -- Simulation --

    /// One tick: move the body against `map`, then advance the animation
    /// from the resulting velocity.
    pub fn update(&mut self, dt: f64, map: &TileMap) -> StepReport {
        let size = self.current_image().size();
        let report = self.body.update(dt, map, size);
        if report.landed {
            log::trace!("{:?} touched ground at {:?}", self.id, self.body.position);
        }
        if report.hit_ceiling {
            log::trace!("{:?} bumped a ceiling at {:?}", self.id, self.body.position);
        }
        if report.hit_wall {
            log::trace!("{:?} blocked by a wall at {:?}", self.id, self.body.position);
        }
        self.animation.update(self.body.velocity);
        report
    }

    pub fn draw(&self, buffer: &mut RenderBuffer) {
        draw_sprite(&self.bounds(), self.current_image(), RenderLayer::Objects, buffer);
    }

    // -- Accessors --

    /// Midbottom anchor of the bounding box.
    pub fn position(&self) -> DVec2 {
        self.body.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.body.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.body.is_grounded()
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub fn pose(&self) -> CharacterPose {
        self.animation.pose()
    }

    pub fn animation(&self) -> &AnimationStateMachine {
        &self.animation
    }

    pub fn current_image(&self) -> ImageHandle {
        self.animation.current_image()
    }

    /// Bounding box of the displayed frame, anchored at `position`.
    pub fn bounds(&self) -> Rect {
        self.body.bounds(self.current_image().size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tilemap::Tile;
    use crate::core::units::{GRAVITY, PLAYER_HEIGHT, PLAYER_WIDTH, TILE_SIZE};
    use crate::fixtures::player_sheet;

    const DT: f64 = 1.0 / 60.0;

    fn player_at(x: f64, y: f64) -> Entity {
        Entity::player(EntityId(1), DVec2::new(x, y), player_sheet()).unwrap()
    }

    /// A wide floor whose top edge is at y = 600.
    fn floor() -> TileMap {
        TileMap::from_tiles(vec![Tile::blocking(Rect::new(0.0, 600.0, 1000.0, TILE_SIZE))])
    }

    fn land(player: &mut Entity, map: &TileMap) {
        for _ in 0..240 {
            player.update(DT, map);
            if player.is_grounded() {
                return;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn invalid_mass_is_rejected() {
        let err = Entity::new(
            EntityId(1),
            DVec2::ZERO,
            0.0,
            player_sheet(),
            CharacterPose::IdleLeft,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidMass(_)));
    }

    #[test]
    fn bounds_follow_current_frame() {
        let player = player_at(200.0, 580.0);
        let bounds = player.bounds();
        assert_eq!(bounds.size(), DVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
        assert!((bounds.midbottom() - DVec2::new(200.0, 580.0)).length() < 1e-9);
    }

    #[test]
    fn run_start_stop_is_symmetric() {
        let mut player = player_at(0.0, 0.0);
        player.body_mut().velocity.x = 12.5;

        player.start_run_left();
        assert_eq!(player.velocity().x, 12.5 - PLAYER_RUN_SPEED);
        player.stop_run_left();
        assert!((player.velocity().x - 12.5).abs() < 1e-12);

        player.start_run_right();
        player.stop_run_right();
        assert!((player.velocity().x - 12.5).abs() < 1e-12);
    }

    #[test]
    fn opposite_holds_cancel_out() {
        let mut player = player_at(0.0, 0.0);
        player.handle_command(Command::StartRunLeft);
        player.handle_command(Command::StartRunRight);
        assert_eq!(player.velocity().x, 0.0);
        player.handle_command(Command::StopRunLeft);
        assert_eq!(player.velocity().x, PLAYER_RUN_SPEED);
        player.handle_command(Command::StopRunRight);
        assert_eq!(player.velocity().x, 0.0);
    }

    #[test]
    fn jump_spam_applies_once_until_landing() {
        let map = floor();
        let mut player = player_at(200.0, 580.0);
        land(&mut player, &map);

        let boost = (2.0 * GRAVITY * PLAYER_JUMP_HEIGHT).sqrt();
        let before = player.velocity().y;
        player.handle_command(Command::Jump);
        assert!((player.velocity().y - (before + boost)).abs() < 1e-9);
        player.handle_command(Command::Jump);
        assert!((player.velocity().y - (before + boost)).abs() < 1e-9);

        // Still airborne a few ticks later.
        for _ in 0..5 {
            player.update(DT, &map);
            player.handle_command(Command::Jump);
        }
        assert!(!player.is_grounded());
        assert!(player.velocity().y < before + boost);

        // Land again and the next jump works.
        land(&mut player, &map);
        let before = player.velocity().y;
        player.jump();
        assert!((player.velocity().y - (before + boost)).abs() < 1e-9);
    }

    #[test]
    fn falling_player_shows_fall_then_idle() {
        let map = floor();
        let mut player = player_at(200.0, 300.0);
        assert_eq!(player.pose(), CharacterPose::IdleRight);

        let mut saw_fall = false;
        for _ in 0..240 {
            player.update(DT, &map);
            saw_fall |= player.pose() == CharacterPose::FallRight;
            if player.is_grounded() {
                break;
            }
        }
        assert!(saw_fall);
        assert!(player.is_grounded());
        assert_eq!(player.bounds().bottom(), 600.0);
        assert_eq!(player.pose(), CharacterPose::IdleRight);
    }

    #[test]
    fn running_on_the_floor_shows_run_pose() {
        let map = floor();
        let mut player = player_at(200.0, 600.0);
        player.start_run_left();
        player.update(DT, &map);
        assert_eq!(player.pose(), CharacterPose::RunLeft);
        assert!(player.position().x < 200.0);

        player.stop_run_left();
        player.update(DT, &map);
        assert_eq!(player.pose(), CharacterPose::IdleLeft);
    }

    #[test]
    fn draw_pushes_current_frame() {
        let player = player_at(200.0, 580.0);
        let mut buffer = RenderBuffer::new();
        player.draw(&mut buffer);
        let inst = buffer.instances[0];
        assert_eq!(inst.image, player.current_image().id.0 as f32);
        assert_eq!(inst.flip, 1.0);
        assert_eq!(inst.y, 506.0);
    }
}
