//! Kinematic body integration and axis-separated tile collision.

use glam::DVec2;

use crate::components::tilemap::TileMap;
use crate::core::geometry::Rect;
use crate::core::units::GRAVITY;
use crate::error::EngineError;

/// Which clamps the collision resolver applied during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// A downward move was stopped by a tile below.
    pub landed: bool,
    /// An upward move was stopped by a tile above.
    pub hit_ceiling: bool,
    /// A horizontal move was stopped by a tile.
    pub hit_wall: bool,
}

/// Point-mass body driven by gravity and an external force.
///
/// `position` is the midbottom anchor of the body's bounding box in screen
/// space. `velocity` uses physics convention: positive y points up.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pub position: DVec2,
    pub velocity: DVec2,
    pub force: DVec2,
    mass: f64,
    grounded: bool,
}

impl KinematicBody {
    /// Create a body at rest. Fails if `mass` is not strictly positive.
    pub fn new(position: DVec2, mass: f64) -> Result<Self, EngineError> {
        if mass.is_nan() || mass <= 0.0 {
            return Err(EngineError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity: DVec2::ZERO,
            force: DVec2::ZERO,
            mass,
            grounded: false,
        })
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_force(mut self, force: DVec2) -> Self {
        self.force = force;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Bounding box of the given size anchored at the current position.
    pub fn bounds(&self, size: DVec2) -> Rect {
        Rect::from_midbottom(self.position, size)
    }

    /// Add an upward velocity impulse reaching `height` pixels at the apex.
    ///
    /// Only allowed while grounded; returns whether the jump happened.
    pub fn jump(&mut self, height: f64) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity.y += (2.0 * GRAVITY * height).sqrt();
        self.grounded = false;
        true
    }

    /// Advance one tick of `dt` seconds against the blocking tiles of `map`.
    ///
    /// `size` is the current bounding box size (taken from the displayed frame).
    pub fn update(&mut self, dt: f64, map: &TileMap, size: DVec2) -> StepReport {
        let acceleration = self.force / self.mass - DVec2::new(0.0, GRAVITY);
        self.velocity += acceleration * dt;

        let step = self.velocity * dt;
        let mut dx = step.x.round_ties_even();
        // Screen y grows downward.
        let mut dy = -step.y.round_ties_even();

        let bounds = self.bounds(size);
        let mut report = StepReport::default();

        // Tiles clamp sequentially in map order; a later tile may override an
        // earlier clamp.
        for tile in map.blocking() {
            let tile = &tile.bounds;

            if tile.overlaps(&bounds.moved(dx, 0.0)) {
                dx = if dx >= 0.0 {
                    tile.left - bounds.right()
                } else {
                    tile.right() - bounds.left
                };
                report.hit_wall = true;
            }

            if tile.overlaps(&bounds.moved(0.0, dy)) {
                if dy >= 0.0 {
                    dy = tile.top - bounds.bottom();
                    self.grounded = true;
                    report.landed = true;
                } else {
                    dy = tile.bottom() - bounds.top;
                    report.hit_ceiling = true;
                }
                self.velocity.y = 0.0;
            }
        }

        self.position += DVec2::new(dx, dy);
        report
    }
}
