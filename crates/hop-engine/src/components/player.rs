use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::aabb::Aabb;

/// Spawn point (top-left corner). Rests on the floor of the standard level.
pub const SPAWN_POS: Vec2 = Vec2::new(64.0, 510.0);
/// Collision box of the player.
pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 50.0);

/// Vertical contact state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    Grounded,
    Airborne,
}

/// The player-controlled rectangle.
/// Plain value type: the physics core takes one by value and returns the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world space (y grows downward).
    pub pos: Vec2,
    /// Velocity in px/s.
    pub vel: Vec2,
    /// Width and height of the collision box.
    pub size: Vec2,
    /// Resting on a platform surface. Implies `vel.y == 0`.
    pub grounded: bool,
}

impl Player {
    /// Create an airborne player at rest at the given position.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            grounded: false,
        }
    }

    /// The fixed spawn state: standing still on the floor.
    pub fn spawn() -> Self {
        Self::new(SPAWN_POS).with_grounded(true)
    }

    // -- Builder pattern --

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        if grounded {
            self.vel.y = 0.0;
        }
        self
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn motion(&self) -> Motion {
        if self.grounded {
            Motion::Grounded
        } else {
            Motion::Airborne
        }
    }

    /// True once the player has dropped below `limit` (y-down).
    pub fn fell_out(&self, limit: f32) -> bool {
        self.pos.y > limit
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}
