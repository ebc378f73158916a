use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::player::Player;

/// Notable state changes a game reports during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    WalkedOffEdge,
    Reset,
    FellOut,
    GravityChanged(f32),
    JumpStrengthChanged(f32),
}

/// Position and velocity of the player after one fixed step.
///
/// Its `Display` form is the per-frame log line:
/// `POS x=64.00 y=510.00 VEL vx=0.00 vy=0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl From<&Player> for FrameRecord {
    fn from(player: &Player) -> Self {
        Self {
            pos: player.pos,
            vel: player.vel,
        }
    }
}

impl fmt::Display for FrameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "POS x={:.2} y={:.2} VEL vx={:.2} vy={:.2}",
            self.pos.x, self.pos.y, self.vel.x, self.vel.y
        )
    }
}
