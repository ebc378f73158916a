use serde::{Deserialize, Serialize};

/// What the player asked for this frame, independent of which keys produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_pressed: bool,
}

impl MoveIntent {
    pub const IDLE: Self = Self {
        move_left: false,
        move_right: false,
        jump_pressed: false,
    };

    pub fn left() -> Self {
        Self { move_left: true, ..Self::IDLE }
    }

    pub fn right() -> Self {
        Self { move_right: true, ..Self::IDLE }
    }

    pub fn jump() -> Self {
        Self { jump_pressed: true, ..Self::IDLE }
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump_pressed = jump;
        self
    }

    /// Horizontal direction: -1, 0 or +1. Holding both directions cancels out.
    pub fn horizontal(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
