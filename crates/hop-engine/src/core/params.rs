use serde::{Deserialize, Serialize};

use crate::core::error::{check_finite, EngineError};

/// Inclusive bounds and adjustment step for a tunable scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl ParamRange {
    fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    fn check(&self, name: &'static str, value: f32) -> Result<f32, EngineError> {
        let value = check_finite(name, value)?;
        if value < self.min || value > self.max {
            return Err(EngineError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

/// Downward acceleration in px/s^2.
pub const GRAVITY_RANGE: ParamRange = ParamRange {
    min: 100.0,
    max: 4000.0,
    step: 100.0,
    default: 1700.0,
};

/// Upward jump impulse in px/s.
pub const JUMP_RANGE: ParamRange = ParamRange {
    min: 200.0,
    max: 2000.0,
    step: 40.0,
    default: 820.0,
};

/// Runtime-adjustable world parameters, passed explicitly into every physics step.
///
/// Both values always stay inside their [`ParamRange`]: gravity is never
/// negative and the jump never degenerates into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    gravity: f32,
    jump_strength: f32,
}

impl WorldParams {
    /// Build validated parameters. Values outside the allowed ranges are rejected.
    pub fn new(gravity: f32, jump_strength: f32) -> Result<Self, EngineError> {
        Ok(Self {
            gravity: GRAVITY_RANGE.check("gravity", gravity)?,
            jump_strength: JUMP_RANGE.check("jump_strength", jump_strength)?,
        })
    }

    /// Build parameters without range checks.
    ///
    /// Used by tests and tools that want to drive the core with arbitrary
    /// (finite) values. The physics core accepts any finite pair.
    pub fn unchecked(gravity: f32, jump_strength: f32) -> Self {
        Self { gravity, jump_strength }
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn jump_strength(&self) -> f32 {
        self.jump_strength
    }

    pub fn increase_gravity(&mut self) -> f32 {
        self.gravity = GRAVITY_RANGE.clamp(self.gravity + GRAVITY_RANGE.step);
        self.gravity
    }

    pub fn decrease_gravity(&mut self) -> f32 {
        self.gravity = GRAVITY_RANGE.clamp(self.gravity - GRAVITY_RANGE.step);
        self.gravity
    }

    pub fn increase_jump(&mut self) -> f32 {
        self.jump_strength = JUMP_RANGE.clamp(self.jump_strength + JUMP_RANGE.step);
        self.jump_strength
    }

    pub fn decrease_jump(&mut self) -> f32 {
        self.jump_strength = JUMP_RANGE.clamp(self.jump_strength - JUMP_RANGE.step);
        self.jump_strength
    }
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_RANGE.default,
            jump_strength: JUMP_RANGE.default,
        }
    }
}
