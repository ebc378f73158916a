use crate::core::error::{check_dt, EngineError};

/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of fixed physics steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    /// Upper bound on steps per frame. Prevents a spiral of death after a stall.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Result<Self, EngineError> {
        Ok(Self {
            dt: check_dt(dt)?,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        })
    }

    /// Add frame time. Returns the number of fixed steps to run now.
    /// Non-finite or negative frame times count as zero.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let cap = self.dt * self.max_steps as f32;
        if self.accumulator >= cap {
            log::debug!(
                "frame time backlog {:.3}s capped at {} steps",
                self.accumulator,
                self.max_steps
            );
            self.accumulator = 0.0;
            return self.max_steps;
        }

        let steps = ((self.accumulator / self.dt) as u32).min(self.max_steps);
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha between the last two steps (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.dt).clamp(0.0, 1.0)
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
}
