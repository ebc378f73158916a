use crate::api::types::{FrameRecord, GameEvent};
use crate::core::level::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum fixed steps run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            max_steps_per_frame: 10,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step. `ctx.dt()` is the step length.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// State to append to the per-frame log after each step.
    fn frame_record(&self) -> Option<FrameRecord> {
        None
    }
}

/// Mutable engine state, passed to Game::init and Game::update.
#[derive(Debug)]
pub struct EngineContext {
    pub events: Vec<GameEvent>,
    dt: f32,
    frame: u64,
    quit_requested: bool,
}

impl EngineContext {
    pub fn new(dt: f32) -> Self {
        Self {
            events: Vec::new(),
            dt,
            frame: 0,
            quit_requested: false,
        }
    }

    /// Length of the current fixed step in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Number of fixed steps completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Ask the runner to stop after the current step.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Mark a fixed step as done.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default().fixed_dt)
    }
}
