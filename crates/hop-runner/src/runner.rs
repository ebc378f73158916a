use hop_engine::{
    EngineContext, FixedTimestep, FrameRecord, Game, GameConfig, GameEvent, InputEvent,
    InputQueue,
};

use crate::error::RunnerError;

/// Generic game runner that wires up the engine loop.
///
/// The host pushes input events and calls [`GameRunner::tick`] once per
/// rendered frame with the elapsed wall time. The runner turns that into whole
/// fixed steps and collects one [`FrameRecord`] per step for the caller to log.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// Records produced by the most recent tick.
    records: Vec<FrameRecord>,
    /// Events emitted during the most recent tick.
    events: Vec<GameEvent>,
    /// Empty queue handed to the extra steps of a multi-step tick.
    no_input: InputQueue,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Result<Self, RunnerError> {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame)?;

        Ok(Self {
            game,
            ctx: EngineContext::new(config.fixed_dt),
            input: InputQueue::new(),
            timestep,
            config,
            initialized: false,
            records: Vec::new(),
            events: Vec::new(),
            no_input: InputQueue::new(),
        })
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "runner: initialized ({}x{} world, dt={:.4}s)",
            self.config.world_width,
            self.config.world_height,
            self.config.fixed_dt
        );
    }

    /// Queue an input event for the next step.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one rendered frame. Returns the number of fixed steps taken.
    ///
    /// Queued input is seen by the first step only, so one key press is
    /// applied once even when a slow frame runs several steps. With zero steps
    /// the input stays queued for the next frame.
    pub fn tick(&mut self, frame_dt: f32) -> u32 {
        self.records.clear();
        self.events.clear();
        if !self.initialized || self.ctx.quit_requested() {
            return 0;
        }

        let steps = self.timestep.accumulate(frame_dt);
        let mut ran = 0;
        for i in 0..steps {
            self.ctx.clear_frame_data();
            let input = if i == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
            self.ctx.advance_frame();
            ran += 1;

            self.events.extend_from_slice(&self.ctx.events);
            if let Some(record) = self.game.frame_record() {
                self.records.push(record);
            }
            if self.ctx.quit_requested() {
                log::info!("runner: quit requested at frame {}", self.ctx.frame());
                break;
            }
        }

        if ran > 0 {
            self.input.drain();
        }
        ran
    }

    pub fn is_running(&self) -> bool {
        self.initialized && !self.ctx.quit_requested()
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Fixed steps completed since init.
    pub fn frame(&self) -> u64 {
        self.ctx.frame()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use hop_engine::input::keys::KEY_ESCAPE;

    /// Counts steps and key downs; quits on Escape.
    #[derive(Default)]
    struct Probe {
        steps: u32,
        key_downs: u32,
    }

    impl Game for Probe {
        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.steps += 1;
            for event in input.iter() {
                if let InputEvent::KeyDown { key_code } = *event {
                    self.key_downs += 1;
                    if key_code == KEY_ESCAPE {
                        ctx.request_quit();
                    }
                }
            }
            ctx.emit_event(GameEvent::Landed);
        }

        fn frame_record(&self) -> Option<FrameRecord> {
            Some(FrameRecord {
                pos: Vec2::new(self.steps as f32, 0.0),
                vel: Vec2::ZERO,
            })
        }
    }

    fn runner() -> GameRunner<Probe> {
        let mut r = GameRunner::new(Probe::default()).unwrap();
        r.init();
        r
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = GameRunner::new(Probe::default()).unwrap();
        assert_eq!(r.tick(1.0 / 60.0), 0);
        assert!(!r.is_running());
    }

    #[test]
    fn one_record_per_step() {
        let mut r = runner();
        let steps = r.tick(3.0 / 60.0 + 0.001);
        assert_eq!(steps, 3);
        assert_eq!(r.records().len(), 3);
        assert_eq!(r.events().len(), 3);
        assert_eq!(r.frame(), 3);
        assert_eq!(r.records()[2].pos.x, 3.0);
    }

    #[test]
    fn input_reaches_only_the_first_step() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: 65 });
        r.tick(3.0 / 60.0 + 0.001);
        assert_eq!(r.game().key_downs, 1);
    }

    #[test]
    fn input_waits_for_a_step() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: 65 });
        assert_eq!(r.tick(0.001), 0);
        assert_eq!(r.game().key_downs, 0);
        r.tick(1.0 / 60.0);
        assert_eq!(r.game().key_downs, 1);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        assert_eq!(r.tick(5.0 / 60.0 + 0.001), 1);
        assert!(!r.is_running());
        assert_eq!(r.game().steps, 1);
        assert_eq!(r.tick(1.0 / 60.0), 0);
        assert!(r.records().is_empty());
    }
}
