use serde::Serialize;

use hop_engine::{
    cut_jump, reset, step, Action, ClimbProgress, EngineContext, FrameRecord, Game, GameConfig,
    GameEvent, InputQueue, KeyEdge, KeyState, Level, Motion, Player, WorldParams, JUMP_CUT,
};

/// Vertical-climb platformer: one player, a fixed level, adjustable gravity and jump.
pub struct PlatformerGame {
    player: Player,
    params: WorldParams,
    level: Level,
    keys: KeyState,
}

/// Heads-up display values, recomputed on demand.
#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    pub on_ground: bool,
    pub gravity: f32,
    pub jump_strength: f32,
    pub progress: ClimbProgress,
}

impl Hud {
    pub fn lines(&self) -> Vec<String> {
        vec![
            "A/D or Left/Right: Move".to_string(),
            "Space/W/Up: Jump".to_string(),
            "PgUp/PgDn: Gravity +/-".to_string(),
            "-/=: Jump strength -/+".to_string(),
            "R: Reset, Esc: Quit".to_string(),
            format!("On ground: {}", if self.on_ground { "yes" } else { "no" }),
            format!("Gravity: {:.0} px/s^2", self.gravity),
            format!("Jump: {:.0} px/s", self.jump_strength),
            format!(
                "Height: {:.0} / {:.0} px ({:.0}%)",
                self.progress.climbed,
                self.progress.total,
                self.progress.fraction * 100.0
            ),
        ]
    }
}

impl PlatformerGame {
    pub fn new() -> Self {
        Self::with_level(Level::standard())
    }

    pub fn with_level(level: Level) -> Self {
        Self {
            player: reset(),
            params: WorldParams::default(),
            level,
            keys: KeyState::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn hud(&self) -> Hud {
        Hud {
            on_ground: self.player.grounded,
            gravity: self.params.gravity(),
            jump_strength: self.params.jump_strength(),
            progress: self.level.climb_progress(self.player.pos.y),
        }
    }

    /// Back to the spawn point with default gravity and jump strength.
    fn reset(&mut self, ctx: &mut EngineContext) {
        self.player = reset();
        self.params = WorldParams::default();
        ctx.emit_event(GameEvent::Reset);
        log::info!("PlatformerGame: reset at frame {}", ctx.frame());
    }

    fn handle_key(&mut self, ctx: &mut EngineContext, edge: KeyEdge) {
        match edge {
            KeyEdge::Pressed(Action::GravityUp) => {
                let g = self.params.increase_gravity();
                ctx.emit_event(GameEvent::GravityChanged(g));
                log::info!("gravity: {:.0} px/s^2", g);
            }
            KeyEdge::Pressed(Action::GravityDown) => {
                let g = self.params.decrease_gravity();
                ctx.emit_event(GameEvent::GravityChanged(g));
                log::info!("gravity: {:.0} px/s^2", g);
            }
            KeyEdge::Pressed(Action::JumpUp) => {
                let j = self.params.increase_jump();
                ctx.emit_event(GameEvent::JumpStrengthChanged(j));
                log::info!("jump strength: {:.0} px/s", j);
            }
            KeyEdge::Pressed(Action::JumpDown) => {
                let j = self.params.decrease_jump();
                ctx.emit_event(GameEvent::JumpStrengthChanged(j));
                log::info!("jump strength: {:.0} px/s", j);
            }
            KeyEdge::Pressed(Action::Reset) => self.reset(ctx),
            KeyEdge::Pressed(Action::Quit) => ctx.request_quit(),
            // Variable jump height: letting go early cuts the rise short.
            KeyEdge::Released(Action::Jump) => self.player = cut_jump(self.player, JUMP_CUT),
            _ => {}
        }
    }
}

impl Default for PlatformerGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PlatformerGame {
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        self.player = reset();
        self.params = WorldParams::default();
        self.keys.clear();
        log::info!(
            "PlatformerGame: {} platforms, spawn at ({}, {})",
            self.level.platforms().len(),
            self.player.pos.x,
            self.player.pos.y
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for edge in self.keys.apply(input) {
            self.handle_key(ctx, edge);
        }
        if ctx.quit_requested() {
            return;
        }

        let intent = self.keys.take_intent();
        let before = self.player;
        self.player = step(before, self.level.platforms(), intent, &self.params, ctx.dt());

        match (before.motion(), self.player.motion()) {
            (Motion::Grounded, Motion::Airborne) if intent.jump_pressed => {
                ctx.emit_event(GameEvent::Jumped)
            }
            (Motion::Grounded, Motion::Airborne) => ctx.emit_event(GameEvent::WalkedOffEdge),
            (Motion::Airborne, Motion::Grounded) => ctx.emit_event(GameEvent::Landed),
            _ => {}
        }

        if self.player.fell_out(self.level.fall_limit()) {
            log::warn!("player fell out at y={:.1}, resetting", self.player.pos.y);
            ctx.emit_event(GameEvent::FellOut);
            self.reset(ctx);
        }
    }

    fn frame_record(&self) -> Option<FrameRecord> {
        Some(FrameRecord::from(&self.player))
    }
}
