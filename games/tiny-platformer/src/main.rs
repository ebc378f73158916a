//! Headless run of Tiny Platformer: plays a short scripted session and writes
//! the per-frame position log.
//!
//! Environment:
//! - `PLATFORMER_FRAMES`: frames to run (default 12)
//! - `PLATFORMER_LOG`: log file path (default `logs/game.log`)
//! - `RUST_LOG`: diagnostic log filter (default `info`)

use std::env;
use std::io;

use serde::Serialize;

use hop_engine::Player;
use hop_runner::{FrameLog, GameRunner, RunnerError};
use tiny_platformer::{Hud, PlatformerGame, Script};

const DEFAULT_FRAMES: u64 = 12;
const DEFAULT_LOG: &str = "logs/game.log";

#[derive(Serialize)]
struct RunSummary {
    frames: u64,
    log_lines: u64,
    player: Player,
    hud: Hud,
}

fn main() -> Result<(), RunnerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frames = match env::var("PLATFORMER_FRAMES") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("PLATFORMER_FRAMES={raw:?} is not a number, using {DEFAULT_FRAMES}");
            DEFAULT_FRAMES
        }),
        Err(_) => DEFAULT_FRAMES,
    };
    let log_path = env::var("PLATFORMER_LOG").unwrap_or_else(|_| DEFAULT_LOG.to_string());

    let mut frame_log = FrameLog::create(&log_path)?;
    let mut runner = GameRunner::new(PlatformerGame::new())?;
    runner.init();

    let script = Script::demo();
    let dt = runner.config().fixed_dt;
    for frame in 0..frames {
        if !runner.is_running() {
            break;
        }
        for event in script.events_at(frame) {
            runner.push_input(event);
        }
        runner.tick(dt);
        frame_log.record_all(runner.records())?;
        for event in runner.events() {
            log::debug!("frame {}: {:?}", runner.frame(), event);
        }
    }
    frame_log.flush()?;

    let game = runner.game();
    let summary = RunSummary {
        frames: runner.frame(),
        log_lines: frame_log.lines(),
        player: *game.player(),
        hud: game.hud(),
    };
    for line in summary.hud.lines() {
        log::info!("{line}");
    }

    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &summary).map_err(io::Error::from)?;
    println!();
    Ok(())
}
