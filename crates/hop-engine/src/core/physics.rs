//! Platformer physics: integration, gravity, jumping and AABB collision
//! resolution against static platforms.
//!
//! Every function here is pure. The caller owns the [`Player`] and the
//! [`WorldParams`] and passes them in each frame; nothing is retained between
//! calls.
//!
//! Collision policy:
//! - platforms are solid from every side (floors, ceilings and walls);
//! - the horizontal move is resolved before the vertical move;
//! - motion is swept against the edge crossed during the step, so a fast
//!   fall cannot tunnel through a thin platform;
//! - when several platforms qualify, the first surface along the direction of
//!   travel wins.

use glam::Vec2;

use crate::components::player::Player;
use crate::core::aabb::Aabb;
use crate::core::error::{check_dt, check_finite, EngineError};
use crate::core::params::WorldParams;
use crate::input::intent::MoveIntent;

/// Horizontal run speed in px/s.
pub const MOVE_SPEED: f32 = 300.0;
/// Distance under which a player edge counts as touching a platform edge.
pub const CONTACT_EPSILON: f32 = 1e-3;
/// Factor applied to upward velocity when the jump key is released early.
pub const JUMP_CUT: f32 = 0.45;

/// Advance the player by one time slice.
///
/// Preconditions: `dt` is finite and positive, `params` are finite. They are
/// asserted in debug builds; use [`try_step`] when the inputs are not trusted.
pub fn step(
    player: Player,
    platforms: &[Aabb],
    intent: MoveIntent,
    params: &WorldParams,
    dt: f32,
) -> Player {
    debug_assert!(dt.is_finite() && dt > 0.0, "dt must be finite and > 0, got {dt}");
    debug_assert!(params.gravity().is_finite() && params.jump_strength().is_finite());

    let mut next = player;
    next.vel.x = intent.horizontal() * MOVE_SPEED;

    if next.grounded {
        next.vel.y = 0.0;
    } else {
        next.vel.y += params.gravity() * dt;
    }

    if intent.jump_pressed && next.grounded {
        next.vel.y = -params.jump_strength();
        next.grounded = false;
    }

    move_horizontal(&mut next, platforms, dt);

    if next.grounded && !has_support(&next, platforms) {
        next.grounded = false;
    }

    if !next.grounded {
        move_vertical(&mut next, platforms, dt);
    }

    next
}

/// [`step`] with its preconditions checked instead of asserted.
pub fn try_step(
    player: Player,
    platforms: &[Aabb],
    intent: MoveIntent,
    params: &WorldParams,
    dt: f32,
) -> Result<Player, EngineError> {
    check_dt(dt)?;
    check_finite("gravity", params.gravity())?;
    check_finite("jump_strength", params.jump_strength())?;
    Ok(step(player, platforms, intent, params, dt))
}

/// The spawn state, independent of whatever happened before.
pub fn reset() -> Player {
    Player::spawn()
}

/// Shorten a jump: scale upward velocity by `factor`. No effect unless rising.
pub fn cut_jump(player: Player, factor: f32) -> Player {
    let mut next = player;
    if next.vel.y < 0.0 {
        next.vel.y *= factor;
    }
    next
}

/// Whether a platform top sits directly under the player's feet.
pub fn has_support(player: &Player, platforms: &[Aabb]) -> bool {
    let bounds = player.bounds();
    platforms
        .iter()
        .any(|s| bounds.overlaps_x(s) && (bounds.bottom() - s.top()).abs() <= CONTACT_EPSILON)
}

fn move_horizontal(player: &mut Player, platforms: &[Aabb], dt: f32) {
    let dx = player.vel.x * dt;
    if dx == 0.0 {
        return;
    }

    let before = player.bounds();
    let after = before.translated(Vec2::new(dx, 0.0));

    let stop_x = if dx > 0.0 {
        platforms
            .iter()
            .filter(|s| {
                after.overlaps_y(s)
                    && before.right() <= s.left() + CONTACT_EPSILON
                    && after.right() > s.left()
            })
            .map(|s| s.left())
            .reduce(f32::min)
            .map(|left| left - player.size.x)
    } else {
        platforms
            .iter()
            .filter(|s| {
                after.overlaps_y(s)
                    && before.left() >= s.right() - CONTACT_EPSILON
                    && after.left() < s.right()
            })
            .map(|s| s.right())
            .reduce(f32::max)
    };

    match stop_x {
        Some(x) => {
            player.pos.x = x;
            player.vel.x = 0.0;
        }
        None => player.pos.x = after.pos.x,
    }
}

fn move_vertical(player: &mut Player, platforms: &[Aabb], dt: f32) {
    let before = player.bounds();
    let after = before.translated(Vec2::new(0.0, player.vel.y * dt));

    if player.vel.y >= 0.0 {
        // Highest top crossed by the bottom edge.
        let landing = platforms
            .iter()
            .filter(|s| {
                after.overlaps_x(s)
                    && before.bottom() <= s.top() + CONTACT_EPSILON
                    && after.bottom() >= s.top()
            })
            .map(|s| s.top())
            .reduce(f32::min);

        if let Some(top) = landing {
            player.pos.y = top - player.size.y;
            player.vel.y = 0.0;
            player.grounded = true;
            return;
        }
    } else {
        // Lowest bottom crossed by the top edge.
        let ceiling = platforms
            .iter()
            .filter(|s| {
                after.overlaps_x(s)
                    && before.top() >= s.bottom() - CONTACT_EPSILON
                    && after.top() < s.bottom()
            })
            .map(|s| s.bottom())
            .reduce(f32::max);

        if let Some(bottom) = ceiling {
            player.pos.y = bottom;
            player.vel.y = 0.0;
            return;
        }
    }

    player.pos.y = after.pos.y;
}
