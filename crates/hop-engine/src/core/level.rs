use serde::{Deserialize, Serialize};

use crate::core::aabb::Aabb;

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

const FLOOR_THICKNESS: f32 = 40.0;
const WALL_THICKNESS: f32 = 40.0;
const WALL_TOP: f32 = -5000.0;
const WALL_HEIGHT: f32 = 10000.0;

const PLATFORM_W: f32 = 200.0;
const PLATFORM_H: f32 = 20.0;
const PLATFORM_COUNT: usize = 59;
const PLATFORM_SPACING: f32 = 90.0;
const FIRST_ROW_Y: f32 = WORLD_HEIGHT - 100.0;
const SIDE_MARGIN: f32 = 60.0;
/// Platforms narrower than this do not count toward the climb height.
const MIN_GOAL_WIDTH: f32 = 100.0;

/// How far up the level the player has climbed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimbProgress {
    pub climbed: f32,
    pub total: f32,
    /// `climbed / total`, clamped to 0..=1.
    pub fraction: f32,
}

/// Fixed, ordered platform geometry for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    platforms: Vec<Aabb>,
    base_y: f32,
    top_y: f32,
}

impl Level {
    /// Build a level from arbitrary platforms. `base_y` is the floor surface.
    pub fn new(platforms: Vec<Aabb>, base_y: f32) -> Self {
        let top_y = platforms
            .iter()
            .filter(|p| p.left() >= 0.0 && p.left() < WORLD_WIDTH && p.size.x >= MIN_GOAL_WIDTH)
            .map(|p| p.top())
            .reduce(f32::min)
            .unwrap_or(base_y - 1.0);
        Self {
            platforms,
            base_y,
            top_y,
        }
    }

    /// The vertical climb: a floor, two side walls and 59 ascending platforms
    /// zig-zagging between the left, middle and right of the screen.
    pub fn standard() -> Self {
        let base_y = WORLD_HEIGHT - FLOOR_THICKNESS;
        let mut platforms = vec![
            Aabb::new(0.0, base_y, WORLD_WIDTH, FLOOR_THICKNESS),
            Aabb::new(-WALL_THICKNESS, WALL_TOP, WALL_THICKNESS, WALL_HEIGHT),
            Aabb::new(WORLD_WIDTH, WALL_TOP, WALL_THICKNESS, WALL_HEIGHT),
        ];

        let columns = [
            SIDE_MARGIN,
            WORLD_WIDTH / 2.0 - PLATFORM_W / 2.0,
            WORLD_WIDTH - PLATFORM_W - SIDE_MARGIN,
        ];
        for i in 1..=PLATFORM_COUNT {
            let x = columns[i % columns.len()];
            let y = FIRST_ROW_Y - PLATFORM_SPACING * i as f32;
            platforms.push(Aabb::new(x, y, PLATFORM_W, PLATFORM_H));
        }

        Self::new(platforms, base_y)
    }

    pub fn platforms(&self) -> &[Aabb] {
        &self.platforms
    }

    /// Floor surface.
    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    /// Highest goal platform surface.
    pub fn top_y(&self) -> f32 {
        self.top_y
    }

    /// Below this the player is considered lost and the game resets it.
    pub fn fall_limit(&self) -> f32 {
        self.base_y + WORLD_HEIGHT
    }

    /// Progress for a player whose top edge is at `y`.
    pub fn climb_progress(&self, y: f32) -> ClimbProgress {
        let total = (self.base_y - self.top_y).max(1.0);
        let climbed = (self.base_y - y).max(0.0);
        ClimbProgress {
            climbed,
            total,
            fraction: (climbed / total).clamp(0.0, 1.0),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::player::Player;
    use crate::core::physics::has_support;

    #[test]
    fn standard_layout() {
        let level = Level::standard();
        assert_eq!(level.platforms().len(), 3 + 59);
        assert_eq!(level.base_y(), 560.0);

        let first = level.platforms()[3];
        assert_eq!(first, Aabb::new(300.0, 410.0, 200.0, 20.0));
        let second = level.platforms()[4];
        assert_eq!(second, Aabb::new(540.0, 320.0, 200.0, 20.0));
        let third = level.platforms()[5];
        assert_eq!(third, Aabb::new(60.0, 230.0, 200.0, 20.0));
    }

    #[test]
    fn top_is_highest_platform() {
        let level = Level::standard();
        assert_eq!(level.top_y(), 500.0 - 90.0 * 59.0);
    }

    #[test]
    fn spawn_rests_on_the_floor() {
        let level = Level::standard();
        let player = Player::spawn();
        assert_eq!(player.bounds().bottom(), level.base_y());
        assert!(has_support(&player, level.platforms()));
    }

    #[test]
    fn progress_is_clamped() {
        let level = Level::standard();
        let below = level.climb_progress(level.base_y() + 100.0);
        assert_eq!(below.climbed, 0.0);
        assert_eq!(below.fraction, 0.0);

        let above = level.climb_progress(level.top_y() - 500.0);
        assert_eq!(above.fraction, 1.0);

        let half = level.climb_progress((level.base_y() + level.top_y()) / 2.0);
        assert!((half.fraction - 0.5).abs() < 1e-4);
    }

    #[test]
    fn empty_level_has_unit_total() {
        let level = Level::new(Vec::new(), 100.0);
        assert_eq!(level.top_y(), 99.0);
        assert_eq!(level.climb_progress(100.0).total, 1.0);
    }
}
