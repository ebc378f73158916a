pub mod api;
pub mod components;
pub mod core;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{FrameRecord, GameEvent};
pub use components::player::{Motion, Player, PLAYER_SIZE, SPAWN_POS};
pub use crate::core::aabb::Aabb;
pub use crate::core::error::EngineError;
pub use crate::core::level::{ClimbProgress, Level};
pub use crate::core::params::{ParamRange, WorldParams, GRAVITY_RANGE, JUMP_RANGE};
pub use crate::core::physics::{cut_jump, reset, step, try_step, JUMP_CUT, MOVE_SPEED};
pub use crate::core::time::FixedTimestep;
pub use input::intent::MoveIntent;
pub use input::keys::{Action, KeyEdge, KeyState};
pub use input::queue::{InputEvent, InputQueue};
