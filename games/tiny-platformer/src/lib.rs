pub mod game;
pub mod script;

pub use game::{Hud, PlatformerGame};
pub use script::Script;
