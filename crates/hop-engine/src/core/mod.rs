pub mod aabb;
pub mod error;
pub mod level;
pub mod params;
pub mod physics;
pub mod time;
