pub mod intent;
pub mod keys;
pub mod queue;
