pub mod error;
pub mod frame_log;
pub mod runner;

pub use error::RunnerError;
pub use frame_log::FrameLog;
pub use runner::GameRunner;
