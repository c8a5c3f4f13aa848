mod scripted;
mod slide_jump;
mod time_limit;

pub use scripted::ScriptedEnv;
pub use slide_jump::{SlideJump, SlideJumpConfig};
pub use time_limit::TimeLimit;
