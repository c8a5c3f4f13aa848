mod dims;
mod env;
mod error;
mod status;
mod transition;

pub use dims::Dims;
pub use env::{Env, ResetOptions};
pub use error::{ConfigError, EnvError};
pub use status::{Done, Status};
pub use transition::{Info, Transition};
