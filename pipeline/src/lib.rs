mod config;
mod pipeline;

pub use config::{PipelineConfig, StageConfig};
pub use pipeline::Pipeline;
