pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod scenes;
pub mod traits;
pub mod types;

pub use config::CaptureConfig;
pub use crate::core::{run_pipeline, CaptureLoop, MemoryHost, PipelineReport};
pub use error::{CaptureError, HostError};
pub use traits::SceneHost;
