pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod processing;

pub use config::{Config, ConfigFormat};
pub use data::*;
pub use error::{ManipulatorError, Result};
pub use pipeline::{Pipeline, PipelineReport};
pub use processing::*;
