//! Pipeline configuration: file loading, the flat key store, and per-pipeline
//! resolution.

mod loader;
mod pipeline;
mod store;

pub use loader::{bundled, load, ConfigError, ConfigOutcome, LoadedConfig, BUNDLED_CONFIG};
pub use pipeline::PipelineConfig;
pub use store::{ConfigFormat, ConfigStore};
