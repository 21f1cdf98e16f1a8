pub mod config;
pub mod error;
pub mod grape;
pub mod pipeline;
pub mod types;

pub use config::{ConfigError, ConfigLoader, GrapesConfig, StageDefaults};
pub use error::{GrapeError, GrapeResult};
pub use grape::Grape;
pub use pipeline::Pipeline;
pub use types::ErrorKind;
