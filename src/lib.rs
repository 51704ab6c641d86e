pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, RunConfig};
pub use core::{
    engine::{CalcEngine, RunOutcome},
    pipeline::RomanPipeline,
};
pub use domain::model::{LineOutcome, Operator, ProcessReport};
pub use utils::error::{CalcError, Result};
