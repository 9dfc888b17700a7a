pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::{driver::Driver, render::render};
pub use domain::model::{City, Client, Pokemon};
pub use domain::ports::ScenarioProvider;
pub use utils::error::{DemoError, Result};
