pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalDirectoryStore;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::scaffold::{plan_project_tree, Scaffolder};
pub use domain::model::{CreationLog, Layout, RunConfig, ScaffoldOutcome, ScaffoldPlan, Year};
pub use utils::error::{Result, ScaffoldError};
