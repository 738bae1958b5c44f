pub mod config;
pub mod core;
pub mod domain;
pub mod shell;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::ShellConfig, DisplayFormat};
pub use core::store::JobStore;
pub use domain::model::{ClearTarget, Company, Job, JobUpdate, Listing};
pub use shell::Shell;
pub use utils::error::{JobBoardError, Result};
