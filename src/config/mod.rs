pub mod toml_config;

use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

/// How session outcomes are written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "job-board")]
#[command(about = "Interactive in-memory job posting manager")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON file with an array of jobs to preload
    #[arg(long)]
    pub seed: Option<String>,

    /// Output format, overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<DisplayFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layers command line flags over the file configuration, if any.
    pub fn resolve(&self) -> crate::Result<toml_config::ShellConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::ShellConfig::from_file(path)?,
            None => toml_config::ShellConfig::default(),
        };

        if let Some(format) = self.format {
            config.display.format = format;
        }
        if let Some(seed) = &self.seed {
            config.seed = Some(toml_config::SeedConfig { path: seed.clone() });
        }

        Ok(config)
    }
}
