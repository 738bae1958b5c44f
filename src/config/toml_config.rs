use crate::config::DisplayFormat;
use crate::core::store::JobStore;
use crate::utils::error::{JobBoardError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    pub seed: Option<SeedConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: DisplayFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub path: String,
}

impl ShellConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| JobBoardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown names as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| JobBoardError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn seed_path(&self) -> Option<&str> {
        self.seed.as_ref().map(|s| s.path.as_str())
    }

    /// Reads and parses the seed file, if one is configured.
    pub fn load_seed(&self) -> Result<Option<serde_json::Value>> {
        match self.seed_path() {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(Some(serde_json::from_str(&content)?))
            }
            None => Ok(None),
        }
    }

    /// Loads the configured seed file into `store`, returning how many jobs
    /// it added. Read, parse and validation failures all surface here.
    pub fn preload_seed(&self, store: &mut JobStore) -> Result<Option<usize>> {
        match self.load_seed()? {
            Some(seed) => Ok(Some(store.load_seed(&seed)?)),
            None => Ok(None),
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.seed_path() {
            validate_path("seed.path", path)?;
        }
        Ok(())
    }
}
