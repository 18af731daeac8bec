//! Configuration for tasklist

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scheduler::RedoPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether add/remove discard redo history
    #[serde(default)]
    pub redo_policy: RedoPolicy,

    /// Prompt shown by the interactive session
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_prompt() -> String {
    crate::DEFAULT_PROMPT.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redo_policy: RedoPolicy::default(),
            prompt: default_prompt(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("tasklist").join("config.yml")),
            Some(PathBuf::from("tasklist.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
            }
        }

        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
