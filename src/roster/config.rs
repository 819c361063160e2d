use crate::error::{Result, RosterError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "> ";

/// Environment variable overriding the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// JSON file the roster is seeded from at startup
    #[serde(default)]
    pub roster_file: Option<PathBuf>,

    /// Prompt shown before each line in interactive mode
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            roster_file: None,
            prompt: default_prompt(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// The directory config is read from: `$ROSTER_CONFIG_DIR`, else the
    /// platform config directory.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| RosterError::Config("Could not determine config dir".to_string()))
    }

    /// Resolves a relative `roster_file` against the config directory.
    pub fn roster_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.roster_file.as_ref().map(|file| {
            if file.is_absolute() {
                file.clone()
            } else {
                config_dir.join(file)
            }
        })
    }
}
