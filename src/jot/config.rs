use crate::error::{JotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "jot.config.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Configuration for jot, read from `jot.config.json` in the working
/// directory when present. Everything has a default; the file is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Name of the persisted notes document.
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            notes_file: DEFAULT_NOTES_FILE.to_string(),
        }
    }
}

impl JotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotError::Io)?;
        let config: JotConfig = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotError::Serialization)?;
        fs::write(config_path, content).map_err(JotError::Io)?;
        Ok(())
    }

    pub fn notes_file(&self) -> &str {
        &self.notes_file
    }
}
