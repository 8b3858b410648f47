use crate::error::{AdrError, Result};
use crate::format::DocumentFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STATUS: &str = "proposed";

/// Environment variable that overrides where the config file lives.
pub const CONFIG_DIR_ENV: &str = "ADR_ER_CONFIG_DIR";

/// User configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdrConfig {
    /// Output format for new records
    #[serde(default)]
    pub format: DocumentFormat,

    /// Status used when none is given
    #[serde(default = "default_status")]
    pub default_status: String,

    /// Allowed status values
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,

    /// Extra templates layered over the bundled ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_statuses() -> Vec<String> {
    ["proposed", "accepted", "rejected", "deprecated", "superceded"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AdrConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::default(),
            default_status: default_status(),
            statuses: default_statuses(),
            template_dir: None,
        }
    }
}

impl AdrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| AdrError::io(&config_path, e))?;
        let config: AdrConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| AdrError::io(config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| AdrError::io(&config_path, e))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["format", "default-status", "template-dir"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "format" => Some(self.format.to_string()),
            "default-status" => Some(self.default_status.clone()),
            "template-dir" => Some(
                self.template_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "format" => {
                self.format = value.parse()?;
            }
            "default-status" => {
                if !self.is_known_status(value) {
                    return Err(AdrError::validation(
                        "default-status",
                        format!("must be one of: {}", self.statuses.join(", ")),
                    ));
                }
                self.default_status = value.to_string();
            }
            "template-dir" => {
                if value.is_empty() {
                    self.template_dir = None;
                    return Ok(());
                }
                let dir = PathBuf::from(value);
                if !dir.is_dir() {
                    return Err(AdrError::validation(
                        "template-dir",
                        format!("{} is not a directory", value),
                    ));
                }
                self.template_dir = Some(dir);
            }
            _ => return Err(AdrError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn is_known_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }
}
