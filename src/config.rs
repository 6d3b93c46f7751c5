//! Application configuration.
//!
//! Configuration is stored in `.ticketdesk/config.yaml` and includes:
//! - The accordion mode to start in
//! - An initial title query
//! - Where tickets come from and how long the demo source takes to answer

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::accordion::AccordionMode;
use crate::error::{Result, TicketDeskError};
use crate::paths::config_path;
use crate::source::{FileTicketSource, InMemoryTicketSource, TicketSource};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Accordion mode (default: single)
    #[serde(default)]
    pub mode: AccordionMode,

    /// Initial title query (default: empty)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,

    /// Ticket source settings
    #[serde(default)]
    pub source: SourceConfig,
}

/// Where tickets are loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// YAML or JSON ticket file; the built-in demo tickets are used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Simulated latency of the demo source in milliseconds (default: 100)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    100
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: None,
            latency_ms: default_latency_ms(),
        }
    }
}

impl SourceConfig {
    /// Build the configured ticket source.
    pub fn build(&self) -> Result<Box<dyn TicketSource>> {
        match &self.path {
            Some(path) => Ok(Box::new(FileTicketSource::new(path))),
            None => Ok(Box::new(
                InMemoryTicketSource::seeded()?
                    .with_latency(Duration::from_millis(self.latency_ms)),
            )),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if missing.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TicketDeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| TicketDeskError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    /// Save configuration to an explicit file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                TicketDeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            TicketDeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })
    }
}
