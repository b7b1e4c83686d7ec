use crate::event::StreamIdentity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error while loading or parsing a config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config io error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Top-level generator configuration. Every section has defaults, so an
/// empty file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Optional RNG seed for deterministic output.
    pub seed: Option<u64>,
    /// Fixed stream identity stamped onto every event.
    pub stream: StreamConfig,
    /// Emission loop pacing.
    pub emitter: EmitterConfig,
    /// Durable sink target.
    pub output: OutputConfig,
}

impl Config {
    /// Loads a config file from TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Constant descriptive metadata, fixed at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub name: String,
    pub service: String,
    pub source: String,
    pub host: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            name: "service-logs/app-container/instance-001".to_string(),
            service: "log-generator".to_string(),
            source: "logsynth".to_string(),
            host: "localhost".to_string(),
        }
    }
}

impl StreamConfig {
    pub fn identity(&self) -> StreamIdentity {
        StreamIdentity {
            stream: self.name.clone(),
            service: self.service.clone(),
            source: self.source.clone(),
            host: self.host.clone(),
        }
    }
}

/// Emission loop pacing controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Delay between events in milliseconds.
    pub interval_ms: u64,
    /// Optional cap on the number of events before the loop stops.
    pub max_events: Option<u64>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            max_events: None,
        }
    }
}

/// Durable sink target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Append target for newline-delimited JSON events.
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "custom.log".to_string(),
        }
    }
}
