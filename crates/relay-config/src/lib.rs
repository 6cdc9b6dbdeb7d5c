use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE: &str = "relay.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// How turn reports are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console narration with handoff banners
    #[default]
    Text,
    /// One JSON object per turn
    Json,
}

impl OutputFormat {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" | "jsonl" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings for the relay CLI, read from ~/.relay/relay.toml
///
/// Missing keys take their defaults, so a file only needs the values it
/// overrides. Command line flags override the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    // Paths
    pub relay_home: PathBuf,
    pub transcripts_dir: PathBuf,

    // Session defaults
    pub default_demo: String,
    pub output: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_timeout_secs: Option<u64>,

    /// Seed for the adventure dice; unset means a fresh game every run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        let home = default_home();

        Self {
            transcripts_dir: home.join("transcripts"),
            relay_home: home,
            default_demo: "travel".to_string(),
            output: OutputFormat::Text,
            turn_timeout_secs: None,
            rng_seed: None,
        }
    }
}

/// ~/.relay, or ./.relay when no home directory is known
pub fn default_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".relay")
}

impl RelayConfig {
    /// Load config from ~/.relay/relay.toml, writing the defaults there on first use
    pub fn load() -> Result<Self> {
        Self::load_or_init(&default_home().join(CONFIG_FILE))
    }

    /// Load `path`, or write the defaults there if it does not exist yet
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `relay_home/relay.toml`
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.relay_home.join(CONFIG_FILE)
    }

    pub fn validate(&self) -> Result<()> {
        if self.turn_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "turn_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.default_demo.trim().is_empty() {
            return Err(ConfigError::Invalid("default_demo is empty".to_string()));
        }
        Ok(())
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.relay_home, &self.transcripts_dir] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn turn_timeout(&self) -> Option<Duration> {
        self.turn_timeout_secs.map(Duration::from_secs)
    }

    /// Where a transcript named `name` is written
    pub fn transcript_path(&self, name: &str) -> PathBuf {
        self.transcripts_dir.join(format!("{}.json", name))
    }
}
