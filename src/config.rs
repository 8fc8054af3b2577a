use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FlutterdocError, Result};

/// Config file names probed, in order, when no explicit path is given
pub const CONFIG_CANDIDATES: [&str; 3] = [
    "Flutterdoc.toml",
    "flutterdoc.toml",
    ".flutterdoc.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Declaration lookup settings
    #[serde(default)]
    pub locator: LocatorConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Trailing text (after trimming) that closes a declaration line
    #[serde(default = "default_block_openers")]
    pub block_openers: Vec<String>,

    /// Maximum number of lines scanned after the reference line (unbounded when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_scan_lines: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format for `generate`
    #[serde(default)]
    pub format: OutputFormat,

    /// Log the success message after a comment is generated
    #[serde(default = "default_notify")]
    pub notify: bool,
}

/// What `generate` writes to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The whole buffer with the comment inserted
    #[default]
    Buffer,
    /// A JSON text edit for editor adapters
    Edit,
    /// Only the inserted comment text
    Block,
}

fn default_block_openers() -> Vec<String> {
    vec![") {".to_string(), ") async {".to_string()]
}

fn default_notify() -> bool {
    true
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            block_openers: default_block_openers(),
            max_scan_lines: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            notify: default_notify(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| FlutterdocError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlutterdocError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => {
                if p.as_ref().exists() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                for candidate in &CONFIG_CANDIDATES {
                    if Path::new(candidate).exists() {
                        return Self::load(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.locator.block_openers.iter().all(|m| m.trim().is_empty()) {
            return Err(FlutterdocError::Config(
                "locator.block_openers must contain at least one non-empty marker".to_string(),
            ));
        }
        Ok(())
    }
}
