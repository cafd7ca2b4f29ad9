// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for accessweb

use crate::contrast::{ConformanceLevel, ContrastEvaluator};
use crate::error::{AuditError, Result};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contrast: ContrastConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    pub fn evaluator(&self) -> ContrastEvaluator {
        ContrastEvaluator::new(self.contrast.level)
            .with_strict_normalization(self.contrast.strict_wcag_normalization)
    }
}

/// Contrast threshold policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastConfig {
    #[serde(default)]
    pub level: ConformanceLevel,

    /// Divide lighter by darker luminance. When false the foreground
    /// luminance is always the numerator.
    #[serde(default = "default_true")]
    pub strict_wcag_normalization: bool,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            level: ConformanceLevel::default(),
            strict_wcag_normalization: true,
        }
    }
}

/// Which files a directory scan picks up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

fn default_skip_dirs() -> Vec<String> {
    [
        "node_modules", ".git", "target", "dist", "build",
        "_build", "vendor", ".next", ".nuxt", "coverage",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Get the default config path
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".accessweb.toml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(&Config::default())
        .map_err(|e| AuditError::Config(format!("TOML serialize error: {}", e)))?;

    std::fs::write(path, content)?;
    Ok(())
}
