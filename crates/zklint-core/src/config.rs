//! Configuration file loading for zklint.
//!
//! Reads `zklint.json` from the project root and provides typed access to
//! all settings. Falls back to sensible defaults when the config file is
//! missing or incomplete.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Severity;

pub const CONFIG_FILE_NAME: &str = "zklint.json";

/// Top-level zklint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZklintConfig {
    pub version: String,
    /// Per-rule severity overrides, keyed by rule name
    /// (e.g. `"no-if-in-circuit": "off"`).
    #[serde(default)]
    pub rules: BTreeMap<String, Severity>,
    /// Additional glob patterns to exclude from analysis.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Default for ZklintConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            rules: BTreeMap::new(),
            ignore_patterns: vec![],
        }
    }
}

impl ZklintConfig {
    /// Load configuration from `<root>/zklint.json`. A missing or
    /// unreadable file yields the defaults; a malformed file is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Ok(Self::default()),
        };
        serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Malformed(path.display().to_string(), e.to_string()))
    }

    /// Effective severity for a rule: the configured override if present,
    /// otherwise the rule's declared default.
    pub fn severity_for(&self, rule_name: &str, default: Severity) -> Severity {
        self.rules.get(rule_name).copied().unwrap_or(default)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config {0}: {1}")]
    Malformed(String, String),
}
