use serde::{Deserialize, Serialize};
use zklint_core::types::{Finding, Severity};

/// Static metadata declared by every rule.
#[derive(Debug)]
pub struct RuleMeta {
    /// Stable code, e.g. "C001".
    pub code: &'static str,
    /// Rule name used in configuration, e.g. "no-if-in-circuit".
    pub name: &'static str,
    /// The single diagnostic message this rule emits.
    pub message: &'static str,
    pub default_severity: Severity,
    /// Whether the rule participates in the recommended bundle.
    pub recommended: bool,
}

/// Result of one full lint run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    pub version: String,
    pub command: String,
    /// "ok" | "warning" | "error"
    pub status: String,
    pub files_analyzed: Vec<String>,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
