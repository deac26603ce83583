//! Output formatters for zklint command results.
//!
//! Provides two output modes:
//! - **Human** (default): compact rustc-style diagnostics for terminal users
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;

use zklint_rules::types::{LintReport, RuleMeta};

pub trait OutputFormatter {
    fn format_check(&self, report: &LintReport) -> String;
    fn format_rules(&self, rules: &[&'static RuleMeta]) -> String;
}
