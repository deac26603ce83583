use serde_json::json;

use crate::OutputFormatter;
use zklint_rules::types::{LintReport, RuleMeta};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, report: &LintReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_rules(&self, rules: &[&'static RuleMeta]) -> String {
        let listing: Vec<_> = rules
            .iter()
            .map(|meta| {
                json!({
                    "code": meta.code,
                    "name": meta.name,
                    "default_severity": meta.default_severity.as_str(),
                    "recommended": meta.recommended,
                    "message": meta.message,
                })
            })
            .collect();
        serde_json::to_string_pretty(&listing).unwrap_or_default()
    }
}
