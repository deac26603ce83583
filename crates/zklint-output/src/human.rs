use crate::OutputFormatter;
use zklint_core::types::Finding;
use zklint_rules::types::{LintReport, RuleMeta};

pub struct HumanFormatter;

fn format_finding(f: &Finding) -> String {
    format!(
        "{}[{}]: {}\n  --> {}:{}:{}\n   = rule: {}\n",
        f.severity, f.code, f.message, f.file, f.span.line, f.span.column, f.rule,
    )
}

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, report: &LintReport) -> String {
        if report.is_clean() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();

        for f in &report.errors {
            out.push_str(&format_finding(f));
        }
        for f in &report.warnings {
            out.push_str(&format_finding(f));
        }

        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {} file(s)\n",
            report.errors.len(),
            report.warnings.len(),
            report.files_analyzed.len(),
        ));

        out
    }

    fn format_rules(&self, rules: &[&'static RuleMeta]) -> String {
        let mut out = String::new();
        for meta in rules {
            out.push_str(&format!(
                "{}  {:<26}  {:<7}  {}\n",
                meta.code,
                meta.name,
                meta.default_severity.as_str(),
                meta.message,
            ));
        }
        out
    }
}
