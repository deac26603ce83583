//! The lint engine: one traversal per file, one finish pass per rule.

use std::collections::BTreeMap;

use tree_sitter::Node;
use zklint_core::config::ZklintConfig;
use zklint_core::types::{Finding, Severity};
use zklint_parsers::parser::SourceUnit;

use crate::registry;
use crate::rule::{FileCtx, Rule, Sink};
use crate::types::LintReport;

/// Orchestrates a lint run. Rule instances are created fresh per run, so
/// two runs over the same input are fully isolated (and a server process
/// can lint several projects concurrently from separate engines).
pub struct LintEngine {
    severities: BTreeMap<String, Severity>,
}

impl LintEngine {
    pub fn new(config: &ZklintConfig) -> Self {
        Self {
            severities: registry::effective_severities(config),
        }
    }

    pub fn run(&self, files: &[SourceUnit]) -> LintReport {
        let mut rules: Vec<Box<dyn Rule>> = registry::all_rules()
            .into_iter()
            .filter(|rule| {
                self.severities
                    .get(rule.meta().name)
                    .copied()
                    .unwrap_or(rule.meta().default_severity)
                    != Severity::Off
            })
            .collect();

        let mut sink = Sink::new(self.severities.clone());

        for (index, unit) in files.iter().enumerate() {
            let ctx = FileCtx { index, unit };
            walk(unit.root(), &ctx, &mut rules, &mut sink);
        }

        for rule in rules.iter_mut() {
            rule.finish(files, &mut sink);
        }

        assemble_report(sink.into_findings(), files)
    }
}

fn walk(node: Node<'_>, ctx: &FileCtx<'_>, rules: &mut [Box<dyn Rule>], sink: &mut Sink) {
    for rule in rules.iter_mut() {
        rule.enter(ctx, node, sink);
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    for child in children {
        walk(child, ctx, rules, sink);
    }

    for rule in rules.iter_mut() {
        rule.leave(ctx, node, sink);
    }
}

fn assemble_report(findings: Vec<Finding>, files: &[SourceUnit]) -> LintReport {
    let (errors, warnings): (Vec<Finding>, Vec<Finding>) = findings
        .into_iter()
        .partition(|f| f.severity == Severity::Error);

    let status = if !errors.is_empty() {
        "error"
    } else if !warnings.is_empty() {
        "warning"
    } else {
        "ok"
    };

    LintReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "check".to_string(),
        status: status.to_string(),
        files_analyzed: files.iter().map(|f| f.path.clone()).collect(),
        errors,
        warnings,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
