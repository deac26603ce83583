use std::collections::{BTreeMap, HashSet};

use tree_sitter::Node;
use zklint_core::types::{Finding, Severity, Span};
use zklint_parsers::parser::SourceUnit;

use crate::types::RuleMeta;

/// The compilation unit currently being traversed, with its position in
/// the run's file list (used to record sites for end-of-run passes).
pub struct FileCtx<'a> {
    pub index: usize,
    pub unit: &'a SourceUnit,
}

/// A lint rule. One instance lives for exactly one analysis run; all
/// cross-file accumulation happens inside the instance, never in globals.
///
/// The engine drives a single pre/post-order traversal of every named node
/// per file, then one `finish` pass after all files have been visited.
pub trait Rule {
    fn meta(&self) -> &'static RuleMeta;

    fn enter(&mut self, file: &FileCtx<'_>, node: Node<'_>, sink: &mut Sink);

    fn leave(&mut self, _file: &FileCtx<'_>, _node: Node<'_>, _sink: &mut Sink) {}

    fn finish(&mut self, _files: &[SourceUnit], _sink: &mut Sink) {}
}

/// Collects findings, applying effective severities and dropping repeat
/// reports of the same (rule, file, span).
pub struct Sink {
    severities: BTreeMap<String, Severity>,
    seen: HashSet<(&'static str, String, Span)>,
    findings: Vec<Finding>,
}

impl Sink {
    pub fn new(severities: BTreeMap<String, Severity>) -> Self {
        Self {
            severities,
            seen: HashSet::new(),
            findings: Vec::new(),
        }
    }

    pub fn report(&mut self, meta: &'static RuleMeta, file: &str, span: Span) {
        let severity = self
            .severities
            .get(meta.name)
            .copied()
            .unwrap_or(meta.default_severity);
        if severity == Severity::Off {
            return;
        }
        if !self.seen.insert((meta.code, file.to_string(), span)) {
            return;
        }
        self.findings.push(Finding {
            code: meta.code.to_string(),
            rule: meta.name.to_string(),
            severity,
            message: meta.message.to_string(),
            file: file.to_string(),
            span,
        });
    }

    /// Findings in stable order: by file, position, then code.
    pub fn into_findings(mut self) -> Vec<Finding> {
        self.findings.sort_by(|a, b| {
            (a.file.as_str(), a.span.line, a.span.column, a.code.as_str()).cmp(&(
                b.file.as_str(),
                b.span.line,
                b.span.column,
                b.code.as_str(),
            ))
        });
        self.findings
    }
}
