//! C007 and C008: contract shape checks.

use std::collections::HashSet;

use tree_sitter::Node;
use zklint_core::types::{Severity, Span};
use zklint_parsers::ast;
use zklint_parsers::decl;

use crate::rule::{FileCtx, Rule, Sink};
use crate::types::RuleMeta;

pub static NO_CONSTRUCTOR: RuleMeta = RuleMeta {
    code: "C007",
    name: "no-constructor-in-contract",
    message: "Overriding the constructor of a smart contract is disallowed. Remove the constructor.",
    default_severity: Severity::Error,
    recommended: true,
};

pub static CONTRACT_EXPORT: RuleMeta = RuleMeta {
    code: "C008",
    name: "contract-export",
    message: "Smart contracts must be exported using a named export.",
    default_severity: Severity::Error,
    recommended: true,
};

fn enclosing_contract<'t>(node: Node<'t>, source: &str) -> Option<Node<'t>> {
    let body = node.parent()?;
    let class_node = body.parent()?;
    if ast::is_class_declaration(class_node)
        && decl::superclass_name(class_node, source) == Some("SmartContract")
    {
        Some(class_node)
    } else {
        None
    }
}

/// C007: a `constructor` method on a class extending `SmartContract`.
pub struct NoConstructorRule;

impl NoConstructorRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoConstructorRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NoConstructorRule {
    fn meta(&self) -> &'static RuleMeta {
        &NO_CONSTRUCTOR
    }

    fn enter(&mut self, file: &FileCtx<'_>, node: Node<'_>, sink: &mut Sink) {
        if !ast::is_method_definition(node) {
            return;
        }
        let source = &file.unit.source;
        let is_constructor = node
            .child_by_field_name("name")
            .is_some_and(|key| ast::node_text(key, source) == "constructor");
        if is_constructor && enclosing_contract(node, source).is_some() {
            sink.report(&NO_CONSTRUCTOR, &file.unit.path, ast::span_of(node));
        }
    }
}

/// C008: every `SmartContract` subclass must be covered by a named export —
/// either `export class ...` directly (default exports do not count) or a
/// later `export { Name }` / `export { Name as Other }` list. Tracked per
/// compilation unit and flushed when its root is left.
pub struct ContractExportRule {
    contracts: Vec<(String, Span)>,
    exported: HashSet<String>,
}

impl ContractExportRule {
    pub fn new() -> Self {
        Self {
            contracts: Vec::new(),
            exported: HashSet::new(),
        }
    }
}

impl Default for ContractExportRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ContractExportRule {
    fn meta(&self) -> &'static RuleMeta {
        &CONTRACT_EXPORT
    }

    fn enter(&mut self, file: &FileCtx<'_>, node: Node<'_>, _sink: &mut Sink) {
        let source = &file.unit.source;

        if ast::is_class_declaration(node)
            && decl::superclass_name(node, source) == Some("SmartContract")
        {
            if let Some(name) = decl::class_name(node, source) {
                self.contracts.push((name.to_string(), ast::span_of(node)));
                if decl::is_direct_named_export(node) {
                    self.exported.insert(name.to_string());
                }
            }
            return;
        }

        if let Some(local) = decl::export_specifier_local_name(node, source) {
            self.exported.insert(local.to_string());
        }
    }

    fn leave(&mut self, file: &FileCtx<'_>, node: Node<'_>, sink: &mut Sink) {
        if !ast::is_program(node) {
            return;
        }
        for (name, span) in self.contracts.drain(..) {
            if !self.exported.contains(&name) {
                sink.report(&CONTRACT_EXPORT, &file.unit.path, span);
            }
        }
        self.exported.clear();
    }
}
