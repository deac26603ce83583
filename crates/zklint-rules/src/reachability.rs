//! Cross-function reachability from circuit methods to banned constructs.
//!
//! During the traversal a tracker accumulates, per analysis run:
//! 1. every `@method`-decorated method, keyed by name,
//! 2. a call graph by textual callee name, attributed to the innermost
//!    *named* enclosing function via an explicit call stack, and
//! 3. the set of function names that directly contain a banned construct.
//!
//! After all files have been visited, a finding is emitted for every banned
//! construct sitting directly inside a circuit method (at the construct)
//! and for every call site inside a circuit method whose callee reaches an
//! offender through the call graph (at the call site).
//!
//! Callee resolution is by identifier text only: same-named functions in
//! different scopes conflate, and calls through aliases, member access, or
//! higher-order parameters are invisible. Anonymous scopes neither receive
//! nor contribute attribution.

use std::collections::{BTreeMap, HashSet};

use tree_sitter::Node;
use zklint_core::graph::CallGraph;
use zklint_core::types::Span;
use zklint_parsers::ast;
use zklint_parsers::parser::SourceUnit;

/// Where a recorded circuit method lives, so its subtree can be re-visited
/// after the traversal has moved on.
#[derive(Debug, Clone, Copy)]
pub struct MethodSite {
    pub file: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

#[derive(Default)]
pub struct ReachabilityTracker {
    circuit_methods: BTreeMap<String, MethodSite>,
    offenders: HashSet<String>,
    calls: Vec<(String, String)>,
    call_stack: Vec<Option<String>>,
}

impl ReachabilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entering any function-like scope; `name` is `None` for scopes that
    /// cannot be attributed (IIFEs, callbacks, initializers).
    pub fn enter_function(&mut self, name: Option<String>) {
        self.call_stack.push(name);
    }

    pub fn leave_function(&mut self) {
        self.call_stack.pop();
    }

    fn current_function(&self) -> Option<&str> {
        self.call_stack.last().and_then(|name| name.as_deref())
    }

    /// The current scope directly contains a banned construct.
    pub fn mark_offender(&mut self) {
        if let Some(name) = self.current_function() {
            self.offenders.insert(name.to_string());
        }
    }

    /// The current scope contains a call to a bare identifier.
    pub fn record_call(&mut self, callee: &str) {
        if let Some(caller) = self.current_function() {
            self.calls.push((caller.to_string(), callee.to_string()));
        }
    }

    pub fn record_circuit_method(&mut self, name: String, site: MethodSite) {
        self.circuit_methods.insert(name, site);
    }

    /// End-of-run pass: re-visit every recorded circuit method subtree and
    /// report each banned construct found directly (zero-hop) and each call
    /// site whose callee reaches an offender. A node is reported at most
    /// once: a direct match wins over its own call-site check.
    pub fn scan(
        &self,
        files: &[SourceUnit],
        banned: impl Fn(Node<'_>, &str) -> bool,
        mut report: impl FnMut(&str, Span),
    ) {
        let mut graph = CallGraph::new();
        for (caller, callee) in &self.calls {
            graph.add_call(caller, callee);
        }
        let reaching = graph.reaching_set(self.offenders.iter().map(String::as_str));

        for site in self.circuit_methods.values() {
            let unit = match files.get(site.file) {
                Some(unit) => unit,
                None => continue,
            };
            let node = match unit.node_at(site.start_byte, site.end_byte) {
                Some(node) => node,
                None => continue,
            };
            scan_subtree(node, unit, &banned, &reaching, &mut report);
        }
    }
}

fn scan_subtree(
    node: Node<'_>,
    unit: &SourceUnit,
    banned: &impl Fn(Node<'_>, &str) -> bool,
    reaching: &HashSet<String>,
    report: &mut impl FnMut(&str, Span),
) {
    if banned(node, &unit.source) {
        report(&unit.path, ast::span_of(node));
    } else if ast::is_call_expression(node) {
        if let Some(callee) = node.child_by_field_name("function") {
            if callee.kind() == "identifier" && reaching.contains(ast::node_text(callee, &unit.source)) {
                report(&unit.path, ast::span_of(node));
            }
        }
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    for child in children {
        scan_subtree(child, unit, banned, reaching, report);
    }
}

#[cfg(test)]
#[path = "reachability_tests.rs"]
mod tests;
