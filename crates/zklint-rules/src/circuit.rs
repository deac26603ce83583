//! C001–C005: banned constructs reachable from circuit methods.
//!
//! Five rules share one shell: they differ only in which construct is
//! banned and in message/severity. Each owns its own
//! [`ReachabilityTracker`] for the run.

use tree_sitter::Node;
use zklint_core::types::Severity;
use zklint_parsers::ast;
use zklint_parsers::decl;
use zklint_parsers::parser::SourceUnit;

use crate::reachability::{MethodSite, ReachabilityTracker};
use crate::rule::{FileCtx, Rule, Sink};
use crate::types::RuleMeta;

pub static NO_IF: RuleMeta = RuleMeta {
    code: "C001",
    name: "no-if-in-circuit",
    message: "An `if` statement should not be used in a circuit. Use `Circuit.if` instead.",
    default_severity: Severity::Error,
    recommended: true,
};

pub static NO_TERNARY: RuleMeta = RuleMeta {
    code: "C002",
    name: "no-ternary-in-circuit",
    message: "A ternary expression should not be used in a circuit. Use `Circuit.if` instead.",
    default_severity: Severity::Error,
    recommended: true,
};

pub static NO_THROW: RuleMeta = RuleMeta {
    code: "C003",
    name: "no-throw-in-circuit",
    message: "A `throw` statement should not be used in a circuit.",
    default_severity: Severity::Error,
    recommended: true,
};

pub static NO_JSON: RuleMeta = RuleMeta {
    code: "C004",
    name: "no-json-in-circuit",
    message: "JSON functions should be avoided in a circuit. The resulting values do not make it into the circuit.",
    default_severity: Severity::Warning,
    recommended: true,
};

pub static NO_RANDOM: RuleMeta = RuleMeta {
    code: "C005",
    name: "no-random-in-circuit",
    message: "JavaScript randomness should be avoided in a circuit. Its output cannot be verified inside the circuit.",
    default_severity: Severity::Warning,
    recommended: true,
};

/// Banned call signatures: `object.member(..)` where the object and member
/// both appear in the respective lists, or a bare call to a listed name.
pub struct BannedCalls {
    pub objects: &'static [&'static str],
    pub members: &'static [&'static str],
    pub bare: &'static [&'static str],
}

static JSON_CALLS: BannedCalls = BannedCalls {
    objects: &["JSON"],
    members: &["parse", "stringify"],
    bare: &[],
};

static RANDOM_CALLS: BannedCalls = BannedCalls {
    objects: &["Math", "crypto"],
    members: &["random", "getRandomValues"],
    bare: &["getRandomValues"],
};

/// Which construct a circuit rule bans.
pub enum BannedConstruct {
    IfStatement,
    Ternary,
    Throw,
    Calls(&'static BannedCalls),
}

impl BannedConstruct {
    pub fn matches(&self, node: Node<'_>, source: &str) -> bool {
        match self {
            BannedConstruct::IfStatement => ast::is_if_statement(node),
            BannedConstruct::Ternary => ast::is_ternary_expression(node),
            BannedConstruct::Throw => ast::is_throw_statement(node),
            BannedConstruct::Calls(calls) => is_banned_call(node, source, calls),
        }
    }
}

fn is_banned_call(node: Node<'_>, source: &str, calls: &BannedCalls) -> bool {
    if !ast::is_call_expression(node) {
        return false;
    }
    let callee = match node.child_by_field_name("function") {
        Some(callee) => callee,
        None => return false,
    };
    if ast::is_member_expression(callee) {
        let object = callee.child_by_field_name("object");
        let property = callee.child_by_field_name("property");
        if let (Some(object), Some(property)) = (object, property) {
            return object.kind() == "identifier"
                && calls.objects.contains(&ast::node_text(object, source))
                && calls.members.contains(&ast::node_text(property, source));
        }
        return false;
    }
    callee.kind() == "identifier" && calls.bare.contains(&ast::node_text(callee, source))
}

/// Shared shell for the five reachability rules.
pub struct CircuitRule {
    meta: &'static RuleMeta,
    banned: BannedConstruct,
    tracker: ReachabilityTracker,
}

impl CircuitRule {
    fn new(meta: &'static RuleMeta, banned: BannedConstruct) -> Self {
        Self {
            meta,
            banned,
            tracker: ReachabilityTracker::new(),
        }
    }

    pub fn no_if() -> Self {
        Self::new(&NO_IF, BannedConstruct::IfStatement)
    }

    pub fn no_ternary() -> Self {
        Self::new(&NO_TERNARY, BannedConstruct::Ternary)
    }

    pub fn no_throw() -> Self {
        Self::new(&NO_THROW, BannedConstruct::Throw)
    }

    pub fn no_json() -> Self {
        Self::new(&NO_JSON, BannedConstruct::Calls(&JSON_CALLS))
    }

    pub fn no_random() -> Self {
        Self::new(&NO_RANDOM, BannedConstruct::Calls(&RANDOM_CALLS))
    }
}

impl Rule for CircuitRule {
    fn meta(&self) -> &'static RuleMeta {
        self.meta
    }

    fn enter(&mut self, file: &FileCtx<'_>, node: Node<'_>, _sink: &mut Sink) {
        let source = &file.unit.source;

        if ast::is_function_like(node) {
            self.tracker
                .enter_function(decl::enclosing_function_name(node, source));

            if ast::is_method_definition(node)
                && decl::find_decorator(node, "method", source).is_some()
            {
                if let Some(name) = decl::enclosing_function_name(node, source) {
                    self.tracker.record_circuit_method(
                        name,
                        MethodSite {
                            file: file.index,
                            start_byte: node.start_byte(),
                            end_byte: node.end_byte(),
                        },
                    );
                }
            }
        }

        if self.banned.matches(node, source) {
            self.tracker.mark_offender();
        }

        if ast::is_call_expression(node) {
            if let Some(callee) = node.child_by_field_name("function") {
                if callee.kind() == "identifier" {
                    self.tracker.record_call(ast::node_text(callee, source));
                }
            }
        }
    }

    fn leave(&mut self, _file: &FileCtx<'_>, node: Node<'_>, _sink: &mut Sink) {
        if ast::is_function_like(node) {
            self.tracker.leave_function();
        }
    }

    fn finish(&mut self, files: &[SourceUnit], sink: &mut Sink) {
        let meta = self.meta;
        let banned = &self.banned;
        self.tracker.scan(
            files,
            |node, source| banned.matches(node, source),
            |path, span| sink.report(meta, path, span),
        );
    }
}
