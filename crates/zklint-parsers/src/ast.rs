//! Node-kind predicates over the tree-sitter TypeScript grammar.
//!
//! These are the vocabulary every other component is built from. Each
//! predicate is total: it inspects only the node's kind and never panics.

use tree_sitter::Node;
use zklint_core::types::Span;

pub fn is_identifier(node: Node) -> bool {
    matches!(
        node.kind(),
        "identifier" | "property_identifier" | "type_identifier" | "shorthand_property_identifier"
    )
}

pub fn is_string_literal(node: Node) -> bool {
    node.kind() == "string"
}

pub fn is_number_literal(node: Node) -> bool {
    node.kind() == "number"
}

pub fn is_call_expression(node: Node) -> bool {
    node.kind() == "call_expression"
}

pub fn is_ternary_expression(node: Node) -> bool {
    node.kind() == "ternary_expression"
}

pub fn is_if_statement(node: Node) -> bool {
    node.kind() == "if_statement"
}

pub fn is_throw_statement(node: Node) -> bool {
    node.kind() == "throw_statement"
}

pub fn is_class_declaration(node: Node) -> bool {
    node.kind() == "class_declaration"
}

/// A class field. Plain JS emits `field_definition`, TypeScript
/// `public_field_definition`.
pub fn is_class_field(node: Node) -> bool {
    matches!(node.kind(), "field_definition" | "public_field_definition")
}

pub fn is_method_definition(node: Node) -> bool {
    node.kind() == "method_definition"
}

pub fn is_member_expression(node: Node) -> bool {
    node.kind() == "member_expression"
}

/// Any function-like scope that participates in call attribution.
pub fn is_function_like(node: Node) -> bool {
    matches!(
        node.kind(),
        "function_declaration"
            | "function_expression"
            | "arrow_function"
            | "method_definition"
            | "generator_function_declaration"
            | "generator_function"
    )
}

pub fn is_variable_declarator(node: Node) -> bool {
    node.kind() == "variable_declarator"
}

pub fn is_program(node: Node) -> bool {
    node.kind() == "program"
}

pub fn is_decorator(node: Node) -> bool {
    node.kind() == "decorator"
}

pub fn is_export_statement(node: Node) -> bool {
    node.kind() == "export_statement"
}

/// Text of a node within its source. Empty on any encoding mishap.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// 1-based source span of a node.
pub fn span_of(node: Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span {
        line: start.row as u32 + 1,
        column: start.column as u32 + 1,
        end_line: end.row as u32 + 1,
        end_column: end.column as u32 + 1,
    }
}
