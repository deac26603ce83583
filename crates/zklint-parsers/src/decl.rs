//! Declaration extraction: decorators, nominal field types, function and
//! class names, and export coverage.
//!
//! Everything here is best-effort and total. A shape that does not match
//! simply yields `None`/empty, mirroring how the analysis skips constructs
//! it cannot attribute soundly.

use tree_sitter::Node;
use zklint_core::primitives::FieldKind;

use crate::ast;

/// All decorator annotations attached to a class member, in source order.
///
/// The grammar has attached decorators both as children of the member node
/// and as preceding named siblings inside the class body, depending on
/// version; both placements are collected.
pub fn decorators_of(member: Node) -> Vec<Node> {
    if !(ast::is_method_definition(member) || ast::is_class_field(member)) {
        return vec![];
    }

    let mut preceding = Vec::new();
    let mut prev = member.prev_named_sibling();
    while let Some(node) = prev {
        if !ast::is_decorator(node) {
            break;
        }
        preceding.push(node);
        prev = node.prev_named_sibling();
    }
    preceding.reverse();

    let mut cursor = member.walk();
    let own: Vec<Node> = member
        .named_children(&mut cursor)
        .filter(|c| ast::is_decorator(*c))
        .collect();

    preceding.extend(own);
    preceding
}

/// Name of a decorator: `@state` and `@state(Field)` both yield `state`.
pub fn decorator_name<'a>(decorator: Node, source: &'a str) -> Option<&'a str> {
    let expr = decorator.named_child(0)?;
    if ast::is_identifier(expr) {
        return Some(ast::node_text(expr, source));
    }
    if ast::is_call_expression(expr) {
        let callee = expr.child_by_field_name("function")?;
        if ast::is_identifier(callee) {
            return Some(ast::node_text(callee, source));
        }
    }
    None
}

/// First decorator on `member` whose name equals `name`, bare or call-style.
pub fn find_decorator<'t>(member: Node<'t>, name: &str, source: &str) -> Option<Node<'t>> {
    decorators_of(member)
        .into_iter()
        .find(|d| decorator_name(*d, source) == Some(name))
}

fn decorator_argument<'t>(decorator: Node<'t>, index: usize) -> Option<Node<'t>> {
    let expr = decorator.named_child(0)?;
    if !ast::is_call_expression(expr) {
        return None;
    }
    expr.child_by_field_name("arguments")?.named_child(index)
}

/// `@state(T)` yields `T`; bare decorators and non-identifier arguments
/// yield `None`.
pub fn decorator_first_arg_identifier<'a>(decorator: Node, source: &'a str) -> Option<&'a str> {
    let arg = decorator_argument(decorator, 0)?;
    if ast::is_identifier(arg) {
        Some(ast::node_text(arg, source))
    } else {
        None
    }
}

/// `@arrayProp(T, 6)` yields `6`; absent or non-numeric yields `None`.
pub fn decorator_second_arg_u32(decorator: Node, source: &str) -> Option<u32> {
    let arg = decorator_argument(decorator, 1)?;
    if ast::is_number_literal(arg) {
        ast::node_text(arg, source).parse().ok()
    } else {
        None
    }
}

/// The named type in a field's type annotation. `x: Field` yields `Field`,
/// `x: Field[]` yields `Field`, `x: State<Field>` yields `State` (the
/// generic's head, matching how the annotation fallback has always behaved).
pub fn declared_type_name<'a>(field: Node, source: &'a str) -> Option<&'a str> {
    if !ast::is_class_field(field) {
        return None;
    }
    let mut cursor = field.walk();
    let annotation = field
        .named_children(&mut cursor)
        .find(|c| c.kind() == "type_annotation")?;
    let inner = annotation.named_child(0)?;
    match inner.kind() {
        "type_identifier" => Some(ast::node_text(inner, source)),
        "array_type" => {
            let mut cursor = inner.walk();
            let name = inner
                .named_children(&mut cursor)
                .find(|c| c.kind() == "type_identifier")
                .map(|c| ast::node_text(c, source));
            name
        }
        "generic_type" => {
            let head = inner.child_by_field_name("name").or_else(|| inner.named_child(0))?;
            Some(ast::node_text(head, source))
        }
        _ => None,
    }
}

/// The state-field kind of a decorated class member, with the matched
/// decorator node. Array lengths default to 0 when absent or non-numeric.
pub fn field_kind<'t>(member: Node<'t>, source: &str) -> Option<(FieldKind, Node<'t>)> {
    for decorator in decorators_of(member) {
        let name = match decorator_name(decorator, source) {
            Some(name) => name,
            None => continue,
        };
        if let Some(kind) = FieldKind::from_decorator(name) {
            let kind = match kind {
                FieldKind::ArrayProp { .. } => FieldKind::ArrayProp {
                    len: decorator_second_arg_u32(decorator, source).unwrap_or(0),
                },
                other => other,
            };
            return Some((kind, decorator));
        }
    }
    None
}

/// Name of the nearest attributable function scope, for exactly three
/// shapes: a named function declaration, a method definition, and a
/// function/arrow expression assigned directly to a named variable. Every
/// other context (IIFE, callback argument, field initializer) is `None` —
/// those cannot be soundly attributed to a single symbolic name.
pub fn enclosing_function_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => node
            .child_by_field_name("name")
            .map(|n| ast::node_text(n, source).to_string()),
        "method_definition" => {
            let key = node.child_by_field_name("name")?;
            if key.kind() == "property_identifier" {
                Some(ast::node_text(key, source).to_string())
            } else {
                None
            }
        }
        "function_expression" | "arrow_function" | "generator_function" => {
            let parent = node.parent()?;
            if !ast::is_variable_declarator(parent) {
                return None;
            }
            if parent.child_by_field_name("value")?.id() != node.id() {
                return None;
            }
            let name = parent.child_by_field_name("name")?;
            if name.kind() == "identifier" {
                Some(ast::node_text(name, source).to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

/// A class declaration's own name; `None` for anonymous classes.
pub fn class_name<'a>(class_node: Node, source: &'a str) -> Option<&'a str> {
    if !ast::is_class_declaration(class_node) {
        return None;
    }
    class_node
        .child_by_field_name("name")
        .map(|n| ast::node_text(n, source))
}

/// Name of the class's direct superclass, if the extends clause names one.
pub fn superclass_name<'a>(class_node: Node, source: &'a str) -> Option<&'a str> {
    if !ast::is_class_declaration(class_node) {
        return None;
    }
    let mut cursor = class_node.walk();
    let heritage = class_node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "class_heritage")?;
    let mut cursor = heritage.walk();
    let scope = heritage
        .named_children(&mut cursor)
        .find(|c| c.kind() == "extends_clause")
        .unwrap_or(heritage);
    let mut cursor = scope.walk();
    let name = scope
        .named_children(&mut cursor)
        .find(|c| ast::is_identifier(*c) || ast::is_member_expression(*c))
        .map(|c| ast::node_text(c, source));
    name
}

/// Whether a class declaration sits directly under a *named* export.
/// `export default class ...` does not count.
pub fn is_direct_named_export(class_node: Node) -> bool {
    let parent = match class_node.parent() {
        Some(p) if ast::is_export_statement(p) => p,
        _ => return false,
    };
    let mut cursor = parent.walk();
    let has_default = parent.children(&mut cursor).any(|c| c.kind() == "default");
    !has_default
}

/// Local name re-exported by an `export { A, B as C }` specifier.
pub fn export_specifier_local_name<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    if node.kind() != "export_specifier" {
        return None;
    }
    node.child_by_field_name("name")
        .map(|n| ast::node_text(n, source))
}

#[cfg(test)]
#[path = "decl_tests.rs"]
mod tests;
