//! C006: contract state may not exceed the 8-slot storage ceiling.
//!
//! Field sizes are resolved in two tables: classes whose every field is a
//! known primitive resolve immediately; classes referencing other value
//! types park in an "unknown" table and are promoted by repeated sweeps
//! once their dependencies resolve, to a fixed point. Classes with cyclic
//! or never-declared dependencies stay unknown and are silently excluded
//! from the ceiling check.

use std::collections::BTreeMap;

use tree_sitter::Node;
use zklint_core::primitives::{primitive_size, FieldKind, MAX_CONTRACT_STATES};
use zklint_core::types::{Severity, Span};
use zklint_parsers::ast;
use zklint_parsers::decl;
use zklint_parsers::parser::SourceUnit;

use crate::rule::{FileCtx, Rule, Sink};
use crate::types::RuleMeta;

pub static STORAGE_LIMIT: RuleMeta = RuleMeta {
    code: "C006",
    name: "storage-limit",
    message: "A smart contract can only use 8 slots of on-chain state.",
    default_severity: Severity::Error,
    recommended: true,
};

#[derive(Debug, Clone, Copy)]
struct FieldSite {
    file: usize,
    span: Span,
}

#[derive(Debug, Clone)]
enum StateField {
    Resolved {
        kind: FieldKind,
        size: u32,
        site: FieldSite,
    },
    Unresolved {
        kind: FieldKind,
        depends_on: String,
        site: FieldSite,
    },
}

impl StateField {
    fn is_resolved(&self) -> bool {
        matches!(self, StateField::Resolved { .. })
    }
}

/// Weighted slot total of a fully resolved field list. Unresolved fields
/// contribute nothing (they only occur while a class is still unknown).
fn total_size(fields: &[StateField]) -> u32 {
    fields
        .iter()
        .map(|field| match field {
            StateField::Resolved { kind, size, .. } => kind.contribution(*size),
            StateField::Unresolved { .. } => 0,
        })
        .sum()
}

pub struct StorageLimitRule {
    known: BTreeMap<String, Vec<StateField>>,
    unknown: BTreeMap<String, Vec<StateField>>,
}

impl StorageLimitRule {
    pub fn new() -> Self {
        Self {
            known: BTreeMap::new(),
            unknown: BTreeMap::new(),
        }
    }

    fn collect_class(&mut self, file: &FileCtx<'_>, class_node: Node<'_>) {
        let source = &file.unit.source;
        let class_name = match decl::class_name(class_node, source) {
            Some(name) => name.to_string(),
            None => return,
        };
        let body = match class_node.child_by_field_name("body") {
            Some(body) => body,
            None => return,
        };

        let mut fields = Vec::new();
        let mut all_resolved = true;

        let mut cursor = body.walk();
        let members: Vec<Node> = body.named_children(&mut cursor).collect();
        for member in members {
            if !ast::is_class_field(member) {
                continue;
            }
            let (kind, decorator) = match decl::field_kind(member, source) {
                Some(found) => found,
                None => continue,
            };
            // Nominal type: decorator argument first, annotation fallback.
            let nominal = decl::decorator_first_arg_identifier(decorator, source)
                .or_else(|| decl::declared_type_name(member, source));
            let nominal = match nominal {
                Some(name) => name.to_string(),
                None => continue,
            };
            let site = FieldSite {
                file: file.index,
                span: ast::span_of(member),
            };
            match primitive_size(&nominal) {
                Some(size) => fields.push(StateField::Resolved { kind, size, site }),
                None => {
                    all_resolved = false;
                    fields.push(StateField::Unresolved {
                        kind,
                        depends_on: nominal,
                        site,
                    });
                }
            }
        }

        if all_resolved {
            self.known.insert(class_name, fields);
        } else {
            self.unknown.insert(class_name, fields);
        }
    }

    /// Promote unknown classes whose dependencies have become known, to a
    /// fixed point. Each sweep either resolves at least one field or the
    /// loop halts.
    fn resolve_to_fixed_point(&mut self) {
        loop {
            let mut progressed = false;
            let pending: Vec<String> = self.unknown.keys().cloned().collect();

            for class_name in pending {
                let mut fields = match self.unknown.remove(&class_name) {
                    Some(fields) => fields,
                    None => continue,
                };

                for field in fields.iter_mut() {
                    if let StateField::Unresolved {
                        kind,
                        depends_on,
                        site,
                    } = field
                    {
                        let dependency_total = self
                            .known
                            .get(depends_on.as_str())
                            .map(|dep| total_size(dep))
                            .unwrap_or(0);
                        if dependency_total > 0 {
                            progressed = true;
                            *field = StateField::Resolved {
                                kind: *kind,
                                size: dependency_total,
                                site: *site,
                            };
                        }
                    }
                }

                if fields.iter().all(StateField::is_resolved) {
                    self.known.insert(class_name, fields);
                } else {
                    self.unknown.insert(class_name, fields);
                }
            }

            if !progressed {
                break;
            }
        }
    }
}

impl Default for StorageLimitRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for StorageLimitRule {
    fn meta(&self) -> &'static RuleMeta {
        &STORAGE_LIMIT
    }

    fn enter(&mut self, file: &FileCtx<'_>, node: Node<'_>, _sink: &mut Sink) {
        if !ast::is_class_declaration(node) {
            return;
        }
        match decl::superclass_name(node, &file.unit.source) {
            Some("SmartContract") | Some("CircuitValue") => self.collect_class(file, node),
            _ => {}
        }
    }

    fn finish(&mut self, files: &[SourceUnit], sink: &mut Sink) {
        self.resolve_to_fixed_point();

        for fields in self.known.values() {
            // Only contracts that persist state are subject to the ceiling.
            let first_state = fields.iter().find_map(|field| match field {
                StateField::Resolved {
                    kind: FieldKind::State,
                    site,
                    ..
                } => Some(*site),
                _ => None,
            });
            let site = match first_state {
                Some(site) => site,
                None => continue,
            };
            if total_size(fields) > MAX_CONTRACT_STATES {
                if let Some(unit) = files.get(site.file) {
                    sink.report(&STORAGE_LIMIT, &unit.path, site.span);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
