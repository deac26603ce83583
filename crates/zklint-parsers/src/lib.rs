//! Tree-sitter parsing and declaration extraction for zklint.
//!
//! - [`parser`] — parses `.ts`/`.tsx` sources into [`parser::SourceUnit`]s
//! - [`ast`] — total, side-effect-free node-kind predicates
//! - [`decl`] — decorator, type, name, and export extraction from declarations
//! - [`walker`] — source file discovery honoring ignore files and config patterns

pub mod ast;
pub mod decl;
pub mod parser;
pub mod walker;
