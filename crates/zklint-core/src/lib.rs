//! Core types, call graph, and configuration for zklint.
//!
//! This crate provides the foundational data structures used across all
//! zklint crates:
//! - [`types`] — Severity, source spans, and findings
//! - [`primitives`] — The o1js primitive size table and field classifiers
//! - [`graph`] — Name-keyed call graph with reverse reachability
//! - [`config`] — Configuration loading from `zklint.json`

pub mod config;
pub mod graph;
pub mod primitives;
pub mod types;
