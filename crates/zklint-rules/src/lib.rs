//! Lint rules and the analysis engine for zklint.
//!
//! Validates o1js/SnarkyJS sources and produces findings:
//! - C001: no-if-in-circuit — `if` reachable from a circuit method
//! - C002: no-ternary-in-circuit — ternary reachable from a circuit method
//! - C003: no-throw-in-circuit — `throw` reachable from a circuit method
//! - C004: no-json-in-circuit — `JSON.parse`/`JSON.stringify` reachable from a circuit method
//! - C005: no-random-in-circuit — JS randomness reachable from a circuit method
//! - C006: storage-limit — contract state exceeds the 8-slot ceiling
//! - C007: no-constructor-in-contract — constructor overridden on a smart contract
//! - C008: contract-export — smart contract class not covered by a named export

pub mod circuit;
pub mod contract;
pub mod engine;
pub mod reachability;
pub mod registry;
pub mod rule;
pub mod storage;
pub mod types;
