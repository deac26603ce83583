//! The rule registry and the recommended bundle.

use std::collections::BTreeMap;

use zklint_core::config::ZklintConfig;
use zklint_core::types::Severity;

use crate::circuit::{self, CircuitRule};
use crate::contract::{self, ContractExportRule, NoConstructorRule};
use crate::rule::Rule;
use crate::storage::{self, StorageLimitRule};
use crate::types::RuleMeta;

/// Metadata for every rule this crate ships, in code order.
pub fn rule_metas() -> Vec<&'static RuleMeta> {
    vec![
        &circuit::NO_IF,
        &circuit::NO_TERNARY,
        &circuit::NO_THROW,
        &circuit::NO_JSON,
        &circuit::NO_RANDOM,
        &storage::STORAGE_LIMIT,
        &contract::NO_CONSTRUCTOR,
        &contract::CONTRACT_EXPORT,
    ]
}

/// Fresh rule instances for one analysis run.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(CircuitRule::no_if()),
        Box::new(CircuitRule::no_ternary()),
        Box::new(CircuitRule::no_throw()),
        Box::new(CircuitRule::no_json()),
        Box::new(CircuitRule::no_random()),
        Box::new(StorageLimitRule::new()),
        Box::new(NoConstructorRule::new()),
        Box::new(ContractExportRule::new()),
    ]
}

/// The recommended bundle: every recommended rule at its declared default.
pub fn recommended_bundle() -> BTreeMap<String, Severity> {
    rule_metas()
        .into_iter()
        .filter(|meta| meta.recommended)
        .map(|meta| (meta.name.to_string(), meta.default_severity))
        .collect()
}

/// Effective severities for a run: the recommended bundle overlaid with
/// config overrides.
pub fn effective_severities(config: &ZklintConfig) -> BTreeMap<String, Severity> {
    let mut severities = recommended_bundle();
    for meta in rule_metas() {
        let effective = config.severity_for(meta.name, meta.default_severity);
        severities.insert(meta.name.to_string(), effective);
    }
    severities
}
