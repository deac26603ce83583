/// Shared test helpers for all zklint integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use zklint_core::config::ZklintConfig;
use zklint_core::types::Finding;
use zklint_parsers::parser::{SourceParser, SourceUnit};
use zklint_rules::engine::LintEngine;
use zklint_rules::types::LintReport;

/// Lint one in-memory compilation unit with the default (recommended)
/// configuration.
#[allow(dead_code)]
pub fn lint(src: &str) -> LintReport {
    lint_files(&[("contract.ts", src)])
}

/// Lint several in-memory compilation units with the default configuration.
#[allow(dead_code)]
pub fn lint_files(files: &[(&str, &str)]) -> LintReport {
    lint_files_with(&ZklintConfig::default(), files)
}

#[allow(dead_code)]
pub fn lint_files_with(config: &ZklintConfig, files: &[(&str, &str)]) -> LintReport {
    let mut parser = SourceParser::new();
    let units: Vec<SourceUnit> = files
        .iter()
        .map(|(path, src)| {
            parser
                .parse(path, src.to_string())
                .unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
        })
        .collect();
    LintEngine::new(config).run(&units)
}

/// All findings of one rule code, errors and warnings together.
#[allow(dead_code)]
pub fn findings_for(report: &LintReport, code: &str) -> Vec<Finding> {
    report
        .errors
        .iter()
        .chain(report.warnings.iter())
        .filter(|f| f.code == code)
        .cloned()
        .collect()
}

/// Assert that linting `src` produces exactly `count` findings of `code`.
#[allow(dead_code)]
pub fn assert_findings(src: &str, code: &str, count: usize) {
    let report = lint(src);
    let found = findings_for(&report, code);
    assert_eq!(
        found.len(),
        count,
        "expected {count} finding(s) of {code}, got {}: {found:#?}",
        found.len(),
    );
}
