//! End-to-end lint run behavior: configuration overrides, file discovery,
//! report shape, and run-to-run stability.

use std::fs;

use zklint_core::config::ZklintConfig;
use zklint_core::types::Severity;
use zklint_parsers::parser;
use zklint_parsers::walker::FileWalker;
use zklint_rules::engine::LintEngine;

use crate::common::{lint, lint_files_with};

const OFFENDING: &str = r#"
export class App extends SmartContract {
  @method async update(x: Bool) {
    if (x) {};
    const n = Math.random();
  }
}
"#;

#[test]
fn report_carries_run_metadata() {
    let report = lint(OFFENDING);
    assert_eq!(report.command, "check");
    assert_eq!(report.status, "error");
    assert_eq!(report.files_analyzed, vec!["contract.ts".to_string()]);
    assert!(!report.version.is_empty());
}

#[test]
fn severity_override_demotes_a_rule() {
    let mut config = ZklintConfig::default();
    config
        .rules
        .insert("no-if-in-circuit".to_string(), Severity::Warning);

    let report = lint_files_with(&config, &[("contract.ts", OFFENDING)]);
    assert_eq!(report.status, "warning");
    assert!(report.errors.is_empty());
    let codes: Vec<&str> = report.warnings.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec!["C001", "C005"]);
}

#[test]
fn off_rules_produce_nothing() {
    let mut config = ZklintConfig::default();
    config
        .rules
        .insert("no-if-in-circuit".to_string(), Severity::Off);
    config
        .rules
        .insert("no-random-in-circuit".to_string(), Severity::Off);

    let report = lint_files_with(&config, &[("contract.ts", OFFENDING)]);
    assert_eq!(report.status, "ok");
    assert!(report.is_clean());
}

#[test]
fn findings_are_ordered_by_file_then_position() {
    let report = crate::common::lint_files(&[
        ("z.ts", OFFENDING),
        ("a.ts", OFFENDING),
    ]);
    let files: Vec<&str> = report
        .errors
        .iter()
        .chain(report.warnings.iter())
        .map(|f| f.file.as_str())
        .collect();
    assert_eq!(files, vec!["a.ts", "z.ts", "a.ts", "z.ts"]);
    assert_eq!(report.errors[0].span.line, 4);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let mut parser = parser::SourceParser::new();
    let units = vec![parser.parse("contract.ts", OFFENDING.to_string()).unwrap()];
    let engine = LintEngine::new(&ZklintConfig::default());

    let first = serde_json::to_value(engine.run(&units)).unwrap();
    let second = serde_json::to_value(engine.run(&units)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn human_and_json_formatters_render_the_report() {
    use zklint_output::OutputFormatter;

    let report = lint(OFFENDING);

    let human = zklint_output::human::HumanFormatter.format_check(&report);
    assert!(human.contains("error[C001]:"));
    assert!(human.contains("--> contract.ts:4:5"));
    assert!(human.contains("1 error(s), 1 warning(s) in 1 file(s)"));

    let json = zklint_output::json::JsonFormatter.format_check(&report);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["status"], "error");
    assert_eq!(parsed["errors"][0]["code"], "C001");
    assert_eq!(parsed["warnings"][0]["rule"], "no-random-in-circuit");
}

#[test]
fn walker_and_engine_lint_a_project_tree() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::create_dir_all(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("src/app.ts"), OFFENDING).unwrap();
    fs::write(dir.path().join("build/app.ts"), OFFENDING).unwrap();
    fs::write(dir.path().join("src/readme.md"), "# notes\n").unwrap();
    fs::write(
        dir.path().join(zklint_core::config::CONFIG_FILE_NAME),
        r#"{ "version": "0.2.0", "ignore_patterns": ["build/**"] }"#,
    )
    .unwrap();

    let config = ZklintConfig::load(dir.path()).unwrap();
    let paths = FileWalker::new(dir.path())
        .with_ignore_patterns(&config.ignore_patterns)
        .walk();
    assert_eq!(paths.len(), 1);

    let units: Vec<_> = parser::parse_all(&paths)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    let report = LintEngine::new(&config).run(&units);
    assert_eq!(report.status, "error");
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].file.ends_with("src/app.ts"));
}
