use std::path::{Path, PathBuf};

use zklint_core::config::ZklintConfig;
use zklint_output::OutputFormatter;
use zklint_parsers::parser::{self, SourceUnit};
use zklint_parsers::walker::FileWalker;
use zklint_rules::engine::LintEngine;

/// Run `zklint check [paths..]` — lint sources and report findings.
///
/// Exit codes: 0 clean, 1 findings at error level (or any finding under
/// `--strict`), 2 environment/usage failure.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, paths: Vec<String>, strict: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("zklint check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = match ZklintConfig::load(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("zklint check: {}", e);
            return 2;
        }
    };

    let targets = if paths.is_empty() {
        vec![".".to_string()]
    } else {
        paths
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for target in &targets {
        let path = Path::new(target);
        if !path.exists() {
            eprintln!("zklint check: no such file or directory: {}", target);
            return 2;
        }
        if path.is_dir() {
            files.extend(
                FileWalker::new(path)
                    .with_ignore_patterns(&config.ignore_patterns)
                    .walk(),
            );
        } else {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files.dedup();

    if verbose {
        eprintln!("zklint check: {} file(s) to analyze", files.len());
    }

    let mut units: Vec<SourceUnit> = Vec::with_capacity(files.len());
    for result in parser::parse_all(&files) {
        match result {
            Ok(unit) => units.push(unit),
            Err(e) => {
                eprintln!("zklint check: {}", e);
                return 2;
            }
        }
    }

    let report = LintEngine::new(&config).run(&units);

    let output = formatter.format_check(&report);
    if !output.is_empty() {
        println!("{}", output);
    }

    if !report.errors.is_empty() || (strict && !report.warnings.is_empty()) {
        1
    } else {
        0
    }
}
