use zklint_core::config::{ZklintConfig, CONFIG_FILE_NAME};

/// Run `zklint init` — write a starter config with every recommended rule
/// pinned to its default severity.
pub fn run(verbose: bool, force: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("zklint init: failed to get current directory: {}", e);
            return 2;
        }
    };

    let path = cwd.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        eprintln!(
            "zklint init: {} already exists (use --force to overwrite)",
            CONFIG_FILE_NAME
        );
        return 2;
    }

    let config = ZklintConfig {
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules: zklint_rules::registry::recommended_bundle(),
        ignore_patterns: vec!["node_modules/**".to_string(), "build/**".to_string()],
    };

    let body = match serde_json::to_string_pretty(&config) {
        Ok(body) => body,
        Err(e) => {
            eprintln!("zklint init: failed to serialize config: {}", e);
            return 2;
        }
    };
    if let Err(e) = std::fs::write(&path, body + "\n") {
        eprintln!("zklint init: failed to write {}: {}", path.display(), e);
        return 2;
    }

    if verbose {
        eprintln!("zklint init: wrote {}", path.display());
    }
    println!("Initialized {}", CONFIG_FILE_NAME);
    0
}
