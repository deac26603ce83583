use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

/// Discovers `.ts`/`.tsx` sources under a root, honoring `.gitignore`,
/// `.zklintignore`, and configured ignore patterns.
pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns.to_vec();
        self
    }

    pub fn walk(&self) -> Vec<PathBuf> {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(".zklintignore");

        if !self.ignore_patterns.is_empty() {
            let mut overrides = OverrideBuilder::new(&self.root);
            for pattern in &self.ignore_patterns {
                // A leading "!" turns the glob into an exclusion.
                let _ = overrides.add(&format!("!{pattern}"));
            }
            if let Ok(overrides) = overrides.build() {
                builder.overrides(overrides);
            }
        }

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if is_typescript(&path) {
                entries.push(path);
            }
        }
        entries.sort();
        entries
    }
}

fn is_typescript(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ts") | Some("tsx")
    )
}
