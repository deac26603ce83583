use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tree_sitter::{Language, Node, Parser, Tree};

/// A parsed compilation unit: path, source text, and syntax tree.
#[derive(Debug)]
pub struct SourceUnit {
    pub path: String,
    pub source: String,
    pub tree: Tree,
}

impl SourceUnit {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Re-locate a node recorded earlier by its exact byte range.
    pub fn node_at(&self, start: usize, end: usize) -> Option<Node<'_>> {
        self.tree
            .root_node()
            .named_descendant_for_byte_range(start, end)
            .filter(|n| n.start_byte() == start && n.end_byte() == end)
    }
}

pub struct SourceParser {
    parser: Parser,
}

impl SourceParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse TypeScript (or TSX, by extension) source into a [`SourceUnit`].
    pub fn parse(&mut self, path: &str, source: String) -> Result<SourceUnit, ParseError> {
        let language = language_for_path(path);
        self.parser
            .set_language(&language)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or_else(|| ParseError::ParseFailed(path.to_string()))?;
        Ok(SourceUnit {
            path: path.to_string(),
            source,
            tree,
        })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<SourceUnit, ParseError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ParseError::Io(path.display().to_string(), e.to_string()))?;
        self.parse(&path.to_string_lossy(), source)
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a batch of files in parallel. Each worker owns its own parser.
pub fn parse_all(paths: &[PathBuf]) -> Vec<Result<SourceUnit, ParseError>> {
    paths
        .par_iter()
        .map(|path| SourceParser::new().parse_file(path))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {0}: {1}")]
    Io(String, String),
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed: {0}")]
    ParseFailed(String),
}

fn language_for_path(path: &str) -> Language {
    if path.ends_with(".tsx") {
        tree_sitter_typescript::LANGUAGE_TSX.into()
    } else {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }
}
