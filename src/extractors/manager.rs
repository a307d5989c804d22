//! OutlineManager - caller-side API over the outline engine
//!
//! Resolves paths to bytes and language tags, owns the tree-sitter parser for
//! each call and hands the tree to the factory. Failures here carry context
//! through anyhow; the engine itself only ever reports an unknown language.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use tracing::{debug, warn};
use tree_sitter::Parser;

use crate::extractors::base::OutlineDocument;
use crate::extractors::factory::extract_document;
use crate::language::{self, Language};

/// Stateless entry point for file and source extraction
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineManager;

impl OutlineManager {
    pub fn new() -> Self {
        Self
    }

    /// Canonical tags of every language with an adapter
    pub fn supported_languages(&self) -> Vec<&'static str> {
        Language::ALL.iter().map(|language| language.name()).collect()
    }

    /// Determine the language tag from a file's extension
    pub fn detect_language(&self, path: &Path) -> Option<&'static str> {
        language::detect_language(path).map(Language::name)
    }

    /// Parse `content` and render its outline
    pub fn extract_source(&self, content: &str, language: &str) -> Result<String> {
        self.extract_document_from_source(content, language)
            .map(|document| document.render())
    }

    /// Parse `content` and return the symbol forest
    ///
    /// A fresh parser is created per call so concurrent callers never share
    /// parser state.
    pub fn extract_document_from_source(
        &self,
        content: &str,
        language: &str,
    ) -> Result<OutlineDocument> {
        let tree_sitter_language = language::get_tree_sitter_language(language)?;

        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_language).map_err(|e| {
            anyhow!("Failed to set parser language for {}: {}", language, e)
        })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| anyhow!("Failed to parse {} source", language))?;

        let document = extract_document(content.as_bytes(), &tree, language)?;
        Ok(document)
    }

    /// Read a file and render its outline
    ///
    /// `language` overrides extension-based detection when given.
    pub fn extract_file(&self, path: &Path, language: Option<&str>) -> Result<String> {
        let language = match language {
            Some(language) => language.to_string(),
            None => self
                .detect_language(path)
                .ok_or_else(|| {
                    anyhow!(
                        "Unsupported file extension: {}",
                        path.extension()
                            .and_then(|ext| ext.to_str())
                            .unwrap_or("")
                    )
                })?
                .to_string(),
        };

        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        // Invalid UTF-8 sequences become U+FFFD instead of failing the file
        let content = String::from_utf8_lossy(&bytes);

        let outline = self
            .extract_source(&content, &language)
            .with_context(|| format!("Failed to extract outline from {}", path.display()))?;

        debug!(
            "Extracted {} outline from {} ({} bytes)",
            language,
            path.display(),
            content.len()
        );
        Ok(outline)
    }

    /// Extract many files in parallel, one independent call per file
    ///
    /// Results keep the input order and each carries its own outcome.
    pub fn extract_files_batch(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<String>)> {
        paths
            .par_iter()
            .map(|path| {
                let result = self.extract_file(path, None);
                if let Err(e) = &result {
                    warn!("Skipping {}: {:#}", path.display(), e);
                }
                (path.clone(), result)
            })
            .collect()
    }
}

#[cfg(test)]
mod manager_tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_supported_languages_match_registry() {
        let manager = OutlineManager::new();
        let supported = manager.supported_languages();

        assert_eq!(supported.len(), Language::ALL.len());
        for tag in ["go", "python", "java", "javascript", "typescript", "tsx", "swift", "c", "cpp"] {
            assert!(supported.contains(&tag), "missing {}", tag);
        }
    }

    #[test]
    fn test_detect_language_by_extension() {
        let manager = OutlineManager::new();

        assert_eq!(manager.detect_language(Path::new("src/main.go")), Some("go"));
        assert_eq!(manager.detect_language(Path::new("lib/widget.TSX")), Some("tsx"));
        assert_eq!(manager.detect_language(Path::new("include/api.hpp")), Some("cpp"));
        assert_eq!(manager.detect_language(Path::new("README.md")), None);
        assert_eq!(manager.detect_language(Path::new("Makefile")), None);
    }

    #[test]
    fn test_extract_source_scenario_a() {
        let manager = OutlineManager::new();
        let code = "package main\n\n// Greet returns a greeting\nfunc Greet(name string) string {\n\treturn \"hi \" + name\n}\n";

        let outline = manager.extract_source(code, "go").unwrap();

        assert!(outline.contains(
            "// Greet returns a greeting\nfunc Greet(name string) string { //... } // line 4"
        ));
    }

    #[test]
    fn test_extract_source_rejects_unknown_language() {
        let manager = OutlineManager::new();

        let err = manager.extract_source("x = 1", "fortran").unwrap_err();

        assert!(err.to_string().contains("unsupported language"), "{err}");
    }

    #[test]
    fn test_extract_file_uses_extension_or_override() {
        let dir = TempDir::new().unwrap();
        let py = dir.path().join("tool.py");
        fs::write(&py, "def run():\n    pass\n").unwrap();
        let script = dir.path().join("tool.script");
        fs::write(&script, "def run():\n    pass\n").unwrap();

        let manager = OutlineManager::new();

        let detected = manager.extract_file(&py, None).unwrap();
        assert!(detected.contains("def run(): # line 1"));

        assert!(manager.extract_file(&script, None).is_err());
        let overridden = manager.extract_file(&script, Some("python")).unwrap();
        assert_eq!(detected, overridden);
    }

    #[test]
    fn test_extract_file_tolerates_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legacy.c");
        let mut bytes = b"/* caf\xe9 */\nint answer(void) { return 42; }\n".to_vec();
        bytes.extend_from_slice(b"int other(void);\n");
        fs::write(&path, bytes).unwrap();

        let manager = OutlineManager::new();
        let outline = manager.extract_file(&path, None).unwrap();

        assert!(outline.contains("int answer(void) { //... } // line 2"), "{outline}");
        assert!(outline.contains("int other(void); // line 3"), "{outline}");
    }

    #[test]
    fn test_extract_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let manager = OutlineManager::new();

        let err = manager
            .extract_file(&dir.path().join("absent.go"), None)
            .unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to read"));
    }

    #[test]
    fn test_batch_keeps_input_order_and_isolates_failures() {
        let dir = TempDir::new().unwrap();
        let go = dir.path().join("a.go");
        fs::write(&go, "package a\n").unwrap();
        let unknown = dir.path().join("b.txt");
        fs::write(&unknown, "hello\n").unwrap();
        let c = dir.path().join("c.c");
        fs::write(&c, "int main(void) { return 0; }\n").unwrap();

        let manager = OutlineManager::new();
        let paths = vec![go.clone(), unknown.clone(), c.clone()];
        let results = manager.extract_files_batch(&paths);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, go);
        assert_eq!(results[1].0, unknown);
        assert_eq!(results[2].0, c);
        assert_eq!(results[0].1.as_ref().unwrap(), "package a // line 1\n");
        assert!(results[1].1.is_err());
        assert!(results[2]
            .1
            .as_ref()
            .unwrap()
            .contains("int main(void) { //... } // line 1"));
    }
}
