//! Shared extractor factory - single dispatch point for every language adapter
//!
//! Every supported language tag resolves here. Keeping one match statement
//! prevents a language from being detected by one code path and missing from
//! another.

use tracing::debug;
use tree_sitter::Tree;

use crate::error::OutlineError;
use crate::extractors::base::{GrammarAdapter, OutlineDocument};
use crate::extractors::{
    c::CExtractor, cpp::CppExtractor, go::GoExtractor, java::JavaExtractor,
    javascript::JavaScriptExtractor, python::PythonExtractor, swift::SwiftExtractor,
    typescript::TypeScriptExtractor,
};
use crate::language::Language;

/// Extract the symbol forest of one file
///
/// # Parameters
/// - `content`: source bytes the tree was parsed from
/// - `tree`: tree-sitter CST over exactly those bytes
/// - `language`: language tag, case-insensitive (e.g. "go", "py", "c++")
///
/// # Returns
/// The ordered top-level symbols, or `UnsupportedLanguage` when no adapter
/// is registered for the tag
pub fn extract_document(
    content: &[u8],
    tree: &Tree,
    language: &str,
) -> Result<OutlineDocument, OutlineError> {
    let language: Language = language.parse()?;

    let symbols = match language {
        Language::Go => GoExtractor::new(content).extract_symbols(tree),
        Language::Python => PythonExtractor::new(content).extract_symbols(tree),
        Language::Java => JavaExtractor::new(content).extract_symbols(tree),
        Language::JavaScript => JavaScriptExtractor::new(content).extract_symbols(tree),
        Language::TypeScript | Language::Tsx => {
            TypeScriptExtractor::new(language, content).extract_symbols(tree)
        }
        Language::Swift => SwiftExtractor::new(content).extract_symbols(tree),
        Language::C => CExtractor::new(content).extract_symbols(tree),
        Language::Cpp => CppExtractor::new(content).extract_symbols(tree),
    };

    let document = OutlineDocument::new(language, symbols);
    debug!(
        "Extracted {} symbols ({} top-level) from {} source",
        document.symbol_count(),
        document.symbols.len(),
        language
    );
    Ok(document)
}

/// Extract and render the outline of one file with default options
///
/// Pure function of its inputs: no caches, no shared parser, safe to call
/// concurrently on disjoint inputs.
pub fn extract_outline(content: &[u8], tree: &Tree, language: &str) -> Result<String, OutlineError> {
    extract_document(content, tree, language).map(|document| document.render())
}

#[cfg(test)]
mod factory_consistency_tests {
    use super::*;
    use crate::extractors::base::SymbolKind;
    use tree_sitter::Parser;

    fn parse(code: &str, language: Language) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    /// Every language in the registry must reach an adapter
    #[test]
    fn test_all_languages_in_factory() {
        for language in Language::ALL {
            let test_content = "";
            let tree = parse(test_content, language);

            let result = extract_document(test_content.as_bytes(), &tree, language.name());
            let document = result.unwrap_or_else(|e| {
                panic!("Language '{}' is missing from factory: {}", language, e)
            });
            assert!(document.symbols.is_empty());
            assert_eq!(document.language, language);
        }
    }

    #[test]
    fn test_factory_rejects_unknown_language() {
        let tree = parse("package main\n", Language::Go);

        let result = extract_outline(b"package main\n", &tree, "cobol");

        assert_eq!(
            result.unwrap_err(),
            OutlineError::UnsupportedLanguage {
                language: "cobol".to_string()
            }
        );
    }

    #[test]
    fn test_tags_are_case_insensitive_and_aliased() {
        let code = "package main\n";
        let tree = parse(code, Language::Go);

        let upper = extract_outline(code.as_bytes(), &tree, "GO").unwrap();
        let alias = extract_outline(code.as_bytes(), &tree, "golang").unwrap();
        assert_eq!(upper, alias);
        assert_eq!(upper, "package main // line 1\n");
    }

    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let code = r#"package shapes

// Area of a rectangle
func Area(w, h float64) float64 {
	return w * h
}

type Rect struct {
	W float64
	H float64
}
"#;
        let tree = parse(code, Language::Go);

        let first = extract_outline(code.as_bytes(), &tree, "go").unwrap();
        let second = extract_outline(code.as_bytes(), &tree, "go").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_preserves_source_order() {
        let code = "def zeta():\n    pass\n\nclass Alpha:\n    pass\n\ndef mid():\n    pass\n";
        let tree = parse(code, Language::Python);

        let output = extract_outline(code.as_bytes(), &tree, "python").unwrap();
        let zeta = output.find("def zeta").unwrap();
        let alpha = output.find("class Alpha").unwrap();
        let mid = output.find("def mid").unwrap();
        assert!(zeta < alpha && alpha < mid, "{output}");
    }

    #[test]
    fn test_json_export_carries_locations() {
        let code = "package main\n\nfunc Run() {\n}\n";
        let tree = parse(code, Language::Go);
        let document = extract_document(code.as_bytes(), &tree, "go").unwrap();

        let json = document.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["language"], "go");
        assert_eq!(value["symbols"][1]["kind"], "function");
        assert_eq!(value["symbols"][1]["start_line"], 3);
        assert_eq!(value["symbols"][1]["end_line"], 4);
        assert_eq!(value["symbols"][1]["body"], "elided");
        assert_eq!(document.symbols[1].kind, SymbolKind::Function);
    }
}
