//! Language Support - Shared tree-sitter language configuration
//!
//! Single registry of the languages the outline engine understands: tags,
//! file extensions, grammars and the per-language rendering constants. All
//! of it is immutable and safe to share across threads.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::OutlineError;
use crate::extractors::base::{VisibilityPolicy, Whitespace};
use crate::render::{BlockStyle, ElidedBody, OutlineStyle};

/// A language with a registered grammar adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Python,
    Java,
    JavaScript,
    TypeScript,
    Tsx,
    Swift,
    C,
    Cpp,
}

const BRACE_COMMENT_LEADERS: &[&str] = &["//", "/*", "*"];
const HASH_COMMENT_LEADERS: &[&str] = &["#"];

impl Language {
    pub const ALL: [Language; 9] = [
        Language::Go,
        Language::Python,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
        Language::Tsx,
        Language::Swift,
        Language::C,
        Language::Cpp,
    ];

    /// Canonical lowercase tag
    pub fn name(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Swift => "swift",
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    /// Resolve a tag or alias, case-insensitively
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "go" | "golang" => Some(Language::Go),
            "python" | "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            "javascript" | "js" | "jsx" => Some(Language::JavaScript),
            "typescript" | "ts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "swift" => Some(Language::Swift),
            "c" => Some(Language::C),
            "cpp" | "c++" => Some(Language::Cpp),
            _ => None,
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Go => &["go"],
            Language::Python => &["py", "pyi"],
            Language::Java => &["java"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "mts", "cts"],
            Language::Tsx => &["tsx"],
            Language::Swift => &["swift"],
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "cxx", "cc", "hpp", "hxx", "hh"],
        }
    }

    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Language::Go => tree_sitter_go::LANGUAGE.into(),
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Language::Swift => tree_sitter_swift::LANGUAGE.into(),
            Language::C => tree_sitter_c::LANGUAGE.into(),
            Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        }
    }

    pub fn visibility_policy(self) -> VisibilityPolicy {
        match self {
            Language::Python => VisibilityPolicy::UnderscorePrivate,
            _ => VisibilityPolicy::IncludeAll,
        }
    }

    /// Whitespace regime for rendered signatures
    pub fn whitespace(self) -> Whitespace {
        match self {
            Language::C | Language::Cpp | Language::Swift => Whitespace::Collapsed,
            _ => Whitespace::AsIs,
        }
    }

    /// Indentation, comment and body conventions of the rendered outline
    pub fn outline_style(self) -> OutlineStyle {
        match self {
            Language::Go | Language::Java | Language::C | Language::Cpp => OutlineStyle {
                indent_unit: "\t",
                comment_marker: "//",
                comment_leaders: BRACE_COMMENT_LEADERS,
                blocks: BlockStyle::Braces,
                elided: ElidedBody::Inline("{ //... }"),
            },
            Language::Python => OutlineStyle {
                indent_unit: "    ",
                comment_marker: "#",
                comment_leaders: HASH_COMMENT_LEADERS,
                blocks: BlockStyle::Colon,
                elided: ElidedBody::Indented("..."),
            },
            Language::JavaScript | Language::TypeScript | Language::Tsx => OutlineStyle {
                indent_unit: "  ",
                comment_marker: "//",
                comment_leaders: BRACE_COMMENT_LEADERS,
                blocks: BlockStyle::Braces,
                elided: ElidedBody::Block("// ..."),
            },
            Language::Swift => OutlineStyle {
                indent_unit: "  ",
                comment_marker: "//",
                comment_leaders: BRACE_COMMENT_LEADERS,
                blocks: BlockStyle::Braces,
                elided: ElidedBody::Inline("{ ... }"),
            },
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = OutlineError;

    fn from_str(tag: &str) -> std::result::Result<Self, Self::Err> {
        Language::from_tag(tag).ok_or_else(|| OutlineError::UnsupportedLanguage {
            language: tag.to_string(),
        })
    }
}

/// Get tree-sitter language parser for a given language tag
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    let language: Language = language.parse()?;
    Ok(language.tree_sitter_language())
}

/// Detect language from file extension
///
/// Returns the language tag that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    Language::ALL
        .into_iter()
        .find(|language| language.extensions().contains(&extension.as_str()))
        .map(Language::name)
}

/// Detect language from a file path's extension
pub fn detect_language(path: &Path) -> Option<Language> {
    let extension = path.extension()?.to_str()?;
    detect_language_from_extension(extension).and_then(Language::from_tag)
}

#[cfg(test)]
mod language_tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_every_language_loads_a_grammar() {
        for language in Language::ALL {
            let mut parser = tree_sitter::Parser::new();
            assert!(
                parser
                    .set_language(&language.tree_sitter_language())
                    .is_ok(),
                "grammar for {} should load",
                language
            );
        }
    }

    #[test]
    fn test_tags_round_trip_through_name() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.name()), Some(language));
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!(Language::from_tag("JS"), Some(Language::JavaScript));
        assert_eq!(Language::from_tag("c++"), Some(Language::Cpp));
        assert_eq!(Language::from_tag(" Golang "), Some(Language::Go));
        assert_eq!(Language::from_tag("rust"), None);
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(
            err,
            OutlineError::UnsupportedLanguage {
                language: "cobol".to_string()
            }
        );
        assert!(get_tree_sitter_language("cobol").is_err());
    }

    #[test]
    fn test_extension_detection() {
        assert_eq!(detect_language_from_extension("go"), Some("go"));
        assert_eq!(detect_language_from_extension(".tsx"), Some("tsx"));
        assert_eq!(detect_language_from_extension("h"), Some("c"));
        assert_eq!(detect_language_from_extension("hpp"), Some("cpp"));
        assert_eq!(detect_language_from_extension("JSX"), Some("javascript"));
        assert_eq!(detect_language_from_extension("rs"), None);

        assert_eq!(
            detect_language(&PathBuf::from("src/app/main.py")),
            Some(Language::Python)
        );
        assert_eq!(detect_language(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_only_python_filters_by_name() {
        for language in Language::ALL {
            let expected = if language == Language::Python {
                VisibilityPolicy::UnderscorePrivate
            } else {
                VisibilityPolicy::IncludeAll
            };
            assert_eq!(language.visibility_policy(), expected);
        }
    }
}
