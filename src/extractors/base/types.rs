// Base Outline Types
//
// Symbol model shared by every grammar adapter and the outline serializer.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A declared entity (function, class, field, etc.) extracted from source code
///
/// Symbols are built once during a single extraction call and never mutated
/// afterwards. Children mirror source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symbol {
    /// Symbol name as it appears in code
    pub name: String,
    /// Kind of symbol (function, class, etc.)
    pub kind: SymbolKind,
    /// Display header assembled from verbatim source slices
    pub signature: String,
    /// Leading documentation block, newline-joined in source order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    /// Start line number (1-based)
    pub start_line: u32,
    /// Start column number (0-based)
    pub start_column: u32,
    /// End line number (1-based)
    pub end_line: u32,
    /// Modifier keywords and annotations, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
    /// Lines rendered above the signature (Python decorators)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<String>,
    /// Extends/implements/base-class/conformance clause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heritage: Option<String>,
    /// How the serializer closes this symbol
    pub body: BodyKind,
    /// Nested symbols (class members, struct fields, enum constants)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Symbol>,
}

/// Symbol kinds shared across all languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Package,
    Import,
    Export,
    Define,
    Function,
    Method,
    Type,
    Struct,
    Interface,
    Class,
    Enum,
    EnumConstant,
    Field,
    Variable,
    Constant,
    TypeAlias,
    Subscript,
    Initializer,
    Deinitializer,
    Namespace,
    Extension,
}

impl SymbolKind {
    /// Body shape a symbol of this kind gets unless its adapter says otherwise
    pub fn default_body(self) -> BodyKind {
        match self {
            SymbolKind::Function
            | SymbolKind::Method
            | SymbolKind::Subscript
            | SymbolKind::Initializer
            | SymbolKind::Deinitializer => BodyKind::Elided,
            SymbolKind::Struct
            | SymbolKind::Interface
            | SymbolKind::Class
            | SymbolKind::Enum
            | SymbolKind::Namespace
            | SymbolKind::Extension => BodyKind::Members,
            _ => BodyKind::Bare,
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SymbolKind::Package => "package",
            SymbolKind::Import => "import",
            SymbolKind::Export => "export",
            SymbolKind::Define => "define",
            SymbolKind::Function => "function",
            SymbolKind::Method => "method",
            SymbolKind::Type => "type",
            SymbolKind::Struct => "struct",
            SymbolKind::Interface => "interface",
            SymbolKind::Class => "class",
            SymbolKind::Enum => "enum",
            SymbolKind::EnumConstant => "enum_constant",
            SymbolKind::Field => "field",
            SymbolKind::Variable => "variable",
            SymbolKind::Constant => "constant",
            SymbolKind::TypeAlias => "type_alias",
            SymbolKind::Subscript => "subscript",
            SymbolKind::Initializer => "initializer",
            SymbolKind::Deinitializer => "deinitializer",
            SymbolKind::Namespace => "namespace",
            SymbolKind::Extension => "extension",
        };
        write!(f, "{}", name)
    }
}

/// How a symbol's body is rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// Single terminated line, no body
    Bare,
    /// Executable body replaced by a placeholder
    Elided,
    /// Block whose contents are the symbol's children
    Members,
}

/// Optional parameters for `BaseExtractor::create_symbol`
#[derive(Debug, Clone, Default)]
pub struct SymbolOptions {
    /// Rendered header; falls back to the symbol name
    pub signature: Option<String>,
    /// Explicit documentation; falls back to the leading comment run
    pub doc_comment: Option<String>,
    pub modifiers: Vec<String>,
    pub decorators: Vec<String>,
    pub heritage: Option<String>,
    /// Overrides `SymbolKind::default_body`
    pub body: Option<BodyKind>,
}

/// Outcome of classifying one CST node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    /// The node declares a symbol of this kind
    Declaration(SymbolKind),
    /// Look inside the node for nested declarations
    Recurse,
    /// The node carries no symbols
    Ignore,
}

/// The ordered top-level symbols of one file
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutlineDocument {
    pub language: Language,
    pub symbols: Vec<Symbol>,
}

impl OutlineDocument {
    pub fn new(language: Language, symbols: Vec<Symbol>) -> Self {
        Self { language, symbols }
    }

    /// Total number of symbols in the forest, nested ones included
    pub fn symbol_count(&self) -> usize {
        fn count(symbols: &[Symbol]) -> usize {
            symbols.iter().map(|s| 1 + count(&s.children)).sum()
        }
        count(&self.symbols)
    }

    /// Export the symbol forest as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
