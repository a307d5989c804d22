//! C outline adapter
//!
//! Also the shared core of the C++ adapter, which reuses every builder here
//! and layers namespaces, classes and templates on top.
//!
//! - `helpers` - Declarator chain navigation
//! - `declarations` - Preprocessor directives, function definitions, prototypes and globals
//! - `types` - Struct, union and enum specifiers

mod declarations;
mod helpers;
mod types;


pub(crate) use declarations::{extract_function_definition, extract_verbatim};
pub(crate) use helpers::declares_function;
pub(crate) use types::extract_record;

use crate::extractors::base::{
    is_comment, BaseExtractor, Draft, GrammarAdapter, NodeClass, SymbolKind,
};
use crate::language::Language;
use tree_sitter::Node;

pub struct CExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> CExtractor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self::with_language(Language::C, content)
    }

    /// Shared core for C++
    pub(crate) fn with_language(language: Language, content: &'a [u8]) -> Self {
        Self {
            base: BaseExtractor::new(language, content),
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor<'a> {
        &self.base
    }

    /// Classification shared by C and C++
    pub(crate) fn classify_node(&self, node: &Node) -> NodeClass {
        if is_comment(node) {
            return NodeClass::Ignore;
        }
        match node.kind() {
            "preproc_include" => NodeClass::Declaration(SymbolKind::Import),
            "preproc_def" | "preproc_function_def" => NodeClass::Declaration(SymbolKind::Define),
            "function_definition" => NodeClass::Declaration(SymbolKind::Function),
            "declaration" if declares_function(node) => {
                NodeClass::Declaration(SymbolKind::Function)
            }
            "declaration" => NodeClass::Declaration(SymbolKind::Variable),
            "struct_specifier" => NodeClass::Declaration(SymbolKind::Struct),
            "union_specifier" => NodeClass::Declaration(SymbolKind::Type),
            "enum_specifier" => NodeClass::Declaration(SymbolKind::Enum),
            "field_declaration" => NodeClass::Declaration(SymbolKind::Field),
            "enumerator" => NodeClass::Declaration(SymbolKind::EnumConstant),
            "type_definition" => NodeClass::Declaration(SymbolKind::TypeAlias),
            "compound_statement" | "expression_statement" => NodeClass::Ignore,
            _ => NodeClass::Recurse,
        }
    }

    /// Builders shared by C and C++
    pub(crate) fn build_node<'tree>(&self, node: Node<'tree>, kind: SymbolKind) -> Vec<Draft<'tree>> {
        let draft = match node.kind() {
            "preproc_include" | "preproc_def" | "preproc_function_def" | "declaration"
            | "field_declaration" | "type_definition" => extract_verbatim(&self.base, node, kind),
            "function_definition" => extract_function_definition(&self.base, node, kind),
            "struct_specifier" | "union_specifier" | "enum_specifier" => {
                extract_record(&self.base, node, kind)
            }
            "enumerator" => types::extract_enumerator(&self.base, node),
            _ => return Vec::new(),
        };
        vec![draft]
    }
}

impl GrammarAdapter for CExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        &self.base
    }

    fn classify(&self, node: &Node) -> NodeClass {
        self.classify_node(node)
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
        _depth: usize,
    ) -> Vec<Draft<'tree>> {
        self.build_node(node, kind)
    }
}
