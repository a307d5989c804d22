//! JavaScript outline adapter
//!
//! Also the shared core of the TypeScript adapter: every builder here reads
//! optional type annotations, type parameters and accessibility modifiers, so
//! the same code renders both grammars.
//!
//! - **functions**: function declarations and function-valued variables
//! - **types**: classes, methods and class fields
//! - **variables**: `const`/`let`/`var` declarations and `require()` passthrough
//! - **imports**: imports, exports and re-exports

mod functions;
mod imports;
mod types;
mod variables;

#[cfg(test)]
mod tests;

pub(crate) use imports::{export_prefix, ExportContext};

use crate::extractors::base::{
    is_comment, BaseExtractor, Draft, GrammarAdapter, NodeClass, Symbol, SymbolKind,
    SymbolOptions,
};
use crate::language::Language;
use tree_sitter::Node;

pub struct JavaScriptExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> JavaScriptExtractor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self::with_language(Language::JavaScript, content)
    }

    /// Shared core for TypeScript and TSX
    pub(crate) fn with_language(language: Language, content: &'a [u8]) -> Self {
        Self {
            base: BaseExtractor::new(language, content),
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor<'a> {
        &self.base
    }

    /// Create a symbol at the export statement wrapping `node`, if any
    pub(crate) fn create_symbol_at(
        &self,
        node: &Node,
        export: Option<ExportContext>,
        name: String,
        kind: SymbolKind,
        options: SymbolOptions,
    ) -> Symbol {
        let anchor = export.map(|e| e.anchor).unwrap_or(*node);
        self.base.create_symbol(&anchor, name, kind, options)
    }

    /// Classification shared by JavaScript and TypeScript
    pub(crate) fn classify_node(&self, node: &Node) -> NodeClass {
        if is_comment(node) {
            return NodeClass::Ignore;
        }
        match node.kind() {
            "import_statement" => NodeClass::Declaration(SymbolKind::Import),
            "export_statement" => NodeClass::Declaration(SymbolKind::Export),
            "function_declaration" | "generator_function_declaration" => {
                NodeClass::Declaration(SymbolKind::Function)
            }
            "class_declaration" => NodeClass::Declaration(SymbolKind::Class),
            "method_definition" => NodeClass::Declaration(SymbolKind::Method),
            "field_definition" => NodeClass::Declaration(SymbolKind::Field),
            "lexical_declaration" | "variable_declaration" => {
                NodeClass::Declaration(SymbolKind::Variable)
            }
            // Callback bodies hold locals, not module symbols
            "arrow_function" | "function_expression" | "function" | "generator_function"
            | "class" | "class_static_block" | "decorator" => NodeClass::Ignore,
            // Object literal methods belong to the value, not the module
            "object" | "arguments" => NodeClass::Ignore,
            _ => NodeClass::Recurse,
        }
    }

    /// Builders shared by JavaScript and TypeScript
    pub(crate) fn build_node<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Vec<Draft<'tree>> {
        match node.kind() {
            "import_statement" => vec![self.extract_passthrough(node, SymbolKind::Import)],
            "export_statement" => self.extract_export(node),
            "function_declaration" | "generator_function_declaration" => {
                vec![self.extract_function(node, export)]
            }
            "class_declaration" => vec![self.extract_class(node, export)],
            "method_definition" => vec![self.extract_method(node)],
            "field_definition" => vec![self.extract_field(node)],
            "lexical_declaration" | "variable_declaration" => {
                self.extract_variables(node, export)
            }
            _ => Vec::new(),
        }
    }
}

impl GrammarAdapter for JavaScriptExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        &self.base
    }

    fn classify(&self, node: &Node) -> NodeClass {
        self.classify_node(node)
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        _kind: SymbolKind,
        _depth: usize,
    ) -> Vec<Draft<'tree>> {
        self.build_node(node, None)
    }
}
