mod functions;
mod types;

#[cfg(test)]
mod tests;

use crate::extractors::base::{
    is_comment, BaseExtractor, Draft, GrammarAdapter, NodeClass, SymbolKind, SymbolOptions,
};
use crate::language::Language;
use tree_sitter::Node;

/// Go outline adapter:
/// - package clause and imports (verbatim)
/// - functions and methods with receivers
/// - struct and interface types with their members
/// - other named types and aliases
/// - constants and variables, one line per spec
pub struct GoExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> GoExtractor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            base: BaseExtractor::new(Language::Go, content),
        }
    }

    fn extract_package<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let name = self
            .base
            .find_child_by_type(&node, "package_identifier")
            .map(|n| self.base.get_node_text(&n))
            .unwrap_or_default();
        Draft::leaf(self.base.create_symbol(
            &node,
            name.clone(),
            SymbolKind::Package,
            SymbolOptions {
                signature: Some(format!("package {}", name)),
                ..Default::default()
            },
        ))
    }

    fn extract_import<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        Draft::leaf(self.base.create_symbol(
            &node,
            "import".to_string(),
            SymbolKind::Import,
            SymbolOptions {
                signature: Some(self.base.normalized_text(&node)),
                ..Default::default()
            },
        ))
    }
}

impl GrammarAdapter for GoExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        &self.base
    }

    fn classify(&self, node: &Node) -> NodeClass {
        if is_comment(node) {
            return NodeClass::Ignore;
        }
        match node.kind() {
            "package_clause" => NodeClass::Declaration(SymbolKind::Package),
            "import_declaration" => NodeClass::Declaration(SymbolKind::Import),
            "function_declaration" => NodeClass::Declaration(SymbolKind::Function),
            "method_declaration" => NodeClass::Declaration(SymbolKind::Method),
            "type_declaration" => NodeClass::Declaration(SymbolKind::Type),
            "const_declaration" => NodeClass::Declaration(SymbolKind::Constant),
            "var_declaration" => NodeClass::Declaration(SymbolKind::Variable),
            // Struct members
            "field_declaration" => NodeClass::Declaration(SymbolKind::Field),
            // Interface members
            "method_elem" | "method_spec" => NodeClass::Declaration(SymbolKind::Method),
            "type_elem" => NodeClass::Declaration(SymbolKind::Type),
            "block" | "literal_value" => NodeClass::Ignore,
            _ => NodeClass::Recurse,
        }
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
        _depth: usize,
    ) -> Vec<Draft<'tree>> {
        match node.kind() {
            "package_clause" => vec![self.extract_package(node)],
            "import_declaration" => vec![self.extract_import(node)],
            "function_declaration" => vec![self.extract_function(node)],
            "method_declaration" => vec![self.extract_method(node)],
            "type_declaration" => self.extract_type_declaration(node),
            "const_declaration" | "var_declaration" => self.extract_value_specs(node, kind),
            "field_declaration" => vec![self.extract_field(node)],
            "method_elem" | "method_spec" | "type_elem" => {
                vec![self.extract_interface_member(node, kind)]
            }
            _ => Vec::new(),
        }
    }
}
