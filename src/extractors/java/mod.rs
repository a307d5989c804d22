/// Java outline adapter
///
/// This module is organized into focused sub-modules:
/// - helpers: modifiers and heritage clauses
/// - classes: class, interface, enum, record and annotation types
/// - methods: methods and constructors
/// - fields: fields, interface constants and enum constants
/// - imports_packages: package and import passthrough
mod classes;
mod fields;
mod helpers;
mod imports_packages;
mod methods;

#[cfg(test)]
mod tests;

use crate::extractors::base::{
    is_comment, BaseExtractor, Draft, GrammarAdapter, NodeClass, SymbolKind,
};
use crate::language::Language;
use tree_sitter::Node;

/// Java outline adapter
pub struct JavaExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> JavaExtractor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            base: BaseExtractor::new(Language::Java, content),
        }
    }
}

impl GrammarAdapter for JavaExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        &self.base
    }

    fn classify(&self, node: &Node) -> NodeClass {
        if is_comment(node) {
            return NodeClass::Ignore;
        }
        match node.kind() {
            "package_declaration" => NodeClass::Declaration(SymbolKind::Package),
            "import_declaration" => NodeClass::Declaration(SymbolKind::Import),
            "class_declaration" | "record_declaration" => {
                NodeClass::Declaration(SymbolKind::Class)
            }
            "interface_declaration" | "annotation_type_declaration" => {
                NodeClass::Declaration(SymbolKind::Interface)
            }
            "enum_declaration" => NodeClass::Declaration(SymbolKind::Enum),
            "method_declaration" | "annotation_type_element_declaration" => {
                NodeClass::Declaration(SymbolKind::Method)
            }
            "constructor_declaration" | "compact_constructor_declaration" => {
                NodeClass::Declaration(SymbolKind::Initializer)
            }
            "field_declaration" | "constant_declaration" => {
                NodeClass::Declaration(SymbolKind::Field)
            }
            "enum_constant" => NodeClass::Declaration(SymbolKind::EnumConstant),
            "modifiers" | "block" | "static_initializer" | "constructor_body" => {
                NodeClass::Ignore
            }
            _ => NodeClass::Recurse,
        }
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        _kind: SymbolKind,
        _depth: usize,
    ) -> Vec<Draft<'tree>> {
        match node.kind() {
            "package_declaration" | "import_declaration" => {
                vec![imports_packages::extract_passthrough(self, node)]
            }
            "class_declaration" | "record_declaration" => vec![classes::extract_class(self, node)],
            "interface_declaration" => vec![classes::extract_interface(self, node)],
            "annotation_type_declaration" => vec![classes::extract_annotation_type(self, node)],
            "enum_declaration" => vec![classes::extract_enum(self, node)],
            "method_declaration" | "annotation_type_element_declaration" => {
                vec![methods::extract_method(self, node)]
            }
            "constructor_declaration" | "compact_constructor_declaration" => {
                vec![methods::extract_constructor(self, node)]
            }
            "field_declaration" | "constant_declaration" => fields::extract_fields(self, node),
            "enum_constant" => vec![fields::extract_enum_constant(self, node)],
            _ => Vec::new(),
        }
    }
}
