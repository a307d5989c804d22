//! TypeScript/TSX outline adapter
//!
//! Wraps the JavaScript adapter, which already reads type annotations, and
//! adds the declarations only TypeScript has:
//!
//! - **interfaces**: interfaces, type aliases, enums, namespaces and member
//!   signatures

mod interfaces;


use crate::extractors::base::{BaseExtractor, Draft, GrammarAdapter, NodeClass, SymbolKind};
use crate::extractors::javascript::{ExportContext, JavaScriptExtractor};
use crate::language::Language;
use tree_sitter::Node;

pub struct TypeScriptExtractor<'a> {
    js: JavaScriptExtractor<'a>,
}

impl<'a> TypeScriptExtractor<'a> {
    /// `language` selects between the TypeScript and TSX flavours
    pub fn new(language: Language, content: &'a [u8]) -> Self {
        Self {
            js: JavaScriptExtractor::with_language(language, content),
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor<'a> {
        self.js.base()
    }

    /// Builders for TypeScript-only declaration kinds
    fn build_typescript<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Option<Vec<Draft<'tree>>> {
        let drafts = match node.kind() {
            "interface_declaration" => vec![self.extract_interface(node, export)],
            "type_alias_declaration" => vec![self.extract_type_alias(node, export)],
            "enum_declaration" => vec![self.extract_enum(node, export)],
            "internal_module" | "module" => vec![self.extract_namespace(node, export)],
            "abstract_class_declaration" => vec![self.js.extract_class(node, export)],
            "function_signature" => vec![self.js.extract_function(node, export)],
            "method_signature" | "abstract_method_signature" | "index_signature"
            | "call_signature" | "construct_signature" => {
                vec![self.extract_member_signature(node, SymbolKind::Method)]
            }
            "property_signature" => vec![self.extract_member_signature(node, SymbolKind::Field)],
            "public_field_definition" => vec![self.js.extract_field(node)],
            "enum_assignment" | "property_identifier" => vec![self.extract_enum_member(node)],
            _ => return None,
        };
        Some(drafts)
    }

    /// `export` around a TypeScript-only declaration keeps the prefix;
    /// everything else goes through the JavaScript export handling
    fn build_export<'tree>(&self, node: Node<'tree>) -> Vec<Draft<'tree>> {
        if let Some(declaration) = node.child_by_field_name("declaration") {
            if let Some(drafts) = self.build_typescript(declaration, Some(ExportContext::new(node)))
            {
                return drafts;
            }
        }
        self.js.extract_export(node)
    }
}

impl GrammarAdapter for TypeScriptExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        self.js.base()
    }

    fn classify(&self, node: &Node) -> NodeClass {
        match node.kind() {
            "interface_declaration" => NodeClass::Declaration(SymbolKind::Interface),
            "type_alias_declaration" => NodeClass::Declaration(SymbolKind::TypeAlias),
            "enum_declaration" => NodeClass::Declaration(SymbolKind::Enum),
            "internal_module" | "module" => NodeClass::Declaration(SymbolKind::Namespace),
            "abstract_class_declaration" => NodeClass::Declaration(SymbolKind::Class),
            "function_signature" => NodeClass::Declaration(SymbolKind::Function),
            "method_signature" | "abstract_method_signature" | "index_signature"
            | "call_signature" | "construct_signature" => {
                NodeClass::Declaration(SymbolKind::Method)
            }
            "property_signature" | "public_field_definition" => {
                NodeClass::Declaration(SymbolKind::Field)
            }
            "enum_assignment" | "property_identifier"
                if node.parent().is_some_and(|p| p.kind() == "enum_body") =>
            {
                NodeClass::Declaration(SymbolKind::EnumConstant)
            }
            "type_annotation" | "type_arguments" | "type_parameters" => NodeClass::Ignore,
            _ => self.js.classify_node(node),
        }
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        _kind: SymbolKind,
        _depth: usize,
    ) -> Vec<Draft<'tree>> {
        if node.kind() == "export_statement" {
            return self.build_export(node);
        }
        self.build_typescript(node, None)
            .unwrap_or_else(|| self.js.build_node(node, None))
    }
}
