//! C++ outline adapter
//! Wraps the C adapter and adds the C++-only declarations:
//! - scopes: namespaces and template declarations
//! - classes, `using` lines and aliases, built by the shared C builders
//!
//! Functions declared or defined inside a class body are methods; access
//! specifier labels are dropped.

mod scopes;


use crate::extractors::base::{BaseExtractor, Draft, GrammarAdapter, NodeClass, SymbolKind};
use crate::extractors::c::{declares_function, extract_record, extract_verbatim, CExtractor};
use crate::language::Language;
use tree_sitter::Node;

pub struct CppExtractor<'a> {
    c: CExtractor<'a>,
}

impl<'a> CppExtractor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            c: CExtractor::with_language(Language::Cpp, content),
        }
    }

    fn base(&self) -> &BaseExtractor<'a> {
        self.c.base()
    }
}

/// True for declarations written directly in a class body, including
/// templated ones
fn in_class_body(node: &Node) -> bool {
    let mut parent = node.parent();
    if parent.is_some_and(|p| p.kind() == "template_declaration") {
        parent = parent.and_then(|p| p.parent());
    }
    parent.is_some_and(|p| p.kind() == "field_declaration_list")
}

impl GrammarAdapter for CppExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        self.c.base()
    }

    fn classify(&self, node: &Node) -> NodeClass {
        match node.kind() {
            "namespace_definition" => NodeClass::Declaration(SymbolKind::Namespace),
            "class_specifier" => NodeClass::Declaration(SymbolKind::Class),
            "template_declaration" => match self.template_target(node) {
                Some(inner) => self.classify(&inner),
                None => NodeClass::Ignore,
            },
            "alias_declaration" => NodeClass::Declaration(SymbolKind::TypeAlias),
            "using_declaration" | "namespace_alias_definition" => {
                NodeClass::Declaration(SymbolKind::Import)
            }
            "function_definition" | "declaration" | "field_declaration"
                if in_class_body(node)
                    && (node.kind() == "function_definition" || declares_function(node)) =>
            {
                NodeClass::Declaration(SymbolKind::Method)
            }
            "access_specifier" | "friend_declaration" | "template_parameter_list" => {
                NodeClass::Ignore
            }
            _ => self.c.classify_node(node),
        }
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
        depth: usize,
    ) -> Vec<Draft<'tree>> {
        match node.kind() {
            "namespace_definition" => vec![self.extract_namespace(node)],
            "class_specifier" => vec![extract_record(self.base(), node, kind)],
            "template_declaration" => self.extract_template(node, kind, depth),
            "alias_declaration" | "using_declaration" | "namespace_alias_definition" => {
                vec![extract_verbatim(self.base(), node, kind)]
            }
            _ => self.c.build_node(node, kind),
        }
    }
}
