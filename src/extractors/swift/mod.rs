// Swift outline adapter
// Organized by declaration family:
// - types: class/struct/enum/extension/actor and protocols
// - callables: functions, initializers, deinitializers and subscripts
// - properties: stored/computed properties, enum cases and type aliases

mod callables;
mod properties;
mod types;


use crate::extractors::base::{
    is_comment, BaseExtractor, Draft, GrammarAdapter, NodeClass, SymbolKind, SymbolOptions,
};
use crate::language::Language;
use tree_sitter::Node;

/// Kinds that open a Swift declaration body
const BODY_KINDS: &[&str] = &[
    "class_body",
    "enum_class_body",
    "protocol_body",
    "function_body",
    "computed_property",
];

pub struct SwiftExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> SwiftExtractor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            base: BaseExtractor::new(Language::Swift, content),
        }
    }

    /// Header text up to the declaration body, or the whole node without one
    fn header(&self, node: &Node) -> String {
        let body = self.base.find_child_by_types(node, BODY_KINDS);
        self.base.header_text(node, body)
    }

    fn modifiers(&self, node: &Node) -> Vec<String> {
        self.base
            .modifier_texts(self.base.find_child_by_type(node, "modifiers"))
    }

    /// Declarations rendered exactly as written: imports, associated types
    fn extract_verbatim<'tree>(&self, node: Node<'tree>, kind: SymbolKind) -> Draft<'tree> {
        let text = self.base.normalized_text(&node);
        let name = match node.child_by_field_name("name") {
            Some(name) => self.base.get_node_text(&name),
            None => text.clone(),
        };
        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            kind,
            SymbolOptions {
                signature: Some(text),
                ..Default::default()
            },
        ))
    }
}

impl GrammarAdapter for SwiftExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        &self.base
    }

    fn classify(&self, node: &Node) -> NodeClass {
        if is_comment(node) {
            return NodeClass::Ignore;
        }
        match node.kind() {
            "import_declaration" => NodeClass::Declaration(SymbolKind::Import),
            "class_declaration" => NodeClass::Declaration(self.declaration_kind(node)),
            "protocol_declaration" => NodeClass::Declaration(SymbolKind::Interface),
            "function_declaration" => NodeClass::Declaration(SymbolKind::Function),
            "protocol_function_declaration" => NodeClass::Declaration(SymbolKind::Method),
            "init_declaration" => NodeClass::Declaration(SymbolKind::Initializer),
            "deinit_declaration" => NodeClass::Declaration(SymbolKind::Deinitializer),
            "subscript_declaration" => NodeClass::Declaration(SymbolKind::Subscript),
            "property_declaration" | "protocol_property_declaration" => {
                NodeClass::Declaration(SymbolKind::Variable)
            }
            "typealias_declaration" | "associatedtype_declaration" => {
                NodeClass::Declaration(SymbolKind::TypeAlias)
            }
            "enum_entry" => NodeClass::Declaration(SymbolKind::EnumConstant),
            "function_body" | "computed_property" | "statements" | "lambda_literal" => {
                NodeClass::Ignore
            }
            _ => NodeClass::Recurse,
        }
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
        depth: usize,
    ) -> Vec<Draft<'tree>> {
        let draft = match node.kind() {
            "import_declaration" | "associatedtype_declaration" => {
                self.extract_verbatim(node, kind)
            }
            "class_declaration" | "protocol_declaration" => self.extract_type(node, kind),
            "function_declaration" | "protocol_function_declaration" => {
                self.extract_function(node, depth)
            }
            "init_declaration" | "deinit_declaration" | "subscript_declaration" => {
                self.extract_special_member(node, kind)
            }
            "property_declaration" | "protocol_property_declaration" => {
                self.extract_property(node, depth)
            }
            "typealias_declaration" => self.extract_type_alias(node),
            "enum_entry" => self.extract_enum_entry(node),
            _ => return Vec::new(),
        };
        vec![draft]
    }
}
