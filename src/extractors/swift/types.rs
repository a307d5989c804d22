use crate::extractors::base::{Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::SwiftExtractor;

/// Type declarations: classes, structs, enums, extensions, actors and protocols
impl SwiftExtractor<'_> {
    /// The grammar spells every nominal type `class_declaration`; the keyword
    /// tells them apart
    pub(super) fn declaration_kind(&self, node: &Node) -> SymbolKind {
        let keyword = match node.child_by_field_name("declaration_kind") {
            Some(kind) => self.base.get_node_text(&kind),
            None => self
                .base
                .find_child_by_types(node, &["struct", "enum", "extension", "actor", "class"])
                .map(|n| n.kind().to_string())
                .unwrap_or_default(),
        };

        match keyword.as_str() {
            "struct" => SymbolKind::Struct,
            "enum" => SymbolKind::Enum,
            "extension" => SymbolKind::Extension,
            _ => SymbolKind::Class,
        }
    }

    /// `final class Name<T>: Base, Proto` with members from the body
    pub(super) fn extract_type<'tree>(&self, node: Node<'tree>, kind: SymbolKind) -> Draft<'tree> {
        let heritage = self.inheritance(&node);
        let symbol = self.base.create_symbol(
            &node,
            self.base.name_of(&node),
            kind,
            SymbolOptions {
                signature: Some(self.header(&node)),
                modifiers: self.modifiers(&node),
                heritage,
                ..Default::default()
            },
        );
        Draft::with_members(symbol, node.child_by_field_name("body"))
    }

    /// Conformance list, e.g. `UIViewController, UITableViewDelegate`
    fn inheritance(&self, node: &Node) -> Option<String> {
        let specifiers: Vec<String> = self
            .base
            .get_children_of_type(node, "inheritance_specifier")
            .iter()
            .map(|s| self.base.normalized_text(s))
            .collect();
        if specifiers.is_empty() {
            None
        } else {
            Some(specifiers.join(", "))
        }
    }
}
