use crate::extractors::base::{Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::SwiftExtractor;

/// Where a stored or computed property header ends
const PROPERTY_TAIL_KINDS: &[&str] = &["=", "computed_property", "willset_didset_block"];

/// Properties, enum cases and type aliases
impl SwiftExtractor<'_> {
    /// `var name: Type`, cut before the initializer or accessor block.
    /// Protocol requirements keep their `{ get set }` clause.
    pub(super) fn extract_property<'tree>(&self, node: Node<'tree>, depth: usize) -> Draft<'tree> {
        let kind = if depth > 0 {
            SymbolKind::Field
        } else {
            SymbolKind::Variable
        };
        let signature = if node.kind() == "protocol_property_declaration" {
            self.base.normalized_text(&node)
        } else {
            let tail = self.base.find_child_by_types(&node, PROPERTY_TAIL_KINDS);
            self.base.header_text(&node, tail)
        };

        Draft::leaf(self.base.create_symbol(
            &node,
            self.base.name_of(&node),
            kind,
            SymbolOptions {
                signature: Some(signature),
                modifiers: self.modifiers(&node),
                ..Default::default()
            },
        ))
    }

    /// `case ok = 200`, verbatim
    pub(super) fn extract_enum_entry<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let text = self.base.normalized_text(&node);
        let name = self
            .base
            .get_field_text(&node, "name")
            .unwrap_or_else(|| text.trim_start_matches("case").trim().to_string());

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            SymbolKind::EnumConstant,
            SymbolOptions {
                signature: Some(text),
                ..Default::default()
            },
        ))
    }

    /// `typealias Name = Type`
    pub(super) fn extract_type_alias<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        Draft::leaf(self.base.create_symbol(
            &node,
            self.base.name_of(&node),
            SymbolKind::TypeAlias,
            SymbolOptions {
                signature: Some(self.base.normalized_text(&node)),
                modifiers: self.modifiers(&node),
                ..Default::default()
            },
        ))
    }
}
