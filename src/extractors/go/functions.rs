use crate::extractors::base::{BodyKind, Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

/// Function and method extraction for Go
impl super::GoExtractor<'_> {
    pub(super) fn extract_function<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let name = self.base.name_of(&node);
        let signature = self
            .base
            .signature()
            .text("func ")
            .field(&node, "name")
            .field(&node, "type_parameters")
            .field(&node, "parameters")
            .field_with(" ", &node, "result")
            .build();

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            SymbolKind::Function,
            SymbolOptions {
                signature: Some(signature),
                body: Some(body_of(&node)),
                ..Default::default()
            },
        ))
    }

    pub(super) fn extract_method<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let name = self.base.name_of(&node);
        let signature = self
            .base
            .signature()
            .text("func ")
            .node_with("", node.child_by_field_name("receiver"), " ")
            .field(&node, "name")
            .field(&node, "parameters")
            .field_with(" ", &node, "result")
            .build();

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            SymbolKind::Method,
            SymbolOptions {
                signature: Some(signature),
                body: Some(body_of(&node)),
                ..Default::default()
            },
        ))
    }

    /// Interface members render verbatim, without a body
    pub(super) fn extract_interface_member<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
    ) -> Draft<'tree> {
        let signature = self.base.normalized_text(&node);
        let name = node
            .child_by_field_name("name")
            .map(|n| self.base.get_node_text(&n))
            .unwrap_or_else(|| signature.clone());

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            kind,
            SymbolOptions {
                signature: Some(signature),
                body: Some(BodyKind::Bare),
                ..Default::default()
            },
        ))
    }
}

/// Assembly-backed declarations have no body
fn body_of(node: &Node) -> BodyKind {
    if node.child_by_field_name("body").is_some() {
        BodyKind::Elided
    } else {
        BodyKind::Bare
    }
}
