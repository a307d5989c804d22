use crate::extractors::base::{Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

/// Class extraction for Python
impl super::PythonExtractor<'_> {
    pub(super) fn extract_class<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let decorators = self.decorators(&node);
        let signature = self
            .base
            .signature()
            .text("class ")
            .field(&node, "name")
            .field(&node, "type_parameters")
            .field(&node, "superclasses")
            .build();

        let symbol = self.base.create_symbol(
            &node,
            self.base.name_of(&node),
            SymbolKind::Class,
            SymbolOptions {
                signature: Some(signature),
                doc_comment: self.documentation(&node),
                modifiers: decorators.clone(),
                decorators,
                heritage: self.base.get_field_text(&node, "superclasses"),
                ..Default::default()
            },
        );
        Draft::with_members(symbol, node.child_by_field_name("body"))
    }
}
