use crate::extractors::base::{Draft, GrammarAdapter, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::CppExtractor;

/// Namespaces and templates
impl CppExtractor<'_> {
    /// `namespace name {` with nested declarations as members
    pub(super) fn extract_namespace<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let base = self.base();
        let body = node.child_by_field_name("body");

        let symbol = base.create_symbol(
            &node,
            base.name_of(&node),
            SymbolKind::Namespace,
            SymbolOptions {
                signature: Some(base.header_text(&node, body)),
                ..Default::default()
            },
        );
        Draft::with_members(symbol, body)
    }

    /// The declaration a `template <...>` prefix applies to
    pub(super) fn template_target<'tree>(&self, node: &Node<'tree>) -> Option<Node<'tree>> {
        let mut cursor = node.walk();
        let target = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "template_parameter_list" && !child.is_extra())
            .last();
        target
    }

    /// Build the templated declaration, then prefix its signature with the
    /// parameter list and move it to the `template` line
    pub(super) fn extract_template<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
        depth: usize,
    ) -> Vec<Draft<'tree>> {
        let Some(inner) = self.template_target(&node) else {
            return Vec::new();
        };
        let base = self.base();
        let prefix = base.header_text(&node, Some(inner));
        let start = node.start_position();

        let mut drafts = self.build(inner, kind, depth);
        for draft in &mut drafts {
            let symbol = &mut draft.symbol;
            symbol.signature = format!("{} {}", prefix, symbol.signature);
            symbol.start_line = (start.row + 1) as u32;
            symbol.start_column = start.column as u32;
            if symbol.doc_comment.is_none() {
                symbol.doc_comment = base.find_doc_comment(&node);
            }
        }
        drafts
    }
}
