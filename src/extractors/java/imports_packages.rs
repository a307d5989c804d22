/// Package and import declarations render verbatim
use crate::extractors::base::{Draft, GrammarAdapter, SymbolKind, SymbolOptions};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

pub(super) fn extract_passthrough<'tree>(
    extractor: &JavaExtractor,
    node: Node<'tree>,
) -> Draft<'tree> {
    let base = extractor.base();
    let kind = if node.kind() == "package_declaration" {
        SymbolKind::Package
    } else {
        SymbolKind::Import
    };

    // Name is the dotted path without keywords or the trailing semicolon
    let name = node
        .children(&mut node.walk())
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .map(|c| base.get_node_text(&c))
        .unwrap_or_default();

    Draft::leaf(base.create_symbol(
        &node,
        name,
        kind,
        SymbolOptions {
            signature: Some(base.normalized_text(&node)),
            ..Default::default()
        },
    ))
}
