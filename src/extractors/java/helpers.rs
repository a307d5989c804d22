/// Helper functions for Java extraction
/// Handles modifiers and heritage clauses
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Extract all modifiers from a Java node, annotations included
/// (`@Override`, `public`, `static`, `final`, ...)
pub(super) fn extract_modifiers(base: &BaseExtractor, node: Node) -> Vec<String> {
    base.modifier_texts(base.find_child_by_type(&node, "modifiers"))
}

/// Superclass, implemented and extended interfaces, and permits clauses,
/// verbatim and space-separated
pub(super) fn extract_heritage(base: &BaseExtractor, node: Node) -> Option<String> {
    let clauses: Vec<String> = node
        .children(&mut node.walk())
        .filter(|c| {
            matches!(
                c.kind(),
                "superclass" | "super_interfaces" | "extends_interfaces" | "permits"
            )
        })
        .map(|c| base.get_node_text(&c).trim().to_string())
        .collect();

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" "))
    }
}
