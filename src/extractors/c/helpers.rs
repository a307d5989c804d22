//! Declarator navigation shared by the C and C++ adapters
//!
//! C declarations nest the declared name inside a chain of pointer, array,
//! function and init declarators. These helpers walk that chain.

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Kinds that end a declarator chain with the declared name
const NAME_KINDS: &[&str] = &[
    "identifier",
    "field_identifier",
    "type_identifier",
    "qualified_identifier",
    "destructor_name",
    "operator_name",
    "primitive_type",
];

/// Name declared by the first `declarator` of `node`, empty when absent
pub(crate) fn declarator_name(base: &BaseExtractor, node: &Node) -> String {
    let mut current = node.child_by_field_name("declarator");
    while let Some(declarator) = current {
        if NAME_KINDS.contains(&declarator.kind()) {
            return base.get_node_text(&declarator);
        }
        // parenthesized and reference declarators carry no field
        current = declarator
            .child_by_field_name("declarator")
            .or_else(|| declarator.named_child(0));
    }
    String::new()
}

/// True when any declarator of `node` declares a function
pub(crate) fn declares_function(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children_by_field_name("declarator", &mut cursor)
        .any(|declarator| find_node_by_type(declarator, "function_declarator").is_some());
    found
}

/// Find a node by its type/kind recursively
pub(super) fn find_node_by_type<'a>(node: Node<'a>, node_type: &str) -> Option<Node<'a>> {
    if node.kind() == node_type {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(result) = find_node_by_type(child, node_type) {
            return Some(result);
        }
    }

    None
}
