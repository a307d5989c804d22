//! Preprocessor directives, function definitions and plain declarations

use crate::extractors::base::{BaseExtractor, BodyKind, Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::helpers;

/// Declarations rendered exactly as written: `#include`, `#define`,
/// prototypes, globals, `using` lines
pub(crate) fn extract_verbatim<'tree>(
    base: &BaseExtractor,
    node: Node<'tree>,
    kind: SymbolKind,
) -> Draft<'tree> {
    let signature = base.normalized_text(&node);
    let name = match node.child_by_field_name("name") {
        Some(name) => base.get_node_text(&name),
        None => match helpers::declarator_name(base, &node) {
            name if name.is_empty() => signature.clone(),
            name => name,
        },
    };

    Draft::leaf(base.create_symbol(
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

/// `int add(int a, int b)` with the body elided
///
/// Constructors stop before their member initializer list. Definitions
/// without a compound body (`= default;`, `= delete;`) render verbatim.
pub(crate) fn extract_function_definition<'tree>(
    base: &BaseExtractor,
    node: Node<'tree>,
    kind: SymbolKind,
) -> Draft<'tree> {
    let Some(body) = node.child_by_field_name("body") else {
        return extract_verbatim(base, node, kind);
    };
    let stop = base
        .find_child_by_type(&node, "field_initializer_list")
        .unwrap_or(body);

    Draft::leaf(base.create_symbol(
        &node,
        helpers::declarator_name(base, &node),
        kind,
        SymbolOptions {
            signature: Some(base.header_text(&node, Some(stop))),
            body: Some(BodyKind::Elided),
            ..Default::default()
        },
    ))
}
