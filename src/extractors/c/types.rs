//! Struct, union, enum and typedef extraction

use crate::extractors::base::{BaseExtractor, BodyKind, Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

/// `struct Name {` with fields as members, or `struct Name;` when only
/// forward-declared. C++ classes and base clauses go through here too.
pub(crate) fn extract_record<'tree>(
    base: &BaseExtractor,
    node: Node<'tree>,
    kind: SymbolKind,
) -> Draft<'tree> {
    let body = node.child_by_field_name("body");
    let heritage = base
        .find_child_by_type(&node, "base_class_clause")
        .map(|clause| {
            base.normalized_text(&clause)
                .trim_start_matches(':')
                .trim()
                .to_string()
        });

    let (signature, body_kind) = match body {
        Some(body) => (base.header_text(&node, Some(body)), BodyKind::Members),
        None => (format!("{};", base.normalized_text(&node)), BodyKind::Bare),
    };

    let symbol = base.create_symbol(
        &node,
        base.name_of(&node),
        kind,
        SymbolOptions {
            signature: Some(signature),
            heritage,
            body: Some(body_kind),
            ..Default::default()
        },
    );
    Draft::with_members(symbol, body)
}

/// `RED = 1,`
pub(super) fn extract_enumerator<'tree>(base: &BaseExtractor, node: Node<'tree>) -> Draft<'tree> {
    Draft::leaf(base.create_symbol(
        &node,
        base.name_of(&node),
        SymbolKind::EnumConstant,
        SymbolOptions {
            signature: Some(format!("{},", base.normalized_text(&node))),
            ..Default::default()
        },
    ))
}
