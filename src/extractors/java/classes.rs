/// Class, interface, enum, record and annotation type extraction
use crate::extractors::base::{Draft, GrammarAdapter, SymbolKind, SymbolOptions};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// Extract class or record declaration
pub(super) fn extract_class<'tree>(extractor: &JavaExtractor, node: Node<'tree>) -> Draft<'tree> {
    let keyword = if node.kind() == "record_declaration" {
        "record "
    } else {
        "class "
    };
    extract_type(extractor, node, SymbolKind::Class, keyword)
}

pub(super) fn extract_interface<'tree>(
    extractor: &JavaExtractor,
    node: Node<'tree>,
) -> Draft<'tree> {
    extract_type(extractor, node, SymbolKind::Interface, "interface ")
}

pub(super) fn extract_annotation_type<'tree>(
    extractor: &JavaExtractor,
    node: Node<'tree>,
) -> Draft<'tree> {
    extract_type(extractor, node, SymbolKind::Interface, "@interface ")
}

pub(super) fn extract_enum<'tree>(extractor: &JavaExtractor, node: Node<'tree>) -> Draft<'tree> {
    extract_type(extractor, node, SymbolKind::Enum, "enum ")
}

/// Shared header: `{modifiers} {keyword}{Name}{<T>}{(record params)} {heritage}`
fn extract_type<'tree>(
    extractor: &JavaExtractor,
    node: Node<'tree>,
    kind: SymbolKind,
    keyword: &str,
) -> Draft<'tree> {
    let base = extractor.base();
    let modifiers = helpers::extract_modifiers(base, node);
    let heritage = helpers::extract_heritage(base, node);

    let mut signature = base
        .signature()
        .modifiers(&modifiers)
        .text(keyword)
        .field(&node, "name")
        .field(&node, "type_parameters")
        .field(&node, "parameters")
        .build();
    if let Some(heritage) = &heritage {
        signature.push(' ');
        signature.push_str(heritage);
    }

    let symbol = base.create_symbol(
        &node,
        base.name_of(&node),
        kind,
        SymbolOptions {
            signature: Some(signature),
            modifiers,
            heritage,
            ..Default::default()
        },
    );
    Draft::with_members(symbol, node.child_by_field_name("body"))
}
