/// Field, interface constant and enum constant extraction
use crate::extractors::base::{Draft, GrammarAdapter, SymbolKind, SymbolOptions};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// One symbol per declarator: `{modifiers} {type} name{dims} = value;`
pub(super) fn extract_fields<'tree>(
    extractor: &JavaExtractor,
    node: Node<'tree>,
) -> Vec<Draft<'tree>> {
    let base = extractor.base();
    let modifiers = helpers::extract_modifiers(base, node);
    let field_type = node.child_by_field_name("type");

    base.get_field_children(&node, "declarator")
        .into_iter()
        .map(|declarator| {
            let signature = base
                .signature()
                .modifiers(&modifiers)
                .node_with("", field_type, " ")
                .field(&declarator, "name")
                .field(&declarator, "dimensions")
                .field_with(" = ", &declarator, "value")
                .text(";")
                .build();

            Draft::leaf(base.create_symbol(
                &node,
                base.name_of(&declarator),
                SymbolKind::Field,
                SymbolOptions {
                    signature: Some(signature),
                    modifiers: modifiers.clone(),
                    ..Default::default()
                },
            ))
        })
        .collect()
}

/// `NAME(args),`; constant-specific class bodies are elided
pub(super) fn extract_enum_constant<'tree>(
    extractor: &JavaExtractor,
    node: Node<'tree>,
) -> Draft<'tree> {
    let base = extractor.base();
    let signature = base
        .signature()
        .field(&node, "name")
        .field(&node, "arguments")
        .text(",")
        .build();

    Draft::leaf(base.create_symbol(
        &node,
        base.name_of(&node),
        SymbolKind::EnumConstant,
        SymbolOptions {
            signature: Some(signature),
            ..Default::default()
        },
    ))
}
