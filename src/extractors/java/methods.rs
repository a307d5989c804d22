/// Method and constructor extraction
use crate::extractors::base::{BodyKind, Draft, GrammarAdapter, SymbolKind, SymbolOptions};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// `{modifiers} {<T>} {type} name(params){dims} {throws}`
///
/// Abstract and interface methods have no body and end with `;`.
pub(super) fn extract_method<'tree>(extractor: &JavaExtractor, node: Node<'tree>) -> Draft<'tree> {
    let base = extractor.base();
    let modifiers = helpers::extract_modifiers(base, node);
    let has_body = node.child_by_field_name("body").is_some();

    let is_annotation_element = node.kind() == "annotation_type_element_declaration";

    let mut signature = base
        .signature()
        .modifiers(&modifiers)
        .node_with("", node.child_by_field_name("type_parameters"), " ")
        .node_with("", node.child_by_field_name("type"), " ")
        .field(&node, "name")
        .field(&node, "parameters")
        .text(if is_annotation_element { "()" } else { "" })
        .field(&node, "dimensions")
        .node_with(" ", base.find_child_by_type(&node, "throws"), "")
        .field_with(" default ", &node, "value")
        .build();
    if !has_body {
        signature.push(';');
    }

    Draft::leaf(base.create_symbol(
        &node,
        base.name_of(&node),
        SymbolKind::Method,
        SymbolOptions {
            signature: Some(signature),
            modifiers,
            body: Some(if has_body {
                BodyKind::Elided
            } else {
                BodyKind::Bare
            }),
            ..Default::default()
        },
    ))
}

/// `{modifiers} Name(params) {throws}`; compact record constructors have
/// no parameter list
pub(super) fn extract_constructor<'tree>(
    extractor: &JavaExtractor,
    node: Node<'tree>,
) -> Draft<'tree> {
    let base = extractor.base();
    let modifiers = helpers::extract_modifiers(base, node);

    let signature = base
        .signature()
        .modifiers(&modifiers)
        .node_with("", node.child_by_field_name("type_parameters"), " ")
        .field(&node, "name")
        .field(&node, "parameters")
        .node_with(" ", base.find_child_by_type(&node, "throws"), "")
        .build();

    Draft::leaf(base.create_symbol(
        &node,
        base.name_of(&node),
        SymbolKind::Initializer,
        SymbolOptions {
            signature: Some(signature),
            modifiers,
            ..Default::default()
        },
    ))
}
