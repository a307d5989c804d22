use crate::extractors::base::{BodyKind, Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::imports::{export_prefix, ExportContext};

/// Variable declaration extraction
///
/// Function- and class-valued declarators become functions and classes.
/// `require()` declarations pass through verbatim. Other values only appear
/// when exported.
impl super::JavaScriptExtractor<'_> {
    pub(crate) fn extract_variables<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Vec<Draft<'tree>> {
        let declarators = self.base.get_children_of_type(&node, "variable_declarator");

        if declarators.iter().any(|d| self.is_require(d)) {
            return vec![self.extract_passthrough(node, SymbolKind::Import)];
        }

        let keyword = if node.kind() == "variable_declaration" {
            "var".to_string()
        } else {
            node.child(0)
                .map(|k| self.base.get_node_text(&k))
                .unwrap_or_else(|| "const".to_string())
        };
        let prefix = export_prefix(export);

        declarators
            .into_iter()
            .filter_map(|declarator| {
                let name = self.base.name_of(&declarator);
                let value = declarator.child_by_field_name("value");

                match value.map(|v| (v, v.kind())) {
                    Some((
                        value,
                        "arrow_function" | "function_expression" | "function" | "generator_function",
                    )) => {
                        let signature =
                            self.function_value_signature(prefix, &keyword, &name, &value);
                        Some(Draft::leaf(self.create_symbol_at(
                            &node,
                            export,
                            name,
                            SymbolKind::Function,
                            SymbolOptions {
                                signature: Some(signature),
                                body: Some(BodyKind::Elided),
                                ..Default::default()
                            },
                        )))
                    }
                    Some((value, "class")) => {
                        let signature = self
                            .base
                            .signature()
                            .text(prefix)
                            .text(&keyword)
                            .text(" ")
                            .text(&name)
                            .text(" = class")
                            .node_with(" ", self.base.find_child_by_type(&value, "class_heritage"), "")
                            .build();
                        let symbol = self.create_symbol_at(
                            &node,
                            export,
                            name,
                            SymbolKind::Class,
                            SymbolOptions {
                                signature: Some(signature),
                                ..Default::default()
                            },
                        );
                        Some(Draft::with_members(symbol, value.child_by_field_name("body")))
                    }
                    _ if export.is_some() => {
                        let signature = self
                            .base
                            .signature()
                            .text(prefix)
                            .text(&keyword)
                            .text(" ")
                            .text(&name)
                            .field(&declarator, "type")
                            .text(";")
                            .build();
                        let kind = if keyword == "const" {
                            SymbolKind::Constant
                        } else {
                            SymbolKind::Variable
                        };
                        Some(Draft::leaf(self.create_symbol_at(
                            &node,
                            export,
                            name,
                            kind,
                            SymbolOptions {
                                signature: Some(signature),
                                ..Default::default()
                            },
                        )))
                    }
                    _ => None,
                }
            })
            .collect()
    }

    /// `x = require('...')`, possibly behind a member access
    fn is_require(&self, declarator: &Node) -> bool {
        let mut current = declarator.child_by_field_name("value");
        while let Some(value) = current {
            match value.kind() {
                "call_expression" => {
                    return value
                        .child_by_field_name("function")
                        .map(|f| self.base.get_node_text(&f) == "require")
                        .unwrap_or(false);
                }
                "member_expression" => current = value.child_by_field_name("object"),
                _ => return false,
            }
        }
        false
    }
}
