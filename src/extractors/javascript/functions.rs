use crate::extractors::base::{BodyKind, Draft, SignatureBuilder, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::imports::{export_prefix, ExportContext};

/// Function extraction for JavaScript and TypeScript
impl super::JavaScriptExtractor<'_> {
    /// `function name<T>(params): R`, generators and overload signatures included
    pub(crate) fn extract_function<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Draft<'tree> {
        let is_async = self.base.find_child_by_type(&node, "async").is_some();
        let is_generator = node.kind().starts_with("generator")
            || self.base.find_child_by_type(&node, "*").is_some();
        let has_body = node.child_by_field_name("body").is_some();

        let mut signature = self
            .base
            .signature()
            .text(export_prefix(export))
            .text(if is_async { "async " } else { "" })
            .text(if is_generator { "function* " } else { "function " })
            .field(&node, "name");
        signature = self.callable_tail(signature, &node);
        let mut signature = signature.build();
        if !has_body {
            signature.push(';');
        }

        let mut modifiers = Vec::new();
        if is_async {
            modifiers.push("async".to_string());
        }

        Draft::leaf(self.create_symbol_at(
            &node,
            export,
            self.base.name_of(&node),
            SymbolKind::Function,
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

    /// Type parameters, parameter list and return annotation of a callable.
    /// Arrow functions with a bare identifier parameter use `parameter`.
    pub(crate) fn callable_tail<'b, 'a>(
        &self,
        signature: SignatureBuilder<'b, 'a>,
        node: &Node,
    ) -> SignatureBuilder<'b, 'a> {
        signature
            .field(node, "type_parameters")
            .field(node, "parameters")
            .field(node, "parameter")
            .field(node, "return_type")
    }

    /// Header for a function stored in a variable:
    /// `const name = async (params): R =>` or `const name = function(params)`
    pub(crate) fn function_value_signature(
        &self,
        prefix: &str,
        keyword: &str,
        name: &str,
        value: &Node,
    ) -> String {
        let is_async = self.base.find_child_by_type(value, "async").is_some();
        let head = self
            .base
            .signature()
            .text(prefix)
            .text(keyword)
            .text(" ")
            .text(name)
            .text(" = ")
            .text(if is_async { "async " } else { "" });

        if value.kind() == "arrow_function" {
            self.callable_tail(head, value).text(" =>").build()
        } else {
            let head = head.text(if value.kind().starts_with("generator") {
                "function*"
            } else {
                "function"
            });
            self.callable_tail(head, value).build()
        }
    }
}
