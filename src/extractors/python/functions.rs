use crate::extractors::base::{Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

/// Function and docstring extraction for Python
impl super::PythonExtractor<'_> {
    /// `def` at module level, method inside a class body
    pub(super) fn extract_function<'tree>(&self, node: Node<'tree>, depth: usize) -> Draft<'tree> {
        let kind = if depth > 0 {
            SymbolKind::Method
        } else {
            SymbolKind::Function
        };
        let is_async = self.base.find_child_by_type(&node, "async").is_some();

        let signature = self
            .base
            .signature()
            .text(if is_async { "async def " } else { "def " })
            .field(&node, "name")
            .field(&node, "type_parameters")
            .field(&node, "parameters")
            .field_with(" -> ", &node, "return_type")
            .build();

        let decorators = self.decorators(&node);
        let mut modifiers = decorators.clone();
        if is_async {
            modifiers.push("async".to_string());
        }

        Draft::leaf(self.base.create_symbol(
            &node,
            self.base.name_of(&node),
            kind,
            SymbolOptions {
                signature: Some(signature),
                doc_comment: self.documentation(&node),
                modifiers,
                decorators,
                ..Default::default()
            },
        ))
    }

    /// Docstring of a definition, else the comment run above it
    pub(super) fn documentation(&self, node: &Node) -> Option<String> {
        self.docstring(node)
            .or_else(|| self.base.find_doc_comment(&self.doc_anchor(*node)))
    }

    /// First statement of the body when it is a bare string literal, with
    /// string prefixes and quote delimiters stripped
    fn docstring(&self, node: &Node) -> Option<String> {
        let body = node.child_by_field_name("body")?;
        let first = body.named_child(0)?;
        if first.kind() != "expression_statement" {
            return None;
        }
        let literal = first.named_child(0).filter(|n| n.kind() == "string")?;

        let text = self.base.get_node_text(&literal);
        let cleaned = text
            .trim_start_matches(|c: char| "rRuUbBfF".contains(c))
            .trim_matches(|c| c == '"' || c == '\'')
            .trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }
}
