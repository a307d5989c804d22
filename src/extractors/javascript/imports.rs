use crate::extractors::base::{BodyKind, Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

/// An `export` statement wrapping a declaration
///
/// The wrapped symbol is positioned and documented at the export statement
/// and its header gains `prefix`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExportContext<'tree> {
    pub anchor: Node<'tree>,
    pub prefix: &'static str,
}

impl<'tree> ExportContext<'tree> {
    pub(crate) fn new(export_statement: Node<'tree>) -> Self {
        let mut cursor = export_statement.walk();
        let is_default = export_statement
            .children(&mut cursor)
            .any(|c| c.kind() == "default");
        Self {
            anchor: export_statement,
            prefix: if is_default {
                "export default "
            } else {
                "export "
            },
        }
    }
}

/// Export prefix of an optional context, empty without one
pub(crate) fn export_prefix(export: Option<ExportContext>) -> &'static str {
    export.map(|e| e.prefix).unwrap_or("")
}

/// Import, export and re-export extraction
impl super::JavaScriptExtractor<'_> {
    /// Statement rendered verbatim as a single line
    pub(crate) fn extract_passthrough<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
    ) -> Draft<'tree> {
        let name = node
            .child_by_field_name("source")
            .map(|s| self.base.get_node_text(&s))
            .unwrap_or_else(|| kind.to_string());

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            kind,
            SymbolOptions {
                signature: Some(self.base.normalized_text(&node)),
                body: Some(BodyKind::Bare),
                ..Default::default()
            },
        ))
    }

    /// `export <declaration>` delegates to the declaration's builder;
    /// export clauses and re-exports pass through
    pub(crate) fn extract_export<'tree>(&self, node: Node<'tree>) -> Vec<Draft<'tree>> {
        let context = ExportContext::new(node);

        if let Some(declaration) = node.child_by_field_name("declaration") {
            let drafts = self.build_node(declaration, Some(context));
            if !drafts.is_empty() {
                return drafts;
            }
            return vec![self.extract_export_header(node, declaration)];
        }

        match node.child_by_field_name("value") {
            Some(value) => vec![self.extract_export_header(node, value)],
            None => vec![self.extract_passthrough(node, SymbolKind::Export)],
        }
    }

    /// `export default <expression>` and unrecognized exported declarations:
    /// the header up to the value's body, or its first line
    pub(crate) fn extract_export_header<'tree>(
        &self,
        node: Node<'tree>,
        value: Node<'tree>,
    ) -> Draft<'tree> {
        let signature = match value.child_by_field_name("body") {
            Some(body) => self.base.header_text(&node, Some(body)),
            None => self
                .base
                .normalized_text(&node)
                .lines()
                .next()
                .unwrap_or_default()
                .trim_end_matches(['{', ' '])
                .to_string(),
        };
        let name = value
            .child_by_field_name("name")
            .map(|n| self.base.get_node_text(&n))
            .unwrap_or_else(|| "default".to_string());

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            SymbolKind::Export,
            SymbolOptions {
                signature: Some(signature),
                body: Some(BodyKind::Bare),
                ..Default::default()
            },
        ))
    }
}
