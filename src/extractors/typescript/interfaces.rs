use crate::extractors::base::{BodyKind, Draft, SymbolKind, SymbolOptions};
use crate::extractors::javascript::{export_prefix, ExportContext};
use tree_sitter::Node;

/// Interface, type alias, enum and namespace extraction
impl super::TypeScriptExtractor<'_> {
    /// `interface Name<T> extends Base`
    pub(super) fn extract_interface<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Draft<'tree> {
        let base = self.base();
        let extends = base.find_child_by_type(&node, "extends_type_clause");
        let signature = base
            .signature()
            .text(export_prefix(export))
            .text("interface ")
            .field(&node, "name")
            .field(&node, "type_parameters")
            .node_with(" ", extends, "")
            .build();

        let symbol = self.js.create_symbol_at(
            &node,
            export,
            base.name_of(&node),
            SymbolKind::Interface,
            SymbolOptions {
                signature: Some(signature),
                heritage: extends.map(|e| base.normalized_text(&e)),
                ..Default::default()
            },
        );
        Draft::with_members(symbol, node.child_by_field_name("body"))
    }

    /// `type Name<T> = value;`
    pub(super) fn extract_type_alias<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Draft<'tree> {
        let base = self.base();
        let signature = base
            .signature()
            .text(export_prefix(export))
            .text("type ")
            .field(&node, "name")
            .field(&node, "type_parameters")
            .field_with(" = ", &node, "value")
            .text(";")
            .build();

        Draft::leaf(self.js.create_symbol_at(
            &node,
            export,
            base.name_of(&node),
            SymbolKind::TypeAlias,
            SymbolOptions {
                signature: Some(signature),
                ..Default::default()
            },
        ))
    }

    /// `enum Name` or `const enum Name`, members listed one per line
    pub(super) fn extract_enum<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Draft<'tree> {
        let base = self.base();
        let is_const = base.find_child_by_type(&node, "const").is_some();
        let signature = base
            .signature()
            .text(export_prefix(export))
            .text(if is_const { "const enum " } else { "enum " })
            .field(&node, "name")
            .build();

        let symbol = self.js.create_symbol_at(
            &node,
            export,
            base.name_of(&node),
            SymbolKind::Enum,
            SymbolOptions {
                signature: Some(signature),
                ..Default::default()
            },
        );
        Draft::with_members(symbol, node.child_by_field_name("body"))
    }

    /// `Member = value,`
    pub(super) fn extract_enum_member<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let base = self.base();
        let name = node
            .child_by_field_name("name")
            .map(|n| base.get_node_text(&n))
            .unwrap_or_else(|| base.get_node_text(&node));

        Draft::leaf(base.create_symbol(
            &node,
            name,
            SymbolKind::EnumConstant,
            SymbolOptions {
                signature: Some(format!("{},", base.normalized_text(&node))),
                ..Default::default()
            },
        ))
    }

    /// `namespace Name` / `module "name"` with nested declarations
    pub(super) fn extract_namespace<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Draft<'tree> {
        let base = self.base();
        let body = node.child_by_field_name("body");
        let header = base.header_text(&node, body);
        let signature = format!("{}{}", export_prefix(export), header);

        let symbol = self.js.create_symbol_at(
            &node,
            export,
            base.name_of(&node),
            SymbolKind::Namespace,
            SymbolOptions {
                signature: Some(signature),
                body: Some(if body.is_some() {
                    BodyKind::Members
                } else {
                    BodyKind::Bare
                }),
                ..Default::default()
            },
        );
        Draft::with_members(symbol, body)
    }

    /// Interface and abstract members render verbatim, terminated by `;`
    pub(super) fn extract_member_signature<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
    ) -> Draft<'tree> {
        let base = self.base();
        let text = base.normalized_text(&node);
        let signature = format!("{};", text.trim_end_matches([',', ';']));
        let name = node
            .child_by_field_name("name")
            .map(|n| base.get_node_text(&n))
            .unwrap_or_else(|| text.clone());

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
}
