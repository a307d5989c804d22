use crate::extractors::base::{BodyKind, Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

/// Type, constant, variable and field extraction for Go
impl super::GoExtractor<'_> {
    /// `type X ...` or `type ( ... )`: one symbol per spec
    pub(super) fn extract_type_declaration<'tree>(&self, node: Node<'tree>) -> Vec<Draft<'tree>> {
        let mut cursor = node.walk();
        let specs: Vec<Node> = node
            .named_children(&mut cursor)
            .filter(|c| matches!(c.kind(), "type_spec" | "type_alias"))
            .collect();
        let grouped = specs.len() > 1 || self.base.find_child_by_type(&node, "(").is_some();
        let group_doc = self.group_doc(&node, grouped);

        specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let anchor = if grouped { spec } else { node };
                let doc = self.spec_doc(group_doc.as_deref(), index, &spec);
                if spec.kind() == "type_alias" {
                    self.extract_type_alias(spec, anchor, doc)
                } else {
                    self.extract_type_spec(spec, anchor, doc)
                }
            })
            .collect()
    }

    /// Comment run above the `const (`/`var (`/`type (` keyword of a group
    fn group_doc(&self, node: &Node, grouped: bool) -> Option<String> {
        if grouped {
            self.base.find_doc_comment(node)
        } else {
            None
        }
    }

    /// The group's doc leads the first spec, ahead of the spec's own comments
    fn spec_doc(&self, group_doc: Option<&str>, index: usize, spec: &Node) -> Option<String> {
        let group_doc = group_doc.filter(|_| index == 0)?;
        match self.base.find_doc_comment(spec) {
            Some(own) => Some(format!("{}\n{}", group_doc, own)),
            None => Some(group_doc.to_string()),
        }
    }

    fn extract_type_spec<'tree>(
        &self,
        spec: Node<'tree>,
        anchor: Node<'tree>,
        doc_comment: Option<String>,
    ) -> Draft<'tree> {
        let name = self.base.name_of(&spec);
        let type_node = spec.child_by_field_name("type");
        let header = self
            .base
            .signature()
            .text("type ")
            .field(&spec, "name")
            .field(&spec, "type_parameters");

        let (kind, signature, members) = match type_node.map(|t| (t, t.kind())) {
            Some((struct_type, "struct_type")) => (
                SymbolKind::Struct,
                header.text(" struct").build(),
                self.base
                    .find_child_by_type(&struct_type, "field_declaration_list"),
            ),
            Some((interface_type, "interface_type")) => (
                SymbolKind::Interface,
                header.text(" interface").build(),
                Some(interface_type),
            ),
            _ => (
                SymbolKind::Type,
                header.node_with(" ", type_node, "").build(),
                None,
            ),
        };

        let body = if members.is_some() {
            BodyKind::Members
        } else {
            BodyKind::Bare
        };
        let symbol = self.base.create_symbol(
            &anchor,
            name,
            kind,
            SymbolOptions {
                signature: Some(signature),
                doc_comment,
                body: Some(body),
                ..Default::default()
            },
        );
        Draft::with_members(symbol, members)
    }

    fn extract_type_alias<'tree>(
        &self,
        spec: Node<'tree>,
        anchor: Node<'tree>,
        doc_comment: Option<String>,
    ) -> Draft<'tree> {
        let signature = self
            .base
            .signature()
            .text("type ")
            .field(&spec, "name")
            .field(&spec, "type_parameters")
            .field_with(" = ", &spec, "type")
            .build();

        Draft::leaf(self.base.create_symbol(
            &anchor,
            self.base.name_of(&spec),
            SymbolKind::TypeAlias,
            SymbolOptions {
                signature: Some(signature),
                doc_comment,
                ..Default::default()
            },
        ))
    }

    /// `const`/`var` declarations: one symbol per spec
    pub(super) fn extract_value_specs<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
    ) -> Vec<Draft<'tree>> {
        let keyword = if kind == SymbolKind::Constant {
            "const"
        } else {
            "var"
        };

        let mut specs = Vec::new();
        let mut grouped = self.base.find_child_by_type(&node, "(").is_some();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "const_spec" | "var_spec" => specs.push(child),
                "var_spec_list" => {
                    grouped = true;
                    specs.extend(self.base.get_children_of_type(&child, "var_spec"));
                }
                _ => {}
            }
        }
        grouped |= specs.len() > 1;
        let group_doc = self.group_doc(&node, grouped);

        specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let anchor = if grouped { spec } else { node };
                let doc_comment = self.spec_doc(group_doc.as_deref(), index, &spec);
                let names: Vec<String> = self
                    .base
                    .get_field_children(&spec, "name")
                    .iter()
                    .map(|n| self.base.get_node_text(n))
                    .collect();
                // Multi-line initializers (func literals, composite values) are elided
                let value = spec
                    .child_by_field_name("value")
                    .filter(|v| v.start_position().row == v.end_position().row);

                let signature = self
                    .base
                    .signature()
                    .text(keyword)
                    .text(" ")
                    .text(&names.join(", "))
                    .field_with(" ", &spec, "type")
                    .node_with(" = ", value, "")
                    .build();

                Draft::leaf(self.base.create_symbol(
                    &anchor,
                    names.first().cloned().unwrap_or_default(),
                    kind,
                    SymbolOptions {
                        signature: Some(signature),
                        doc_comment,
                        ..Default::default()
                    },
                ))
            })
            .collect()
    }

    /// Struct field, embedded types keep their type as the name
    pub(super) fn extract_field<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let names = self.base.get_field_children(&node, "name");
        let name = names
            .first()
            .copied()
            .or_else(|| node.child_by_field_name("type"))
            .map(|n| self.base.get_node_text(&n))
            .unwrap_or_default();

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            SymbolKind::Field,
            SymbolOptions {
                signature: Some(self.base.normalized_text(&node)),
                ..Default::default()
            },
        ))
    }
}
