use crate::extractors::base::{Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::imports::{export_prefix, ExportContext};

/// Class, method and field extraction for JavaScript and TypeScript
impl super::JavaScriptExtractor<'_> {
    /// `class Name<T> extends Base implements I`; TypeScript abstract classes
    /// share this builder
    pub(crate) fn extract_class<'tree>(
        &self,
        node: Node<'tree>,
        export: Option<ExportContext<'tree>>,
    ) -> Draft<'tree> {
        let heritage = self
            .base
            .find_child_by_type(&node, "class_heritage")
            .map(|h| self.base.normalized_text(&h));
        let is_abstract = node.kind() == "abstract_class_declaration";

        let signature = self
            .base
            .signature()
            .text(export_prefix(export))
            .text(if is_abstract { "abstract class " } else { "class " })
            .field(&node, "name")
            .field(&node, "type_parameters")
            .node_with(" ", self.base.find_child_by_type(&node, "class_heritage"), "")
            .build();

        let mut modifiers = Vec::new();
        if is_abstract {
            modifiers.push("abstract".to_string());
        }

        let symbol = self.create_symbol_at(
            &node,
            export,
            self.base.name_of(&node),
            SymbolKind::Class,
            SymbolOptions {
                signature: Some(signature),
                modifiers,
                heritage,
                ..Default::default()
            },
        );
        Draft::with_members(symbol, node.child_by_field_name("body"))
    }

    /// `static async name(params): R`, modifiers kept in source order
    pub(crate) fn extract_method<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let modifiers = self.leading_modifiers(&node);

        let mut head = String::new();
        for modifier in &modifiers {
            head.push_str(modifier);
            if modifier != "*" {
                head.push(' ');
            }
        }

        let signature = self
            .base
            .signature()
            .text(&head)
            .field(&node, "name");
        let signature = self
            .callable_tail(signature, &node)
            .build();

        Draft::leaf(self.base.create_symbol(
            &node,
            self.base.name_of(&node),
            SymbolKind::Method,
            SymbolOptions {
                signature: Some(signature),
                modifiers,
                ..Default::default()
            },
        ))
    }

    /// Class field header up to its initializer: `static count: number;`
    pub(crate) fn extract_field<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        let name = node
            .child_by_field_name("property")
            .or_else(|| node.child_by_field_name("name"))
            .map(|n| self.base.get_node_text(&n))
            .unwrap_or_default();

        let header = self
            .base
            .header_text(&node, node.child_by_field_name("value"));
        let signature = format!("{};", header.trim_end_matches(['=', ';', ' ']));

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            SymbolKind::Field,
            SymbolOptions {
                signature: Some(signature),
                modifiers: self.leading_modifiers(&node),
                ..Default::default()
            },
        ))
    }

    /// Keyword and modifier tokens preceding a member's name
    /// (`static`, `async`, `get`, `public`, `readonly`, ...)
    fn leading_modifiers(&self, node: &Node) -> Vec<String> {
        let stop = node
            .child_by_field_name("name")
            .or_else(|| node.child_by_field_name("property"))
            .map(|n| n.start_byte())
            .unwrap_or_else(|| node.end_byte());

        let mut cursor = node.walk();
        let modifiers = node
            .children(&mut cursor)
            .take_while(|c| c.start_byte() < stop)
            .filter(|c| c.kind() != "decorator" && !c.kind().contains("comment"))
            .map(|c| self.base.get_node_text(&c).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        modifiers
    }
}
