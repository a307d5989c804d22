// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor<'_> {
    /// First direct child of the given kind
    pub fn find_child_by_type<'t>(&self, node: &Node<'t>, child_type: &str) -> Option<Node<'t>> {
        self.find_child_by_types(node, &[child_type])
    }

    /// First direct child whose kind is one of `child_types`
    pub fn find_child_by_types<'t>(
        &self,
        node: &Node<'t>,
        child_types: &[&str],
    ) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child_types.contains(&child.kind()));
        found
    }

    /// Get children of type
    pub fn get_children_of_type<'t>(&self, node: &Node<'t>, child_type: &str) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        let children = node
            .children(&mut cursor)
            .filter(|child| child.kind() == child_type)
            .collect();
        children
    }

    /// All children stored under a field name, in source order
    pub fn get_field_children<'t>(&self, node: &Node<'t>, field_name: &str) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        let children = node.children_by_field_name(field_name, &mut cursor).collect();
        children
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|child| self.get_node_text(&child))
    }

    /// Name of a node via its `name` field, empty when absent
    pub fn name_of(&self, node: &Node) -> String {
        self.get_field_text(node, "name").unwrap_or_default()
    }

    /// Texts of every child of a modifier-list node, in source order
    pub fn modifier_texts(&self, modifiers: Option<Node>) -> Vec<String> {
        let Some(modifiers) = modifiers else {
            return Vec::new();
        };
        let mut cursor = modifiers.walk();
        let texts = modifiers
            .children(&mut cursor)
            .map(|child| self.get_node_text(&child).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        texts
    }

    /// Check if node is or contains a syntax error
    pub fn has_error(&self, node: &Node) -> bool {
        node.has_error() || node.is_error()
    }
}

#[cfg(test)]
mod tree_method_tests {
    use super::*;
    use crate::language::Language;
    use tree_sitter::Parser;

    #[test]
    fn test_has_error_flags_broken_subtrees_only() {
        let code = "package main\n\nfunc Good() {}\n\nfunc Bad( {\n";
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        let base = BaseExtractor::new(Language::Go, code.as_bytes());

        let root = tree.root_node();
        assert!(base.has_error(&root));

        let good = base
            .get_children_of_type(&root, "function_declaration")
            .into_iter()
            .find(|n| base.get_node_text(n).contains("Good"))
            .unwrap();
        assert!(!base.has_error(&good));
    }
}
