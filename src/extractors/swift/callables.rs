use crate::extractors::base::{BodyKind, Draft, SymbolKind, SymbolOptions};
use tree_sitter::Node;

use super::SwiftExtractor;

/// Callable members: functions, initializers, deinitializers and subscripts
impl SwiftExtractor<'_> {
    /// Functions nested in a type body are methods. Protocol requirements
    /// have no body and render as a single line.
    pub(super) fn extract_function<'tree>(&self, node: Node<'tree>, depth: usize) -> Draft<'tree> {
        let kind = if depth > 0 {
            SymbolKind::Method
        } else {
            SymbolKind::Function
        };
        self.extract_callable(node, self.base.name_of(&node), kind)
    }

    /// `init(...)`, `deinit` and `subscript(...) -> T`
    pub(super) fn extract_special_member<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
    ) -> Draft<'tree> {
        let name = match kind {
            SymbolKind::Initializer => "init",
            SymbolKind::Deinitializer => "deinit",
            _ => "subscript",
        };
        self.extract_callable(node, name.to_string(), kind)
    }

    fn extract_callable<'tree>(
        &self,
        node: Node<'tree>,
        name: String,
        kind: SymbolKind,
    ) -> Draft<'tree> {
        let has_body = self
            .base
            .find_child_by_types(&node, &["function_body", "computed_property"])
            .is_some();

        Draft::leaf(self.base.create_symbol(
            &node,
            name,
            kind,
            SymbolOptions {
                signature: Some(self.header(&node)),
                modifiers: self.modifiers(&node),
                body: Some(if has_body {
                    BodyKind::Elided
                } else {
                    BodyKind::Bare
                }),
                ..Default::default()
            },
        ))
    }
}
