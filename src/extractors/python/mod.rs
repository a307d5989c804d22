mod functions;
mod types;


use crate::extractors::base::{
    is_comment, BaseExtractor, Draft, GrammarAdapter, NodeClass, SymbolKind, SymbolOptions,
};
use crate::language::Language;
use tree_sitter::Node;

/// Python outline adapter
///
/// Renders imports verbatim, `def`/`async def` headers with annotations and
/// classes with their bases. Docstrings take precedence over leading `#`
/// comments. Names with a leading underscore are dropped by the language's
/// visibility policy, not here.
pub struct PythonExtractor<'a> {
    base: BaseExtractor<'a>,
}

impl<'a> PythonExtractor<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            base: BaseExtractor::new(Language::Python, content),
        }
    }

    fn extract_import<'tree>(&self, node: Node<'tree>) -> Draft<'tree> {
        Draft::leaf(self.base.create_symbol(
            &node,
            "import".to_string(),
            SymbolKind::Import,
            SymbolOptions {
                signature: Some(self.base.normalized_text(&node)),
                ..Default::default()
            },
        ))
    }

    /// Documentation anchor: decorated definitions document the decorator run
    fn doc_anchor<'tree>(&self, node: Node<'tree>) -> Node<'tree> {
        node.parent()
            .filter(|p| p.kind() == "decorated_definition")
            .unwrap_or(node)
    }

    /// Decorator texts of a decorated definition, in source order
    fn decorators(&self, node: &Node) -> Vec<String> {
        node.parent()
            .filter(|p| p.kind() == "decorated_definition")
            .map(|p| {
                self.base
                    .get_children_of_type(&p, "decorator")
                    .iter()
                    .map(|d| self.base.get_node_text(d).trim().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl GrammarAdapter for PythonExtractor<'_> {
    fn base(&self) -> &BaseExtractor<'_> {
        &self.base
    }

    fn classify(&self, node: &Node) -> NodeClass {
        if is_comment(node) {
            return NodeClass::Ignore;
        }
        match node.kind() {
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                NodeClass::Declaration(SymbolKind::Import)
            }
            "function_definition" => NodeClass::Declaration(SymbolKind::Function),
            "class_definition" => NodeClass::Declaration(SymbolKind::Class),
            "expression_statement" | "decorator" | "pass_statement" | "return_statement" => {
                NodeClass::Ignore
            }
            _ => NodeClass::Recurse,
        }
    }

    fn build<'tree>(
        &self,
        node: Node<'tree>,
        kind: SymbolKind,
        depth: usize,
    ) -> Vec<Draft<'tree>> {
        match kind {
            SymbolKind::Import => vec![self.extract_import(node)],
            SymbolKind::Function => vec![self.extract_function(node, depth)],
            SymbolKind::Class => vec![self.extract_class(node)],
            _ => Vec::new(),
        }
    }
}
