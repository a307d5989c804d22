// Grammar adapter contract and the shared traversal
//
// Each language classifies node kinds and builds symbols. The traversal
// below is the only place that recurses over the tree; it folds the CST
// into an immutable symbol forest.

use tracing::{debug, trace};
use tree_sitter::{Node, Tree};

use super::extractor::BaseExtractor;
use super::types::{NodeClass, Symbol, SymbolKind};
use super::visibility::Candidate;

/// A built symbol plus the node holding its members, if any
pub struct Draft<'tree> {
    pub symbol: Symbol,
    pub members: Option<Node<'tree>>,
}

impl<'tree> Draft<'tree> {
    pub fn leaf(symbol: Symbol) -> Self {
        Self {
            symbol,
            members: None,
        }
    }

    pub fn with_members(symbol: Symbol, members: Option<Node<'tree>>) -> Self {
        Self { symbol, members }
    }
}

/// Per-language mapping from node kinds to symbols
pub trait GrammarAdapter {
    fn base(&self) -> &BaseExtractor<'_>;

    /// Decide what a node is. Unknown kinds should return `Recurse`.
    fn classify(&self, node: &Node) -> NodeClass;

    /// Build the symbols declared by a classified node. One node may declare
    /// several symbols (grouped specs, multi-declarator fields) or none.
    fn build<'tree>(&self, node: Node<'tree>, kind: SymbolKind, depth: usize)
        -> Vec<Draft<'tree>>;

    fn extract_symbols(&self, tree: &Tree) -> Vec<Symbol>
    where
        Self: Sized,
    {
        collect_symbols(self, tree.root_node(), 0)
    }
}

/// Fold the named children of `parent` into symbols at `depth`
pub fn collect_symbols<A>(adapter: &A, parent: Node, depth: usize) -> Vec<Symbol>
where
    A: GrammarAdapter + ?Sized,
{
    let mut symbols = Vec::new();
    let policy = adapter.base().visibility_policy();

    let mut cursor = parent.walk();
    for child in parent.named_children(&mut cursor) {
        match adapter.classify(&child) {
            NodeClass::Ignore => {}
            NodeClass::Recurse => {
                if adapter.base().has_error(&child) {
                    debug!(
                        "Recursing into node with syntax errors at line {}",
                        child.start_position().row + 1
                    );
                }
                symbols.extend(collect_symbols(adapter, child, depth));
            }
            NodeClass::Declaration(kind) => {
                for Draft { mut symbol, members } in adapter.build(child, kind, depth) {
                    let candidate = Candidate {
                        kind: symbol.kind,
                        name: &symbol.name,
                        modifiers: &symbol.modifiers,
                        depth,
                    };
                    if !policy.is_included(&candidate) {
                        trace!(
                            "Filtered {} '{}' at depth {}",
                            symbol.kind,
                            symbol.name,
                            depth
                        );
                        continue;
                    }
                    if let Some(members) = members {
                        symbol.children = collect_symbols(adapter, members, depth + 1);
                    }
                    symbols.push(symbol);
                }
            }
        }
    }

    symbols
}

/// Kinds every grammar spells with "comment" never declare symbols
pub fn is_comment(node: &Node) -> bool {
    node.kind().contains("comment")
}
