// Symbol creation methods for BaseExtractor

use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{Symbol, SymbolKind, SymbolOptions};

impl BaseExtractor<'_> {
    /// Create a symbol positioned at `node`
    ///
    /// Documentation falls back to the comment run above `node` when the
    /// options carry none.
    pub fn create_symbol(
        &self,
        node: &Node,
        name: String,
        kind: SymbolKind,
        options: SymbolOptions,
    ) -> Symbol {
        let start_pos = node.start_position();
        let end_pos = node.end_position();

        let signature = options
            .signature
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| name.clone());

        Symbol {
            name,
            kind,
            signature,
            doc_comment: options.doc_comment.or_else(|| self.find_doc_comment(node)),
            start_line: (start_pos.row + 1) as u32, // 1-based line numbers
            start_column: start_pos.column as u32,  // 0-based column numbers
            end_line: (end_pos.row + 1) as u32,
            modifiers: options.modifiers,
            decorators: options.decorators,
            heritage: options.heritage.filter(|h| !h.is_empty()),
            body: options.body.unwrap_or_else(|| kind.default_body()),
            children: Vec::new(),
        }
    }
}
