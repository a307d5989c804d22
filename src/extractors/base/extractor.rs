// BaseExtractor implementation
//
// Holds the borrowed source buffer for one extraction call and the text and
// documentation helpers every grammar adapter shares.

use tree_sitter::Node;

use super::signatures::Whitespace;
use super::visibility::VisibilityPolicy;
use crate::language::Language;

/// Shared state for language extractors
///
/// Borrows the source buffer for the whole call; nodes are only ever read
/// through byte ranges into `content`.
pub struct BaseExtractor<'a> {
    pub language: Language,
    pub content: &'a [u8],
}

impl<'a> BaseExtractor<'a> {
    pub fn new(language: Language, content: &'a [u8]) -> Self {
        Self { language, content }
    }

    pub fn visibility_policy(&self) -> VisibilityPolicy {
        self.language.visibility_policy()
    }

    pub fn whitespace(&self) -> Whitespace {
        self.language.whitespace()
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        self.slice(node.start_byte(), node.end_byte())
    }

    /// Text between two byte offsets, empty when the range is out of bounds
    pub fn slice(&self, start_byte: usize, end_byte: usize) -> String {
        if start_byte <= end_byte && end_byte <= self.content.len() {
            String::from_utf8_lossy(&self.content[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Find the documentation block directly above a node
    ///
    /// Collects the contiguous run of comment siblings preceding `node`. The
    /// run ends at the first non-comment sibling, at a blank line, or at a
    /// comment trailing code on its own line.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        node.parent()?;

        let mut comments = Vec::new();
        let mut boundary_row = node.start_position().row;
        let mut current = node.prev_named_sibling();

        while let Some(sibling) = current {
            if !sibling.kind().contains("comment") {
                break;
            }
            if last_row(&sibling) + 1 < boundary_row {
                break;
            }
            if trails_code(&sibling) {
                break;
            }

            comments.push(self.get_node_text(&sibling).trim().to_string());
            boundary_row = sibling.start_position().row;
            current = sibling.prev_named_sibling();
        }

        if comments.is_empty() {
            return None;
        }

        comments.reverse();
        Some(comments.join("\n"))
    }
}

/// Last row a node occupies, ignoring a trailing newline the grammar folded in
fn last_row(node: &Node) -> usize {
    let start = node.start_position();
    let end = node.end_position();
    if end.column == 0 && end.row > start.row {
        end.row - 1
    } else {
        end.row
    }
}

/// True for `x = 1 // note` style comments sharing a line with earlier code
fn trails_code(comment: &Node) -> bool {
    comment
        .prev_sibling()
        .filter(|prev| !prev.kind().contains("comment"))
        .is_some_and(|prev| last_row(&prev) == comment.start_position().row)
}
