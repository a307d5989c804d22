// Signature rendering
//
// Declarations are displayed by concatenating verbatim slices of the source
// in a fixed order. Missing pieces render as empty strings.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use super::extractor::BaseExtractor;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\r\n]+").expect("valid whitespace regex"));

/// Whitespace normalization applied to a finished signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    /// Keep interior formatting exactly as written
    AsIs,
    /// Fold newlines, tabs and space runs into single spaces
    Collapsed,
}

impl Whitespace {
    pub fn apply(self, text: &str) -> String {
        match self {
            Whitespace::AsIs => text.trim().to_string(),
            Whitespace::Collapsed => WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned(),
        }
    }
}

/// Builder assembling a signature from source slices
pub struct SignatureBuilder<'b, 'a> {
    base: &'b BaseExtractor<'a>,
    whitespace: Whitespace,
    out: String,
}

impl<'b, 'a> SignatureBuilder<'b, 'a> {
    pub fn new(base: &'b BaseExtractor<'a>, whitespace: Whitespace) -> Self {
        Self {
            base,
            whitespace,
            out: String::new(),
        }
    }

    /// Literal text (keywords, separators)
    pub fn text(mut self, text: &str) -> Self {
        self.out.push_str(text);
        self
    }

    /// Verbatim text of an optional node
    pub fn node(self, node: Option<Node>) -> Self {
        self.node_with("", node, "")
    }

    /// Verbatim text of an optional node wrapped in `prefix`/`suffix`,
    /// rendered only when the node is present and non-empty
    pub fn node_with(mut self, prefix: &str, node: Option<Node>, suffix: &str) -> Self {
        if let Some(node) = node {
            let text = self.base.get_node_text(&node);
            if !text.trim().is_empty() {
                self.out.push_str(prefix);
                self.out.push_str(text.trim());
                self.out.push_str(suffix);
            }
        }
        self
    }

    /// Verbatim text of a field child
    pub fn field(self, node: &Node, field_name: &str) -> Self {
        self.node_with("", node.child_by_field_name(field_name), "")
    }

    /// Verbatim text of a field child preceded by `prefix` when present
    pub fn field_with(self, prefix: &str, node: &Node, field_name: &str) -> Self {
        self.node_with(prefix, node.child_by_field_name(field_name), "")
    }

    /// Modifier list joined by spaces, followed by one space when non-empty
    pub fn modifiers(mut self, modifiers: &[String]) -> Self {
        if !modifiers.is_empty() {
            self.out.push_str(&modifiers.join(" "));
            self.out.push(' ');
        }
        self
    }

    pub fn build(self) -> String {
        self.whitespace.apply(&self.out)
    }
}

impl<'a> BaseExtractor<'a> {
    /// Start a signature using this language's whitespace regime
    pub fn signature(&self) -> SignatureBuilder<'_, 'a> {
        SignatureBuilder::new(self, self.whitespace())
    }

    /// Source text from the start of `node` up to the start of `stop`
    ///
    /// Used for headers whose body follows directly. Without a stop node the
    /// whole node text is returned.
    pub fn header_text(&self, node: &Node, stop: Option<Node>) -> String {
        let end = stop
            .map(|s| s.start_byte())
            .filter(|&end| end >= node.start_byte())
            .unwrap_or_else(|| node.end_byte());
        self.whitespace()
            .apply(&self.slice(node.start_byte(), end))
    }

    /// Whole node text under this language's whitespace regime
    pub fn normalized_text(&self, node: &Node) -> String {
        self.whitespace().apply(&self.get_node_text(node))
    }
}
