//! Outline Serializer - renders a symbol forest into indented text
//!
//! Pure pass over an `OutlineDocument`: no tree-sitter access, no state
//! beyond the output buffer. Layout constants come from `OutlineStyle`.

use serde::{Deserialize, Serialize};

use crate::extractors::base::{BodyKind, OutlineDocument, Symbol};

/// How container blocks open and close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// `header {` ... `}`
    Braces,
    /// `header:` followed by an indented suite
    Colon,
}

/// Placeholder written in place of an executable body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElidedBody {
    /// Stub on the header line: `func f() { //... }`
    Inline(&'static str),
    /// Brace block holding one placeholder line
    Block(&'static str),
    /// Colon suite holding one placeholder line
    Indented(&'static str),
}

/// Per-language layout constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineStyle {
    pub indent_unit: &'static str,
    pub comment_marker: &'static str,
    /// Doc lines starting with one of these are already comments
    pub comment_leaders: &'static [&'static str],
    pub blocks: BlockStyle,
    pub elided: ElidedBody,
}

/// Rendering switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Append `// line N` to every declaration
    pub line_numbers: bool,
    /// Emit leading documentation blocks
    pub documentation: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            documentation: true,
        }
    }
}

impl OutlineDocument {
    /// Render with default options
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        OutlineRenderer::new(self.language.outline_style(), options).render(&self.symbols)
    }
}

pub struct OutlineRenderer<'o> {
    style: OutlineStyle,
    options: &'o RenderOptions,
    out: String,
}

impl<'o> OutlineRenderer<'o> {
    pub fn new(style: OutlineStyle, options: &'o RenderOptions) -> Self {
        Self {
            style,
            options,
            out: String::new(),
        }
    }

    pub fn render(mut self, symbols: &[Symbol]) -> String {
        for symbol in symbols {
            self.write_symbol(symbol, 0);
        }
        self.out
    }

    fn write_symbol(&mut self, symbol: &Symbol, depth: usize) {
        let indent = self.style.indent_unit.repeat(depth);
        let unit = self.style.indent_unit;

        if self.options.documentation {
            if let Some(doc) = &symbol.doc_comment {
                for line in doc.lines() {
                    let line = self.doc_line(line);
                    self.out.push_str(&format!("{indent}{line}\n"));
                }
            }
        }

        for decorator in &symbol.decorators {
            self.out.push_str(&format!("{indent}{decorator}\n"));
        }

        let signature = &symbol.signature;
        let annotation = self.annotation(symbol);

        match symbol.body {
            BodyKind::Bare => {
                self.out
                    .push_str(&format!("{indent}{signature}{annotation}\n"));
            }
            BodyKind::Elided => {
                let rendered = match self.style.elided {
                    ElidedBody::Inline(stub) => {
                        format!("{indent}{signature} {stub}{annotation}\n\n")
                    }
                    ElidedBody::Block(marker) => format!(
                        "{indent}{signature} {{{annotation}\n{indent}{unit}{marker}\n{indent}}}\n\n"
                    ),
                    ElidedBody::Indented(marker) => {
                        format!("{indent}{signature}:{annotation}\n{indent}{unit}{marker}\n\n")
                    }
                };
                self.out.push_str(&rendered);
            }
            BodyKind::Members => match self.style.blocks {
                BlockStyle::Braces => {
                    self.out
                        .push_str(&format!("{indent}{signature} {{{annotation}\n"));
                    for child in &symbol.children {
                        self.write_symbol(child, depth + 1);
                    }
                    self.out.push_str(&format!("{indent}}}\n\n"));
                }
                BlockStyle::Colon => {
                    self.out
                        .push_str(&format!("{indent}{signature}:{annotation}\n"));
                    if symbol.children.is_empty() {
                        self.out.push_str(&format!("{indent}{unit}pass\n"));
                    }
                    for child in &symbol.children {
                        self.write_symbol(child, depth + 1);
                    }
                    self.out.push('\n');
                }
            },
        }
    }

    fn annotation(&self, symbol: &Symbol) -> String {
        if self.options.line_numbers {
            format!(" {} line {}", self.style.comment_marker, symbol.start_line)
        } else {
            String::new()
        }
    }

    /// Re-prefix one documentation line with the comment marker unless it
    /// already carries a comment leader
    fn doc_line(&self, line: &str) -> String {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return self.style.comment_marker.to_string();
        }
        if self
            .style
            .comment_leaders
            .iter()
            .any(|leader| trimmed.starts_with(leader))
        {
            trimmed.to_string()
        } else {
            format!("{} {}", self.style.comment_marker, trimmed)
        }
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::extractors::base::SymbolKind;
    use crate::language::Language;

    fn symbol(kind: SymbolKind, signature: &str, line: u32) -> Symbol {
        Symbol {
            name: signature.to_string(),
            kind,
            signature: signature.to_string(),
            doc_comment: None,
            start_line: line,
            start_column: 0,
            end_line: line,
            modifiers: Vec::new(),
            decorators: Vec::new(),
            heritage: None,
            body: kind.default_body(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_go_function_with_doc() {
        let mut func = symbol(SymbolKind::Function, "func Greet(name string) string", 4);
        func.doc_comment = Some("// Greet returns a greeting".to_string());
        let doc = OutlineDocument::new(
            Language::Go,
            vec![symbol(SymbolKind::Package, "package main", 1), func],
        );

        assert_eq!(
            doc.render(),
            "package main // line 1\n\
             // Greet returns a greeting\n\
             func Greet(name string) string { //... } // line 4\n\n"
        );
    }

    #[test]
    fn test_braced_members_are_indented() {
        let mut class = symbol(SymbolKind::Class, "public class Demo", 3);
        class
            .children
            .push(symbol(SymbolKind::Field, "private String name;", 4));
        class
            .children
            .push(symbol(SymbolKind::Method, "public String getName()", 6));
        let doc = OutlineDocument::new(Language::Java, vec![class]);

        assert_eq!(
            doc.render(),
            "public class Demo { // line 3\n\
             \tprivate String name; // line 4\n\
             \tpublic String getName() { //... } // line 6\n\n\
             }\n\n"
        );
    }

    #[test]
    fn test_block_placeholder_for_javascript() {
        let doc = OutlineDocument::new(
            Language::JavaScript,
            vec![symbol(SymbolKind::Function, "function run()", 2)],
        );
        assert_eq!(doc.render(), "function run() { // line 2\n  // ...\n}\n\n");
    }

    #[test]
    fn test_python_suites_and_pass() {
        let mut func = symbol(SymbolKind::Function, "def run(x)", 1);
        func.doc_comment = Some("Run it.\n\nTwice.".to_string());
        let empty_class = symbol(SymbolKind::Class, "class Empty", 5);
        let doc = OutlineDocument::new(Language::Python, vec![func, empty_class]);

        assert_eq!(
            doc.render(),
            "# Run it.\n#\n# Twice.\ndef run(x): # line 1\n    ...\n\n\
             class Empty: # line 5\n    pass\n\n"
        );
    }

    #[test]
    fn test_block_comment_lines_are_not_reprefixed() {
        let mut func = symbol(SymbolKind::Function, "int main(void)", 5);
        func.doc_comment = Some("/**\n * Entry point\n */".to_string());
        let doc = OutlineDocument::new(Language::C, vec![func]);

        assert!(doc
            .render()
            .starts_with("/**\n* Entry point\n*/\nint main(void) { //... } // line 5\n"));
    }

    #[test]
    fn test_decorator_lines_share_the_symbol_indent() {
        let mut method = symbol(SymbolKind::Method, "def name(self)", 3);
        method.decorators = vec!["@property".to_string()];
        let mut class = symbol(SymbolKind::Class, "class User", 1);
        class.children.push(method);
        let doc = OutlineDocument::new(Language::Python, vec![class]);

        assert_eq!(
            doc.render(),
            "class User: # line 1\n    @property\n    def name(self): # line 3\n        ...\n\n\n"
        );
    }

    #[test]
    fn test_options_disable_lines_and_docs() {
        let mut func = symbol(SymbolKind::Function, "func A()", 3);
        func.doc_comment = Some("// A does things".to_string());
        let doc = OutlineDocument::new(Language::Go, vec![func]);
        let options = RenderOptions {
            line_numbers: false,
            documentation: false,
        };

        assert_eq!(doc.render_with(&options), "func A() { //... }\n\n");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: RenderOptions = serde_json::from_str(r#"{"line_numbers": false}"#).unwrap();
        assert!(!options.line_numbers);
        assert!(options.documentation);
    }
}
