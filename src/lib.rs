// Outline Core - tree-sitter symbol outlines for source files
//
// Given source bytes, their CST and a language tag, renders a deterministic
// indented summary of the declared symbols with documentation and line
// numbers, bodies elided.

pub mod error;
pub mod extractors;
pub mod language;
pub mod render;

pub use error::OutlineError;
pub use extractors::{
    extract_document, extract_outline, BodyKind, OutlineDocument, OutlineManager, Symbol,
    SymbolKind,
};
pub use language::Language;
pub use render::RenderOptions;
