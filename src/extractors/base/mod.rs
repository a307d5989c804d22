// Base Extractor Types and Traits
//
// Shared building blocks for every grammar adapter:
// - types.rs: Symbol model (Symbol, SymbolKind, BodyKind, OutlineDocument)
// - extractor.rs: BaseExtractor (source slicing, doc-comment resolution)
// - signatures.rs: signature assembly and whitespace normalization
// - visibility.rs: per-language inclusion policy
// - adapter.rs: GrammarAdapter trait and the shared traversal
// - tree_methods.rs / creation_methods.rs: node helpers and symbol creation

pub mod adapter;
pub mod creation_methods;
pub mod extractor;
pub mod signatures;
pub mod tree_methods;
pub mod types;
pub mod visibility;

// Re-export key types for external use
pub use adapter::{collect_symbols, is_comment, Draft, GrammarAdapter};
pub use extractor::BaseExtractor;
pub use signatures::{SignatureBuilder, Whitespace};
pub use types::{BodyKind, NodeClass, OutlineDocument, Symbol, SymbolKind, SymbolOptions};
pub use visibility::{Candidate, VisibilityPolicy};
