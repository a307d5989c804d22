//! Outline extractors
//!
//! Tree-sitter based grammar adapters that fold a CST into a symbol forest,
//! one module per language.
//!
//! # Architecture
//!
//! - `base` - Symbol model, adapter trait, shared traversal, doc comments,
//!   signatures and the visibility filter
//! - `factory.rs` - Language tag to adapter dispatch and its tests
//! - `manager.rs` - OutlineManager caller-side API (files, parsing, batches)
//! - Language modules (go, python, java, javascript, typescript, swift, c, cpp)

pub mod base;
pub mod factory;
pub mod manager;

// Language adapters (TypeScript covers TSX; C++ builds on C)
pub mod c;
pub mod cpp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod swift;
pub mod typescript;

// Re-export the public API
pub use base::{BodyKind, OutlineDocument, Symbol, SymbolKind};
pub use factory::{extract_document, extract_outline};
pub use manager::OutlineManager;
