//! Extraction pipeline
//!
//! Tree-sitter based extraction of exported function signatures from
//! TypeScript source.
//!
//! # Architecture
//!
//! - `base` - extraction data model and shared source-text utilities
//! - `typescript` - grammar-specific shape recognition and extraction
//! - `manager` - public entry point, parser lifecycle, batch API

pub mod base;
pub mod manager;
pub mod typescript;

// Re-export the public API
pub use base::{BaseExtractor, InteropType, TsFunction, TsParameter};
pub use manager::{ScriptAnalyzer, ScriptModule};
pub use typescript::TypeScriptExtractor;
