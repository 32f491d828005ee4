//! TypeScript exported-function extractor with modular architecture
//!
//! Recognizes the export shapes that can carry a callable:
//!
//! - **functions**: tree walking and per-shape extraction (named declarations,
//!   const-assigned arrow functions and function expressions, default exports)
//! - **parameters**: formal-parameter list extraction
//! - **helpers**: node inspection utilities shared across the modules
//!
//! Everything not reachable through an export statement is ignored; the
//! wrapper generator only proxies what a script module actually exposes.

mod functions;
mod helpers;
mod parameters;

use crate::extractors::base::{BaseExtractor, TsFunction};
use tree_sitter::Tree;

/// Extractor over one TypeScript source text
pub struct TypeScriptExtractor {
    base: BaseExtractor,
}

impl TypeScriptExtractor {
    /// Create a new TypeScript extractor for one source text
    pub fn new(content: String) -> Self {
        Self {
            base: BaseExtractor::new(content),
        }
    }

    /// Extract every exported top-level function, in source order
    pub fn extract_functions(&self, tree: &Tree) -> Vec<TsFunction> {
        functions::extract_functions(self, tree)
    }

    /// Access to shared source utilities (for sub-modules)
    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}
