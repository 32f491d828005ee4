//! ScriptAnalyzer - public API for exported-function extraction
//!
//! Handles the parser lifecycle and delegates tree walking to the TypeScript
//! extractor. Each call creates, uses, and drops its own parser and tree;
//! nothing is shared or pooled across calls, so concurrent extractions never
//! contend.

use std::path::Path;

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tree_sitter::Parser;

use crate::extractors::base::TsFunction;
use crate::extractors::typescript::TypeScriptExtractor;
use crate::language::Dialect;

/// Analyzer front end
pub struct ScriptAnalyzer {
    // No state needed - every extraction call owns its parser and tree
}

/// Extraction output for one script file
///
/// Carries everything the wrapper generator needs for that file: the module
/// name its wrapper class will take, the path it resolves against, a content
/// hash for incremental regeneration, and the exported functions in source
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptModule {
    /// Module name derived from the file stem
    pub name: String,
    /// Path as supplied by the caller
    pub path: String,
    /// blake3 hex digest of the source text
    pub content_hash: String,
    /// Exported functions in source order
    pub functions: Vec<TsFunction>,
}

impl Default for ScriptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptAnalyzer {
    pub fn new() -> Self {
        Self {}
    }

    /// Extract exported functions from TypeScript source text
    ///
    /// Empty or whitespace-only input yields an empty list without touching
    /// the parser. Only parser-level failures surface as errors; malformed
    /// source degrades to fewer records, never to an `Err`.
    pub fn extract_functions(&self, source: &str) -> Result<Vec<TsFunction>> {
        self.extract_functions_with_dialect(source, Dialect::TypeScript)
    }

    /// Extract exported functions, selecting the grammar variant explicitly
    pub fn extract_functions_with_dialect(
        &self,
        source: &str,
        dialect: Dialect,
    ) -> Result<Vec<TsFunction>> {
        if source.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut parser = Parser::new();
        parser
            .set_language(&dialect.language())
            .map_err(|e| anyhow!("failed to set parser language for {}: {}", dialect.name(), e))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow!("parser produced no tree for {} source", dialect.name()))?;

        let extractor = TypeScriptExtractor::new(source.to_string());
        let functions = extractor.extract_functions(&tree);

        tracing::debug!(
            "extracted {} exported functions from {} source ({} bytes)",
            functions.len(),
            dialect.name(),
            source.len()
        );

        Ok(functions)
    }

    /// Extract the module record for one script file
    ///
    /// The dialect comes from the file extension, defaulting to TypeScript
    /// for unknown extensions.
    pub fn extract_module(&self, path: &str, source: &str) -> Result<ScriptModule> {
        let dialect = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Dialect::from_extension)
            .unwrap_or(Dialect::TypeScript);

        let functions = self.extract_functions_with_dialect(source, dialect)?;

        Ok(ScriptModule {
            name: module_name(path),
            path: path.to_string(),
            content_hash: content_hash(source),
            functions,
        })
    }

    /// Extract modules from multiple files in parallel
    ///
    /// Takes `(path, source)` pairs and returns results in input order. A
    /// file that fails at the parser level degrades to a module with no
    /// functions and a warning; one bad file never fails the batch.
    pub fn extract_modules_batch(&self, files: &[(String, String)]) -> Vec<ScriptModule> {
        files
            .par_iter()
            .map(|(path, source)| {
                self.extract_module(path, source).unwrap_or_else(|e| {
                    tracing::warn!("extraction failed for {}: {}", path, e);
                    ScriptModule {
                        name: module_name(path),
                        path: path.clone(),
                        content_hash: content_hash(source),
                        functions: Vec::new(),
                    }
                })
            })
            .collect()
    }
}

/// Wrapper name for a script path: the file stem
fn module_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Content digest used for incremental regeneration change detection
fn content_hash(source: &str) -> String {
    blake3::hash(source.as_bytes()).to_hex().to_string()
}
