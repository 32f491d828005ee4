//! Language support - shared tree-sitter grammar configuration
//!
//! Single source of truth for the grammar variants the analyzer understands.
//! Grammar selection lives here so every caller (single-file extraction and
//! the batch API) resolves dialects the same way.

use tree_sitter::Language;

/// TypeScript grammar variants understood by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Get the tree-sitter language for this dialect
    pub fn language(self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Detect the dialect from a file extension
    ///
    /// Returns `None` for extensions the analyzer does not handle.
    pub fn from_extension(extension: &str) -> Option<Dialect> {
        match extension {
            "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
            "tsx" => Some(Dialect::Tsx),
            _ => None,
        }
    }

    /// Dialect name used in log output and error messages
    pub fn name(self) -> &'static str {
        match self {
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_typescript_extensions() {
        assert_eq!(Dialect::from_extension("ts"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::from_extension("mts"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::from_extension("cts"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::from_extension("tsx"), Some(Dialect::Tsx));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_eq!(Dialect::from_extension("js"), None);
        assert_eq!(Dialect::from_extension("rs"), None);
        assert_eq!(Dialect::from_extension(""), None);
    }
}
