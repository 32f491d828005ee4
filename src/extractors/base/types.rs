// Extraction data model
//
// All data structures produced by the analyzer. Records are created fresh per
// extraction pass, immutable once returned, and carry the exact wire field
// names the downstream wrapper generator consumes.

use serde::{Deserialize, Serialize};

/// An exported top-level function extracted from TypeScript source
///
/// One record per recognized export shape: named function declarations,
/// const-assigned arrow functions and function expressions, and default
/// exports. Records appear in source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TsFunction {
    /// Function name as written; for const-assigned forms, the declarator name
    pub name: String,
    /// Formal parameters in declaration order
    pub parameters: Vec<TsParameter>,
    /// Raw return type text; `"void"` when a named declaration carries no
    /// annotation, `"any"` when an arrow function carries none
    pub return_type: String,
    /// True when the declaration or its enclosing assignment is marked async
    pub is_async: bool,
    /// Doc comment found directly above the export, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// One formal parameter of an extracted function
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TsParameter {
    /// Bound parameter name
    pub name: String,
    /// Raw type annotation text, `"any"` when the source has none
    #[serde(rename = "type")]
    pub type_text: String,
    /// True for `name?: T` parameters
    pub is_optional: bool,
    /// Raw default-value expression text, when the source supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Target-side type vocabulary for generated proxy signatures
///
/// The wrapper generator marshals values across the host/script boundary
/// through this closed set. The mapping is total: generic instantiations,
/// unions, and custom type names all marshal as `Any`. Extraction keeps raw
/// type text verbatim; normalization happens only at generation time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InteropType {
    String,
    /// Double-precision numeric on the host side
    Number,
    Boolean,
    Void,
    /// Dynamically typed; the opaque fallback for everything unrecognized
    Any,
}

impl InteropType {
    /// Normalize raw TypeScript type text into the target vocabulary
    pub fn from_ts(type_text: &str) -> Self {
        match type_text {
            "string" => InteropType::String,
            "number" => InteropType::Number,
            "boolean" => InteropType::Boolean,
            "void" => InteropType::Void,
            "any" => InteropType::Any,
            _ => InteropType::Any,
        }
    }
}

impl std::fmt::Display for InteropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteropType::String => write!(f, "string"),
            InteropType::Number => write!(f, "number"),
            InteropType::Boolean => write!(f, "boolean"),
            InteropType::Void => write!(f, "void"),
            InteropType::Any => write!(f, "any"),
        }
    }
}
