// TsBridge - tree-sitter powered TypeScript analysis for script-bridge generation
//
// Parses TypeScript source text and extracts every exported top-level function
// signature (name, typed parameters, return type, async flag) with enough
// fidelity to regenerate a strongly-typed proxy over a script runtime. The
// wrapper generation itself lives downstream; this crate ends at the
// extraction model and the target-type vocabulary the generator consumes.

pub mod extractors;
pub mod language;

pub use extractors::base::{InteropType, TsFunction, TsParameter};
pub use extractors::manager::{ScriptAnalyzer, ScriptModule};
pub use language::Dialect;
