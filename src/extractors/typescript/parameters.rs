//! Formal-parameter extraction
//!
//! Iterates a parameter list in declaration order. Only plain named
//! parameters are recognized; destructured and rest parameters have no
//! single bound name the generated proxy could forward, so they are
//! skipped rather than recorded.

use crate::extractors::base::TsParameter;
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::Node;

/// Parse an ordered parameter list from a `formal_parameters` node
pub(super) fn parse_parameters(
    extractor: &TypeScriptExtractor,
    params_node: Node,
) -> Vec<TsParameter> {
    let mut parameters = Vec::new();

    let mut cursor = params_node.walk();
    for child in params_node.children(&mut cursor) {
        match child.kind() {
            // Skip punctuation
            "(" | ")" | "," => continue,
            "required_parameter" | "optional_parameter" => {
                if let Some(parameter) = parse_parameter(extractor, child) {
                    parameters.push(parameter);
                }
            }
            _ => {}
        }
    }

    parameters
}

/// Parse one required/optional parameter node
fn parse_parameter(extractor: &TypeScriptExtractor, node: Node) -> Option<TsParameter> {
    let pattern = node.child_by_field_name("pattern")?;
    let name = extractor.base().identifier_name(&pattern)?;

    let type_text = node
        .child_by_field_name("type")
        .and_then(|annotation| extractor.base().annotation_text(&annotation))
        .unwrap_or_else(|| "any".to_string());

    let default_value = extractor.base().field_text(&node, "value");

    Some(TsParameter {
        name,
        type_text,
        is_optional: node.kind() == "optional_parameter",
        default_value,
    })
}
