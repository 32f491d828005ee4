//! Helper functions for the TypeScript extractor

use tree_sitter::Node;

/// Check if a node has an immediate child of the given kind
///
/// Used for the `async` marker on declarations and assignments.
pub(super) fn has_modifier(node: Node, modifier_kind: &str) -> bool {
    node.children(&mut node.walk())
        .any(|child| child.kind() == modifier_kind)
}
