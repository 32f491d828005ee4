// BaseExtractor - source-text utilities shared by the shape extractors
//
// Owns the source for one extraction session. Every lookup returns Option so
// call sites handle absence explicitly; the grammar is error-tolerant and
// partial trees are normal, so nothing here assumes a clean parse.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*").expect("identifier pattern"));

/// Shared per-session extraction state
pub struct BaseExtractor {
    content: String,
}

impl BaseExtractor {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Get the exact source text a node spans
    pub fn node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slices but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Get the text of a named field, when the field exists
    pub fn field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.node_text(&field_node))
    }

    /// Type text from an annotation node
    ///
    /// Annotation nodes span `: T`; skip the colon token and return the
    /// remaining type text, trimmed.
    pub fn annotation_text(&self, annotation: &Node) -> Option<String> {
        for i in 0..annotation.child_count() {
            if let Some(child) = annotation.child(i) {
                if child.kind() != ":" {
                    return Some(self.node_text(&child).trim().to_string());
                }
            }
        }
        None
    }

    /// Extract an identifier name from a node
    ///
    /// Plain identifiers return their text directly; anything else falls back
    /// to a leading-identifier scan over the raw text. Destructuring patterns
    /// have no single bound name and yield `None`.
    pub fn identifier_name(&self, node: &Node) -> Option<String> {
        if node.kind() == "identifier" {
            return Some(self.node_text(node));
        }

        let node_text = self.node_text(node);
        IDENTIFIER
            .find(node_text.trim())
            .map(|m| m.as_str().to_string())
    }

    /// Find the doc comment directly above a node
    ///
    /// Walks preceding comment siblings and keeps the contiguous run of
    /// `/** ... */` and `///` comments closest to the node, in source order.
    /// Plain `//` comments are not documentation and end the run.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        let mut comments = Vec::new();

        let mut current = node.prev_named_sibling();
        while let Some(sibling) = current {
            if sibling.kind() == "comment" {
                let comment_text = self.node_text(&sibling);
                let trimmed = comment_text.trim_start();
                if trimmed.starts_with("/**") || trimmed.starts_with("///") {
                    comments.push(comment_text);
                    current = sibling.prev_named_sibling();
                } else {
                    // Stop at non-doc comment
                    break;
                }
            } else {
                // Stop at non-comment node
                break;
            }
        }

        if comments.is_empty() {
            None
        } else {
            // Reverse to get original order (top to bottom)
            comments.reverse();
            Some(comments.join("\n"))
        }
    }
}
