//! Deterministic text dump of an IR tree.
//!
//! One line per node, four spaces of indent per depth:
//!
//! ```text
//! Document - default
//!     ClassDeclaration - public - Template - global::Razor.Page -
//!         Token - Html - <p>\n
//! ```
//!
//! Fields are separated by ` - `; a span, when present, comes first as
//! `(absolute:line,column [length])`. Node identities are not printed, so
//! dumps of structurally equal trees compare equal.

use std::fmt::Write as _;

use crate::IntermediateNode;

/// Render `root` and its descendants.
pub fn format_tree(root: &IntermediateNode) -> String {
    let mut out = String::new();
    format_node(root, 0, &mut out);
    out
}

fn format_node(node: &IntermediateNode, depth: usize, out: &mut String) {
    let mut line = String::new();
    for _ in 0..depth {
        line.push_str("    ");
    }
    line.push_str(node.name());

    if let Some(span) = node.source() {
        let _ = write!(
            line,
            " - ({}:{},{} [{}])",
            span.absolute_index, span.line_index, span.character_index, span.length
        );
    }

    let mut fields = Vec::new();
    node.kind().format_fields(&mut fields);
    for field in &fields {
        line.push_str(" - ");
        escape_into(field, &mut line);
    }

    out.push_str(line.trim_end());
    out.push('\n');

    for child in node.children() {
        format_node(child, depth + 1, out);
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
