//! Built-in directives and the passes that interpret them.
//!
//! Each directive is declared by a descriptor; the parser upstream produces
//! `Directive` nodes tagged with that descriptor and the passes here find
//! them by descriptor equality.

mod functions;
mod inherits;
mod section;

pub use functions::FunctionsDirectivePass;
pub use inherits::InheritsDirectivePass;
pub use section::SectionDirectivePass;

use std::sync::Arc;

use razor_ir::descriptors::{
    DirectiveDescriptor, DirectiveTokenDescriptor, DirectiveTokenKind, DirectiveUsage,
};
use razor_ir::{IntermediateNode, NodeKind};

/// `@inherits TypeName`
pub fn inherits() -> Arc<DirectiveDescriptor> {
    Arc::new(
        DirectiveDescriptor::single_line("inherits")
            .with_usage(DirectiveUsage::FileScopedSinglyOccurring)
            .with_token(DirectiveTokenDescriptor::new(DirectiveTokenKind::Type).named("TypeName")),
    )
}

/// `@functions { ... }`
pub fn functions() -> Arc<DirectiveDescriptor> {
    Arc::new(DirectiveDescriptor::code_block("functions"))
}

/// `@section Name { ... }`
pub fn section() -> Arc<DirectiveDescriptor> {
    Arc::new(
        DirectiveDescriptor::razor_block("section").with_token(
            DirectiveTokenDescriptor::new(DirectiveTokenKind::Member).named("SectionName"),
        ),
    )
}

fn is_directive_token(node: &IntermediateNode) -> bool {
    matches!(node.kind(), NodeKind::DirectiveToken(_))
}

/// Content of the first directive token under `directive`.
fn first_token(directive: &IntermediateNode) -> Option<&str> {
    directive.children().iter().find_map(|child| match child.kind() {
        NodeKind::DirectiveToken(token) => Some(token.content.as_str()),
        _ => None,
    })
}

/// Children of a detached directive that are not its tokens.
fn take_body(directive: &mut IntermediateNode) -> Vec<IntermediateNode> {
    directive
        .take_children()
        .into_iter()
        .filter(|child| !is_directive_token(child))
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
