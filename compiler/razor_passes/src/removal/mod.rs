//! Removes directives no other pass consumed.
//!
//! Directive nodes have no rendering of their own. Any diagnostics they
//! carry (including those of malformed directives) are lifted onto the
//! document first so removal never loses them.

use razor_ir::{
    walk_with_ancestors, CodeDocument, IntermediateNode, NodeKind, NodeReference, ReferenceError,
    WalkAction,
};

use crate::{IntermediateNodePass, PassPhase, DEFAULT_FEATURE_ORDER};

#[derive(Clone, Copy, Debug, Default)]
pub struct DirectiveRemovalPass;

impl IntermediateNodePass for DirectiveRemovalPass {
    fn name(&self) -> &'static str {
        "DirectiveRemovalPass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::Optimization
    }

    fn order(&self) -> i32 {
        DEFAULT_FEATURE_ORDER + 50
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        _document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let mut references = Vec::new();
        walk_with_ancestors(root, |node, ancestors| match node.kind() {
            NodeKind::Directive(_) | NodeKind::MalformedDirective(_) => {
                if let Some(parent) = ancestors.parent() {
                    references.push(NodeReference::new(parent.id(), node.id()));
                }
                WalkAction::SkipChildren
            }
            _ => WalkAction::Continue,
        });
        if references.is_empty() {
            return Ok(());
        }

        tracing::trace!(count = references.len(), "removing directives");
        for reference in references {
            let removed = reference.remove(root)?;
            for diagnostic in removed.collect_diagnostics() {
                root.add_diagnostic(diagnostic);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
