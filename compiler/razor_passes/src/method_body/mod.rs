//! Drops the primary method body when the host only needs the type shape.

use razor_ir::annotations::find_primary_method_mut;
use razor_ir::{CodeDocument, IntermediateNode, ReferenceError};

use crate::{IntermediateNodePass, PassPhase};

/// Clears the primary method when `suppress_primary_method_body` is set.
///
/// Runs first in the optimization phase so later passes never lower
/// content that will not be emitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct EliminateMethodBodyPass;

impl IntermediateNodePass for EliminateMethodBodyPass {
    fn name(&self) -> &'static str {
        "EliminateMethodBodyPass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::Optimization
    }

    fn order(&self) -> i32 {
        i32::MIN
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        _document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let suppress = root
            .as_document()
            .is_some_and(|document| document.options.suppress_primary_method_body);
        if !suppress {
            return Ok(());
        }
        if let Some(method) = find_primary_method_mut(root) {
            let removed = method.take_children();
            tracing::trace!(count = removed.len(), "removed primary method body");
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
