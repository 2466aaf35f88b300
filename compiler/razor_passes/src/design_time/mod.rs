//! Design-time directive collection.
//!
//! At design time every directive token must stay visible to the type
//! checker even after the directive passes consume the directives. This
//! pass runs ahead of them and copies each token into a single
//! [`DesignTimeDirective`] node at the top of the primary class.

use razor_ir::annotations::{find_primary_class, find_primary_class_mut};
use razor_ir::extensions::DesignTimeDirective;
use razor_ir::{find_descendant_nodes, CodeDocument, IntermediateNode, NodeKind, ReferenceError};

use crate::pass::is_design_time;
use crate::{IntermediateNodePass, PassPhase, DEFAULT_FEATURE_ORDER};

#[derive(Clone, Copy, Debug, Default)]
pub struct DesignTimeDirectivePass;

impl IntermediateNodePass for DesignTimeDirectivePass {
    fn name(&self) -> &'static str {
        "DesignTimeDirectivePass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::DirectiveClassifier
    }

    /// Ahead of the directive passes that remove directive nodes.
    fn order(&self) -> i32 {
        DEFAULT_FEATURE_ORDER - 100
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        _document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        if !is_design_time(root) {
            return Ok(());
        }
        let Some(class) = find_primary_class(root) else {
            tracing::debug!("no primary class, skipping design-time directives");
            return Ok(());
        };
        if class
            .children()
            .iter()
            .any(IntermediateNode::is_extension::<DesignTimeDirective>)
        {
            return Ok(());
        }

        let mut helper = IntermediateNode::extension_node(DesignTimeDirective);
        let tokens: Vec<IntermediateNode> =
            find_descendant_nodes(root, |node| matches!(node.kind(), NodeKind::DirectiveToken(_)))
                .into_iter()
                .map(IntermediateNode::deep_clone)
                .collect();
        tracing::trace!(tokens = tokens.len(), "collected directive tokens");
        for token in tokens {
            helper.try_add_child(token)?;
        }

        if let Some(class) = find_primary_class_mut(root) {
            class.children_mut()?.insert(0, helper);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
