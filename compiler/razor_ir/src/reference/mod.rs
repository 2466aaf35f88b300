//! Structural editing through (parent, node) references.
//!
//! A [`NodeReference`] records identities, never indices. Every edit first
//! re-resolves the parent by identity, then the node's current index under
//! that parent, so earlier edits that shifted siblings cannot make a later
//! edit land in the wrong place. A reference whose node has been moved or
//! removed since it was taken fails with [`ReferenceError`] instead.

use thiserror::Error;

use crate::descriptors::DirectiveDescriptor;
use crate::visitor::{walk_with_ancestors, WalkAction};
use crate::{IntermediateNode, NodeId, NodeKind};

/// A broken structural-editing contract.
///
/// These indicate a defect in the pass or extension making the edit, not a
/// problem with the document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("parent node {parent} was not found in the tree")]
    ParentNotFound { parent: NodeId },

    #[error("node {node} is no longer a child of {parent}")]
    NodeNotUnderParent { parent: NodeId, node: NodeId },

    #[error("node {node} has a fixed, read-only child list")]
    ReadOnlyChildren { node: NodeId },

    #[error("the root node has no parent")]
    RootHasNoParent,
}

/// Position of a node, identified by its parent and itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeReference {
    pub parent: NodeId,
    pub node: NodeId,
}

impl NodeReference {
    pub fn new(parent: NodeId, node: NodeId) -> Self {
        NodeReference { parent, node }
    }

    /// Re-resolve the parent and the node's current index under it.
    fn locate<'a>(
        &self,
        root: &'a mut IntermediateNode,
    ) -> Result<(&'a mut IntermediateNode, usize), ReferenceError> {
        let parent = root
            .find_by_id_mut(self.parent)
            .ok_or(ReferenceError::ParentNotFound {
                parent: self.parent,
            })?;
        let index = parent
            .child_index(self.node)
            .ok_or(ReferenceError::NodeNotUnderParent {
                parent: self.parent,
                node: self.node,
            })?;
        Ok((parent, index))
    }

    /// Borrow the referenced node.
    pub fn resolve<'a>(
        &self,
        root: &'a IntermediateNode,
    ) -> Result<&'a IntermediateNode, ReferenceError> {
        let parent = root
            .find_by_id(self.parent)
            .ok_or(ReferenceError::ParentNotFound {
                parent: self.parent,
            })?;
        parent
            .children()
            .iter()
            .find(|c| c.id() == self.node)
            .ok_or(ReferenceError::NodeNotUnderParent {
                parent: self.parent,
                node: self.node,
            })
    }

    /// Mutably borrow the referenced node.
    pub fn resolve_mut<'a>(
        &self,
        root: &'a mut IntermediateNode,
    ) -> Result<&'a mut IntermediateNode, ReferenceError> {
        let (parent, index) = self.locate(root)?;
        let children = parent.children_mut()?;
        Ok(&mut children[index])
    }

    /// Insert `node` immediately before the referenced node.
    pub fn insert_before(
        &self,
        root: &mut IntermediateNode,
        node: IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let (parent, index) = self.locate(root)?;
        parent.children_mut()?.insert(index, node);
        Ok(())
    }

    /// Insert `node` immediately after the referenced node.
    pub fn insert_after(
        &self,
        root: &mut IntermediateNode,
        node: IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let (parent, index) = self.locate(root)?;
        parent.children_mut()?.insert(index + 1, node);
        Ok(())
    }

    /// Replace the referenced node, returning it.
    ///
    /// The returned reference points at the replacement.
    pub fn replace(
        &self,
        root: &mut IntermediateNode,
        node: IntermediateNode,
    ) -> Result<(IntermediateNode, NodeReference), ReferenceError> {
        let (parent, index) = self.locate(root)?;
        let replacement = NodeReference::new(self.parent, node.id());
        let old = std::mem::replace(&mut parent.children_mut()?[index], node);
        Ok((old, replacement))
    }

    /// Detach the referenced node, returning it.
    pub fn remove(&self, root: &mut IntermediateNode) -> Result<IntermediateNode, ReferenceError> {
        let (parent, index) = self.locate(root)?;
        Ok(parent.children_mut()?.remove(index))
    }
}

/// References to every descendant of `root` matching `predicate`, in
/// pre-order. The root itself has no parent and is never returned.
pub fn find_descendant_references(
    root: &IntermediateNode,
    mut predicate: impl FnMut(&IntermediateNode) -> bool,
) -> Vec<NodeReference> {
    let mut references = Vec::new();
    walk_with_ancestors(root, |node, ancestors| {
        if let Some(parent) = ancestors.parent() {
            if predicate(node) {
                references.push(NodeReference::new(parent.id(), node.id()));
            }
        }
        WalkAction::Continue
    });
    references
}

/// References to every well-formed directive node declared by `descriptor`.
/// Malformed directives are left for removal.
pub fn find_directive_references(
    root: &IntermediateNode,
    descriptor: &DirectiveDescriptor,
) -> Vec<NodeReference> {
    find_descendant_references(root, |node| match node.kind() {
        NodeKind::Directive(directive) => *directive.descriptor == *descriptor,
        _ => false,
    })
}

/// Every descendant of `root` matching `predicate`, in pre-order.
pub fn find_descendant_nodes(
    root: &IntermediateNode,
    mut predicate: impl FnMut(&IntermediateNode) -> bool,
) -> Vec<&IntermediateNode> {
    let mut nodes = Vec::new();
    walk_with_ancestors(root, |node, ancestors| {
        if !ancestors.is_empty() && predicate(node) {
            nodes.push(node);
        }
        WalkAction::Continue
    });
    nodes
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
