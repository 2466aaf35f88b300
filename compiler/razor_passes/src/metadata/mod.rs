//! Compiled-item and source-checksum metadata.
//!
//! Runtime output is tagged with an assembly-level attribute naming the
//! generated type, and the generated class is tagged with one checksum
//! attribute per contributing source so a host can detect stale output.

use razor_ir::annotations::{
    find_primary_class, find_primary_namespace, find_primary_namespace_mut,
};
use razor_ir::extensions::{CompiledItemAttribute, SourceChecksumAttribute};
use razor_ir::{
    CodeDocument, IntermediateNode, NodeId, NodeKind, ReferenceError, SourceDocument,
};

use crate::{IntermediateNodePass, PassPhase};

#[derive(Clone, Copy, Debug, Default)]
pub struct MetadataAttributePass;

/// Everything the pass needs, gathered before the first write so a missing
/// piece leaves the tree untouched.
struct Target {
    class_id: NodeId,
    compiled_item: CompiledItemAttribute,
}

impl MetadataAttributePass {
    fn target(document: &CodeDocument, root: &IntermediateNode) -> Option<Target> {
        let node = root.as_document()?;
        if node.options.design_time || node.options.suppress_metadata_attributes {
            return None;
        }
        let kind = node.document_kind.clone()?;
        if root
            .children()
            .iter()
            .any(IntermediateNode::is_extension::<CompiledItemAttribute>)
        {
            return None;
        }

        let namespace = match find_primary_namespace(root)?.kind() {
            NodeKind::NamespaceDeclaration(namespace) => namespace.content.clone(),
            _ => return None,
        };
        let class_node = find_primary_class(root)?;
        let class = class_node.as_class()?;
        let identifier = document.source.identifier()?;

        let type_name = if namespace.is_empty() {
            class.class_name.clone()
        } else {
            format!("{namespace}.{}", class.class_name)
        };
        Some(Target {
            class_id: class_node.id(),
            compiled_item: CompiledItemAttribute {
                type_name,
                kind,
                identifier,
            },
        })
    }
}

fn checksum_attribute(source: &SourceDocument) -> Option<IntermediateNode> {
    let checksum = source.checksum()?;
    let identifier = source.identifier()?;
    Some(IntermediateNode::extension_node(SourceChecksumAttribute {
        checksum_algorithm: checksum.algorithm.as_str().to_string(),
        checksum: checksum.to_hex(),
        identifier,
    }))
}

impl IntermediateNodePass for MetadataAttributePass {
    fn name(&self) -> &'static str {
        "MetadataAttributePass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::Optimization
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let Some(target) = Self::target(document, root) else {
            tracing::trace!("metadata attributes not applicable");
            return Ok(());
        };
        let Some(namespace) = find_primary_namespace_mut(root) else {
            return Ok(());
        };
        // Checksum attributes decorate the class, so it has to sit directly
        // in the namespace.
        let Some(mut insert_at) = namespace.child_index(target.class_id) else {
            tracing::debug!("primary class is not a direct namespace child");
            return Ok(());
        };

        let children = namespace.children_mut()?;
        let sources = std::iter::once(&document.source).chain(document.imports.iter());
        for attribute in sources.filter_map(checksum_attribute) {
            children.insert(insert_at, attribute);
            insert_at += 1;
        }

        root.children_mut()?
            .insert(0, IntermediateNode::extension_node(target.compiled_item));
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
