//! Default tag helper lowering.
//!
//! Rewrites generic tag helper nodes into the default execution protocol:
//! a runtime node on the class, one field per tag helper type, and for each
//! element a body, create, property and execute sequence the renderer turns
//! into scope-manager calls.
//!
//! Nodes are rewritten by swapping their kind in place. Identity and
//! children survive, so references to nested tag helpers taken before the
//! rewrite stay valid.

use std::sync::Arc;

use razor_ir::annotations::{find_primary_class, find_primary_class_mut, TAG_HELPER_FIELD};
use razor_ir::descriptors::TagHelperDescriptor;
use razor_ir::extensions::{
    DefaultTagHelperBody, DefaultTagHelperCreate, DefaultTagHelperExecute,
    DefaultTagHelperHtmlAttribute, DefaultTagHelperProperty, DefaultTagHelperRuntime,
};
use razor_ir::{
    find_descendant_references, CodeDocument, FieldDeclarationNode, IntermediateNode, NodeKind,
    ReferenceError,
};
use rustc_hash::FxHashSet;

use crate::{IntermediateNodePass, PassPhase, LATE_FEATURE_ORDER};

/// Field that holds instances of the tag helper type `type_name`.
pub fn tag_helper_field_name(type_name: &str) -> String {
    format!("__{}", type_name.replace('.', "_"))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTagHelperOptimizationPass;

/// Field declarations in first-use order, one per tag helper type.
#[derive(Default)]
struct Fields {
    seen: FxHashSet<String>,
    declared: Vec<FieldDeclarationNode>,
}

impl Fields {
    fn declare(&mut self, descriptor: &TagHelperDescriptor) -> String {
        let field_name = tag_helper_field_name(&descriptor.type_name);
        if self.seen.insert(descriptor.type_name.clone()) {
            self.declared.push(FieldDeclarationNode {
                modifiers: vec!["private".to_string()],
                field_type: format!("global::{}", descriptor.type_name),
                field_name: field_name.clone(),
            });
        }
        field_name
    }
}

fn extension_kind(payload: impl razor_ir::ExtensionNode) -> NodeKind {
    NodeKind::Extension(Box::new(payload))
}

/// Index just past the leading run of children matching `skip`, starting
/// at `from`.
fn skip_while(
    children: &[IntermediateNode],
    from: usize,
    skip: impl Fn(&IntermediateNode) -> bool,
) -> usize {
    from + children[from..]
        .iter()
        .take_while(|&child| skip(child))
        .count()
}

/// Elements already carrying an execute node were lowered by an earlier run.
fn is_lowered(node: &IntermediateNode) -> bool {
    node.children()
        .iter()
        .any(IntermediateNode::is_extension::<DefaultTagHelperExecute>)
}

fn rewrite_tag_helper(
    node: &mut IntermediateNode,
    fields: &mut Fields,
) -> Result<(), ReferenceError> {
    let NodeKind::TagHelper(tag_helper) = node.kind() else {
        return Ok(());
    };
    let tag_name = tag_helper.tag_name.clone();
    let tag_mode = tag_helper.tag_mode;
    let descriptors: Vec<Arc<TagHelperDescriptor>> = tag_helper
        .tag_helpers
        .iter()
        .filter(|descriptor| descriptor.is_default_kind())
        .cloned()
        .collect();
    tracing::trace!(tag = %tag_name, helpers = descriptors.len(), "lowering tag helper");

    let children = node.children_mut()?;
    for child in children.iter_mut() {
        let replacement = match child.kind() {
            NodeKind::TagHelperBody => Some(extension_kind(DefaultTagHelperBody {
                tag_name: tag_name.clone(),
                tag_mode,
            })),
            NodeKind::TagHelperHtmlAttribute(attribute) => {
                Some(extension_kind(DefaultTagHelperHtmlAttribute {
                    attribute_name: attribute.attribute_name.clone(),
                    attribute_structure: attribute.attribute_structure,
                }))
            }
            _ => None,
        };
        if let Some(kind) = replacement {
            *child.kind_mut() = kind;
        }
    }
    children.push(IntermediateNode::extension_node(DefaultTagHelperExecute));

    for descriptor in &descriptors {
        let field_name = fields.declare(descriptor);

        let index = skip_while(
            children,
            0,
            IntermediateNode::is_extension::<DefaultTagHelperBody>,
        );
        let index = skip_while(
            children,
            index,
            IntermediateNode::is_extension::<DefaultTagHelperCreate>,
        );
        children.insert(
            index,
            IntermediateNode::extension_node(DefaultTagHelperCreate {
                field_name: field_name.clone(),
                type_name: descriptor.type_name.clone(),
                tag_helper: Arc::clone(descriptor),
            }),
        );

        for child in children.iter_mut() {
            let NodeKind::TagHelperProperty(property) = child.kind() else {
                continue;
            };
            if *property.tag_helper != **descriptor {
                continue;
            }
            let lowered = extension_kind(DefaultTagHelperProperty {
                attribute_name: property.attribute_name.clone(),
                attribute_structure: property.attribute_structure,
                bound_attribute: property.bound_attribute.clone(),
                field_name: field_name.clone(),
                property_name: property.bound_attribute.property_name.clone(),
                tag_helper: Arc::clone(&property.tag_helper),
                is_indexer_name_match: property.is_indexer_name_match,
            });
            *child.kind_mut() = lowered;
        }
    }
    Ok(())
}

impl IntermediateNodePass for DefaultTagHelperOptimizationPass {
    fn name(&self) -> &'static str {
        "DefaultTagHelperOptimizationPass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::Optimization
    }

    fn order(&self) -> i32 {
        LATE_FEATURE_ORDER
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        _document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let references = find_descendant_references(root, |node| match node.kind() {
            NodeKind::TagHelper(tag_helper) => {
                tag_helper
                    .tag_helpers
                    .iter()
                    .any(|descriptor| descriptor.is_default_kind())
                    && !is_lowered(node)
            }
            _ => false,
        });
        if references.is_empty() {
            return Ok(());
        }
        if find_primary_class(root).is_none() {
            tracing::debug!("no primary class, skipping tag helper lowering");
            return Ok(());
        }

        let mut fields = Fields::default();
        for reference in &references {
            rewrite_tag_helper(reference.resolve_mut(root)?, &mut fields)?;
        }

        let Some(class) = find_primary_class_mut(root) else {
            return Ok(());
        };
        let children = class.children_mut()?;
        if !children
            .iter()
            .any(IntermediateNode::is_extension::<DefaultTagHelperRuntime>)
        {
            children.insert(0, IntermediateNode::extension_node(DefaultTagHelperRuntime));
        }
        for field in fields.declared {
            let index = skip_while(
                children,
                0,
                IntermediateNode::is_extension::<DefaultTagHelperRuntime>,
            );
            let index = skip_while(children, index, |child| {
                matches!(child.kind(), NodeKind::FieldDeclaration(_))
            });
            children.insert(
                index,
                IntermediateNode::new(NodeKind::FieldDeclaration(field))
                    .with_marker(TAG_HELPER_FIELD),
            );
        }
        tracing::debug!(count = references.len(), "lowered tag helpers");
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
