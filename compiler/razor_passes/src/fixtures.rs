//! Shared tree fixtures for pass tests.

use std::sync::Arc;

use razor_ir::descriptors::{BoundAttributeDescriptor, TagHelperDescriptor};
use razor_ir::{
    AttributeStructure, CodeDocument, CodeGenerationOptions, IntermediateNode, IrBuilder, NodeKind,
    SourceDocument, TagHelperHtmlAttributeNode, TagHelperNode, TagHelperPropertyNode, TagMode,
};

use crate::{DocumentClassifierPass, IntermediateNodePass};

pub(crate) const INPUT_TYPE: &str = "Microsoft.AspNetCore.Mvc.TagHelpers.InputTagHelper";
pub(crate) const FORM_TYPE: &str = "Microsoft.AspNetCore.Mvc.TagHelpers.FormTagHelper";

pub(crate) fn input_tag_helper() -> Arc<TagHelperDescriptor> {
    Arc::new(
        TagHelperDescriptor::new(INPUT_TYPE, "Microsoft.AspNetCore.Mvc.TagHelpers")
            .with_bound_attribute(BoundAttributeDescriptor::new(
                "type",
                "InputTypeName",
                "System.String",
            ))
            .with_bound_attribute(BoundAttributeDescriptor::new(
                "asp-for",
                "For",
                "Microsoft.AspNetCore.Mvc.ViewFeatures.ModelExpression",
            )),
    )
}

pub(crate) fn form_tag_helper() -> Arc<TagHelperDescriptor> {
    Arc::new(
        TagHelperDescriptor::new(FORM_TYPE, "Microsoft.AspNetCore.Mvc.TagHelpers")
            .with_bound_attribute(
                BoundAttributeDescriptor::new(
                    "asp-all-route-data",
                    "RouteValues",
                    "System.Collections.Generic.IDictionary<System.String, System.String>",
                )
                .with_indexer("asp-route-", "System.String"),
            ),
    )
}

pub(crate) fn empty_source() -> CodeDocument {
    CodeDocument::new(SourceDocument::new(""))
}

/// Build and classify a document.
pub(crate) fn classified(
    options: CodeGenerationOptions,
    content: impl FnOnce(&mut IrBuilder),
) -> IntermediateNode {
    let mut builder = IrBuilder::document(options);
    content(&mut builder);
    let mut root = match builder.build() {
        Ok(root) => root,
        Err(err) => panic!("fixture tree is malformed: {err}"),
    };
    if let Err(err) = DocumentClassifierPass::default().execute(&empty_source(), &mut root) {
        panic!("fixture classification failed: {err}");
    }
    root
}

pub(crate) fn tag_helper(
    tag_name: &str,
    tag_mode: TagMode,
    tag_helpers: &[Arc<TagHelperDescriptor>],
) -> IntermediateNode {
    IntermediateNode::new(NodeKind::TagHelper(TagHelperNode {
        tag_name: tag_name.to_string(),
        tag_mode,
        tag_helpers: tag_helpers.to_vec(),
    }))
}

pub(crate) fn body() -> IntermediateNode {
    IntermediateNode::new(NodeKind::TagHelperBody)
}

/// Property bound by `attribute_name`, holding a single literal value.
pub(crate) fn literal_property(
    tag_helper: &Arc<TagHelperDescriptor>,
    attribute_name: &str,
    value: &str,
) -> IntermediateNode {
    let bound = tag_helper.find_bound_attribute(attribute_name).cloned();
    let is_indexer_name_match = bound
        .as_ref()
        .is_some_and(|b| !b.name.eq_ignore_ascii_case(attribute_name));
    let mut node = IntermediateNode::new(NodeKind::TagHelperProperty(TagHelperPropertyNode {
        attribute_name: attribute_name.to_string(),
        attribute_structure: AttributeStructure::DoubleQuotes,
        bound_attribute: bound.unwrap_or_default(),
        tag_helper: Arc::clone(tag_helper),
        is_indexer_name_match,
    }));
    if let Err(err) = node.try_add_child(IntermediateNode::html_content(value, None)) {
        panic!("property rejected its value: {err}");
    }
    node
}

/// Unbound attribute holding a single literal value.
pub(crate) fn literal_attribute(attribute_name: &str, value: &str) -> IntermediateNode {
    let mut node = IntermediateNode::new(NodeKind::TagHelperHtmlAttribute(
        TagHelperHtmlAttributeNode {
            attribute_name: attribute_name.to_string(),
            attribute_structure: AttributeStructure::DoubleQuotes,
        },
    ));
    if let Err(err) = node.try_add_child(IntermediateNode::html_content(value, None)) {
        panic!("attribute rejected its value: {err}");
    }
    node
}
