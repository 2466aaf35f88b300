use std::sync::Arc;

use super::*;
use crate::descriptors::{BoundAttributeDescriptor, TagHelperDescriptor};
use crate::{AttributeStructure, ExtensionNode, IntermediateNode};
use pretty_assertions::assert_eq;

fn route_property(attribute_name: &str, indexer: bool) -> DefaultTagHelperProperty {
    let bound = BoundAttributeDescriptor::new(
        "asp-all-route-data",
        "RouteValues",
        "System.Collections.Generic.IDictionary<System.String, System.Int32>",
    )
    .with_indexer("asp-route-", "System.Int32");
    DefaultTagHelperProperty {
        attribute_name: attribute_name.to_string(),
        attribute_structure: AttributeStructure::DoubleQuotes,
        bound_attribute: bound,
        field_name: "__AnchorTagHelper".to_string(),
        property_name: "RouteValues".to_string(),
        tag_helper: Arc::new(TagHelperDescriptor::new("AnchorTagHelper", "Mvc")),
        is_indexer_name_match: indexer,
    }
}

#[test]
fn test_capabilities_group_renderers() {
    assert_eq!(DefaultTagHelperRuntime.capability(), DEFAULT_TAG_HELPER);
    assert_eq!(DefaultTagHelperExecute.capability(), DEFAULT_TAG_HELPER);
    assert_eq!(SectionNode::new("s").capability(), SECTION);
    assert_eq!(TemplateNode.capability(), TEMPLATE);
    assert_eq!(DesignTimeDirective.capability(), DESIGN_TIME_DIRECTIVE);
    assert_eq!(
        PreallocatedTagHelperHtmlAttribute {
            variable_name: "__tagHelperAttribute_0".to_string()
        }
        .capability(),
        PREALLOCATED_ATTRIBUTE
    );
    assert_eq!(METADATA_ATTRIBUTE.to_string(), "MetadataAttributeTargetExtension");
}

#[test]
fn test_indexer_key_strips_prefix() {
    let property = route_property("asp-route-id", true);
    assert_eq!(property.indexer_key(), Some("id"));
    assert_eq!(property.value_type_name(), "System.Int32");
    assert!(!property.is_string_value());

    let whole = route_property("asp-all-route-data", false);
    assert_eq!(whole.indexer_key(), None);
    assert!(whole.value_type_name().starts_with("System.Collections.Generic.IDictionary"));
}

#[test]
fn test_extension_payload_clone_through_node() {
    let node = IntermediateNode::extension_node(route_property("asp-route-id", true));
    let copy = node.deep_clone();
    assert_eq!(
        copy.extension::<DefaultTagHelperProperty>()
            .map(|p| p.attribute_name.as_str()),
        Some("asp-route-id")
    );
}
