use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_tag_helper_descriptor_defaults() {
    let descriptor = TagHelperDescriptor::new("Microsoft.AspNetCore.Mvc.TagHelpers.InputTagHelper", "Mvc");
    assert_eq!(descriptor.name, "InputTagHelper");
    assert!(descriptor.is_default_kind());
    assert!(!descriptor.clone().with_kind("Components.Component").is_default_kind());
}

#[test]
fn test_bound_attribute_string_detection() {
    assert!(BoundAttributeDescriptor::new("title", "Title", "System.String").is_string_property);
    assert!(!BoundAttributeDescriptor::new("count", "Count", "System.Int32").is_string_property);
}

#[test]
fn test_indexer_prefix_matching() {
    let attr = BoundAttributeDescriptor::new(
        "asp-all-route-data",
        "RouteValues",
        "System.Collections.Generic.IDictionary<System.String, System.String>",
    )
    .with_indexer("asp-route-", "System.String");

    assert!(attr.is_indexer());
    assert!(attr.is_indexer_string_property);
    assert!(attr.matches_indexer_prefix("asp-route-id"));
    assert!(attr.matches_indexer_prefix("ASP-ROUTE-id"));
    assert!(!attr.matches_indexer_prefix("asp-route-"));
    assert!(!attr.matches_indexer_prefix("asp-for"));
}

#[test]
fn test_find_bound_attribute_prefers_exact_name() {
    let descriptor = TagHelperDescriptor::new("AnchorTagHelper", "Mvc")
        .with_bound_attribute(
            BoundAttributeDescriptor::new("asp-route-", "RouteValues", "IDictionary<string, string>")
                .with_indexer("asp-route-", "System.String"),
        )
        .with_bound_attribute(BoundAttributeDescriptor::new(
            "asp-route-special",
            "Special",
            "System.String",
        ));

    assert_eq!(
        descriptor.find_bound_attribute("asp-route-special").map(|a| a.property_name.as_str()),
        Some("Special")
    );
    assert_eq!(
        descriptor.find_bound_attribute("asp-route-id").map(|a| a.property_name.as_str()),
        Some("RouteValues")
    );
    assert!(descriptor.find_bound_attribute("href").is_none());
}

#[test]
fn test_directive_descriptor_builder() {
    let inherits = DirectiveDescriptor::single_line("inherits")
        .with_usage(DirectiveUsage::FileScopedSinglyOccurring)
        .with_token(DirectiveTokenDescriptor::new(DirectiveTokenKind::Type).named("TypeName"));

    assert_eq!(inherits.kind, DirectiveKind::SingleLine);
    assert_eq!(inherits.tokens.len(), 1);
    assert_eq!(inherits.tokens[0].kind.to_string(), "Type");
    assert_ne!(inherits, DirectiveDescriptor::code_block("inherits"));
}
