use super::*;
use crate::fixtures::{
    body, classified, empty_source, form_tag_helper, input_tag_helper, literal_attribute,
    literal_property, tag_helper, FORM_TYPE, INPUT_TYPE,
};
use razor_ir::annotations::find_primary_method;
use razor_ir::printer::format_tree;
use razor_ir::{find_descendant_nodes, CodeGenerationOptions, TagMode};
use pretty_assertions::assert_eq;

fn lowered(root: &mut IntermediateNode) {
    DefaultTagHelperOptimizationPass
        .execute(&empty_source(), root)
        .unwrap();
}

#[test]
fn test_field_name_replaces_dots() {
    assert_eq!(
        tag_helper_field_name("Microsoft.AspNetCore.Mvc.TagHelpers.InputTagHelper"),
        "__Microsoft_AspNetCore_Mvc_TagHelpers_InputTagHelper"
    );
}

#[test]
fn test_lowers_single_tag_helper() {
    let input = input_tag_helper();
    let mut root = classified(CodeGenerationOptions::runtime(), |b| {
        b.add(IntermediateNode::html_content("<p>", None))
            .push(tag_helper("input", TagMode::SelfClosing, &[Arc::clone(&input)]))
            .add(body())
            .add(literal_property(&input, "type", "text"))
            .add(literal_attribute("class", "btn"))
            .pop();
    });
    lowered(&mut root);

    let class = find_primary_class(&root).unwrap();
    assert_eq!(
        format_tree(class),
        "\
ClassDeclaration - public - Template -  -
    DefaultTagHelperRuntime
    FieldDeclaration - private - global::Microsoft.AspNetCore.Mvc.TagHelpers.InputTagHelper - __Microsoft_AspNetCore_Mvc_TagHelpers_InputTagHelper
    MethodDeclaration - public async override - global::System.Threading.Tasks.Task - ExecuteAsync
        HtmlContent
            Token - Html - <p>
        TagHelper - input - SelfClosing
            DefaultTagHelperBody - input - SelfClosing
            DefaultTagHelperCreate - __Microsoft_AspNetCore_Mvc_TagHelpers_InputTagHelper - Microsoft.AspNetCore.Mvc.TagHelpers.InputTagHelper
            DefaultTagHelperProperty - type - __Microsoft_AspNetCore_Mvc_TagHelpers_InputTagHelper - InputTypeName - DoubleQuotes
                HtmlContent
                    Token - Html - text
            DefaultTagHelperHtmlAttribute - class - DoubleQuotes
                HtmlContent
                    Token - Html - btn
            DefaultTagHelperExecute
"
    );
}

#[test]
fn test_one_field_per_type_in_first_use_order() {
    let input = input_tag_helper();
    let form = form_tag_helper();
    let mut root = classified(CodeGenerationOptions::runtime(), |b| {
        b.push(tag_helper("input", TagMode::SelfClosing, &[Arc::clone(&input)]))
            .add(body())
            .pop()
            .push(tag_helper("form", TagMode::StartTagAndEndTag, &[Arc::clone(&form)]))
            .add(body())
            .pop()
            .push(tag_helper("input", TagMode::SelfClosing, &[Arc::clone(&input)]))
            .add(body())
            .pop();
    });
    lowered(&mut root);

    let class = find_primary_class(&root).unwrap();
    let fields: Vec<_> = class
        .children()
        .iter()
        .filter(|child| child.has_annotation(TAG_HELPER_FIELD))
        .filter_map(|child| match child.kind() {
            NodeKind::FieldDeclaration(field) => Some(field.field_type.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        fields,
        vec![format!("global::{INPUT_TYPE}"), format!("global::{FORM_TYPE}")]
    );

    let runtimes = find_descendant_nodes(&root, |node| {
        node.is_extension::<DefaultTagHelperRuntime>()
    });
    assert_eq!(runtimes.len(), 1);
}

#[test]
fn test_nested_tag_helpers_are_lowered() {
    let input = input_tag_helper();
    let form = form_tag_helper();
    let mut root = classified(CodeGenerationOptions::runtime(), |b| {
        b.push(tag_helper("form", TagMode::StartTagAndEndTag, &[Arc::clone(&form)]))
            .push(body())
            .push(tag_helper("input", TagMode::SelfClosing, &[Arc::clone(&input)]))
            .add(body())
            .pop()
            .pop()
            .add(literal_property(&form, "asp-route-id", "5"))
            .pop();
    });
    lowered(&mut root);

    let method = find_primary_method(&root).unwrap();
    assert_eq!(
        format_tree(method),
        "\
MethodDeclaration - public async override - global::System.Threading.Tasks.Task - ExecuteAsync
    TagHelper - form - StartTagAndEndTag
        DefaultTagHelperBody - form - StartTagAndEndTag
            TagHelper - input - SelfClosing
                DefaultTagHelperBody - input - SelfClosing
                DefaultTagHelperCreate - __Microsoft_AspNetCore_Mvc_TagHelpers_InputTagHelper - Microsoft.AspNetCore.Mvc.TagHelpers.InputTagHelper
                DefaultTagHelperExecute
        DefaultTagHelperCreate - __Microsoft_AspNetCore_Mvc_TagHelpers_FormTagHelper - Microsoft.AspNetCore.Mvc.TagHelpers.FormTagHelper
        DefaultTagHelperProperty - asp-route-id - __Microsoft_AspNetCore_Mvc_TagHelpers_FormTagHelper - RouteValues - DoubleQuotes
            HtmlContent
                Token - Html - 5
        DefaultTagHelperExecute
"
    );
}

#[test]
fn test_creates_follow_descriptor_order() {
    let input = input_tag_helper();
    let custom = Arc::new(
        razor_ir::descriptors::TagHelperDescriptor::new("App.CustomTagHelper", "App")
            .with_bound_attribute(razor_ir::descriptors::BoundAttributeDescriptor::new(
                "type", "Kind", "System.String",
            )),
    );
    let mut root = classified(CodeGenerationOptions::runtime(), |b| {
        b.push(tag_helper(
            "input",
            TagMode::SelfClosing,
            &[Arc::clone(&input), Arc::clone(&custom)],
        ))
        .add(body())
        .add(literal_property(&input, "type", "text"))
        .add(literal_property(&custom, "type", "text"))
        .pop();
    });
    lowered(&mut root);

    let elements =
        find_descendant_nodes(&root, |node| matches!(node.kind(), NodeKind::TagHelper(_)));
    let element = elements[0];
    let names: Vec<_> = element
        .children()
        .iter()
        .map(|child| {
            let mut fields = Vec::new();
            child.kind().format_fields(&mut fields);
            format!("{} {}", child.name(), fields.first().cloned().unwrap_or_default())
        })
        .collect();
    assert_eq!(
        names,
        vec![
            "DefaultTagHelperBody input",
            "DefaultTagHelperCreate __Microsoft_AspNetCore_Mvc_TagHelpers_InputTagHelper",
            "DefaultTagHelperCreate __App_CustomTagHelper",
            "DefaultTagHelperProperty type",
            "DefaultTagHelperProperty type",
            "DefaultTagHelperExecute ",
        ]
    );
    let custom_property = element.children()[4]
        .extension::<DefaultTagHelperProperty>()
        .unwrap();
    assert_eq!(custom_property.field_name, "__App_CustomTagHelper");
    assert_eq!(custom_property.property_name, "Kind");
}

#[test]
fn test_non_default_kinds_are_untouched() {
    let component = Arc::new(
        razor_ir::descriptors::TagHelperDescriptor::new("App.Counter", "App")
            .with_kind("Components.Component"),
    );
    let mut root = classified(CodeGenerationOptions::runtime(), |b| {
        b.push(tag_helper("Counter", TagMode::SelfClosing, &[component]))
            .add(body())
            .pop();
    });
    let before = format_tree(&root);
    lowered(&mut root);
    assert_eq!(format_tree(&root), before);
}

#[test]
fn test_without_tag_helpers_is_noop() {
    let mut root = classified(CodeGenerationOptions::runtime(), |b| {
        b.add(IntermediateNode::html_content("<p>", None));
    });
    let before = format_tree(&root);
    lowered(&mut root);
    assert_eq!(format_tree(&root), before);
}
