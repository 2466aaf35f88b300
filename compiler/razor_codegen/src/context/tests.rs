use std::rc::Rc;

use super::*;
use crate::node_writer::{DesignTimeNodeWriter, RuntimeNodeWriter};
use pretty_assertions::assert_eq;
use razor_diagnostic::ErrorCode;

fn index_document() -> CodeDocument {
    CodeDocument::new(SourceDocument::new("<p>@Model</p>").with_file_path("/Index.cshtml"))
        .with_import(SourceDocument::new("@using System").with_file_path("/_ViewImports.cshtml"))
}

#[test]
fn test_bound_attribute_first_write_wins() {
    let mut tag_helper = TagHelperRenderingContext::default();
    assert_eq!(tag_helper.rendered_accessor("count"), None);

    tag_helper.record_bound_attribute("count", "__A.Count");
    tag_helper.record_bound_attribute("count", "__B.Count");

    assert_eq!(tag_helper.rendered_accessor("count"), Some("__A.Count"));
}

#[test]
fn test_property_dictionary_verified_once() {
    let mut tag_helper = TagHelperRenderingContext::default();

    assert!(tag_helper.verify_property_dictionary("InputTagHelper", "RouteValues"));
    assert!(!tag_helper.verify_property_dictionary("InputTagHelper", "RouteValues"));
    assert!(tag_helper.verify_property_dictionary("FormTagHelper", "RouteValues"));
}

#[test]
fn test_tag_helper_contexts_are_per_element() {
    let target = CodeTarget::runtime("default");
    let document = index_document();
    let mut context =
        CodeRenderingContext::new(&target, &document, CodeGenerationOptions::runtime());

    context.with_tag_helper_context(|context| {
        context
            .tag_helper_context_mut()
            .record_bound_attribute("value", "__A.Value");
        context.with_tag_helper_context(|context| {
            assert_eq!(context.tag_helper_context_mut().rendered_accessor("value"), None);
        });
        assert_eq!(
            context.tag_helper_context_mut().rendered_accessor("value"),
            Some("__A.Value")
        );
    });

    assert_eq!(context.tag_helper_context_mut().rendered_accessor("value"), None);
}

#[test]
fn test_suppressed_unique_id_is_fixed() {
    let target = CodeTarget::runtime("default");
    let document = index_document();
    let options = CodeGenerationOptions::runtime().with_suppress_unique_ids("test");
    let mut context = CodeRenderingContext::new(&target, &document, options);

    assert_eq!(context.generate_unique_id(), "test");
    assert_eq!(context.generate_unique_id(), "test");
}

#[test]
fn test_unique_ids_are_distinct_and_reproducible() {
    let target = CodeTarget::runtime("default");
    let document = index_document();

    let mut first = CodeRenderingContext::new(&target, &document, CodeGenerationOptions::runtime());
    let a = first.generate_unique_id();
    let b = first.generate_unique_id();

    let mut second =
        CodeRenderingContext::new(&target, &document, CodeGenerationOptions::runtime());
    let again = second.generate_unique_id();

    assert_ne!(a, b);
    assert_eq!(a, again);
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
}

#[test]
fn test_source_for_matches_import_path() {
    let target = CodeTarget::runtime("default");
    let document = index_document();
    let context = CodeRenderingContext::new(&target, &document, CodeGenerationOptions::runtime());

    let main = SourceSpan::new(0, 0, 0, 1);
    let import = SourceSpan::new(0, 0, 0, 1).with_file_path("/_ViewImports.cshtml");
    let unknown = SourceSpan::new(0, 0, 0, 1).with_file_path("/Other.cshtml");

    assert_eq!(context.source_for(&main).text(), "<p>@Model</p>");
    assert_eq!(context.source_for(&import).text(), "@using System");
    assert_eq!(context.source_for(&unknown).text(), "<p>@Model</p>");
    assert_eq!(context.file_path_for(&main), "/Index.cshtml");
    assert_eq!(context.file_path_for(&unknown), "/Other.cshtml");
}

#[test]
fn test_write_mapped_records_only_at_design_time() {
    let target = CodeTarget::runtime("default");
    let document = index_document();
    let span = SourceSpan::new(4, 0, 4, 5);

    let mut runtime =
        CodeRenderingContext::new(&target, &document, CodeGenerationOptions::runtime());
    runtime.write_mapped("Model", Some(&span));
    assert_eq!(runtime.writer().as_str(), "Model");
    assert!(runtime.source_mappings().is_empty());

    let target = CodeTarget::design_time("default");
    let mut design_time =
        CodeRenderingContext::new(&target, &document, CodeGenerationOptions::design_time());
    design_time.writer_mut().write_line("{");
    design_time.writer_mut().push_indent();
    design_time.writer_mut().write("__o = ");
    design_time.write_mapped("Model", Some(&span));
    design_time.write_mapped(";", None);

    assert_eq!(design_time.writer().as_str(), "{\n    __o = Model;");
    let mappings = design_time.source_mappings();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].original_span, span);
    assert_eq!(mappings[0].generated_span, SourceSpan::new(12, 1, 10, 5));
}

#[test]
fn test_write_mapped_location_includes_indent() {
    let target = CodeTarget::design_time("default");
    let document = index_document();
    let mut context =
        CodeRenderingContext::new(&target, &document, CodeGenerationOptions::design_time());

    context.writer_mut().push_indent();
    context.write_mapped("Model", Some(&SourceSpan::new(4, 0, 4, 5)));

    assert_eq!(
        context.source_mappings()[0].generated_span,
        SourceSpan::new(4, 0, 4, 5)
    );
}

#[test]
fn test_node_writer_stack() {
    let target = CodeTarget::runtime("default");
    let document = index_document();
    let mut context =
        CodeRenderingContext::new(&target, &document, CodeGenerationOptions::runtime());

    assert!(format!("{:?}", context.node_writer()).contains("RuntimeNodeWriter"));

    context.with_node_writer(Rc::new(DesignTimeNodeWriter), |context| {
        assert!(format!("{:?}", context.node_writer()).contains("DesignTimeNodeWriter"));
        context.with_node_writer(
            Rc::new(RuntimeNodeWriter::redirected("__razor_template_writer")),
            |context| {
                assert!(format!("{:?}", context.node_writer()).contains("__razor_template_writer"));
            },
        );
    });

    assert!(context.pop_node_writer().is_none());
    assert!(format!("{:?}", context.node_writer()).contains("RuntimeNodeWriter"));
}

#[test]
fn test_tree_diagnostics_come_first() {
    let target = CodeTarget::runtime("default");
    let document = index_document();
    let mut context =
        CodeRenderingContext::new(&target, &document, CodeGenerationOptions::runtime());

    let mut root = IntermediateNode::new(razor_ir::NodeKind::Document(razor_ir::DocumentNode::default()));
    root.add_diagnostic(razor_diagnostic::malformed_directive(None, "page"));
    context.add_diagnostic(razor_diagnostic::unsupported_extension("default", "Section"));
    context.writer_mut().write("x");

    let output = context.into_document(&root);
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::RZ1035, ErrorCode::RZ2000]);
    assert_eq!(output.generated_code, "x");
    assert!(output.has_errors());
}
