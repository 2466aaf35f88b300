use std::sync::Arc;

use super::*;
use razor_diagnostic::{malformed_directive, ErrorCode, SourceSpan};
use razor_ir::descriptors::DirectiveDescriptor;
use razor_ir::printer::format_tree;
use razor_ir::{CodeGenerationOptions, IrBuilder, SourceDocument};
use pretty_assertions::assert_eq;

fn source() -> CodeDocument {
    CodeDocument::new(SourceDocument::new(""))
}

#[test]
fn test_removes_directives_and_lifts_diagnostics() {
    let model = Arc::new(DirectiveDescriptor::single_line("model"));
    let span = SourceSpan::new(0, 0, 0, 6);
    let mut malformed = IntermediateNode::malformed_directive(&model);
    malformed.add_diagnostic(malformed_directive(Some(span.clone()), "model"));

    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder
        .add(IntermediateNode::directive(&model))
        .add(IntermediateNode::html_content("<p>", None))
        .add(malformed);
    let mut root = builder.build().unwrap();

    DirectiveRemovalPass.execute(&source(), &mut root).unwrap();

    assert_eq!(
        format_tree(&root),
        "\
Document -
    HtmlContent
        Token - Html - <p>
"
    );
    assert_eq!(root.diagnostics().len(), 1);
    assert_eq!(root.diagnostics()[0].code, ErrorCode::RZ1035);
    assert_eq!(root.diagnostics()[0].span.as_ref(), Some(&span));
}

#[test]
fn test_nested_directives_removed_with_ancestor() {
    let outer = Arc::new(DirectiveDescriptor::razor_block("outer"));
    let inner = Arc::new(DirectiveDescriptor::single_line("inner"));
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder
        .push(IntermediateNode::directive(&outer))
        .add(IntermediateNode::directive(&inner))
        .pop();
    let mut root = builder.build().unwrap();

    DirectiveRemovalPass.execute(&source(), &mut root).unwrap();
    assert!(root.children().is_empty());
}

#[test]
fn test_no_directives_is_noop() {
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder.add(IntermediateNode::csharp_code("var x = 1;", None));
    let mut root = builder.build().unwrap();
    let before = format_tree(&root);

    DirectiveRemovalPass.execute(&source(), &mut root).unwrap();
    assert_eq!(format_tree(&root), before);
}
