use super::*;
use crate::printer::format_tree;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_nests_containers() {
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder
        .add(IntermediateNode::html_content("<p>", None))
        .push(IntermediateNode::new(NodeKind::CSharpExpression))
        .add(IntermediateNode::token(TokenKind::CSharp, "DateTime.Now"))
        .pop()
        .add(IntermediateNode::html_content("</p>", None));
    let root = builder.build().unwrap();

    assert_eq!(
        format_tree(&root),
        "\
Document -
    HtmlContent
        Token - Html - <p>
    CSharpExpression
        Token - CSharp - DateTime.Now
    HtmlContent
        Token - Html - </p>
"
    );
}

#[test]
fn test_build_closes_open_containers() {
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder
        .push(IntermediateNode::new(NodeKind::CSharpCode))
        .add(IntermediateNode::token(TokenKind::CSharp, "var x = 1;"));
    let root = builder.build().unwrap();

    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].token_content(), "var x = 1;");
}

#[test]
fn test_builder_reports_first_structural_error() {
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    let token = IntermediateNode::token(TokenKind::Html, "x");
    let token_id = token.id();
    builder
        .push(token)
        .add(IntermediateNode::html_content("nope", None))
        .add(IntermediateNode::html_content("ignored", None));

    assert_eq!(
        builder.build().unwrap_err(),
        ReferenceError::ReadOnlyChildren { node: token_id }
    );
}

#[test]
fn test_pop_on_root_is_noop() {
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder.pop().pop();
    assert!(builder.current().and_then(IntermediateNode::as_document).is_some());
}

#[test]
fn test_leaf_constructors_share_span() {
    let span = SourceSpan::new(3, 0, 3, 4);
    let node = IntermediateNode::csharp_expression("item", Some(span.clone()));
    assert_eq!(node.source(), Some(&span));
    assert_eq!(node.children()[0].source(), Some(&span));
    assert!(node.children()[0].as_token().unwrap().is_csharp());
}
