use super::*;
use razor_ir::annotations::{find_primary_class, find_primary_method, find_primary_namespace};
use razor_ir::printer::format_tree;
use razor_ir::{Checksum, ChecksumAlgorithm, CodeGenerationOptions, IrBuilder, SourceDocument};
use pretty_assertions::assert_eq;

fn unclassified(options: CodeGenerationOptions) -> IntermediateNode {
    let mut builder = IrBuilder::document(options);
    builder
        .add(IntermediateNode::using_directive("System", None))
        .add(IntermediateNode::html_content("<p>", None))
        .add(IntermediateNode::csharp_expression("Model", None))
        .add(IntermediateNode::using_directive("System.Linq", None));
    builder.build().unwrap()
}

fn source_with_checksum() -> CodeDocument {
    let checksum = Checksum::from_hex(ChecksumAlgorithm::Sha1, "0a1b").unwrap();
    CodeDocument::new(
        SourceDocument::new("<p>@Model")
            .with_file_path("Views/Home.cshtml")
            .with_checksum(checksum),
    )
}

#[test]
fn test_classifier_builds_shell() {
    let mut root = unclassified(CodeGenerationOptions::runtime());
    let pass = DocumentClassifierPass::default();
    pass.execute(&CodeDocument::new(SourceDocument::new("")), &mut root)
        .unwrap();

    assert_eq!(
        format_tree(&root),
        "\
Document - default
    NamespaceDeclaration - Razor
        UsingDirective - System
        UsingDirective - System.Linq
        ClassDeclaration - public - Template -  -
            MethodDeclaration - public async override - global::System.Threading.Tasks.Task - ExecuteAsync
                HtmlContent
                    Token - Html - <p>
                CSharpExpression
                    Token - CSharp - Model
"
    );
    assert!(find_primary_namespace(&root).is_some());
    assert!(find_primary_class(&root).is_some());
    assert!(find_primary_method(&root).is_some());
}

#[test]
fn test_classifier_inserts_checksum_first() {
    let mut root = unclassified(CodeGenerationOptions::runtime());
    DocumentClassifierPass::default()
        .execute(&source_with_checksum(), &mut root)
        .unwrap();

    let first = &root.children()[0];
    assert_eq!(first.name(), "Checksum");
    assert_eq!(
        format_tree(first),
        "Checksum - Views/Home.cshtml - SHA1 - 0a1b\n"
    );
}

#[test]
fn test_classifier_respects_suppressed_checksum() {
    let mut root = unclassified(CodeGenerationOptions::runtime().with_suppress_checksum(true));
    DocumentClassifierPass::default()
        .execute(&source_with_checksum(), &mut root)
        .unwrap();

    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].name(), "NamespaceDeclaration");
}

#[test]
fn test_classified_document_is_untouched() {
    let mut root = unclassified(CodeGenerationOptions::runtime());
    let pass = DocumentClassifierPass::default();
    let document = CodeDocument::new(SourceDocument::new(""));
    pass.execute(&document, &mut root).unwrap();
    let before = format_tree(&root);

    pass.execute(&document, &mut root).unwrap();
    assert_eq!(format_tree(&root), before);
}

#[test]
fn test_options_shape_the_class() {
    let options = DocumentClassifierOptions::default()
        .with_namespace("AspNetCore")
        .with_class_name("Views_Home_Index")
        .with_base_type("global::Microsoft.AspNetCore.Mvc.Razor.RazorPage<dynamic>");
    let mut root = unclassified(CodeGenerationOptions::runtime());
    DocumentClassifierPass::new(options)
        .execute(&CodeDocument::new(SourceDocument::new("")), &mut root)
        .unwrap();

    let class = find_primary_class(&root).and_then(IntermediateNode::as_class).unwrap();
    assert_eq!(class.class_name, "Views_Home_Index");
    assert_eq!(
        class.base_type.as_deref(),
        Some("global::Microsoft.AspNetCore.Mvc.Razor.RazorPage<dynamic>")
    );
}
