use std::sync::Arc;

use super::*;
use pretty_assertions::assert_eq;
use razor_diagnostic::{Diagnostic, ErrorCode, SourceSpan};
use razor_ir::descriptors::{DirectiveDescriptor, DirectiveTokenDescriptor, DirectiveTokenKind};
use razor_ir::extensions::SectionNode;
use razor_ir::{
    Checksum, ChecksumAlgorithm, CodeGenerationOptions, IrBuilder, NodeKind, SourceDocument,
};

fn document() -> CodeDocument {
    CodeDocument::new(SourceDocument::new("<p>@Model</p>").with_file_path("/Index.cshtml"))
}

fn namespace(content: &str) -> IntermediateNode {
    IntermediateNode::new(NodeKind::NamespaceDeclaration(NamespaceDeclarationNode {
        content: content.to_string(),
    }))
}

fn class() -> IntermediateNode {
    IntermediateNode::new(NodeKind::ClassDeclaration(ClassDeclarationNode {
        modifiers: vec!["public".to_string()],
        class_name: "Views_Index".to_string(),
        base_type: Some("Page".to_string()),
        interfaces: Vec::new(),
    }))
}

fn execute_method() -> IntermediateNode {
    IntermediateNode::new(NodeKind::MethodDeclaration(MethodDeclarationNode {
        modifiers: vec!["public".to_string(), "async".to_string(), "override".to_string()],
        return_type: Some("global::System.Threading.Tasks.Task".to_string()),
        method_name: "ExecuteAsync".to_string(),
        parameters: Vec::new(),
    }))
}

fn checksum_node(bytes: Vec<u8>) -> IntermediateNode {
    IntermediateNode::new(NodeKind::Checksum(ChecksumNode {
        file_path: Some("/Index.cshtml".to_string()),
        checksum: Checksum::new(ChecksumAlgorithm::Sha1, bytes),
    }))
}

fn render(options: CodeGenerationOptions, content: Vec<IntermediateNode>) -> CSharpDocument {
    let target = CodeTarget::for_options("default", &options);
    let mut builder = IrBuilder::document(options);
    for node in content {
        builder.add(node);
    }
    let root = builder.build().unwrap();
    render_document(&target, &document(), &root).unwrap()
}

#[test]
fn test_runtime_document_shape() {
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder
        .push(namespace("AspNetCore"))
        .push(class())
        .push(execute_method())
        .add(IntermediateNode::html_content("<p>", None))
        .add(IntermediateNode::csharp_expression("Model", None));
    let root = builder.build().unwrap();
    let target = CodeTarget::runtime("default");

    let output = render_document(&target, &document(), &root).unwrap();

    assert_eq!(
        output.generated_code,
        "namespace AspNetCore\n\
         {\n    \
             #line hidden\n    \
             public class Views_Index : Page\n    \
             {\n        \
                 #pragma warning disable 1998\n        \
                 public async override global::System.Threading.Tasks.Task ExecuteAsync()\n        \
                 {\n            \
                     WriteLiteral(\"<p>\");\n            \
                     Write(Model);\n        \
                 }\n        \
                 #pragma warning restore 1998\n    \
             }\n\
         }\n"
    );
    assert!(output.diagnostics.is_empty());
    assert!(output.line_pragmas.is_empty());
}

#[test]
fn test_empty_namespace_renders_members_at_top_level() {
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder.push(namespace("")).push(class());
    let root = builder.build().unwrap();

    let output = render_document(&CodeTarget::runtime("default"), &document(), &root).unwrap();

    assert_eq!(
        output.generated_code,
        "public class Views_Index : Page\n{\n}\n"
    );
}

#[test]
fn test_checksum_pragma() {
    let output = render(CodeGenerationOptions::runtime(), vec![checksum_node(vec![0xab, 0x01])]);

    assert_eq!(
        output.generated_code,
        format!(
            "#pragma checksum \"/Index.cshtml\" \"{}\" \"ab01\"\n",
            ChecksumAlgorithm::Sha1.guid()
        )
    );
}

#[test]
fn test_checksum_skipped_when_suppressed_or_empty() {
    let suppressed = render(
        CodeGenerationOptions::runtime().with_suppress_checksum(true),
        vec![checksum_node(vec![0xab])],
    );
    let empty = render(CodeGenerationOptions::runtime(), vec![checksum_node(Vec::new())]);

    assert_eq!(suppressed.generated_code, "");
    assert_eq!(empty.generated_code, "");
}

#[test]
fn test_members() {
    let field = IntermediateNode::new(NodeKind::FieldDeclaration(FieldDeclarationNode {
        modifiers: vec!["private".to_string()],
        field_type: "int".to_string(),
        field_name: "_count".to_string(),
    }));
    let property = IntermediateNode::new(NodeKind::PropertyDeclaration(PropertyDeclarationNode {
        modifiers: vec!["public".to_string()],
        property_type: "string".to_string(),
        property_name: "Title".to_string(),
    }));

    let output = render(CodeGenerationOptions::runtime(), vec![field, property]);

    assert_eq!(
        output.generated_code,
        "private int _count;\npublic string Title { get; set; }\n"
    );
}

#[test]
fn test_directive_renders_body_not_tokens() {
    let descriptor = Arc::new(DirectiveDescriptor::code_block("functions"));
    let mut directive = IntermediateNode::directive(&descriptor);
    directive
        .try_add_child(IntermediateNode::directive_token(
            DirectiveTokenDescriptor::new(DirectiveTokenKind::Member),
            "Helpers",
            None,
        ))
        .unwrap();
    directive
        .try_add_child(IntermediateNode::csharp_code("int x;", None))
        .unwrap();

    let output = render(CodeGenerationOptions::runtime(), vec![directive]);

    assert_eq!(output.generated_code, "int x;\n");
}

#[test]
fn test_design_time_records_pragmas_and_mappings() {
    let span = SourceSpan::new(4, 0, 4, 5);
    let output = render(
        CodeGenerationOptions::design_time(),
        vec![
            IntermediateNode::html_content("<p>", None),
            IntermediateNode::csharp_expression("Model", Some(span.clone())),
        ],
    );

    assert_eq!(
        output.generated_code,
        "#line 1 \"/Index.cshtml\"\n__o = Model;\n\n#line default\n#line hidden\n"
    );
    assert_eq!(output.line_pragmas.len(), 1);
    assert_eq!(output.line_pragmas[0].start_line_index, 1);
    assert_eq!(output.line_pragmas[0].line_count, 1);
    assert_eq!(output.source_mappings.len(), 1);
    assert_eq!(output.source_mappings[0].original_span, span);
}

#[test]
fn test_tree_diagnostics_precede_render_diagnostics() {
    let mut html = IntermediateNode::html_content("<p>", None);
    html.add_diagnostic(Diagnostic::error(ErrorCode::RZ1035).with_message("unterminated"));
    let section = IntermediateNode::extension_node(SectionNode::new("Scripts"));
    let mut builder = IrBuilder::document(CodeGenerationOptions::runtime());
    builder.add(section).add(html);
    let root = builder.build().unwrap();
    let target = CodeTarget::builder("component", false).build();

    let output = render_document(&target, &document(), &root).unwrap();

    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::RZ1035, ErrorCode::RZ2000]);
    assert!(output.has_errors());
    assert_eq!(output.generated_code, "WriteLiteral(\"<p>\");\n");
}

#[test]
fn test_rendering_requires_document_root() {
    let root = IntermediateNode::html_content("<p>", None);

    let err = render_document(&CodeTarget::runtime("default"), &document(), &root).unwrap_err();

    assert_eq!(err, RenderError::NotADocument { found: "HtmlContent" });
}
