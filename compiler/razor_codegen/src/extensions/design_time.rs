//! Design-time directive token helpers.
//!
//! Directive tokens (`@inherits Base`, `@model Person`) are not code the
//! page runs, but the editor still wants completion and errors for them.
//! Each token is written into a throwaway lambda where it appears in a
//! position of the right syntactic kind, mapped back to its source span:
//!
//! ```text
//! #pragma warning disable 219
//! private void __RazorDirectiveTokenHelpers__() {
//! ((System.Action)(() => {
//! #line 1 "/Index.cshtml"
//! Person __typeHelper = default(Person);
//!
//! #line default
//! #line hidden
//! }))();
//! }
//! #pragma warning restore 219
//! ```

use razor_diagnostic::invalid_design_time_directive_token;
use razor_ir::descriptors::DirectiveTokenKind;
use razor_ir::extensions::{DesignTimeDirective, DESIGN_TIME_DIRECTIVE};
use razor_ir::{Capability, DirectiveTokenNode, ExtensionNode, IntermediateNode, NodeKind};

use crate::context::CodeRenderingContext;
use crate::node_writer::{write_padding, DESIGN_TIME_VARIABLE};
use crate::TargetExtension;

const HELPER_METHOD: &str = "__RazorDirectiveTokenHelpers__";
const TYPE_HELPER: &str = "__typeHelper";

#[derive(Clone, Copy, Debug, Default)]
pub struct DesignTimeDirectiveTargetExtension;

impl TargetExtension for DesignTimeDirectiveTargetExtension {
    fn capability(&self) -> Capability {
        DESIGN_TIME_DIRECTIVE
    }

    fn write_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _ext: &dyn ExtensionNode,
    ) {
        if !node.is_extension::<DesignTimeDirective>() || !context.is_design_time() {
            return;
        }

        context
            .writer_mut()
            .write_pragma("warning disable 219")
            .write("private void ")
            .write(HELPER_METHOD)
            .write_line("() {");
        for child in node.children() {
            if let NodeKind::DirectiveToken(token) = child.kind() {
                write_token_helper(context, child, token);
            }
        }
        context
            .writer_mut()
            .write_line("}")
            .write_pragma("warning restore 219")
            .write_pragma("warning disable 0414")
            .write("private static System.Object ")
            .write(DESIGN_TIME_VARIABLE)
            .write_line(" = null;")
            .write_pragma("warning restore 0414");
    }
}

fn write_token_helper(
    context: &mut CodeRenderingContext<'_>,
    node: &IntermediateNode,
    token: &DirectiveTokenNode,
) {
    let Some(span) = node.source() else {
        return;
    };
    if is_from_import(context, span.file_path.as_deref()) {
        return;
    }
    if token.descriptor.kind == DirectiveTokenKind::Attribute {
        context.add_diagnostic(invalid_design_time_directive_token(
            Some(span.clone()),
            &token.descriptor.kind.to_string(),
        ));
        return;
    }

    context.writer_mut().write_line("((System.Action)(() => {");
    {
        let mut pragma = context.build_line_pragma(span);
        if token.content.is_empty() {
            // Nothing to map; keep the lambda well formed.
            pragma
                .writer_mut()
                .write("global::System.Object ")
                .write(TYPE_HELPER)
                .write_line(" = \"\";");
        } else {
            write_token_line(&mut pragma, node, token);
        }
    }
    context.writer_mut().write_line("}))();");
}

/// One statement placing the token content where C# expects its kind.
fn write_token_line(
    context: &mut CodeRenderingContext<'_>,
    node: &IntermediateNode,
    token: &DirectiveTokenNode,
) {
    let content = token.content.as_str();
    let span = node.source();
    match token.descriptor.kind {
        DirectiveTokenKind::Type => {
            write_padding(context, 0, node);
            context.write_mapped(content, span);
            context
                .writer_mut()
                .write(" ")
                .write(TYPE_HELPER)
                .write(" = default(")
                .write(content)
                .write(");");
        }
        DirectiveTokenKind::Member => {
            let prefix = "global::System.Object ";
            write_padding(context, prefix.len(), node);
            context.writer_mut().write(prefix);
            context.write_mapped(content, span);
            context.writer_mut().write(" = null;");
        }
        DirectiveTokenKind::Namespace => {
            let prefix = format!("global::System.Object {TYPE_HELPER} = nameof(");
            write_padding(context, prefix.len(), node);
            context.writer_mut().write(&prefix);
            context.write_mapped(content, span);
            context.writer_mut().write(");");
        }
        DirectiveTokenKind::String => {
            let quoted = content.starts_with('"');
            let mut prefix = format!("global::System.Object {TYPE_HELPER} = ");
            if !quoted {
                prefix.push('"');
            }
            write_padding(context, prefix.len(), node);
            context.writer_mut().write(&prefix);
            context.write_mapped(content, span);
            if !quoted {
                context.writer_mut().write("\"");
            }
            context.writer_mut().write(";");
        }
        DirectiveTokenKind::Boolean => {
            let prefix = format!("global::System.Boolean {TYPE_HELPER} = ");
            write_padding(context, prefix.len(), node);
            context.writer_mut().write(&prefix);
            context.write_mapped(content, span);
            context.writer_mut().write(";");
        }
        // Reported by the caller.
        DirectiveTokenKind::Attribute => {}
    }
    context.writer_mut().new_line();
}

/// Check if a token span points into one of the document's imports. Import
/// tokens are type-checked with the import itself.
fn is_from_import(context: &CodeRenderingContext<'_>, file_path: Option<&str>) -> bool {
    let Some(file_path) = file_path else {
        return false;
    };
    context.code_document().imports.iter().any(|import| {
        import
            .file_path()
            .is_some_and(|path| path.eq_ignore_ascii_case(file_path))
    })
}
