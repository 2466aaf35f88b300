//! Document rendering.
//!
//! [`DocumentWriter`] is the visitor that turns a lowered tree into C#.
//! Structural kinds (namespace, class, method, members) are written here
//! directly; content kinds go to the innermost [`NodeWriter`] and extension
//! nodes to the code target's extension for their capability.
//!
//! [`NodeWriter`]: crate::NodeWriter

use razor_ir::{
    AttributeValueNode, ChecksumNode, ClassDeclarationNode, CodeDocument, DirectiveNode,
    DirectiveTokenNode, DocumentNode, ExtensionNode, FieldDeclarationNode, HtmlAttributeNode,
    IntermediateNode, IntermediateToken, MethodDeclarationNode, NamespaceDeclarationNode,
    PropertyDeclarationNode, TagHelperNode, UsingDirectiveNode, Visitor,
};

use crate::context::CodeRenderingContext;
use crate::output::{CSharpDocument, RenderError};
use crate::scope::ScopeBuilder;
use crate::CodeTarget;

/// Render the tree under `root` to C#.
///
/// Rendering never stops at a bad node: problems become diagnostics on the
/// result. The only error is being handed something that is not a
/// document.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(document_kind = target.document_kind(), design_time = target.is_design_time())
)]
pub fn render_document(
    target: &CodeTarget,
    document: &CodeDocument,
    root: &IntermediateNode,
) -> Result<CSharpDocument, RenderError> {
    let Some(document_node) = root.as_document() else {
        return Err(RenderError::NotADocument { found: root.name() });
    };

    let mut context = CodeRenderingContext::new(target, document, document_node.options.clone());
    context.render_node(root);
    let output = context.into_document(root);

    tracing::debug!(
        bytes = output.generated_code.len(),
        line_pragmas = output.line_pragmas.len(),
        diagnostics = output.diagnostics.len(),
        "rendered document"
    );
    Ok(output)
}

/// Visitor writing each node through a rendering context.
pub struct DocumentWriter<'c, 'a> {
    context: &'c mut CodeRenderingContext<'a>,
}

impl<'c, 'a> DocumentWriter<'c, 'a> {
    pub fn new(context: &'c mut CodeRenderingContext<'a>) -> Self {
        DocumentWriter { context }
    }
}

impl<'ir> Visitor<'ir> for DocumentWriter<'_, '_> {
    fn visit_document(&mut self, node: &'ir IntermediateNode, _document: &'ir DocumentNode) {
        razor_ir::walk_children(self, node);
    }

    fn visit_checksum(&mut self, _node: &'ir IntermediateNode, checksum: &'ir ChecksumNode) {
        if self.context.options().suppress_checksum || checksum.checksum.bytes.is_empty() {
            return;
        }
        let Some(file_path) = checksum.file_path.as_deref().filter(|path| !path.is_empty()) else {
            return;
        };
        let pragma = format!(
            "checksum \"{file_path}\" \"{}\" \"{}\"",
            checksum.checksum.algorithm.guid(),
            checksum.checksum.to_hex()
        );
        self.context.writer_mut().write_pragma(&pragma);
    }

    fn visit_using_directive(
        &mut self,
        node: &'ir IntermediateNode,
        using: &'ir UsingDirectiveNode,
    ) {
        let writer = self.context.node_writer();
        writer.write_using_directive(self.context, node, using);
    }

    fn visit_namespace_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        namespace: &'ir NamespaceDeclarationNode,
    ) {
        if namespace.content.is_empty() {
            self.context.render_children(node);
            return;
        }
        let mut scope = self.context.build_namespace(&namespace.content);
        scope.writer_mut().write_line_hidden_directive();
        scope.render_children(node);
    }

    fn visit_class_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        class: &'ir ClassDeclarationNode,
    ) {
        let mut scope = self.context.build_class_declaration(
            &class.modifiers,
            &class.class_name,
            class.base_type.as_deref(),
            &class.interfaces,
        );
        scope.render_children(node);
    }

    fn visit_method_declaration(
        &mut self,
        node: &'ir IntermediateNode,
        method: &'ir MethodDeclarationNode,
    ) {
        self.context.writer_mut().write_pragma("warning disable 1998");
        {
            let mut scope = self.context.build_method_declaration(
                &method.modifiers,
                method.return_type.as_deref(),
                &method.method_name,
                &method.parameters,
            );
            scope.render_children(node);
        }
        self.context.writer_mut().write_pragma("warning restore 1998");
    }

    fn visit_field_declaration(
        &mut self,
        _node: &'ir IntermediateNode,
        field: &'ir FieldDeclarationNode,
    ) {
        self.context
            .writer_mut()
            .write_field(&field.modifiers, &field.field_type, &field.field_name);
    }

    fn visit_property_declaration(
        &mut self,
        _node: &'ir IntermediateNode,
        property: &'ir PropertyDeclarationNode,
    ) {
        self.context.writer_mut().write_auto_property_declaration(
            &property.modifiers,
            &property.property_type,
            &property.property_name,
        );
    }

    fn visit_html_content(&mut self, node: &'ir IntermediateNode) {
        let writer = self.context.node_writer();
        writer.write_html_content(self.context, node);
    }

    fn visit_html_attribute(
        &mut self,
        node: &'ir IntermediateNode,
        attribute: &'ir HtmlAttributeNode,
    ) {
        let writer = self.context.node_writer();
        writer.write_html_attribute(self.context, node, attribute);
    }

    fn visit_html_attribute_value(
        &mut self,
        node: &'ir IntermediateNode,
        value: &'ir AttributeValueNode,
    ) {
        let writer = self.context.node_writer();
        writer.write_html_attribute_value(self.context, node, value);
    }

    fn visit_csharp_expression(&mut self, node: &'ir IntermediateNode) {
        let writer = self.context.node_writer();
        writer.write_csharp_expression(self.context, node);
    }

    fn visit_csharp_code(&mut self, node: &'ir IntermediateNode) {
        let writer = self.context.node_writer();
        writer.write_csharp_code(self.context, node);
    }

    fn visit_csharp_expression_attribute_value(
        &mut self,
        node: &'ir IntermediateNode,
        value: &'ir AttributeValueNode,
    ) {
        let writer = self.context.node_writer();
        writer.write_csharp_expression_attribute_value(self.context, node, value);
    }

    fn visit_csharp_code_attribute_value(
        &mut self,
        node: &'ir IntermediateNode,
        value: &'ir AttributeValueNode,
    ) {
        let writer = self.context.node_writer();
        writer.write_csharp_code_attribute_value(self.context, node, value);
    }

    fn visit_directive(&mut self, node: &'ir IntermediateNode, _directive: &'ir DirectiveNode) {
        razor_ir::walk_children(self, node);
    }

    fn visit_malformed_directive(
        &mut self,
        node: &'ir IntermediateNode,
        _directive: &'ir DirectiveNode,
    ) {
        razor_ir::walk_children(self, node);
    }

    // Tokens are rendered by whatever consumes their directive.
    fn visit_directive_token(
        &mut self,
        _node: &'ir IntermediateNode,
        _token: &'ir DirectiveTokenNode,
    ) {
    }

    fn visit_tag_helper(&mut self, node: &'ir IntermediateNode, _tag_helper: &'ir TagHelperNode) {
        self.context
            .with_tag_helper_context(|context| context.render_children(node));
    }

    fn visit_token(&mut self, node: &'ir IntermediateNode, token: &'ir IntermediateToken) {
        if token.is_csharp() {
            self.context.write_mapped(&token.content, node.source());
        }
    }

    fn visit_extension(&mut self, node: &'ir IntermediateNode, ext: &'ir dyn ExtensionNode) {
        let target = self.context.target();
        target.write_extension(self.context, node, ext);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
