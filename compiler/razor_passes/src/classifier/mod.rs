//! Document classification.
//!
//! Gives an unclassified document its kind and the namespace / class /
//! method shell that every later pass and the renderer rely on. The shell
//! nodes carry the primary markers, so nothing downstream has to guess
//! which class is "the" class.

use razor_ir::annotations::{PRIMARY_CLASS, PRIMARY_METHOD, PRIMARY_NAMESPACE};
use razor_ir::{
    ChecksumNode, ClassDeclarationNode, CodeDocument, IntermediateNode, MethodDeclarationNode,
    NamespaceDeclarationNode, NodeKind, ReferenceError,
};

use crate::{IntermediateNodePass, PassPhase};

/// Kind assigned by [`DocumentClassifierPass`].
pub const DEFAULT_DOCUMENT_KIND: &str = "default";

/// Shape of the generated type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentClassifierOptions {
    pub namespace: String,
    pub class_name: String,
    pub class_modifiers: Vec<String>,
    pub base_type: Option<String>,
    pub method_name: String,
    pub method_modifiers: Vec<String>,
    pub return_type: String,
}

impl Default for DocumentClassifierOptions {
    fn default() -> Self {
        DocumentClassifierOptions {
            namespace: "Razor".to_string(),
            class_name: "Template".to_string(),
            class_modifiers: vec!["public".to_string()],
            base_type: None,
            method_name: "ExecuteAsync".to_string(),
            method_modifiers: vec![
                "public".to_string(),
                "async".to_string(),
                "override".to_string(),
            ],
            return_type: "global::System.Threading.Tasks.Task".to_string(),
        }
    }
}

impl DocumentClassifierOptions {
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    #[must_use]
    pub fn with_method_name(mut self, method_name: impl Into<String>) -> Self {
        self.method_name = method_name.into();
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct DocumentClassifierPass {
    options: DocumentClassifierOptions,
}

impl DocumentClassifierPass {
    pub fn new(options: DocumentClassifierOptions) -> Self {
        DocumentClassifierPass { options }
    }

    pub fn options(&self) -> &DocumentClassifierOptions {
        &self.options
    }

    fn namespace_node(&self) -> IntermediateNode {
        IntermediateNode::new(NodeKind::NamespaceDeclaration(NamespaceDeclarationNode {
            content: self.options.namespace.clone(),
        }))
        .with_marker(PRIMARY_NAMESPACE)
    }

    fn class_node(&self) -> IntermediateNode {
        IntermediateNode::new(NodeKind::ClassDeclaration(ClassDeclarationNode {
            modifiers: self.options.class_modifiers.clone(),
            class_name: self.options.class_name.clone(),
            base_type: self.options.base_type.clone(),
            interfaces: Vec::new(),
        }))
        .with_marker(PRIMARY_CLASS)
    }

    fn method_node(&self) -> IntermediateNode {
        IntermediateNode::new(NodeKind::MethodDeclaration(MethodDeclarationNode {
            modifiers: self.options.method_modifiers.clone(),
            return_type: Some(self.options.return_type.clone()),
            method_name: self.options.method_name.clone(),
            parameters: Vec::new(),
        }))
        .with_marker(PRIMARY_METHOD)
    }
}

impl IntermediateNodePass for DocumentClassifierPass {
    fn name(&self) -> &'static str {
        "DocumentClassifierPass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::DocumentClassifier
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let Some(node) = root.as_document() else {
            return Ok(());
        };
        if node.document_kind.is_some() {
            tracing::trace!("document already classified");
            return Ok(());
        }
        let suppress_checksum = node.options.suppress_checksum;

        let mut checksum = None;
        let mut namespace = self.namespace_node();
        let mut class = self.class_node();
        let mut method = self.method_node();

        for child in root.take_children() {
            match child.kind() {
                NodeKind::Checksum(_) if checksum.is_none() => checksum = Some(child),
                NodeKind::UsingDirective(_) => namespace.try_add_child(child)?,
                _ => method.try_add_child(child)?,
            }
        }

        if checksum.is_none() && !suppress_checksum {
            checksum = document.source.checksum().map(|value| {
                IntermediateNode::new(NodeKind::Checksum(ChecksumNode {
                    file_path: document.source.file_path().map(str::to_string),
                    checksum: value.clone(),
                }))
            });
        }

        class.try_add_child(method)?;
        namespace.try_add_child(class)?;

        let children = root.children_mut()?;
        children.extend(checksum);
        children.push(namespace);

        if let Some(node) = root.as_document_mut() {
            node.document_kind = Some(DEFAULT_DOCUMENT_KIND.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
