//! Code targets: which renderers a document kind provides.
//!
//! Extension nodes name a [`Capability`] instead of a renderer. A
//! [`CodeTarget`] maps capabilities to [`TargetExtension`]s; rendering an
//! extension node looks its capability up here. A target without the
//! capability records an "unsupported extension" diagnostic for the node and
//! skips it, so the rest of the document still renders.
//!
//! Hosts add or replace renderers through [`CodeTargetBuilder`]:
//!
//! ```text
//! let target = CodeTarget::builder("mvc.1.0.view", false)
//!     .add_default_extensions()
//!     .add_extension(MySectionExtension)
//!     .build();
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use razor_diagnostic::unsupported_extension;
use razor_ir::{Capability, CodeGenerationOptions, ExtensionNode, IntermediateNode};
use rustc_hash::FxHashMap;

use crate::context::CodeRenderingContext;
use crate::extensions::{
    DefaultTagHelperTargetExtension, DesignTimeDirectiveTargetExtension,
    MetadataAttributeTargetExtension, PreallocatedAttributeTargetExtension,
    SectionTargetExtension, TemplateTargetExtension,
};
use crate::node_writer::{DesignTimeNodeWriter, NodeWriter, RuntimeNodeWriter};

/// Downcasting support for [`TargetExtension`].
///
/// Implemented automatically for every sized `'static` type.
pub trait TargetExtensionAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> TargetExtensionAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Renderer for the extension nodes of one capability.
pub trait TargetExtension: TargetExtensionAny + fmt::Debug {
    /// Capability this extension provides.
    fn capability(&self) -> Capability;

    /// Render `node`, whose payload is `ext`. Unknown payloads of the same
    /// capability are skipped.
    fn write_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        ext: &dyn ExtensionNode,
    );
}

/// Renderers for one document kind in one mode.
#[derive(Debug)]
pub struct CodeTarget {
    document_kind: String,
    design_time: bool,
    extensions: FxHashMap<Capability, Box<dyn TargetExtension>>,
}

impl CodeTarget {
    /// Start a target with no extensions.
    pub fn builder(document_kind: impl Into<String>, design_time: bool) -> CodeTargetBuilder {
        CodeTargetBuilder {
            document_kind: document_kind.into(),
            design_time,
            extensions: Vec::new(),
        }
    }

    /// Runtime target with the default extensions.
    pub fn runtime(document_kind: impl Into<String>) -> Self {
        Self::builder(document_kind, false)
            .add_default_extensions()
            .build()
    }

    /// Design-time target with the default extensions.
    pub fn design_time(document_kind: impl Into<String>) -> Self {
        Self::builder(document_kind, true)
            .add_default_extensions()
            .build()
    }

    /// Default target for the mode `options` selects.
    pub fn for_options(document_kind: impl Into<String>, options: &CodeGenerationOptions) -> Self {
        if options.design_time {
            Self::design_time(document_kind)
        } else {
            Self::runtime(document_kind)
        }
    }

    #[inline]
    pub fn document_kind(&self) -> &str {
        &self.document_kind
    }

    #[inline]
    pub fn is_design_time(&self) -> bool {
        self.design_time
    }

    /// Extension registered for `capability`.
    pub fn get_extension(&self, capability: Capability) -> Option<&dyn TargetExtension> {
        self.extensions.get(&capability).map(|extension| &**extension)
    }

    /// Check if an extension is registered for `capability`.
    pub fn has_extension(&self, capability: Capability) -> bool {
        self.extensions.contains_key(&capability)
    }

    /// Registered extension of concrete type `T`, if any.
    pub fn get_extension_as<T: TargetExtension + 'static>(&self) -> Option<&T> {
        self.extensions
            .values()
            .find_map(|extension| (**extension).as_any().downcast_ref::<T>())
    }

    /// Registered capabilities, sorted by name.
    pub fn capabilities(&self) -> Vec<Capability> {
        let mut capabilities: Vec<_> = self.extensions.keys().copied().collect();
        capabilities.sort_unstable();
        capabilities
    }

    /// Base node writer for this target's mode.
    pub fn create_node_writer(&self) -> Rc<dyn NodeWriter> {
        if self.design_time {
            Rc::new(DesignTimeNodeWriter)
        } else {
            Rc::new(RuntimeNodeWriter::new())
        }
    }

    /// Render an extension node through the extension for its capability.
    pub fn write_extension(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        ext: &dyn ExtensionNode,
    ) {
        let capability = ext.capability();
        match self.extensions.get(&capability) {
            Some(extension) => extension.write_node(context, node, ext),
            None => {
                tracing::debug!(
                    extension = ext.name(),
                    capability = capability.name(),
                    "no target extension, skipping node"
                );
                context.add_diagnostic(
                    unsupported_extension(&self.document_kind, ext.name())
                        .with_optional_span(node.source().cloned()),
                );
            }
        }
    }
}

/// Builder for [`CodeTarget`]. Registering a second extension for the same
/// capability replaces the first.
#[derive(Debug)]
pub struct CodeTargetBuilder {
    document_kind: String,
    design_time: bool,
    extensions: Vec<Box<dyn TargetExtension>>,
}

impl CodeTargetBuilder {
    /// Add the extensions every target of this mode ships with.
    ///
    /// Runtime targets render tag helpers, preallocated attributes, metadata
    /// attributes, sections and templates. Design-time targets render tag
    /// helpers, directive token helpers, sections and templates.
    #[must_use]
    pub fn add_default_extensions(self) -> Self {
        let builder = self
            .add_extension(DefaultTagHelperTargetExtension)
            .add_extension(SectionTargetExtension)
            .add_extension(TemplateTargetExtension);
        if builder.design_time {
            builder.add_extension(DesignTimeDirectiveTargetExtension)
        } else {
            builder
                .add_extension(PreallocatedAttributeTargetExtension)
                .add_extension(MetadataAttributeTargetExtension)
        }
    }

    #[must_use]
    pub fn add_extension(self, extension: impl TargetExtension + 'static) -> Self {
        self.add_boxed(Box::new(extension))
    }

    #[must_use]
    pub fn add_boxed(mut self, extension: Box<dyn TargetExtension>) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn build(self) -> CodeTarget {
        let mut extensions = FxHashMap::default();
        for extension in self.extensions {
            extensions.insert(extension.capability(), extension);
        }
        CodeTarget {
            document_kind: self.document_kind,
            design_time: self.design_time,
            extensions,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
