//! The compile pipeline: stamp options → passes → code target → render.

use std::fmt;

use razor_codegen::{render_document, CodeTarget, TargetExtension};
use razor_ir::{CodeDocument, IntermediateNode};
use razor_passes::{
    DocumentClassifierOptions, IntermediateNodePass, PassPipeline, DEFAULT_DOCUMENT_KIND,
};

use crate::{CompileError, CompileOptions, CompileOutput};

/// Makes a fresh extension for each target the engine builds.
type ExtensionFactory = Box<dyn Fn() -> Box<dyn TargetExtension>>;

/// Passes and target extensions, configured once and reused for every
/// document.
pub struct Engine {
    pipeline: PassPipeline,
    extensions: Vec<ExtensionFactory>,
}

impl Engine {
    /// Start an engine with every built-in pass and the default extensions.
    pub fn builder() -> EngineBuilder {
        EngineBuilder {
            classifier: DocumentClassifierOptions::default(),
            passes: Vec::new(),
            extensions: Vec::new(),
        }
    }

    pub fn pipeline(&self) -> &PassPipeline {
        &self.pipeline
    }

    /// Code target for a classified document: the default extensions for
    /// the mode, then every registered extension in registration order.
    pub fn code_target(&self, document_kind: &str, design_time: bool) -> CodeTarget {
        let mut builder = CodeTarget::builder(document_kind, design_time).add_default_extensions();
        for make in &self.extensions {
            builder = builder.add_boxed(make());
        }
        builder.build()
    }

    /// Run the back-end over `root`.
    ///
    /// `root` is rewritten in place, so a host can inspect the lowered tree
    /// afterwards. Processing an already processed tree again is a no-op
    /// for every built-in pass and yields the same output.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(design_time = options.is_design_time(), file = document.source.file_path())
    )]
    pub fn process(
        &self,
        document: &CodeDocument,
        root: &mut IntermediateNode,
        options: &CompileOptions,
    ) -> Result<CompileOutput, CompileError> {
        if root.as_document().is_none() {
            return Err(CompileError::NotADocument { found: root.name() });
        }
        if let Some(document_node) = root.as_document_mut() {
            document_node.options = options.generation.clone();
        }

        self.pipeline.run(document, root)?;

        let document_kind = root
            .as_document()
            .and_then(|node| node.document_kind.clone())
            .unwrap_or_else(|| DEFAULT_DOCUMENT_KIND.to_string());
        let target = self.code_target(&document_kind, options.is_design_time());
        let csharp = render_document(&target, document, root)?;

        let success = !csharp.has_errors();
        tracing::debug!(
            document_kind = %document_kind,
            success,
            diagnostics = csharp.diagnostics.len(),
            "compiled document"
        );
        Ok(CompileOutput {
            success,
            document_kind,
            file_path: document
                .source
                .file_path()
                .map(str::to_string)
                .or_else(|| options.file_path.clone()),
            csharp,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::builder().build()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("pipeline", &self.pipeline)
            .field("extensions", &self.extensions.len())
            .finish()
    }
}

/// Builder for [`Engine`].
pub struct EngineBuilder {
    classifier: DocumentClassifierOptions,
    passes: Vec<Box<dyn IntermediateNodePass>>,
    extensions: Vec<ExtensionFactory>,
}

impl EngineBuilder {
    /// Shape of the namespace, class and method the classifier creates.
    #[must_use]
    pub fn with_classifier(mut self, classifier: DocumentClassifierOptions) -> Self {
        self.classifier = classifier;
        self
    }

    /// Run `pass` alongside the built-in passes, placed by its phase and
    /// order.
    #[must_use]
    pub fn add_pass(mut self, pass: impl IntermediateNodePass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Register a target extension for every document. An extension for a
    /// capability the defaults already cover replaces the default.
    #[must_use]
    pub fn add_target_extension<T>(mut self, extension: T) -> Self
    where
        T: TargetExtension + Clone + 'static,
    {
        self.extensions.push(Box::new(move || {
            Box::new(extension.clone()) as Box<dyn TargetExtension>
        }));
        self
    }

    pub fn build(self) -> Engine {
        let mut pipeline = PassPipeline::with_default_passes(self.classifier);
        for pass in self.passes {
            pipeline.add_boxed(pass);
        }
        Engine {
            pipeline,
            extensions: self.extensions,
        }
    }
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("classifier", &self.classifier)
            .field("passes", &self.passes.len())
            .field("extensions", &self.extensions.len())
            .finish()
    }
}
