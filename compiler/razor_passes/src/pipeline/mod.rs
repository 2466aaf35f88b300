//! Ordered pass execution.

use std::fmt;

use razor_ir::{CodeDocument, IntermediateNode, ReferenceError};

use crate::{
    DefaultTagHelperOptimizationPass, DesignTimeDirectivePass, DirectiveRemovalPass,
    DocumentClassifierOptions, DocumentClassifierPass, EliminateMethodBodyPass,
    FunctionsDirectivePass, InheritsDirectivePass, IntermediateNodePass, MetadataAttributePass,
    PreallocatedTagHelperAttributeOptimizationPass, SectionDirectivePass,
};

/// The set of passes applied to every document.
///
/// Registration order only breaks ties: [`PassPipeline::run`] executes by
/// phase, then by ascending order, then by registration.
#[derive(Default)]
pub struct PassPipeline {
    passes: Vec<Box<dyn IntermediateNodePass>>,
}

impl PassPipeline {
    pub fn new() -> Self {
        PassPipeline { passes: Vec::new() }
    }

    /// A pipeline holding every built-in pass.
    pub fn with_default_passes(classifier: DocumentClassifierOptions) -> Self {
        let mut pipeline = PassPipeline::new();
        pipeline
            .add(DocumentClassifierPass::new(classifier))
            .add(DesignTimeDirectivePass)
            .add(InheritsDirectivePass)
            .add(FunctionsDirectivePass)
            .add(SectionDirectivePass)
            .add(EliminateMethodBodyPass)
            .add(MetadataAttributePass)
            .add(DirectiveRemovalPass)
            .add(DefaultTagHelperOptimizationPass)
            .add(PreallocatedTagHelperAttributeOptimizationPass);
        pipeline
    }

    pub fn add(&mut self, pass: impl IntermediateNodePass + 'static) -> &mut Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn add_boxed(&mut self, pass: Box<dyn IntermediateNodePass>) -> &mut Self {
        self.passes.push(pass);
        self
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Passes in execution order.
    pub fn ordered(&self) -> Vec<&dyn IntermediateNodePass> {
        let mut ordered: Vec<&dyn IntermediateNodePass> =
            self.passes.iter().map(|pass| &**pass).collect();
        // Stable: equal keys keep registration order.
        ordered.sort_by_key(|pass| (pass.phase(), pass.order()));
        ordered
    }

    /// Run every pass once over `root`.
    #[tracing::instrument(level = "debug", skip_all, fields(passes = self.passes.len()))]
    pub fn run(
        &self,
        document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        for pass in self.ordered() {
            tracing::trace!(
                pass = pass.name(),
                phase = %pass.phase(),
                order = pass.order(),
                "running pass"
            );
            pass.execute(document, root)?;
        }
        tracing::debug!("pass pipeline complete");
        Ok(())
    }
}

impl fmt::Debug for PassPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.passes.iter().map(|pass| pass.name()))
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
