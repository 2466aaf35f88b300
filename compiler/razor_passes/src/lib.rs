//! Razor Passes - ordered IR rewriting between lowering and rendering
//!
//! Every pass implements [`IntermediateNodePass`] and is run once per
//! document by a [`PassPipeline`], phase by phase:
//!
//! 1. **Document classifier**: [`DocumentClassifierPass`] builds the
//!    namespace / class / method shell and marks it.
//! 2. **Directive classifier**: `@inherits`, `@functions`, `@section`, and
//!    the design-time token collector.
//! 3. **Optimization**: metadata attributes, directive removal, default tag
//!    helper lowering, and literal attribute preallocation.
//!
//! Passes edit the tree through identity-based references only, so an edit
//! never lands on a stale position.

mod classifier;
mod design_time;
pub mod directives;
mod metadata;
mod method_body;
mod pass;
mod pipeline;
mod preallocated;
mod removal;
mod tag_helper;

#[cfg(test)]
mod fixtures;

pub use classifier::{DocumentClassifierOptions, DocumentClassifierPass, DEFAULT_DOCUMENT_KIND};
pub use design_time::DesignTimeDirectivePass;
pub use directives::{FunctionsDirectivePass, InheritsDirectivePass, SectionDirectivePass};
pub use metadata::MetadataAttributePass;
pub use method_body::EliminateMethodBodyPass;
pub use pass::{IntermediateNodePass, PassPhase, DEFAULT_FEATURE_ORDER, LATE_FEATURE_ORDER};
pub use pipeline::PassPipeline;
pub use preallocated::{
    PreallocatedTagHelperAttributeOptimizationPass, PREALLOCATED_ATTRIBUTE_PREFIX,
};
pub use removal::DirectiveRemovalPass;
pub use tag_helper::{tag_helper_field_name, DefaultTagHelperOptimizationPass};
