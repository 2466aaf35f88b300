//! Built-in extension node payloads.
//!
//! Each group shares one capability: the renderer for all default tag
//! helper nodes is a single target extension, as is the renderer for all
//! preallocated attribute nodes, and so on.

mod design_time;
mod metadata;
mod preallocated;
mod section;
mod tag_helper;
mod template;

pub use design_time::DesignTimeDirective;
pub use metadata::{CompiledItemAttribute, SourceChecksumAttribute};
pub use preallocated::{
    PreallocatedTagHelperHtmlAttribute, PreallocatedTagHelperHtmlAttributeValue,
    PreallocatedTagHelperProperty, PreallocatedTagHelperPropertyValue,
};
pub use section::SectionNode;
pub use tag_helper::{
    DefaultTagHelperBody, DefaultTagHelperCreate, DefaultTagHelperExecute,
    DefaultTagHelperHtmlAttribute, DefaultTagHelperProperty, DefaultTagHelperRuntime,
};
pub use template::TemplateNode;

use crate::Capability;

/// Renders the default tag helper execution protocol.
pub const DEFAULT_TAG_HELPER: Capability = Capability::new("DefaultTagHelperTargetExtension");
/// Renders hoisted static tag helper attributes.
pub const PREALLOCATED_ATTRIBUTE: Capability =
    Capability::new("PreallocatedAttributeTargetExtension");
/// Renders assembly and class metadata attributes.
pub const METADATA_ATTRIBUTE: Capability = Capability::new("MetadataAttributeTargetExtension");
/// Renders `@section` registrations.
pub const SECTION: Capability = Capability::new("SectionTargetExtension");
/// Renders inline `@<p>...</p>` templates.
pub const TEMPLATE: Capability = Capability::new("TemplateTargetExtension");
/// Renders design-time directive token helpers.
pub const DESIGN_TIME_DIRECTIVE: Capability =
    Capability::new("DesignTimeDirectiveTargetExtension");

#[cfg(test)]
mod tests;
