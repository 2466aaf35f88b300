//! Razor Codegen - C# rendering for lowered Razor documents
//!
//! Turns a tree that has been through the pass pipeline into C# source:
//! - [`CodeWriter`]: text buffer with indentation, literal escaping and
//!   location tracking
//! - [`CodeBlockScope`] and [`LinePragmaScope`]: guards that close a block
//!   or a `#line` region on every exit path
//! - [`NodeWriter`]: runtime and design-time strategies for the basic
//!   content kinds
//! - [`CodeTarget`]: capability-keyed [`TargetExtension`]s for extension
//!   nodes
//! - [`render_document`]: the entry point, producing a [`CSharpDocument`]
//!   with line pragmas, source mappings and diagnostics
//!
//! # Modes
//!
//! Runtime output is the code the page executes. Design-time output is
//! for editor tooling: markup is dropped, every piece of user C# is
//! assigned or declared where the type checker can see it, and each mapped
//! piece is recorded as a [`SourceMapping`].

mod context;
mod document;
mod extensions;
mod node_writer;
mod output;
mod padding;
mod pragma;
mod scope;
mod target;
mod writer;

pub use context::{CodeRenderingContext, TagHelperRenderingContext};
pub use document::{render_document, DocumentWriter};
pub use extensions::{
    DefaultTagHelperTargetExtension, DesignTimeDirectiveTargetExtension,
    MetadataAttributeTargetExtension, PreallocatedAttributeTargetExtension,
    SectionTargetExtension, TemplateTargetExtension, SECTION_WRITER, TEMPLATE_TYPE,
    TEMPLATE_WRITER,
};
pub use node_writer::{DesignTimeNodeWriter, NodeWriter, RuntimeNodeWriter, DESIGN_TIME_VARIABLE};
pub use output::{CSharpDocument, LinePragma, RenderError, SourceMapping};
pub use padding::{build_offset_padding, calculate_padding};
pub use pragma::LinePragmaScope;
pub use scope::{CodeBlockScope, ScopeBuilder};
pub use target::{CodeTarget, CodeTargetBuilder, TargetExtension, TargetExtensionAny};
pub use writer::{whitespace, CodeWriter};
