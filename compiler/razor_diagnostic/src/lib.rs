//! Diagnostics for the Razor code generation back-end.
//!
//! Every phase after parsing reports problems as values, never as control
//! flow:
//! - Error codes for searchability (`RZ2000`, ...)
//! - Clear messages (what went wrong)
//! - An optional source span (where it went wrong)
//!
//! # Error tiers
//!
//! Only recoverable, document-level problems become a [`Diagnostic`]. Broken
//! call contracts (stale node references, missing roots) are typed `Result`
//! errors owned by the crates that detect them.
//!
//! ```text
//! let diagnostic = unsupported_extension("mvc.1.0.view", "SectionTargetExtension");
//! context.add_diagnostic(diagnostic);
//! ```

mod bag;
mod diagnostic;
mod error_code;
mod span;

pub use bag::DiagnosticBag;
pub use diagnostic::{
    code_blocks_not_supported_in_attributes, duplicate_directive,
    inline_markup_not_supported_in_attributes, invalid_design_time_directive_token,
    malformed_directive, unsupported_extension, Diagnostic, Severity,
};
pub use error_code::ErrorCode;
pub use span::{SourceLocation, SourceSpan};
