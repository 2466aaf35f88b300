use std::fmt;

use crate::{ErrorCode, SourceSpan};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A document-level problem found while lowering or rendering.
///
/// Diagnostics are immutable once built and are collected, never thrown:
/// the stage that records one skips only the offending construct and keeps
/// walking its siblings.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// Where in the original template the problem is, if known.
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            span: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the source span.
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the source span when one is available.
    pub fn with_optional_span(mut self, span: Option<SourceSpan>) -> Self {
        self.span = span;
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

/// Renders as `file(line,col): error RZxxxx: message`, or without the
/// location prefix when the diagnostic has no span.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{span}: ")?;
        }
        write!(f, "{} {}: {}", self.severity, self.code, self.message)
    }
}

/// Create an "unsupported extension" diagnostic.
///
/// Recorded when a node needs a capability the active code target does not
/// provide. The node is skipped; rendering continues.
pub fn unsupported_extension(document_kind: &str, extension_name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::RZ2000).with_message(format!(
        "The document type '{document_kind}' does not support the extension '{extension_name}'."
    ))
}

/// Create a "duplicate directive" diagnostic.
pub fn duplicate_directive(span: Option<SourceSpan>, directive: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::RZ2001)
        .with_message(format!(
            "The '{directive}' directive may only occur once per document."
        ))
        .with_optional_span(span)
}

/// Create a "code blocks not supported in attributes" diagnostic.
pub fn code_blocks_not_supported_in_attributes(span: Option<SourceSpan>) -> Diagnostic {
    Diagnostic::error(ErrorCode::RZ2006)
        .with_message(
            "Code blocks (e.g. @{var variable = 23;}) must not appear in non-string tag helper \
             attribute values.",
        )
        .with_optional_span(span)
}

/// Create an "inline markup not supported in attributes" diagnostic.
pub fn inline_markup_not_supported_in_attributes(
    span: Option<SourceSpan>,
    type_name: &str,
) -> Diagnostic {
    Diagnostic::error(ErrorCode::RZ2007)
        .with_message(format!(
            "Inline markup blocks (e.g. @<p>content</p>) must not appear in non-string tag helper \
             attribute values. Expected a '{type_name}' attribute value, not a string."
        ))
        .with_optional_span(span)
}

/// Create an "invalid design-time directive token" diagnostic.
pub fn invalid_design_time_directive_token(span: Option<SourceSpan>, token_kind: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::RZ3000)
        .with_message(format!(
            "Directive tokens of kind '{token_kind}' cannot be expressed in design-time code."
        ))
        .with_optional_span(span)
}

/// Create a "malformed directive" diagnostic.
///
/// The parser produces these; the back-end only constructs one when a host
/// builds malformed-directive nodes by hand.
pub fn malformed_directive(span: Option<SourceSpan>, directive: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::RZ1035)
        .with_message(format!("The '{directive}' directive is malformed."))
        .with_optional_span(span)
}

#[cfg(test)]
mod tests;
