//! Rendering results.

use razor_diagnostic::{Diagnostic, SourceSpan};

/// Generated C# for one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CSharpDocument {
    pub generated_code: String,
    /// Every `#line` region, in the order the regions were closed.
    pub line_pragmas: Vec<LinePragma>,
    /// Template-to-generated spans of mapped C#. Only recorded at design
    /// time.
    pub source_mappings: Vec<SourceMapping>,
    /// Node diagnostics in tree order, then rendering diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl CSharpDocument {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// A region of generated lines bound to a template location by `#line`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinePragma {
    /// Zero-based generated line of the first mapped line.
    pub start_line_index: usize,
    /// Number of generated lines in the region.
    pub line_count: usize,
    pub file_path: String,
    /// Template span the region maps back to.
    pub source_span: SourceSpan,
}

impl LinePragma {
    /// Zero-based generated line one past the region.
    pub fn end_line_index(&self) -> usize {
        self.start_line_index + self.line_count
    }
}

/// One mapped piece of C#: where it came from and where it went.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceMapping {
    pub original_span: SourceSpan,
    pub generated_span: SourceSpan,
}

/// A render call that broke its contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("cannot render a `{found}` node: rendering starts at a document node")]
    NotADocument { found: &'static str },
}
