//! Result type for the driver.
//!
//! Carries everything a host needs to present the result without reaching
//! into the tree or the rendering context.

use razor_codegen::CSharpDocument;
use razor_diagnostic::Diagnostic;

/// Result of compiling one document.
#[derive(Clone, Debug)]
pub struct CompileOutput {
    /// Whether the document compiled without error diagnostics.
    pub success: bool,
    /// Kind the document was classified as.
    pub document_kind: String,
    /// Path diagnostics are reported against (if known).
    pub file_path: Option<String>,
    /// Generated code, line pragmas, source mappings and diagnostics.
    pub csharp: CSharpDocument,
}

impl CompileOutput {
    pub fn generated_code(&self) -> &str {
        &self.csharp.generated_code
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.csharp.diagnostics
    }
}
