//! Per-call configuration.

use razor_ir::CodeGenerationOptions;

/// Configuration for one compile call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Written onto the document node before any pass runs, so the passes
    /// and the renderer agree on the mode.
    pub generation: CodeGenerationOptions,
    /// Logical file path (used in diagnostics, not for IO) when the source
    /// document has none.
    pub file_path: Option<String>,
}

impl CompileOptions {
    pub fn runtime() -> Self {
        CompileOptions {
            generation: CodeGenerationOptions::runtime(),
            file_path: None,
        }
    }

    pub fn design_time() -> Self {
        CompileOptions {
            generation: CodeGenerationOptions::design_time(),
            file_path: None,
        }
    }

    #[must_use]
    pub fn with_generation(mut self, generation: CodeGenerationOptions) -> Self {
        self.generation = generation;
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn is_design_time(&self) -> bool {
        self.generation.design_time
    }
}
