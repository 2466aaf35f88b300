//! Per-document code generation options.

/// Options carried by the document node and read by passes and renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeGenerationOptions {
    /// Indent with tabs instead of spaces.
    pub indent_with_tabs: bool,
    /// Width of one indent level, and of a tab when computing padding.
    pub indent_size: usize,
    /// Emit design-time code instead of runtime code.
    pub design_time: bool,
    /// Skip the `#pragma checksum` line.
    pub suppress_checksum: bool,
    /// Skip the compiled-item and source-checksum attributes.
    pub suppress_metadata_attributes: bool,
    /// Render the primary method's signature but not its body.
    pub suppress_primary_method_body: bool,
    /// Fixed tag helper scope id. Used to make output deterministic.
    pub suppress_unique_ids: Option<String>,
    /// Line terminator written by the code writer.
    pub new_line: String,
}

impl Default for CodeGenerationOptions {
    fn default() -> Self {
        Self::runtime()
    }
}

impl CodeGenerationOptions {
    pub fn runtime() -> Self {
        CodeGenerationOptions {
            indent_with_tabs: false,
            indent_size: 4,
            design_time: false,
            suppress_checksum: false,
            suppress_metadata_attributes: false,
            suppress_primary_method_body: false,
            suppress_unique_ids: None,
            new_line: "\n".to_string(),
        }
    }

    pub fn design_time() -> Self {
        CodeGenerationOptions {
            design_time: true,
            ..Self::runtime()
        }
    }

    #[must_use]
    pub fn with_indent_with_tabs(mut self, indent_with_tabs: bool) -> Self {
        self.indent_with_tabs = indent_with_tabs;
        self
    }

    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    #[must_use]
    pub fn with_suppress_checksum(mut self, suppress: bool) -> Self {
        self.suppress_checksum = suppress;
        self
    }

    #[must_use]
    pub fn with_suppress_metadata_attributes(mut self, suppress: bool) -> Self {
        self.suppress_metadata_attributes = suppress;
        self
    }

    #[must_use]
    pub fn with_suppress_primary_method_body(mut self, suppress: bool) -> Self {
        self.suppress_primary_method_body = suppress;
        self
    }

    #[must_use]
    pub fn with_suppress_unique_ids(mut self, id: impl Into<String>) -> Self {
        self.suppress_unique_ids = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_new_line(mut self, new_line: impl Into<String>) -> Self {
        self.new_line = new_line.into();
        self
    }
}
