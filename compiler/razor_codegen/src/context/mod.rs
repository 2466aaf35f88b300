//! Per-document rendering state.
//!
//! A [`CodeRenderingContext`] owns everything one render produces (the code
//! writer, line pragmas, source mappings and diagnostics) and the state that
//! changes while walking the tree:
//!
//! - a stack of [`NodeWriter`]s, so a construct can redirect how nested
//!   content is written (tag helper bodies, templates, buffered attributes)
//! - a stack of [`TagHelperRenderingContext`]s, one per open tag helper
//!   element, which enforces single evaluation of shared attribute values
//!   and one null-guard per indexer property

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use razor_diagnostic::{Diagnostic, DiagnosticBag, SourceSpan};
use razor_ir::{CodeDocument, CodeGenerationOptions, IntermediateNode, SourceDocument};
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};

use crate::document::DocumentWriter;
use crate::node_writer::NodeWriter;
use crate::output::{CSharpDocument, LinePragma, SourceMapping};
use crate::pragma::LinePragmaScope;
use crate::{CodeTarget, CodeWriter};

/// State of one document render.
pub struct CodeRenderingContext<'a> {
    writer: CodeWriter,
    options: CodeGenerationOptions,
    document: &'a CodeDocument,
    target: &'a CodeTarget,
    base_node_writer: Rc<dyn NodeWriter>,
    node_writers: Vec<Rc<dyn NodeWriter>>,
    tag_helpers: Vec<TagHelperRenderingContext>,
    diagnostics: DiagnosticBag,
    line_pragmas: Vec<LinePragma>,
    source_mappings: Vec<SourceMapping>,
    next_unique_id: u64,
}

impl<'a> CodeRenderingContext<'a> {
    pub fn new(
        target: &'a CodeTarget,
        document: &'a CodeDocument,
        options: CodeGenerationOptions,
    ) -> Self {
        CodeRenderingContext {
            writer: CodeWriter::new(&options),
            options,
            document,
            target,
            base_node_writer: target.create_node_writer(),
            node_writers: Vec::new(),
            tag_helpers: Vec::new(),
            diagnostics: DiagnosticBag::new(),
            line_pragmas: Vec::new(),
            source_mappings: Vec::new(),
            next_unique_id: 0,
        }
    }

    #[inline]
    pub fn writer(&self) -> &CodeWriter {
        &self.writer
    }

    #[inline]
    pub fn writer_mut(&mut self) -> &mut CodeWriter {
        &mut self.writer
    }

    #[inline]
    pub fn options(&self) -> &CodeGenerationOptions {
        &self.options
    }

    #[inline]
    pub fn is_design_time(&self) -> bool {
        self.options.design_time
    }

    #[inline]
    pub fn code_document(&self) -> &'a CodeDocument {
        self.document
    }

    #[inline]
    pub fn target(&self) -> &'a CodeTarget {
        self.target
    }

    // Rendering

    /// Render `node` with the current node writer and target.
    pub fn render_node(&mut self, node: &IntermediateNode) {
        node.accept(&mut DocumentWriter::new(self));
    }

    /// Render each child of `node` in order.
    pub fn render_children(&mut self, node: &IntermediateNode) {
        let mut writer = DocumentWriter::new(self);
        razor_ir::walk_children(&mut writer, node);
    }

    // Node writers

    /// The innermost node writer.
    pub fn node_writer(&self) -> Rc<dyn NodeWriter> {
        Rc::clone(self.node_writers.last().unwrap_or(&self.base_node_writer))
    }

    pub fn push_node_writer(&mut self, writer: Rc<dyn NodeWriter>) {
        self.node_writers.push(writer);
    }

    /// Pop the innermost pushed node writer. The target's own writer is
    /// never popped.
    pub fn pop_node_writer(&mut self) -> Option<Rc<dyn NodeWriter>> {
        self.node_writers.pop()
    }

    /// Run `render` with `writer` as the innermost node writer.
    pub fn with_node_writer(&mut self, writer: Rc<dyn NodeWriter>, render: impl FnOnce(&mut Self)) {
        self.push_node_writer(writer);
        render(self);
        self.pop_node_writer();
    }

    // Tag helpers

    /// Run `render` inside a fresh tag helper element scope.
    pub fn with_tag_helper_context(&mut self, render: impl FnOnce(&mut Self)) {
        self.tag_helpers.push(TagHelperRenderingContext::default());
        render(self);
        self.tag_helpers.pop();
    }

    /// State of the innermost tag helper element, opened on demand.
    pub fn tag_helper_context_mut(&mut self) -> &mut TagHelperRenderingContext {
        if self.tag_helpers.is_empty() {
            self.tag_helpers.push(TagHelperRenderingContext::default());
        }
        let last = self.tag_helpers.len() - 1;
        &mut self.tag_helpers[last]
    }

    /// Id of one tag helper call site. Fixed when the options suppress
    /// unique ids; otherwise derived from the document and a counter so
    /// output is reproducible.
    pub fn generate_unique_id(&mut self) -> String {
        if let Some(id) = &self.options.suppress_unique_ids {
            return id.clone();
        }
        self.next_unique_id += 1;
        let source = &self.document.source;
        let mut high = FxHasher::default();
        source.file_path().hash(&mut high);
        source.text().len().hash(&mut high);
        self.next_unique_id.hash(&mut high);
        let high = high.finish();
        let mut low = FxHasher::default();
        high.hash(&mut low);
        self.next_unique_id.hash(&mut low);
        format!("{high:016x}{:016x}", low.finish())
    }

    // Source documents

    /// Document a span belongs to: the import with a matching path, or the
    /// main source.
    pub fn source_for(&self, span: &SourceSpan) -> &'a SourceDocument {
        let document = self.document;
        span.file_path
            .as_deref()
            .and_then(|path| {
                document
                    .imports
                    .iter()
                    .find(|import| import.file_path() == Some(path))
            })
            .unwrap_or(&document.source)
    }

    /// Path written into `#line` for `span`.
    pub fn file_path_for(&self, span: &SourceSpan) -> String {
        span.file_path
            .as_deref()
            .or_else(|| self.document.source.file_path())
            .unwrap_or_default()
            .to_string()
    }

    // Line pragmas and mappings

    /// Open a `#line` region for `span`. Closed when the guard drops.
    pub fn build_line_pragma(&mut self, span: &SourceSpan) -> LinePragmaScope<'_, 'a> {
        LinePragmaScope::new(self, span)
    }

    /// Run `write` inside a `#line` region when there is a span, or directly
    /// otherwise.
    pub fn with_line_pragma(&mut self, span: Option<&SourceSpan>, write: impl FnOnce(&mut Self)) {
        match span {
            Some(span) => {
                let mut scope = self.build_line_pragma(span);
                write(&mut *scope);
            }
            None => write(self),
        }
    }

    pub fn add_line_pragma(&mut self, line_pragma: LinePragma) {
        self.line_pragmas.push(line_pragma);
    }

    pub fn line_pragmas(&self) -> &[LinePragma] {
        &self.line_pragmas
    }

    /// Write `content`, recording a source mapping at design time.
    pub fn write_mapped(&mut self, content: &str, span: Option<&SourceSpan>) {
        match span {
            Some(span) if self.options.design_time => {
                self.writer.ensure_indent();
                let start = self.writer.location();
                self.writer.write(content);
                self.source_mappings.push(SourceMapping {
                    original_span: span.clone(),
                    generated_span: SourceSpan::from_location(&start, content.chars().count()),
                });
            }
            _ => {
                self.writer.write(content);
            }
        }
    }

    pub fn source_mappings(&self) -> &[SourceMapping] {
        &self.source_mappings
    }

    // Diagnostics

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.add(diagnostic);
    }

    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    /// Finish the render. Diagnostics already on the tree come first.
    pub fn into_document(self, root: &IntermediateNode) -> CSharpDocument {
        let mut diagnostics = root.collect_diagnostics();
        diagnostics.extend(self.diagnostics.into_vec());
        CSharpDocument {
            generated_code: self.writer.output(),
            line_pragmas: self.line_pragmas,
            source_mappings: self.source_mappings,
            diagnostics,
        }
    }
}

impl AsMut<CodeWriter> for CodeRenderingContext<'_> {
    fn as_mut(&mut self) -> &mut CodeWriter {
        &mut self.writer
    }
}

/// Rendering state of one tag helper element.
#[derive(Clone, Debug, Default)]
pub struct TagHelperRenderingContext {
    /// Attribute name to the accessor holding its first computed value.
    rendered_bound_attributes: FxHashMap<String, String>,
    /// `(tag helper type, property)` pairs already null-checked.
    verified_property_dictionaries: FxHashSet<(String, String)>,
}

impl TagHelperRenderingContext {
    /// Accessor of an earlier assignment of `attribute_name` on this element.
    pub fn rendered_accessor(&self, attribute_name: &str) -> Option<&str> {
        self.rendered_bound_attributes
            .get(attribute_name)
            .map(String::as_str)
    }

    /// Remember where the value of `attribute_name` was first stored.
    /// Later assignments of the same attribute read from there.
    pub fn record_bound_attribute(&mut self, attribute_name: &str, accessor: &str) {
        self.rendered_bound_attributes
            .entry(attribute_name.to_string())
            .or_insert_with(|| accessor.to_string());
    }

    /// Returns `true` the first time a dictionary property is seen, when
    /// its null-guard has to be written.
    pub fn verify_property_dictionary(&mut self, type_name: &str, property_name: &str) -> bool {
        self.verified_property_dictionaries
            .insert((type_name.to_string(), property_name.to_string()))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
