//! `#line` regions.
//!
//! A [`LinePragmaScope`] binds the generated lines written through it to a
//! template location. Opening it saves the indent and resets it to zero
//! (the mapped code is padded to the template column instead), then writes
//! `#line N "file"`. Dropping it ends the region, so the region is closed
//! on every path out of the code that opened it:
//!
//! ```text
//! #line 3 "/Views/Index.cshtml"
//!       Write(Model.Name);
//!
//! #line default
//! #line hidden
//! ```

use std::ops::{Deref, DerefMut};

use razor_diagnostic::SourceSpan;

use crate::context::CodeRenderingContext;
use crate::output::LinePragma;

/// Guard for an open `#line` region.
pub struct LinePragmaScope<'c, 'a> {
    context: &'c mut CodeRenderingContext<'a>,
    start_indent: usize,
    start_line_index: usize,
    file_path: String,
    source_span: SourceSpan,
}

impl<'c, 'a> LinePragmaScope<'c, 'a> {
    pub fn new(context: &'c mut CodeRenderingContext<'a>, span: &SourceSpan) -> Self {
        let file_path = context.file_path_for(span);
        let writer = context.writer_mut();
        let start_indent = writer.current_indent();
        writer.set_current_indent(0);
        writer.write_line_number_directive(span.line_index, &file_path);
        let start_line_index = writer.line_index();
        LinePragmaScope {
            context,
            start_indent,
            start_line_index,
            file_path,
            source_span: span.clone(),
        }
    }
}

impl<'a> Deref for LinePragmaScope<'_, 'a> {
    type Target = CodeRenderingContext<'a>;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl<'a> DerefMut for LinePragmaScope<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl Drop for LinePragmaScope<'_, '_> {
    fn drop(&mut self) {
        let writer = self.context.writer_mut();
        if !writer.ends_with_new_line() {
            writer.new_line();
        }
        let line_count = writer.line_index() - self.start_line_index;
        // A blank line keeps the mapped code apart from the directives.
        writer.new_line();
        writer.write_line_default_directive();
        writer.write_line_hidden_directive();
        writer.set_current_indent(self.start_indent);

        self.context.add_line_pragma(LinePragma {
            start_line_index: self.start_line_index,
            line_count,
            file_path: std::mem::take(&mut self.file_path),
            source_span: self.source_span.clone(),
        });
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
