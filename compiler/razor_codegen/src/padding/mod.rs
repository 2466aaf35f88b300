//! Column padding for mapped code.
//!
//! Inside a `#line` region the indent is zero, so mapped code is preceded by
//! enough whitespace to put it at the same column it had in the template.
//! The width is the number of characters between the start of the template
//! line and the span, minus whatever the generator writes before the mapped
//! text (`Write(`, `__o = `, ...).
//!
//! The scan stops at the first line break before the span; a span that
//! starts a line gets no padding even if the previous line was long.

use razor_diagnostic::SourceSpan;
use razor_ir::SourceDocument;

use crate::context::CodeRenderingContext;
use crate::writer::whitespace;

/// Template column of `span`, with tabs counted as `indent_size`.
pub fn calculate_padding(source: &SourceDocument, span: &SourceSpan, indent_size: usize) -> usize {
    let start = span.absolute_index.min(source.len_chars());
    let mut width = 0;
    for index in (0..start).rev() {
        match source.char_at(index) {
            Some('\n' | '\r') | None => break,
            Some('\t') => width += indent_size,
            Some(_) => width += 1,
        }
    }
    width
}

/// Whitespace to write before mapped code whose generated prefix is
/// `generated_offset` characters long.
pub fn build_offset_padding(
    context: &CodeRenderingContext<'_>,
    generated_offset: usize,
    span: &SourceSpan,
) -> String {
    let options = context.options();
    let padding = calculate_padding(context.source_for(span), span, options.indent_size);
    let width = padding.saturating_sub(generated_offset);
    whitespace(width, options.indent_size, options.indent_with_tabs)
}
