//! Code Writer
//!
//! Text buffer for generated C#. The writer owns the current indent and
//! applies it lazily: indentation is emitted when the first character of a
//! line is written, so blank lines carry no trailing whitespace and a
//! `#line` pragma can reset the indent to zero without rewriting anything.
//!
//! Every helper returns `&mut Self`, so lexical shapes chain:
//!
//! ```text
//! writer
//!     .write_start_assignment("__field")
//!     .write_start_method_invocation("CreateTagHelper<global::T>")
//!     .write_end_method_invocation(true);
//! ```

mod literal;

use razor_diagnostic::SourceLocation;
use razor_ir::{CodeGenerationOptions, MethodParameter};

/// Buffer for generated source with location tracking.
///
/// Locations count characters, not bytes, so they line up with the spans
/// the parser produces for the template.
#[derive(Clone, Debug)]
pub struct CodeWriter {
    buffer: String,
    new_line: String,
    indent_size: usize,
    indent_with_tabs: bool,
    current_indent: usize,
    absolute_index: usize,
    line_index: usize,
    character_index: usize,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(&CodeGenerationOptions::default())
    }
}

impl CodeWriter {
    /// Create a writer using the indentation and line terminator of
    /// `options`.
    pub fn new(options: &CodeGenerationOptions) -> Self {
        CodeWriter {
            buffer: String::new(),
            new_line: options.new_line.clone(),
            indent_size: options.indent_size,
            indent_with_tabs: options.indent_with_tabs,
            current_indent: 0,
            absolute_index: 0,
            line_index: 0,
            character_index: 0,
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the generated output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Position the next character will be written at.
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.absolute_index, self.line_index, self.character_index)
    }

    #[inline]
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    #[inline]
    pub fn character_index(&self) -> usize {
        self.character_index
    }

    /// Indent width in columns.
    #[inline]
    pub fn current_indent(&self) -> usize {
        self.current_indent
    }

    pub fn set_current_indent(&mut self, indent: usize) {
        self.current_indent = indent;
    }

    #[inline]
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    #[inline]
    pub fn indent_with_tabs(&self) -> bool {
        self.indent_with_tabs
    }

    #[inline]
    pub fn new_line_text(&self) -> &str {
        &self.new_line
    }

    /// Check if nothing has been written on the current line.
    #[inline]
    pub fn is_at_line_start(&self) -> bool {
        self.character_index == 0
    }

    /// Check if the last character written is a line feed.
    pub fn ends_with_new_line(&self) -> bool {
        self.buffer.ends_with('\n')
    }

    /// Increase the indent by one level.
    pub fn push_indent(&mut self) {
        self.current_indent += self.indent_size;
    }

    /// Decrease the indent by one level.
    pub fn pop_indent(&mut self) {
        self.current_indent = self.current_indent.saturating_sub(self.indent_size);
    }

    /// Emit the pending indentation if the current line is still empty.
    pub fn ensure_indent(&mut self) -> &mut Self {
        if self.is_at_line_start() && self.current_indent > 0 {
            let indentation =
                whitespace(self.current_indent, self.indent_size, self.indent_with_tabs);
            self.push_raw(&indentation);
        }
        self
    }

    /// Write `text`, indenting every line it starts.
    pub fn write(&mut self, text: &str) -> &mut Self {
        for segment in text.split_inclusive('\n') {
            if !is_line_break(segment) {
                self.ensure_indent();
            }
            self.push_raw(segment);
        }
        self
    }

    /// Write `text` followed by a line terminator.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write(text).new_line()
    }

    /// Write a line terminator.
    pub fn new_line(&mut self) -> &mut Self {
        let new_line = std::mem::take(&mut self.new_line);
        self.push_raw(&new_line);
        self.new_line = new_line;
        self
    }

    /// Terminate the current line unless nothing is on it yet.
    pub fn ensure_new_line(&mut self) -> &mut Self {
        if !self.is_at_line_start() {
            self.new_line();
        }
        self
    }

    /// Append without indentation, tracking the location.
    fn push_raw(&mut self, text: &str) {
        for ch in text.chars() {
            self.absolute_index += 1;
            if ch == '\n' {
                self.line_index += 1;
                self.character_index = 0;
            } else {
                self.character_index += 1;
            }
        }
        self.buffer.push_str(text);
    }

    // Blocks

    /// `{` on the current line, then one level deeper.
    pub fn open_block(&mut self) -> &mut Self {
        self.write("{").new_line();
        self.push_indent();
        self
    }

    /// One level shallower, then `}` on its own line.
    pub fn close_block(&mut self, end_line: bool) -> &mut Self {
        self.pop_indent();
        self.ensure_new_line();
        self.write("}");
        if end_line {
            self.new_line();
        }
        self
    }

    // Lexical shapes

    pub fn write_boolean_literal(&mut self, value: bool) -> &mut Self {
        self.write(if value { "true" } else { "false" })
    }

    /// `name(`
    pub fn write_start_method_invocation(&mut self, name: &str) -> &mut Self {
        self.write(name).write("(")
    }

    /// `);` and a new line, or just `)` when the call is part of a larger
    /// expression.
    pub fn write_end_method_invocation(&mut self, end_line: bool) -> &mut Self {
        self.write(")");
        if end_line {
            self.write(";").new_line();
        }
        self
    }

    pub fn write_parameter_separator(&mut self) -> &mut Self {
        self.write(", ")
    }

    /// `new type_name(`
    pub fn write_start_new_object(&mut self, type_name: &str) -> &mut Self {
        self.write("new ").write(type_name).write("(")
    }

    /// `name = `
    pub fn write_start_assignment(&mut self, name: &str) -> &mut Self {
        self.write(name).write(" = ")
    }

    /// `type_name name = value;`, with `null` when there is no value.
    pub fn write_variable_declaration(
        &mut self,
        type_name: &str,
        name: &str,
        value: Option<&str>,
    ) -> &mut Self {
        self.write(type_name)
            .write(" ")
            .write(name)
            .write(" = ")
            .write(value.unwrap_or("null"))
            .write(";")
            .new_line()
    }

    /// `instance.method(`
    pub fn write_start_instance_method_invocation(
        &mut self,
        instance: &str,
        method: &str,
    ) -> &mut Self {
        self.write(instance).write(".").write(method).write("(")
    }

    /// `instance.method(arguments);`
    pub fn write_instance_method_invocation(
        &mut self,
        instance: &str,
        method: &str,
        arguments: &[&str],
    ) -> &mut Self {
        self.write_start_instance_method_invocation(instance, method)
            .write_arguments(arguments)
            .write_end_method_invocation(true)
    }

    /// `method(arguments);`
    pub fn write_method_invocation(&mut self, method: &str, arguments: &[&str]) -> &mut Self {
        self.write_start_method_invocation(method)
            .write_arguments(arguments)
            .write_end_method_invocation(true)
    }

    fn write_arguments(&mut self, arguments: &[&str]) -> &mut Self {
        for (index, argument) in arguments.iter().enumerate() {
            if index > 0 {
                self.write_parameter_separator();
            }
            self.write(argument);
        }
        self
    }

    /// `return value;`
    pub fn write_return(&mut self, value: &str) -> &mut Self {
        self.write("return ").write(value).write(";").new_line()
    }

    /// `using name;`
    pub fn write_using(&mut self, name: &str) -> &mut Self {
        self.write("using ").write(name).write(";").new_line()
    }

    /// `#pragma value` on its own line.
    pub fn write_pragma(&mut self, value: &str) -> &mut Self {
        self.ensure_new_line().write("#pragma ").write(value).new_line()
    }

    /// `modifiers type_name name;`
    pub fn write_field<S: AsRef<str>>(
        &mut self,
        modifiers: &[S],
        type_name: &str,
        name: &str,
    ) -> &mut Self {
        self.write_modifiers(modifiers)
            .write(type_name)
            .write(" ")
            .write(name)
            .write(";")
            .new_line()
    }

    /// `modifiers type_name name { get; set; }`
    pub fn write_auto_property_declaration<S: AsRef<str>>(
        &mut self,
        modifiers: &[S],
        type_name: &str,
        name: &str,
    ) -> &mut Self {
        self.write_modifiers(modifiers)
            .write(type_name)
            .write(" ")
            .write(name)
            .write(" { get; set; }")
            .new_line()
    }

    /// Each modifier followed by a space.
    pub fn write_modifiers<S: AsRef<str>>(&mut self, modifiers: &[S]) -> &mut Self {
        for modifier in modifiers {
            self.write(modifier.as_ref()).write(" ");
        }
        self
    }

    /// `type name, type name` for a parameter list.
    pub fn write_parameters(&mut self, parameters: &[MethodParameter]) -> &mut Self {
        for (index, parameter) in parameters.iter().enumerate() {
            if index > 0 {
                self.write_parameter_separator();
            }
            self.write_modifiers(&parameter.modifiers)
                .write(&parameter.type_name)
                .write(" ")
                .write(&parameter.parameter_name);
        }
        self
    }

    /// `#line N "file"` where `N` is the one-based line of `line_index`.
    pub fn write_line_number_directive(&mut self, line_index: usize, file_path: &str) -> &mut Self {
        self.ensure_new_line()
            .write("#line ")
            .write(&(line_index + 1).to_string())
            .write(" \"")
            .write(file_path)
            .write("\"")
            .new_line()
    }

    pub fn write_line_default_directive(&mut self) -> &mut Self {
        self.ensure_new_line().write_line("#line default")
    }

    pub fn write_line_hidden_directive(&mut self) -> &mut Self {
        self.ensure_new_line().write_line("#line hidden")
    }
}

impl AsMut<CodeWriter> for CodeWriter {
    fn as_mut(&mut self) -> &mut CodeWriter {
        self
    }
}

fn is_line_break(segment: &str) -> bool {
    segment == "\n" || segment == "\r\n"
}

/// Whitespace `width` columns wide: tabs then spaces when `use_tabs`,
/// spaces otherwise.
pub fn whitespace(width: usize, indent_size: usize, use_tabs: bool) -> String {
    if use_tabs && indent_size > 0 {
        let mut out = "\t".repeat(width / indent_size);
        out.push_str(&" ".repeat(width % indent_size));
        out
    } else {
        " ".repeat(width)
    }
}
