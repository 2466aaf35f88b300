//! Brace-delimited blocks as guards.
//!
//! Opening a block writes its header and `{` and indents one level; dropping
//! the guard writes the matching `}`. Guards dereference to their host, so
//! the block body is written through the guard itself:
//!
//! ```text
//! let mut class = writer.build_class_declaration(&modifiers, "Template", None, &[]);
//! class.write_line("int x;");
//! // `}` written here
//! ```
//!
//! The host is anything that exposes a [`CodeWriter`]: the writer itself or
//! a rendering context that owns one.

use std::ops::{Deref, DerefMut};

use razor_ir::MethodParameter;

use crate::CodeWriter;

/// Guard for an open `{ ... }` block.
pub struct CodeBlockScope<'h, H: AsMut<CodeWriter>> {
    host: &'h mut H,
    end_line: bool,
}

impl<'h, H: AsMut<CodeWriter>> CodeBlockScope<'h, H> {
    fn open(host: &'h mut H, end_line: bool) -> Self {
        host.as_mut().open_block();
        CodeBlockScope { host, end_line }
    }
}

impl<H: AsMut<CodeWriter>> Deref for CodeBlockScope<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: AsMut<CodeWriter>> DerefMut for CodeBlockScope<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: AsMut<CodeWriter>> Drop for CodeBlockScope<'_, H> {
    fn drop(&mut self) {
        self.host.as_mut().close_block(self.end_line);
    }
}

/// Block builders available on every writer host.
pub trait ScopeBuilder: AsMut<CodeWriter> + Sized {
    /// A bare block ending its line.
    fn build_scope(&mut self) -> CodeBlockScope<'_, Self> {
        CodeBlockScope::open(self, true)
    }

    /// `namespace name`
    fn build_namespace(&mut self, name: &str) -> CodeBlockScope<'_, Self> {
        self.as_mut().write("namespace ").write_line(name);
        CodeBlockScope::open(self, true)
    }

    /// `modifiers class name : base_type, interfaces`
    fn build_class_declaration(
        &mut self,
        modifiers: &[String],
        name: &str,
        base_type: Option<&str>,
        interfaces: &[String],
    ) -> CodeBlockScope<'_, Self> {
        let writer = self.as_mut();
        writer.write_modifiers(modifiers).write("class ").write(name);
        let mut supertypes = base_type.into_iter().chain(interfaces.iter().map(String::as_str));
        if let Some(first) = supertypes.next() {
            writer.write(" : ").write(first);
            for supertype in supertypes {
                writer.write_parameter_separator().write(supertype);
            }
        }
        writer.new_line();
        CodeBlockScope::open(self, true)
    }

    /// `modifiers return_type name(parameters)`
    fn build_method_declaration(
        &mut self,
        modifiers: &[String],
        return_type: Option<&str>,
        name: &str,
        parameters: &[MethodParameter],
    ) -> CodeBlockScope<'_, Self> {
        let writer = self.as_mut();
        writer.write_modifiers(modifiers);
        if let Some(return_type) = return_type {
            writer.write(return_type).write(" ");
        }
        writer
            .write(name)
            .write("(")
            .write_parameters(parameters)
            .write_line(")");
        CodeBlockScope::open(self, true)
    }

    /// `(parameters) => {`. The closing brace does not end its line so the
    /// enclosing call can be closed after it.
    fn build_lambda(&mut self, parameters: &[&str]) -> CodeBlockScope<'_, Self> {
        write_lambda_header(self.as_mut(), parameters);
        CodeBlockScope::open(self, false)
    }

    /// `async(parameters) => {`
    fn build_async_lambda(&mut self, parameters: &[&str]) -> CodeBlockScope<'_, Self> {
        self.as_mut().write("async");
        write_lambda_header(self.as_mut(), parameters);
        CodeBlockScope::open(self, false)
    }
}

impl<H: AsMut<CodeWriter>> ScopeBuilder for H {}

fn write_lambda_header(writer: &mut CodeWriter, parameters: &[&str]) {
    writer.write("(").write(&parameters.join(", ")).write(") => ");
}

#[cfg(test)]
mod tests;
