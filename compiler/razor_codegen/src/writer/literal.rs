//! C# string literal escaping.
//!
//! Medium-length text without NUL is written verbatim (`@"..."`), which
//! keeps long markup readable in the generated file. Everything else uses
//! C-style escapes.

use super::CodeWriter;

/// Shortest literal written verbatim.
const VERBATIM_MIN_LENGTH: usize = 256;
/// Longest literal written verbatim.
const VERBATIM_MAX_LENGTH: usize = 1500;

impl CodeWriter {
    /// Write `literal` as a C# string literal.
    pub fn write_string_literal(&mut self, literal: &str) -> &mut Self {
        let length = literal.chars().count();
        if (VERBATIM_MIN_LENGTH..=VERBATIM_MAX_LENGTH).contains(&length) && !literal.contains('\0')
        {
            self.write_verbatim_string_literal(literal)
        } else {
            self.write_c_style_string_literal(literal)
        }
    }

    /// `@"..."` with embedded quotes doubled. Line breaks inside the literal
    /// are written as-is and never indented.
    pub fn write_verbatim_string_literal(&mut self, literal: &str) -> &mut Self {
        self.write("@\"");
        self.push_raw(&literal.replace('"', "\"\""));
        self.push_raw("\"");
        self
    }

    fn write_c_style_string_literal(&mut self, literal: &str) -> &mut Self {
        let mut escaped = String::with_capacity(literal.len() + 2);
        escaped.push('"');
        for ch in literal.chars() {
            match ch {
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                '"' => escaped.push_str("\\\""),
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\0' => escaped.push_str("\\0"),
                '\n' => escaped.push_str("\\n"),
                '\u{0085}' => escaped.push_str("\\u0085"),
                '\u{2028}' => escaped.push_str("\\u2028"),
                '\u{2029}' => escaped.push_str("\\u2029"),
                _ => escaped.push(ch),
            }
        }
        escaped.push('"');
        self.write(&escaped)
    }
}
