//! Property-based tests for the code writer.
//!
//! These use proptest to check invariants that must hold for any input:
//! 1. String literals decode back to the text they were written from
//! 2. Nested blocks always close, leaving the indent where it started
//! 3. Template padding counts the columns before a span

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use razor_codegen::{calculate_padding, whitespace, CodeWriter, ScopeBuilder};
use razor_diagnostic::SourceSpan;
use razor_ir::SourceDocument;

// -- Literal decoding --

/// Decode a C# literal the way the C# compiler reads it.
fn decode_literal(literal: &str) -> String {
    if let Some(body) = literal.strip_prefix("@\"") {
        let body = body.strip_suffix('"').expect("closing quote");
        return body.replace("\"\"", "\"");
    }

    let body = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .expect("quoted literal");
    let mut out = String::new();
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next().expect("escape") {
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            '0' => out.push('\0'),
            'u' => {
                let code: String = chars.by_ref().take(4).collect();
                let value = u32::from_str_radix(&code, 16).expect("hex escape");
                out.push(char::from_u32(value).expect("scalar value"));
            }
            other => out.push(other),
        }
    }
    out
}

fn literal_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\\t\\r\\n\\x{0}\\x{85}\\x{2028}]{0,400}").expect("valid regex")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn string_literal_round_trips(text in literal_text_strategy()) {
        let mut writer = CodeWriter::default();
        writer.write_string_literal(&text);
        prop_assert_eq!(decode_literal(writer.as_str()), text);
    }

    #[test]
    fn c_style_literal_stays_on_one_line(text in "[ -~\\n\\r]{0,100}") {
        let mut writer = CodeWriter::default();
        writer.write_string_literal(&text);
        // Below the verbatim threshold every line break is escaped.
        prop_assert!(!writer.as_str().contains('\n'));
        prop_assert_eq!(writer.line_index(), 0);
    }

    #[test]
    fn nested_blocks_close_and_restore_indent(depth in 0usize..12, body in "[a-z]{1,8}") {
        let mut writer = CodeWriter::default();
        fn nest(writer: &mut CodeWriter, depth: usize, body: &str) {
            if depth == 0 {
                writer.write_line(body);
                return;
            }
            let mut scope = writer.build_scope();
            nest(&mut scope, depth - 1, body);
        }
        nest(&mut writer, depth, &body);

        prop_assert_eq!(writer.current_indent(), 0);
        let output = writer.as_str();
        prop_assert_eq!(output.matches('{').count(), depth);
        prop_assert_eq!(output.matches('}').count(), depth);
        let body_line = format!("{}{}\n", " ".repeat(depth * 4), body);
        prop_assert!(output.contains(&body_line));
    }

    #[test]
    fn padding_counts_columns(indent in 0usize..40, tabs in 0usize..4, size in 1usize..9) {
        let text = format!("<div>\n{}{}@Model", "\t".repeat(tabs), " ".repeat(indent));
        let source = SourceDocument::new(text);
        let at = 6 + tabs + indent + 1;
        let span = SourceSpan::new(at, 1, tabs + indent + 1, 5);

        prop_assert_eq!(calculate_padding(&source, &span, size), tabs * size + indent + 1);
    }

    #[test]
    fn whitespace_has_requested_width(width in 0usize..64, size in 1usize..9, tabs in any::<bool>()) {
        let text = whitespace(width, size, tabs);
        let columns: usize = text.chars().map(|ch| if ch == '\t' { size } else { 1 }).sum();
        prop_assert_eq!(columns, width);
        if !tabs {
            prop_assert!(!text.contains('\t'));
        }
    }
}
