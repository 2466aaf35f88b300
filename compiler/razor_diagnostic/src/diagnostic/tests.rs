use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let span = SourceSpan::new(4, 0, 4, 3).with_file_path("Index.cshtml");
    let diag = Diagnostic::error(ErrorCode::RZ2006)
        .with_message("no code blocks here")
        .with_span(span.clone());

    assert_eq!(diag.code, ErrorCode::RZ2006);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "no code blocks here");
    assert_eq!(diag.span, Some(span));
    assert!(diag.is_error());
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::RZ2001);
    assert!(!diag.is_error());
    assert_eq!(diag.severity.to_string(), "warning");
}

#[test]
fn test_display_with_span() {
    let span = SourceSpan::new(30, 2, 5, 7).with_file_path("Index.cshtml");
    let diag = duplicate_directive(Some(span), "inherits");
    assert_eq!(
        diag.to_string(),
        "Index.cshtml(3,6): error RZ2001: The 'inherits' directive may only occur once per document."
    );
}

#[test]
fn test_display_without_span() {
    let diag = unsupported_extension("mvc.1.0.view", "SectionTargetExtension");
    assert_eq!(
        diag.to_string(),
        "error RZ2000: The document type 'mvc.1.0.view' does not support the extension \
         'SectionTargetExtension'."
    );
}

#[test]
fn test_factories_pick_codes() {
    assert_eq!(code_blocks_not_supported_in_attributes(None).code, ErrorCode::RZ2006);
    let inline = inline_markup_not_supported_in_attributes(None, "System.Int32");
    assert_eq!(inline.code, ErrorCode::RZ2007);
    assert!(inline.message.contains("System.Int32"));
    assert_eq!(
        invalid_design_time_directive_token(None, "Attribute").code,
        ErrorCode::RZ3000
    );
    assert_eq!(malformed_directive(None, "section").code, ErrorCode::RZ1035);
}
