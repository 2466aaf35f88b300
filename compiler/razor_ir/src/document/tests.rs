use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_checksum_hex_round_trip() {
    let checksum = Checksum::from_hex(ChecksumAlgorithm::Sha1, "00ff10Ab").unwrap();
    assert_eq!(checksum.bytes, vec![0x00, 0xff, 0x10, 0xab]);
    assert_eq!(checksum.to_hex(), "00ff10ab");
}

#[test]
fn test_checksum_from_hex_rejects_bad_input() {
    assert!(Checksum::from_hex(ChecksumAlgorithm::Sha1, "abc").is_none());
    assert!(Checksum::from_hex(ChecksumAlgorithm::Sha1, "zz").is_none());
}

#[test]
fn test_algorithm_names() {
    assert_eq!(ChecksumAlgorithm::Sha1.to_string(), "SHA1");
    assert_eq!(
        ChecksumAlgorithm::Sha256.guid(),
        "{8829d00f-11b8-4213-878b-770e8597ac16}"
    );
}

#[test]
fn test_source_document_indexes_characters() {
    let source = SourceDocument::new("é\tx");
    assert_eq!(source.len_chars(), 3);
    assert_eq!(source.char_at(0), Some('é'));
    assert_eq!(source.char_at(1), Some('\t'));
    assert_eq!(source.char_at(3), None);
}

#[test]
fn test_identifier_normalizes_separators() {
    let source = SourceDocument::new("").with_relative_path(r"Views\Home\Index.cshtml");
    assert_eq!(source.identifier().as_deref(), Some("/Views/Home/Index.cshtml"));

    let rooted = SourceDocument::new("").with_relative_path("/Pages/About.cshtml");
    assert_eq!(rooted.identifier().as_deref(), Some("/Pages/About.cshtml"));

    assert_eq!(SourceDocument::new("").identifier(), None);
}

#[test]
fn test_code_document_imports_keep_order() {
    let document = CodeDocument::new(SourceDocument::new("main"))
        .with_import(SourceDocument::new("outer"))
        .with_import(SourceDocument::new("inner"));
    let texts: Vec<_> = document.imports.iter().map(SourceDocument::text).collect();
    assert_eq!(texts, vec!["outer", "inner"]);
}
