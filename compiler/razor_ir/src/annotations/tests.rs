use super::*;
use crate::{ClassDeclarationNode, DocumentNode, NodeKind};
use pretty_assertions::assert_eq;

fn class(name: &str) -> IntermediateNode {
    IntermediateNode::new(NodeKind::ClassDeclaration(ClassDeclarationNode {
        class_name: name.to_string(),
        ..ClassDeclarationNode::default()
    }))
}

#[test]
fn test_primary_class_found_by_marker_not_structure() {
    let mut root = IntermediateNode::new(NodeKind::Document(DocumentNode::default()));
    root.try_add_child(class("Nested")).unwrap();
    root.try_add_child(class("Real").with_marker(PRIMARY_CLASS)).unwrap();

    let primary = find_primary_class(&root).unwrap();
    assert_eq!(primary.as_class().unwrap().class_name, "Real");
}

#[test]
fn test_missing_marker_yields_none() {
    let mut root = IntermediateNode::new(NodeKind::Document(DocumentNode::default()));
    root.try_add_child(class("Only")).unwrap();

    assert!(find_primary_class(&root).is_none());
    assert!(find_primary_namespace(&root).is_none());
    assert!(find_primary_method(&root).is_none());
}

#[test]
fn test_primary_class_mut_allows_edit() {
    let mut root = IntermediateNode::new(NodeKind::Document(DocumentNode::default()));
    root.try_add_child(class("Template").with_marker(PRIMARY_CLASS))
        .unwrap();

    find_primary_class_mut(&mut root)
        .and_then(IntermediateNode::as_class_mut)
        .unwrap()
        .base_type = Some("Base".to_string());

    assert_eq!(
        find_primary_class(&root).unwrap().as_class().unwrap().base_type.as_deref(),
        Some("Base")
    );
}

#[test]
fn test_annotation_values() {
    let mut node = class("C");
    assert!(node.annotations().is_none());

    node.set_annotation(IMPORTED, AnnotationValue::Bool(true));
    assert_eq!(node.annotation(IMPORTED), Some(&AnnotationValue::Bool(true)));

    node.mark(TAG_HELPER_FIELD);
    assert_eq!(
        node.annotations().unwrap().sorted_keys(),
        vec![IMPORTED, TAG_HELPER_FIELD]
    );

    assert_eq!(node.remove_annotation(IMPORTED), Some(AnnotationValue::Bool(true)));
    assert!(!node.has_annotation(IMPORTED));
}
