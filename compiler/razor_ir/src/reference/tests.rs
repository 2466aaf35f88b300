use std::sync::Arc;

use super::*;
use crate::descriptors::{DirectiveTokenDescriptor, DirectiveTokenKind};
use crate::{DirectiveNode, DocumentNode, IntermediateToken, TokenKind};
use pretty_assertions::assert_eq;

fn html(text: &str) -> IntermediateNode {
    let mut node = IntermediateNode::new(NodeKind::HtmlContent);
    node.try_add_child(IntermediateNode::new(NodeKind::Token(
        IntermediateToken::new(TokenKind::Html, text),
    )))
    .unwrap();
    node
}

fn texts(node: &IntermediateNode) -> Vec<String> {
    node.children()
        .iter()
        .map(IntermediateNode::token_content)
        .collect()
}

fn root_with(items: &[&str]) -> IntermediateNode {
    let mut root = IntermediateNode::new(NodeKind::Document(DocumentNode::default()));
    for item in items {
        root.try_add_child(html(item)).unwrap();
    }
    root
}

fn reference_to(root: &IntermediateNode, index: usize) -> NodeReference {
    NodeReference::new(root.id(), root.children()[index].id())
}

#[test]
fn test_insert_before_and_after() {
    let mut root = root_with(&["a", "c"]);
    let c = reference_to(&root, 1);

    c.insert_before(&mut root, html("b")).unwrap();
    c.insert_after(&mut root, html("d")).unwrap();

    assert_eq!(texts(&root), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_references_survive_sibling_shifts() {
    let mut root = root_with(&["a", "b", "c"]);
    let a = reference_to(&root, 0);
    let c = reference_to(&root, 2);

    a.remove(&mut root).unwrap();
    // `c` moved from index 2 to 1; the reference still finds it.
    let (old, _) = c.replace(&mut root, html("C")).unwrap();

    assert_eq!(old.token_content(), "c");
    assert_eq!(texts(&root), vec!["b", "C"]);
}

#[test]
fn test_stale_reference_fails() {
    let mut root = root_with(&["a"]);
    let a = reference_to(&root, 0);
    a.remove(&mut root).unwrap();

    assert_eq!(
        a.remove(&mut root).unwrap_err(),
        ReferenceError::NodeNotUnderParent {
            parent: a.parent,
            node: a.node
        }
    );
    assert!(a.resolve(&root).is_err());
}

#[test]
fn test_missing_parent_fails() {
    let mut root = root_with(&["a"]);
    let detached = html("x");
    let reference = NodeReference::new(detached.id(), detached.children()[0].id());

    assert_eq!(
        reference.insert_after(&mut root, html("y")).unwrap_err(),
        ReferenceError::ParentNotFound {
            parent: detached.id()
        }
    );
}

#[test]
fn test_replace_returns_reference_to_replacement() {
    let mut root = root_with(&["a"]);
    let a = reference_to(&root, 0);
    let (_, replacement) = a.replace(&mut root, html("b")).unwrap();

    assert_eq!(replacement.resolve(&root).unwrap().token_content(), "b");
    replacement.resolve_mut(&mut root).unwrap().mark("Seen");
    assert!(root.children()[0].has_annotation("Seen"));
}

#[test]
fn test_find_directive_references_matches_descriptor() {
    let inherits = Arc::new(
        DirectiveDescriptor::single_line("inherits")
            .with_token(DirectiveTokenDescriptor::new(DirectiveTokenKind::Type)),
    );
    let functions = Arc::new(DirectiveDescriptor::code_block("functions"));

    let mut root = root_with(&["a"]);
    for descriptor in [&inherits, &functions, &inherits] {
        root.try_add_child(IntermediateNode::new(NodeKind::Directive(DirectiveNode {
            directive_name: descriptor.directive.clone(),
            descriptor: Arc::clone(descriptor),
        })))
        .unwrap();
    }

    let found = find_directive_references(&root, &inherits);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0], reference_to(&root, 1));
    assert_eq!(found[1], reference_to(&root, 3));
    assert_eq!(find_directive_references(&root, &functions).len(), 1);
}

#[test]
fn test_find_descendants_excludes_root() {
    let root = root_with(&["a", "b"]);
    let all = find_descendant_nodes(&root, |_| true);
    // Two html nodes, two tokens.
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(|n| n.id() != root.id()));

    let tokens = find_descendant_references(&root, |n| n.as_token().is_some());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].parent, root.children()[0].id());
}
