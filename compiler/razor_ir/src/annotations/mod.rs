//! Node annotations and well-known marker keys.
//!
//! A tree can legally contain several class-shaped nodes (a `@functions`
//! block may declare nested types), so later stages never re-derive "the"
//! class by structure. The document classifier places a marker on exactly
//! one node per role and everything downstream finds it by that marker.

use rustc_hash::FxHashMap;

use crate::IntermediateNode;

/// Marks the class that becomes the generated type.
pub const PRIMARY_CLASS: &str = "PrimaryClass";
/// Marks the namespace that encloses the primary class.
pub const PRIMARY_NAMESPACE: &str = "PrimaryNamespace";
/// Marks the method that receives the document's content.
pub const PRIMARY_METHOD: &str = "PrimaryMethod";
/// Marks field declarations generated for tag helper instances.
pub const TAG_HELPER_FIELD: &str = "TagHelperField";
/// Marks nodes that came from an imports document rather than the main source.
pub const IMPORTED: &str = "Imported";

/// Value stored under an annotation key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnnotationValue {
    /// Presence is the information.
    Marker,
    Bool(bool),
    Text(String),
}

/// Lazily allocated per-node annotation map.
#[derive(Clone, Debug, Default)]
pub struct Annotations {
    entries: FxHashMap<&'static str, AnnotationValue>,
}

impl Annotations {
    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: &'static str, value: AnnotationValue) -> Option<AnnotationValue> {
        self.entries.insert(key, value)
    }

    pub fn remove(&mut self, key: &str) -> Option<AnnotationValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order, for deterministic printing.
    pub fn sorted_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

pub fn find_primary_class(root: &IntermediateNode) -> Option<&IntermediateNode> {
    root.find_marked(PRIMARY_CLASS)
}

pub fn find_primary_class_mut(root: &mut IntermediateNode) -> Option<&mut IntermediateNode> {
    root.find_marked_mut(PRIMARY_CLASS)
}

pub fn find_primary_namespace(root: &IntermediateNode) -> Option<&IntermediateNode> {
    root.find_marked(PRIMARY_NAMESPACE)
}

pub fn find_primary_namespace_mut(root: &mut IntermediateNode) -> Option<&mut IntermediateNode> {
    root.find_marked_mut(PRIMARY_NAMESPACE)
}

pub fn find_primary_method(root: &IntermediateNode) -> Option<&IntermediateNode> {
    root.find_marked(PRIMARY_METHOD)
}

pub fn find_primary_method_mut(root: &mut IntermediateNode) -> Option<&mut IntermediateNode> {
    root.find_marked_mut(PRIMARY_METHOD)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
