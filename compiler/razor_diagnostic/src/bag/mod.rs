//! Ordered diagnostic collection.
//!
//! Diagnostics are kept in the order they were reported so output is stable
//! across runs. Exact duplicates (same code, severity, message and span) are
//! dropped; the same tree can be walked by more than one stage, and a node
//! that triggers the same problem twice should surface once.

use rustc_hash::FxHashSet;

use crate::Diagnostic;

/// Insertion-ordered, duplicate-free list of diagnostics.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<Diagnostic>,
}

impl DiagnosticBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic. Returns `false` if an identical one was already
    /// present.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if self.seen.contains(&diagnostic) {
            return false;
        }
        self.seen.insert(diagnostic.clone());
        self.diagnostics.push(diagnostic);
        true
    }

    /// Add every diagnostic from an iterator, in order.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.add(diagnostic);
        }
    }

    /// Check if any collected diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// View the diagnostics in report order.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the bag, returning diagnostics in report order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl FromIterator<Diagnostic> for DiagnosticBag {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        let mut bag = DiagnosticBag::new();
        bag.extend(iter);
        bag
    }
}
