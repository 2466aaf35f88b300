//! The pass contract.

use std::fmt;

use razor_ir::{CodeDocument, IntermediateNode, ReferenceError};

/// Order used by every built-in feature pass.
pub const DEFAULT_FEATURE_ORDER: i32 = 1000;

/// Reserved band for passes that must see the result of all default
/// rewriting.
pub const LATE_FEATURE_ORDER: i32 = DEFAULT_FEATURE_ORDER + 1000;

/// Pipeline phase. Phases run in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassPhase {
    /// Establishes the document kind and its namespace/class/method shell.
    DocumentClassifier,
    /// Interprets directives against the classified structure.
    DirectiveClassifier,
    /// Lowers and hoists for the renderer.
    Optimization,
}

impl PassPhase {
    pub const ALL: [PassPhase; 3] = [
        PassPhase::DocumentClassifier,
        PassPhase::DirectiveClassifier,
        PassPhase::Optimization,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PassPhase::DocumentClassifier => "document-classifier",
            PassPhase::DirectiveClassifier => "directive-classifier",
            PassPhase::Optimization => "optimization",
        }
    }
}

impl fmt::Display for PassPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tree rewrite.
///
/// Passes run exactly once per document, in phase order and then ascending
/// [`order`](IntermediateNodePass::order). A pass that finds nothing to do
/// must leave the tree untouched.
///
/// Errors are reserved for broken editing contracts. Problems with the
/// document itself are attached to nodes as diagnostics.
pub trait IntermediateNodePass {
    fn name(&self) -> &'static str;

    fn phase(&self) -> PassPhase;

    fn order(&self) -> i32 {
        DEFAULT_FEATURE_ORDER
    }

    fn execute(
        &self,
        document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError>;
}

/// Whether the document root asks for design-time output.
pub(crate) fn is_design_time(root: &IntermediateNode) -> bool {
    root.as_document()
        .is_some_and(|document| document.options.design_time)
}
