//! Open extension point of the node model.
//!
//! A node kind added outside the closed [`NodeKind`](crate::NodeKind) set
//! implements [`ExtensionNode`] and names the [`Capability`] it needs from
//! the code target. The renderer looks that capability up at render time;
//! a target without it records a diagnostic and skips the node.

use std::any::Any;
use std::fmt;

/// Identifier of a renderer interface a code target can provide.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Capability(&'static str);

impl Capability {
    pub const fn new(name: &'static str) -> Self {
        Capability(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Object-safe plumbing shared by every extension payload.
///
/// Implemented automatically for any `ExtensionNode + Clone`.
pub trait ExtensionNodeAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Copy the payload into a new box.
    fn deep_clone(&self) -> Box<dyn ExtensionNode>;
}

impl<T: ExtensionNode + Clone> ExtensionNodeAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn deep_clone(&self) -> Box<dyn ExtensionNode> {
        Box::new(self.clone())
    }
}

/// Payload of a [`NodeKind::Extension`](crate::NodeKind::Extension) node.
pub trait ExtensionNode: ExtensionNodeAny + fmt::Debug + 'static {
    /// Kind name shown by the tree printer.
    fn name(&self) -> &'static str;

    /// Renderer interface this node needs from the code target.
    fn capability(&self) -> Capability;

    /// Check if the node's child list is fixed and empty.
    fn has_fixed_children(&self) -> bool {
        false
    }

    /// Append printable fields for the tree printer.
    fn format_fields(&self, fields: &mut Vec<String>) {
        let _ = fields;
    }
}
