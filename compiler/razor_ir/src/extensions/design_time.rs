use super::DESIGN_TIME_DIRECTIVE;
use crate::{Capability, ExtensionNode};

/// Holds every directive token of the document so design-time code can
/// expose each one to the type checker. Children are directive token nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesignTimeDirective;

impl ExtensionNode for DesignTimeDirective {
    fn name(&self) -> &'static str {
        "DesignTimeDirective"
    }

    fn capability(&self) -> Capability {
        DESIGN_TIME_DIRECTIVE
    }
}
