use super::TEMPLATE;
use crate::{Capability, ExtensionNode};

/// Inline markup template (`@<p>@item</p>`) inside an expression. Children
/// are the template body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateNode;

impl ExtensionNode for TemplateNode {
    fn name(&self) -> &'static str {
        "Template"
    }

    fn capability(&self) -> Capability {
        TEMPLATE
    }
}
