use super::SECTION;
use crate::{Capability, ExtensionNode};

/// A named section. Children are the section body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionNode {
    pub section_name: String,
}

impl SectionNode {
    pub fn new(section_name: impl Into<String>) -> Self {
        SectionNode {
            section_name: section_name.into(),
        }
    }
}

impl ExtensionNode for SectionNode {
    fn name(&self) -> &'static str {
        "Section"
    }

    fn capability(&self) -> Capability {
        SECTION
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.section_name.clone());
    }
}
