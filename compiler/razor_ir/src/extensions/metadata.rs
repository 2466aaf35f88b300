use super::METADATA_ATTRIBUTE;
use crate::{Capability, ExtensionNode};

/// Assembly-level attribute registering the generated type as a compiled
/// item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledItemAttribute {
    /// Fully qualified generated type name.
    pub type_name: String,
    /// Document kind.
    pub kind: String,
    pub identifier: String,
}

impl ExtensionNode for CompiledItemAttribute {
    fn name(&self) -> &'static str {
        "CompiledItemAttribute"
    }

    fn capability(&self) -> Capability {
        METADATA_ATTRIBUTE
    }

    fn has_fixed_children(&self) -> bool {
        true
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.type_name.clone());
        fields.push(self.kind.clone());
        fields.push(self.identifier.clone());
    }
}

/// Class-level attribute recording the checksum of one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceChecksumAttribute {
    pub checksum_algorithm: String,
    /// Lowercase hex digest.
    pub checksum: String,
    pub identifier: String,
}

impl ExtensionNode for SourceChecksumAttribute {
    fn name(&self) -> &'static str {
        "SourceChecksumAttribute"
    }

    fn capability(&self) -> Capability {
        METADATA_ATTRIBUTE
    }

    fn has_fixed_children(&self) -> bool {
        true
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.checksum_algorithm.clone());
        fields.push(self.checksum.clone());
        fields.push(self.identifier.clone());
    }
}
