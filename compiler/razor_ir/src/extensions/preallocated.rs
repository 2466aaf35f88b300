use std::sync::Arc;

use super::PREALLOCATED_ATTRIBUTE;
use crate::descriptors::{BoundAttributeDescriptor, TagHelperDescriptor};
use crate::{AttributeStructure, Capability, ExtensionNode};

/// Static field holding a literal HTML attribute shared by every use site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreallocatedTagHelperHtmlAttributeValue {
    pub variable_name: String,
    pub attribute_name: String,
    pub value: String,
    pub attribute_structure: AttributeStructure,
}

impl ExtensionNode for PreallocatedTagHelperHtmlAttributeValue {
    fn name(&self) -> &'static str {
        "PreallocatedTagHelperHtmlAttributeValue"
    }

    fn capability(&self) -> Capability {
        PREALLOCATED_ATTRIBUTE
    }

    fn has_fixed_children(&self) -> bool {
        true
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.variable_name.clone());
        fields.push(self.attribute_name.clone());
        fields.push(self.value.clone());
        fields.push(self.attribute_structure.to_string());
    }
}

/// Use site of a preallocated HTML attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreallocatedTagHelperHtmlAttribute {
    pub variable_name: String,
}

impl ExtensionNode for PreallocatedTagHelperHtmlAttribute {
    fn name(&self) -> &'static str {
        "PreallocatedTagHelperHtmlAttribute"
    }

    fn capability(&self) -> Capability {
        PREALLOCATED_ATTRIBUTE
    }

    fn has_fixed_children(&self) -> bool {
        true
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.variable_name.clone());
    }
}

/// Static field holding a literal string property value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreallocatedTagHelperPropertyValue {
    pub variable_name: String,
    pub attribute_name: String,
    pub value: String,
    pub attribute_structure: AttributeStructure,
}

impl ExtensionNode for PreallocatedTagHelperPropertyValue {
    fn name(&self) -> &'static str {
        "PreallocatedTagHelperPropertyValue"
    }

    fn capability(&self) -> Capability {
        PREALLOCATED_ATTRIBUTE
    }

    fn has_fixed_children(&self) -> bool {
        true
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.variable_name.clone());
        fields.push(self.attribute_name.clone());
        fields.push(self.value.clone());
        fields.push(self.attribute_structure.to_string());
    }
}

/// Property assignment whose value comes from a preallocated field.
#[derive(Clone, Debug)]
pub struct PreallocatedTagHelperProperty {
    pub variable_name: String,
    pub attribute_name: String,
    pub attribute_structure: AttributeStructure,
    pub bound_attribute: BoundAttributeDescriptor,
    pub field_name: String,
    pub property_name: String,
    pub tag_helper: Arc<TagHelperDescriptor>,
    pub is_indexer_name_match: bool,
}

impl PreallocatedTagHelperProperty {
    /// Key of an indexer assignment.
    pub fn indexer_key(&self) -> Option<&str> {
        if !self.is_indexer_name_match {
            return None;
        }
        let prefix = self.bound_attribute.indexer_name_prefix.as_deref()?;
        self.attribute_name.get(prefix.len()..)
    }
}

impl ExtensionNode for PreallocatedTagHelperProperty {
    fn name(&self) -> &'static str {
        "PreallocatedTagHelperProperty"
    }

    fn capability(&self) -> Capability {
        PREALLOCATED_ATTRIBUTE
    }

    fn has_fixed_children(&self) -> bool {
        true
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.variable_name.clone());
        fields.push(self.attribute_name.clone());
        fields.push(self.property_name.clone());
    }
}
