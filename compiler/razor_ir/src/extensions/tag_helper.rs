use std::sync::Arc;

use super::DEFAULT_TAG_HELPER;
use crate::descriptors::{BoundAttributeDescriptor, TagHelperDescriptor};
use crate::{AttributeStructure, Capability, ExtensionNode, TagMode};

/// Shared execution state declared once per class: execution context,
/// runner, string buffer and scope manager.
#[derive(Clone, Debug, Default)]
pub struct DefaultTagHelperRuntime;

impl ExtensionNode for DefaultTagHelperRuntime {
    fn name(&self) -> &'static str {
        "DefaultTagHelperRuntime"
    }

    fn capability(&self) -> Capability {
        DEFAULT_TAG_HELPER
    }

    fn has_fixed_children(&self) -> bool {
        true
    }
}

/// The tag helper's content, rendered as the scope manager's body callback.
#[derive(Clone, Debug)]
pub struct DefaultTagHelperBody {
    pub tag_name: String,
    pub tag_mode: TagMode,
}

impl ExtensionNode for DefaultTagHelperBody {
    fn name(&self) -> &'static str {
        "DefaultTagHelperBody"
    }

    fn capability(&self) -> Capability {
        DEFAULT_TAG_HELPER
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.tag_name.clone());
        fields.push(self.tag_mode.to_string());
    }
}

/// `__field = CreateTagHelper<T>(); __tagHelperExecutionContext.Add(__field);`
#[derive(Clone, Debug)]
pub struct DefaultTagHelperCreate {
    pub field_name: String,
    pub type_name: String,
    pub tag_helper: Arc<TagHelperDescriptor>,
}

impl ExtensionNode for DefaultTagHelperCreate {
    fn name(&self) -> &'static str {
        "DefaultTagHelperCreate"
    }

    fn capability(&self) -> Capability {
        DEFAULT_TAG_HELPER
    }

    fn has_fixed_children(&self) -> bool {
        true
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.field_name.clone());
        fields.push(self.type_name.clone());
    }
}

/// Runs the tag helpers and writes their output. Always the last child of
/// its tag helper node.
#[derive(Clone, Debug, Default)]
pub struct DefaultTagHelperExecute;

impl ExtensionNode for DefaultTagHelperExecute {
    fn name(&self) -> &'static str {
        "DefaultTagHelperExecute"
    }

    fn capability(&self) -> Capability {
        DEFAULT_TAG_HELPER
    }

    fn has_fixed_children(&self) -> bool {
        true
    }
}

/// An unbound HTML attribute on a tag helper element. Children are the
/// attribute's value pieces.
#[derive(Clone, Debug)]
pub struct DefaultTagHelperHtmlAttribute {
    pub attribute_name: String,
    pub attribute_structure: AttributeStructure,
}

impl ExtensionNode for DefaultTagHelperHtmlAttribute {
    fn name(&self) -> &'static str {
        "DefaultTagHelperHtmlAttribute"
    }

    fn capability(&self) -> Capability {
        DEFAULT_TAG_HELPER
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.attribute_name.clone());
        fields.push(self.attribute_structure.to_string());
    }
}

/// Assignment of a bound attribute to a tag helper property. Children are
/// the attribute's value.
#[derive(Clone, Debug)]
pub struct DefaultTagHelperProperty {
    pub attribute_name: String,
    pub attribute_structure: AttributeStructure,
    pub bound_attribute: BoundAttributeDescriptor,
    /// Field holding the tag helper instance.
    pub field_name: String,
    pub property_name: String,
    pub tag_helper: Arc<TagHelperDescriptor>,
    pub is_indexer_name_match: bool,
}

impl DefaultTagHelperProperty {
    /// Key of an indexer assignment: the attribute name with the indexer
    /// prefix removed.
    pub fn indexer_key(&self) -> Option<&str> {
        if !self.is_indexer_name_match {
            return None;
        }
        let prefix = self.bound_attribute.indexer_name_prefix.as_deref()?;
        self.attribute_name.get(prefix.len()..)
    }

    /// Whether the value is assigned as a string (buffered markup) or as a
    /// typed C# expression.
    pub fn is_string_value(&self) -> bool {
        if self.is_indexer_name_match {
            self.bound_attribute.is_indexer_string_property
        } else {
            self.bound_attribute.is_string_property
        }
    }

    /// CLR type the assigned value must have.
    pub fn value_type_name(&self) -> &str {
        if self.is_indexer_name_match {
            self.bound_attribute
                .indexer_type_name
                .as_deref()
                .unwrap_or(self.bound_attribute.type_name.as_str())
        } else {
            &self.bound_attribute.type_name
        }
    }
}

impl ExtensionNode for DefaultTagHelperProperty {
    fn name(&self) -> &'static str {
        "DefaultTagHelperProperty"
    }

    fn capability(&self) -> Capability {
        DEFAULT_TAG_HELPER
    }

    fn format_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.attribute_name.clone());
        fields.push(self.field_name.clone());
        fields.push(self.property_name.clone());
        fields.push(self.attribute_structure.to_string());
    }
}
