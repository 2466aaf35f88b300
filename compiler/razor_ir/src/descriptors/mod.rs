//! Read-only descriptors supplied by the upstream binder and directive
//! registry.
//!
//! Descriptors arrive fully resolved. Nothing in the back-end decides which
//! attribute binds to which tag helper; it only reads these.

use std::fmt;

/// Descriptor kind for tag helpers executed through the default runtime
/// protocol (`ITagHelper`).
pub const DEFAULT_TAG_HELPER_KIND: &str = "ITagHelper";

/// A bindable tag helper component.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagHelperDescriptor {
    /// Execution protocol. See [`DEFAULT_TAG_HELPER_KIND`].
    pub kind: String,
    /// Display name, usually the short type name.
    pub name: String,
    /// Fully qualified CLR type name.
    pub type_name: String,
    pub assembly_name: String,
    pub bound_attributes: Vec<BoundAttributeDescriptor>,
}

impl TagHelperDescriptor {
    /// Create a default-kind descriptor.
    pub fn new(type_name: impl Into<String>, assembly_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let name = type_name
            .rsplit('.')
            .next()
            .unwrap_or(type_name.as_str())
            .to_string();
        TagHelperDescriptor {
            kind: DEFAULT_TAG_HELPER_KIND.to_string(),
            name,
            type_name,
            assembly_name: assembly_name.into(),
            bound_attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn with_bound_attribute(mut self, attribute: BoundAttributeDescriptor) -> Self {
        self.bound_attributes.push(attribute);
        self
    }

    pub fn is_default_kind(&self) -> bool {
        self.kind == DEFAULT_TAG_HELPER_KIND
    }

    /// Bound attribute matching an HTML attribute name, either exactly or
    /// through an indexer prefix.
    pub fn find_bound_attribute(&self, attribute_name: &str) -> Option<&BoundAttributeDescriptor> {
        self.bound_attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(attribute_name))
            .or_else(|| {
                self.bound_attributes
                    .iter()
                    .find(|a| a.matches_indexer_prefix(attribute_name))
            })
    }
}

/// A property of a tag helper that markup attributes bind to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundAttributeDescriptor {
    /// HTML attribute name, e.g. `asp-for`.
    pub name: String,
    /// CLR property the attribute sets, e.g. `For`.
    pub property_name: String,
    /// CLR type of the property.
    pub type_name: String,
    pub is_string_property: bool,
    pub is_enum: bool,
    /// Prefix that routes `prefix-key="..."` to `Property["key"]`.
    pub indexer_name_prefix: Option<String>,
    /// Value type of the dictionary property.
    pub indexer_type_name: Option<String>,
    pub is_indexer_string_property: bool,
}

impl BoundAttributeDescriptor {
    pub fn new(
        name: impl Into<String>,
        property_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        let type_name = type_name.into();
        let is_string_property = type_name == "System.String" || type_name == "string";
        BoundAttributeDescriptor {
            name: name.into(),
            property_name: property_name.into(),
            type_name,
            is_string_property,
            ..BoundAttributeDescriptor::default()
        }
    }

    #[must_use]
    pub fn with_enum(mut self) -> Self {
        self.is_enum = true;
        self
    }

    /// Route `prefix*` attributes to this dictionary property.
    #[must_use]
    pub fn with_indexer(mut self, prefix: impl Into<String>, value_type: impl Into<String>) -> Self {
        let value_type = value_type.into();
        self.is_indexer_string_property = value_type == "System.String" || value_type == "string";
        self.indexer_name_prefix = Some(prefix.into());
        self.indexer_type_name = Some(value_type);
        self
    }

    pub fn is_indexer(&self) -> bool {
        self.indexer_name_prefix.is_some()
    }

    /// Check if `attribute_name` binds through the indexer prefix.
    ///
    /// The bare prefix itself (`asp-route-`) names no key and does not match.
    pub fn matches_indexer_prefix(&self, attribute_name: &str) -> bool {
        self.indexer_name_prefix.as_deref().is_some_and(|prefix| {
            attribute_name.len() > prefix.len()
                && attribute_name
                    .get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }
}

/// How a directive's body is shaped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Tokens only, e.g. `@inherits Base`.
    SingleLine,
    /// Tokens followed by a markup block, e.g. `@section Name { <p/> }`.
    RazorBlock,
    /// Tokens followed by a code block, e.g. `@functions { ... }`.
    CodeBlock,
}

/// Where and how often a directive may appear.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DirectiveUsage {
    #[default]
    Unrestricted,
    FileScopedSinglyOccurring,
    FileScopedMultipleOccurring,
}

/// Kinds of directive token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveTokenKind {
    Type,
    Namespace,
    Member,
    String,
    Attribute,
    Boolean,
}

impl fmt::Display for DirectiveTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DirectiveTokenKind::Type => "Type",
            DirectiveTokenKind::Namespace => "Namespace",
            DirectiveTokenKind::Member => "Member",
            DirectiveTokenKind::String => "String",
            DirectiveTokenKind::Attribute => "Attribute",
            DirectiveTokenKind::Boolean => "Boolean",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectiveTokenDescriptor {
    pub kind: DirectiveTokenKind,
    pub name: Option<String>,
    pub optional: bool,
}

impl DirectiveTokenDescriptor {
    pub fn new(kind: DirectiveTokenKind) -> Self {
        DirectiveTokenDescriptor {
            kind,
            name: None,
            optional: false,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A registered directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectiveDescriptor {
    /// Keyword without the `@`, e.g. `inherits`.
    pub directive: String,
    pub kind: DirectiveKind,
    pub usage: DirectiveUsage,
    pub tokens: Vec<DirectiveTokenDescriptor>,
}

impl DirectiveDescriptor {
    pub fn new(directive: impl Into<String>, kind: DirectiveKind) -> Self {
        DirectiveDescriptor {
            directive: directive.into(),
            kind,
            usage: DirectiveUsage::default(),
            tokens: Vec::new(),
        }
    }

    pub fn single_line(directive: impl Into<String>) -> Self {
        Self::new(directive, DirectiveKind::SingleLine)
    }

    pub fn razor_block(directive: impl Into<String>) -> Self {
        Self::new(directive, DirectiveKind::RazorBlock)
    }

    pub fn code_block(directive: impl Into<String>) -> Self {
        Self::new(directive, DirectiveKind::CodeBlock)
    }

    #[must_use]
    pub fn with_usage(mut self, usage: DirectiveUsage) -> Self {
        self.usage = usage;
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: DirectiveTokenDescriptor) -> Self {
        self.tokens.push(token);
        self
    }
}

#[cfg(test)]
mod tests;
