//! Payloads carried by the built-in node kinds.
//!
//! Each payload holds only the node's own data. Children, source span,
//! annotations and diagnostics live on [`IntermediateNode`](super::IntermediateNode).

use std::fmt;
use std::sync::Arc;

use crate::descriptors::{
    BoundAttributeDescriptor, DirectiveDescriptor, DirectiveTokenDescriptor, TagHelperDescriptor,
};
use crate::document::Checksum;
use crate::extension::ExtensionNode;
use crate::options::CodeGenerationOptions;

/// Every kind of node the back-end knows how to lower and render.
///
/// The set is closed except for [`NodeKind::Extension`], which carries a
/// node whose renderer is found at render time through the code target's
/// capability registry.
#[derive(Clone, Debug)]
pub enum NodeKind {
    Document(DocumentNode),
    Checksum(ChecksumNode),
    UsingDirective(UsingDirectiveNode),
    NamespaceDeclaration(NamespaceDeclarationNode),
    ClassDeclaration(ClassDeclarationNode),
    MethodDeclaration(MethodDeclarationNode),
    FieldDeclaration(FieldDeclarationNode),
    PropertyDeclaration(PropertyDeclarationNode),
    /// Literal markup. Children are HTML tokens.
    HtmlContent,
    HtmlAttribute(HtmlAttributeNode),
    HtmlAttributeValue(AttributeValueNode),
    /// `@expr`. Children are C# tokens and templates.
    CSharpExpression,
    /// `@{ ... }`. Children are C# tokens.
    CSharpCode,
    CSharpExpressionAttributeValue(AttributeValueNode),
    CSharpCodeAttributeValue(AttributeValueNode),
    Directive(DirectiveNode),
    DirectiveToken(DirectiveTokenNode),
    /// A directive the parser recovered from. Carries its own diagnostics.
    MalformedDirective(DirectiveNode),
    TagHelper(TagHelperNode),
    /// Content between a tag helper's start and end tag.
    TagHelperBody,
    TagHelperProperty(TagHelperPropertyNode),
    TagHelperHtmlAttribute(TagHelperHtmlAttributeNode),
    Token(IntermediateToken),
    Extension(Box<dyn ExtensionNode>),
}

impl NodeKind {
    /// Short kind name used by the tree printer and in tracing fields.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document(_) => "Document",
            NodeKind::Checksum(_) => "Checksum",
            NodeKind::UsingDirective(_) => "UsingDirective",
            NodeKind::NamespaceDeclaration(_) => "NamespaceDeclaration",
            NodeKind::ClassDeclaration(_) => "ClassDeclaration",
            NodeKind::MethodDeclaration(_) => "MethodDeclaration",
            NodeKind::FieldDeclaration(_) => "FieldDeclaration",
            NodeKind::PropertyDeclaration(_) => "PropertyDeclaration",
            NodeKind::HtmlContent => "HtmlContent",
            NodeKind::HtmlAttribute(_) => "HtmlAttribute",
            NodeKind::HtmlAttributeValue(_) => "HtmlAttributeValue",
            NodeKind::CSharpExpression => "CSharpExpression",
            NodeKind::CSharpCode => "CSharpCode",
            NodeKind::CSharpExpressionAttributeValue(_) => "CSharpExpressionAttributeValue",
            NodeKind::CSharpCodeAttributeValue(_) => "CSharpCodeAttributeValue",
            NodeKind::Directive(_) => "Directive",
            NodeKind::DirectiveToken(_) => "DirectiveToken",
            NodeKind::MalformedDirective(_) => "MalformedDirective",
            NodeKind::TagHelper(_) => "TagHelper",
            NodeKind::TagHelperBody => "TagHelperBody",
            NodeKind::TagHelperProperty(_) => "TagHelperProperty",
            NodeKind::TagHelperHtmlAttribute(_) => "TagHelperHtmlAttribute",
            NodeKind::Token(_) => "Token",
            NodeKind::Extension(ext) => ext.name(),
        }
    }

    /// Kinds whose child list is fixed and empty.
    pub fn has_fixed_children(&self) -> bool {
        match self {
            NodeKind::Checksum(_)
            | NodeKind::UsingDirective(_)
            | NodeKind::FieldDeclaration(_)
            | NodeKind::PropertyDeclaration(_)
            | NodeKind::DirectiveToken(_)
            | NodeKind::Token(_) => true,
            NodeKind::Extension(ext) => ext.has_fixed_children(),
            _ => false,
        }
    }

    /// Append the printable fields of this kind, in declaration order.
    pub fn format_fields(&self, fields: &mut Vec<String>) {
        match self {
            NodeKind::Document(doc) => {
                fields.push(doc.document_kind.clone().unwrap_or_default());
            }
            NodeKind::Checksum(node) => {
                fields.push(node.file_path.clone().unwrap_or_default());
                fields.push(node.checksum.algorithm.to_string());
                fields.push(node.checksum.to_hex());
            }
            NodeKind::UsingDirective(node) => fields.push(node.content.clone()),
            NodeKind::NamespaceDeclaration(node) => fields.push(node.content.clone()),
            NodeKind::ClassDeclaration(node) => {
                fields.push(node.modifiers.join(" "));
                fields.push(node.class_name.clone());
                fields.push(node.base_type.clone().unwrap_or_default());
                fields.push(node.interfaces.join(", "));
            }
            NodeKind::MethodDeclaration(node) => {
                fields.push(node.modifiers.join(" "));
                fields.push(node.return_type.clone().unwrap_or_default());
                fields.push(node.method_name.clone());
            }
            NodeKind::FieldDeclaration(node) => {
                fields.push(node.modifiers.join(" "));
                fields.push(node.field_type.clone());
                fields.push(node.field_name.clone());
            }
            NodeKind::PropertyDeclaration(node) => {
                fields.push(node.modifiers.join(" "));
                fields.push(node.property_type.clone());
                fields.push(node.property_name.clone());
            }
            NodeKind::HtmlAttribute(node) => {
                fields.push(node.prefix.clone());
                fields.push(node.suffix.clone());
            }
            NodeKind::HtmlAttributeValue(node)
            | NodeKind::CSharpExpressionAttributeValue(node)
            | NodeKind::CSharpCodeAttributeValue(node) => fields.push(node.prefix.clone()),
            NodeKind::Directive(node) | NodeKind::MalformedDirective(node) => {
                fields.push(node.directive_name.clone());
            }
            NodeKind::DirectiveToken(node) => fields.push(node.content.clone()),
            NodeKind::TagHelper(node) => {
                fields.push(node.tag_name.clone());
                fields.push(node.tag_mode.to_string());
            }
            NodeKind::TagHelperProperty(node) => {
                fields.push(node.attribute_name.clone());
                fields.push(node.tag_helper.name.clone());
                fields.push(node.bound_attribute.property_name.clone());
                fields.push(node.attribute_structure.to_string());
            }
            NodeKind::TagHelperHtmlAttribute(node) => {
                fields.push(node.attribute_name.clone());
                fields.push(node.attribute_structure.to_string());
            }
            NodeKind::Token(token) => {
                fields.push(token.kind.to_string());
                fields.push(token.content.clone());
            }
            NodeKind::Extension(ext) => ext.format_fields(fields),
            NodeKind::HtmlContent
            | NodeKind::CSharpExpression
            | NodeKind::CSharpCode
            | NodeKind::TagHelperBody => {}
        }
    }
}

impl Clone for Box<dyn ExtensionNode> {
    fn clone(&self) -> Self {
        (**self).deep_clone()
    }
}

/// Root of every tree. Carries the per-document generation options.
#[derive(Clone, Debug, Default)]
pub struct DocumentNode {
    /// Set once by the document classifier. `None` means "not classified".
    pub document_kind: Option<String>,
    pub options: CodeGenerationOptions,
}

#[derive(Clone, Debug)]
pub struct ChecksumNode {
    pub file_path: Option<String>,
    pub checksum: Checksum,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsingDirectiveNode {
    /// Namespace text without the `using` keyword, e.g. `System.Linq`.
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceDeclarationNode {
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassDeclarationNode {
    pub modifiers: Vec<String>,
    pub class_name: String,
    pub base_type: Option<String>,
    pub interfaces: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodParameter {
    pub modifiers: Vec<String>,
    pub type_name: String,
    pub parameter_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodDeclarationNode {
    pub modifiers: Vec<String>,
    pub return_type: Option<String>,
    pub method_name: String,
    pub parameters: Vec<MethodParameter>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDeclarationNode {
    pub modifiers: Vec<String>,
    pub field_type: String,
    pub field_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyDeclarationNode {
    pub modifiers: Vec<String>,
    pub property_type: String,
    pub property_name: String,
}

/// A plain HTML attribute whose value contains dynamic parts.
///
/// `prefix` is the text up to and including the opening quote
/// (` class="`), `suffix` the closing quote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlAttributeNode {
    pub attribute_name: String,
    pub prefix: String,
    pub suffix: String,
}

/// One piece of an attribute value. `prefix` is the whitespace before it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeValueNode {
    pub prefix: String,
}

#[derive(Clone, Debug)]
pub struct DirectiveNode {
    pub directive_name: String,
    pub descriptor: Arc<DirectiveDescriptor>,
}

#[derive(Clone, Debug)]
pub struct DirectiveTokenNode {
    pub content: String,
    pub descriptor: DirectiveTokenDescriptor,
}

#[derive(Clone, Debug)]
pub struct TagHelperNode {
    pub tag_name: String,
    pub tag_mode: TagMode,
    /// Resolved descriptors, in binding order.
    pub tag_helpers: Vec<Arc<TagHelperDescriptor>>,
}

#[derive(Clone, Debug)]
pub struct TagHelperPropertyNode {
    pub attribute_name: String,
    pub attribute_structure: AttributeStructure,
    pub bound_attribute: BoundAttributeDescriptor,
    pub tag_helper: Arc<TagHelperDescriptor>,
    /// True when the attribute matched through the indexer name prefix
    /// (`asp-route-id` against `asp-route-`).
    pub is_indexer_name_match: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagHelperHtmlAttributeNode {
    pub attribute_name: String,
    pub attribute_structure: AttributeStructure,
}

/// Leaf text. Every literal and code fragment ends up in one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntermediateToken {
    pub kind: TokenKind,
    pub content: String,
}

impl IntermediateToken {
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        IntermediateToken {
            kind,
            content: content.into(),
        }
    }

    pub fn is_html(&self) -> bool {
        self.kind == TokenKind::Html
    }

    pub fn is_csharp(&self) -> bool {
        self.kind == TokenKind::CSharp
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Html,
    CSharp,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Html => write!(f, "Html"),
            TokenKind::CSharp => write!(f, "CSharp"),
            TokenKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// How a tag helper element was written in markup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagMode {
    #[default]
    StartTagAndEndTag,
    SelfClosing,
    StartTagOnly,
}

impl TagMode {
    /// Member name of the runtime `TagMode` enum.
    pub fn as_str(self) -> &'static str {
        match self {
            TagMode::StartTagAndEndTag => "StartTagAndEndTag",
            TagMode::SelfClosing => "SelfClosing",
            TagMode::StartTagOnly => "StartTagOnly",
        }
    }
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quoting of an attribute in the original markup.
///
/// Also names the runtime `HtmlAttributeValueStyle` member used when the
/// attribute is re-emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttributeStructure {
    #[default]
    DoubleQuotes,
    SingleQuotes,
    NoQuotes,
    Minimized,
}

impl AttributeStructure {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeStructure::DoubleQuotes => "DoubleQuotes",
            AttributeStructure::SingleQuotes => "SingleQuotes",
            AttributeStructure::NoQuotes => "NoQuotes",
            AttributeStructure::Minimized => "Minimized",
        }
    }
}

impl fmt::Display for AttributeStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
