//! Hoists literal tag helper attribute values into static fields.
//!
//! An unbound attribute or a string-typed property whose value is one piece
//! of literal markup needs no per-request work. Each distinct
//! `(name, value, structure)` becomes a `__tagHelperAttribute_N` field at
//! the top of the class and every use refers to it.

use razor_ir::annotations::{find_primary_class, find_primary_class_mut};
use razor_ir::extensions::{
    DefaultTagHelperHtmlAttribute, DefaultTagHelperProperty, PreallocatedTagHelperHtmlAttribute,
    PreallocatedTagHelperHtmlAttributeValue, PreallocatedTagHelperProperty,
    PreallocatedTagHelperPropertyValue,
};
use razor_ir::{
    find_descendant_references, AttributeStructure, CodeDocument, IntermediateNode, NodeKind,
    ReferenceError,
};

use crate::pass::is_design_time;
use crate::{IntermediateNodePass, PassPhase, LATE_FEATURE_ORDER};

/// Prefix of hoisted attribute field names.
pub const PREALLOCATED_ATTRIBUTE_PREFIX: &str = "__tagHelperAttribute_";

#[derive(Clone, Copy, Debug, Default)]
pub struct PreallocatedTagHelperAttributeOptimizationPass;

/// A lowered attribute eligible for hoisting.
enum Candidate {
    Html {
        attribute_name: String,
        attribute_structure: AttributeStructure,
        value: String,
    },
    Property {
        property: DefaultTagHelperProperty,
        value: String,
    },
}

/// Text of a value that is exactly one literal content node.
fn literal_value(node: &IntermediateNode) -> Option<String> {
    match node.children() {
        [only] if matches!(only.kind(), NodeKind::HtmlContent) => Some(only.token_content()),
        _ => None,
    }
}

fn candidate(node: &IntermediateNode) -> Option<Candidate> {
    if let Some(attribute) = node.extension::<DefaultTagHelperHtmlAttribute>() {
        return Some(Candidate::Html {
            attribute_name: attribute.attribute_name.clone(),
            attribute_structure: attribute.attribute_structure,
            value: literal_value(node)?,
        });
    }
    let property = node.extension::<DefaultTagHelperProperty>()?;
    if !property.is_string_value() {
        return None;
    }
    Some(Candidate::Property {
        value: literal_value(node)?,
        property: property.clone(),
    })
}

/// Declarations hoisted so far; they occupy the first class slots.
#[derive(Default)]
struct Declarations {
    count: usize,
}

impl Declarations {
    /// Variable holding `declaration`, reusing an equal existing one.
    fn declare<T>(
        &mut self,
        class: &mut IntermediateNode,
        make: impl FnOnce(String) -> T,
        existing: impl Fn(&T) -> bool,
    ) -> Result<String, ReferenceError>
    where
        T: razor_ir::ExtensionNode + VariableName,
    {
        let found = class
            .children()
            .iter()
            .filter_map(IntermediateNode::extension::<T>)
            .find(|&declaration| existing(declaration))
            .map(|declaration| declaration.variable_name().to_string());
        if let Some(variable_name) = found {
            return Ok(variable_name);
        }

        let variable_name = format!("{PREALLOCATED_ATTRIBUTE_PREFIX}{}", self.count);
        let node = IntermediateNode::extension_node(make(variable_name.clone()));
        class.children_mut()?.insert(self.count, node);
        self.count += 1;
        Ok(variable_name)
    }
}

trait VariableName {
    fn variable_name(&self) -> &str;
}

impl VariableName for PreallocatedTagHelperHtmlAttributeValue {
    fn variable_name(&self) -> &str {
        &self.variable_name
    }
}

impl VariableName for PreallocatedTagHelperPropertyValue {
    fn variable_name(&self) -> &str {
        &self.variable_name
    }
}

impl IntermediateNodePass for PreallocatedTagHelperAttributeOptimizationPass {
    fn name(&self) -> &'static str {
        "PreallocatedTagHelperAttributeOptimizationPass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::Optimization
    }

    /// After default tag helper lowering.
    fn order(&self) -> i32 {
        LATE_FEATURE_ORDER + 1
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        _document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        if is_design_time(root) || find_primary_class(root).is_none() {
            return Ok(());
        }
        let references = find_descendant_references(root, |node| {
            node.is_extension::<DefaultTagHelperHtmlAttribute>()
                || node.is_extension::<DefaultTagHelperProperty>()
        });

        let mut declarations = Declarations::default();
        for reference in references {
            let Some(hoistable) = candidate(reference.resolve(root)?) else {
                continue;
            };
            let Some(class) = find_primary_class_mut(root) else {
                return Ok(());
            };

            let replacement = match hoistable {
                Candidate::Html {
                    attribute_name,
                    attribute_structure,
                    value,
                } => {
                    let variable_name = declarations.declare(
                        class,
                        |variable_name| PreallocatedTagHelperHtmlAttributeValue {
                            variable_name,
                            attribute_name: attribute_name.clone(),
                            value: value.clone(),
                            attribute_structure,
                        },
                        |existing: &PreallocatedTagHelperHtmlAttributeValue| {
                            existing.attribute_name == attribute_name
                                && existing.value == value
                                && existing.attribute_structure == attribute_structure
                        },
                    )?;
                    IntermediateNode::extension_node(PreallocatedTagHelperHtmlAttribute {
                        variable_name,
                    })
                }
                Candidate::Property { property, value } => {
                    let variable_name = declarations.declare(
                        class,
                        |variable_name| PreallocatedTagHelperPropertyValue {
                            variable_name,
                            attribute_name: property.attribute_name.clone(),
                            value: value.clone(),
                            attribute_structure: property.attribute_structure,
                        },
                        |existing: &PreallocatedTagHelperPropertyValue| {
                            existing.attribute_name == property.attribute_name
                                && existing.value == value
                                && existing.attribute_structure == property.attribute_structure
                        },
                    )?;
                    IntermediateNode::extension_node(PreallocatedTagHelperProperty {
                        variable_name,
                        attribute_name: property.attribute_name,
                        attribute_structure: property.attribute_structure,
                        bound_attribute: property.bound_attribute,
                        field_name: property.field_name,
                        property_name: property.property_name,
                        tag_helper: property.tag_helper,
                        is_indexer_name_match: property.is_indexer_name_match,
                    })
                }
            };
            reference.replace(root, replacement)?;
        }
        if declarations.count > 0 {
            tracing::debug!(count = declarations.count, "preallocated attribute values");
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
