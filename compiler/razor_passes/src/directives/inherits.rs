use razor_diagnostic::duplicate_directive;
use razor_ir::annotations::{find_primary_class, find_primary_class_mut};
use razor_ir::{find_directive_references, CodeDocument, IntermediateNode, ReferenceError};

use super::{first_token, inherits};
use crate::{IntermediateNodePass, PassPhase};

/// Sets the primary class base type from `@inherits`.
///
/// The first occurrence carrying a type wins. Every occurrence is removed;
/// the extras are reported as duplicates on the document.
#[derive(Clone, Copy, Debug, Default)]
pub struct InheritsDirectivePass;

impl IntermediateNodePass for InheritsDirectivePass {
    fn name(&self) -> &'static str {
        "InheritsDirectivePass"
    }

    fn phase(&self) -> PassPhase {
        PassPhase::DirectiveClassifier
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(
        &self,
        _document: &CodeDocument,
        root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        let descriptor = inherits();
        let references = find_directive_references(root, &descriptor);
        if references.is_empty() {
            return Ok(());
        }
        if find_primary_class(root).is_none() {
            tracing::debug!("no primary class, skipping @inherits");
            return Ok(());
        }

        let mut base_type = None;
        let mut diagnostics = Vec::new();
        for (index, reference) in references.iter().enumerate() {
            let mut directive = reference.remove(root)?;
            if base_type.is_none() {
                base_type = first_token(&directive).map(str::to_string);
            }
            if index > 0 {
                diagnostics.push(duplicate_directive(
                    directive.source().cloned(),
                    &descriptor.directive,
                ));
            }
            diagnostics.extend(directive.take_diagnostics());
        }

        if let Some(base_type) = base_type {
            if let Some(class) = find_primary_class_mut(root).and_then(IntermediateNode::as_class_mut)
            {
                class.base_type = Some(base_type);
            }
        }
        for diagnostic in diagnostics {
            root.add_diagnostic(diagnostic);
        }
        Ok(())
    }
}
