use razor_ir::annotations::{find_primary_class, find_primary_class_mut};
use razor_ir::{find_directive_references, CodeDocument, IntermediateNode, ReferenceError};

use super::{functions, take_body};
use crate::{IntermediateNodePass, PassPhase};

/// Moves `@functions` bodies into the primary class, in document order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionsDirectivePass;

impl IntermediateNodePass for FunctionsDirectivePass {
    fn name(&self) -> &'static str {
        "FunctionsDirectivePass"
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
        let references = find_directive_references(root, &functions());
        if references.is_empty() {
            return Ok(());
        }
        if find_primary_class(root).is_none() {
            tracing::debug!("no primary class, skipping @functions");
            return Ok(());
        }

        for reference in references {
            let mut directive = reference.remove(root)?;
            let members = take_body(&mut directive);
            if let Some(class) = find_primary_class_mut(root) {
                class.children_mut()?.extend(members);
            }
            for diagnostic in directive.take_diagnostics() {
                root.add_diagnostic(diagnostic);
            }
        }
        Ok(())
    }
}
