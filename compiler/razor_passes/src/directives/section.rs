use razor_ir::annotations::find_primary_class;
use razor_ir::extensions::SectionNode;
use razor_ir::{find_directive_references, CodeDocument, IntermediateNode, ReferenceError};

use super::{first_token, section, take_body};
use crate::{IntermediateNodePass, PassPhase};

/// Replaces each `@section` directive, in place, with a [`SectionNode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionDirectivePass;

impl IntermediateNodePass for SectionDirectivePass {
    fn name(&self) -> &'static str {
        "SectionDirectivePass"
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
        let references = find_directive_references(root, &section());
        if references.is_empty() {
            return Ok(());
        }
        if find_primary_class(root).is_none() {
            tracing::debug!("no primary class, skipping @section");
            return Ok(());
        }

        // Innermost first, so a nested directive is rewritten before its
        // ancestor's children move.
        for reference in references.iter().rev() {
            let directive = reference.resolve(root)?;
            let name = first_token(directive).unwrap_or_default().to_string();
            let replacement = IntermediateNode::extension_node(SectionNode::new(name))
                .with_optional_source(directive.source().cloned());

            let (mut directive, section_ref) = reference.replace(root, replacement)?;
            let body = take_body(&mut directive);
            let section = section_ref.resolve_mut(root)?;
            section.children_mut()?.extend(body);
            for diagnostic in directive.take_diagnostics() {
                section.add_diagnostic(diagnostic);
            }
        }
        Ok(())
    }
}
