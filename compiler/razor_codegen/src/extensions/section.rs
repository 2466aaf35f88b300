use razor_ir::extensions::{SectionNode, SECTION};
use razor_ir::{Capability, ExtensionNode, IntermediateNode};

use crate::context::CodeRenderingContext;
use crate::scope::ScopeBuilder;
use crate::TargetExtension;

/// Parameter of the section body lambda.
pub const SECTION_WRITER: &str = "__razor_section_writer";

/// `DefineSection("name", async(__razor_section_writer) => { ... });`
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionTargetExtension;

impl TargetExtension for SectionTargetExtension {
    fn capability(&self) -> Capability {
        SECTION
    }

    fn write_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _ext: &dyn ExtensionNode,
    ) {
        let Some(section) = node.extension::<SectionNode>() else {
            return;
        };
        context
            .writer_mut()
            .write_start_method_invocation("DefineSection")
            .write_string_literal(&section.section_name)
            .write_parameter_separator();
        {
            let mut lambda = context.build_async_lambda(&[SECTION_WRITER]);
            lambda.render_children(node);
        }
        context.writer_mut().write_end_method_invocation(true);
    }
}
