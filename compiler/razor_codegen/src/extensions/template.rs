use std::rc::Rc;

use razor_ir::extensions::TEMPLATE;
use razor_ir::{Capability, ExtensionNode, IntermediateNode};

use super::TEMPLATE_TYPE;
use crate::context::CodeRenderingContext;
use crate::node_writer::RuntimeNodeWriter;
use crate::scope::ScopeBuilder;
use crate::TargetExtension;

/// Writer parameter of a template lambda.
pub const TEMPLATE_WRITER: &str = "__razor_template_writer";

/// `item => new HelperResult(async(__razor_template_writer) => { ... })`
///
/// The template is an expression; whatever contains it supplies the
/// surrounding statement.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateTargetExtension;

impl TargetExtension for TemplateTargetExtension {
    fn capability(&self) -> Capability {
        TEMPLATE
    }

    fn write_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _ext: &dyn ExtensionNode,
    ) {
        let design_time = context.is_design_time();
        context
            .writer_mut()
            .write("item => ")
            .write_start_new_object(TEMPLATE_TYPE);
        {
            let mut lambda = context.build_async_lambda(&[TEMPLATE_WRITER]);
            if design_time {
                lambda.render_children(node);
            } else {
                let writer = Rc::new(RuntimeNodeWriter::redirected(TEMPLATE_WRITER));
                lambda.with_node_writer(writer, |context| context.render_children(node));
            }
        }
        context.writer_mut().write_end_method_invocation(false);
    }
}
