//! Hosting metadata attributes.

use razor_ir::extensions::{CompiledItemAttribute, SourceChecksumAttribute, METADATA_ATTRIBUTE};
use razor_ir::{Capability, ExtensionNode, IntermediateNode};

use crate::context::CodeRenderingContext;
use crate::TargetExtension;

const HOSTING_NAMESPACE: &str = "global::Microsoft.AspNetCore.Razor.Hosting";

#[derive(Clone, Copy, Debug, Default)]
pub struct MetadataAttributeTargetExtension;

impl TargetExtension for MetadataAttributeTargetExtension {
    fn capability(&self) -> Capability {
        METADATA_ATTRIBUTE
    }

    fn write_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        node: &IntermediateNode,
        _ext: &dyn ExtensionNode,
    ) {
        if let Some(item) = node.extension::<CompiledItemAttribute>() {
            // [assembly: ...RazorCompiledItemAttribute(typeof(Ns.Class), @"kind", @"/id")]
            context
                .writer_mut()
                .write("[assembly: ")
                .write(HOSTING_NAMESPACE)
                .write(".RazorCompiledItemAttribute(typeof(")
                .write(&item.type_name)
                .write(")")
                .write_parameter_separator()
                .write_verbatim_string_literal(&item.kind)
                .write_parameter_separator()
                .write_verbatim_string_literal(&item.identifier)
                .write_line(")]");
        } else if let Some(checksum) = node.extension::<SourceChecksumAttribute>() {
            context
                .writer_mut()
                .write("[")
                .write(HOSTING_NAMESPACE)
                .write(".RazorSourceChecksumAttribute(")
                .write_verbatim_string_literal(&checksum.checksum_algorithm)
                .write_parameter_separator()
                .write_verbatim_string_literal(&checksum.checksum)
                .write_parameter_separator()
                .write_verbatim_string_literal(&checksum.identifier)
                .write_line(")]");
        }
    }
}
