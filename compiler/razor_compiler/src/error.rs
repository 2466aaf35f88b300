//! Contract errors of the driver.

use razor_codegen::RenderError;
use razor_ir::ReferenceError;

/// A compile call that could not produce output at all.
///
/// Problems in the template itself are never errors; they come back as
/// diagnostics on [`crate::CompileOutput`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("cannot compile a `{found}` node: compilation starts at a document node")]
    NotADocument { found: &'static str },

    #[error("a pass edited the tree through a stale reference: {0}")]
    Pass(#[from] ReferenceError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
