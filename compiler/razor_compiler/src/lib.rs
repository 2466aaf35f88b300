//! Portable Razor back-end driver.
//!
//! Takes a lowered template tree and its source document through the whole
//! back-end: the ordered pass pipeline, then a code target picked for the
//! document kind and mode, then rendering. No filesystem IO; callers hand in
//! the tree and get C# and diagnostics back.
//!
//! # Usage
//!
//! ```ignore
//! use razor_compiler::{CompileOptions, Engine};
//!
//! let engine = Engine::builder().build();
//! let output = engine.process(&document, &mut root, &CompileOptions::runtime())?;
//! assert!(output.success);
//! ```
//!
//! # Architecture
//!
//! ```text
//! razor_diagnostic, razor_ir
//!        ↓            ↓
//!  razor_passes   razor_codegen
//!          \        /
//!        razor_compiler  ← this crate
//! ```

mod engine;
mod error;
mod options;
mod output;

use std::sync::Once;

pub use engine::{Engine, EngineBuilder};
pub use error::CompileError;
pub use options::CompileOptions;
pub use output::CompileOutput;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=razor_passes=debug` or `RUST_LOG=razor_codegen=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Render diagnostics one per line as `file(line,col): error RZxxxx: message`.
///
/// Spans without a file of their own are reported against the compiled
/// document's path.
pub fn render_diagnostics(output: &CompileOutput) -> String {
    let mut rendered = String::new();
    for diagnostic in &output.csharp.diagnostics {
        let mut diagnostic = diagnostic.clone();
        if let Some(span) = diagnostic.span.as_mut() {
            if span.file_path.is_none() {
                span.file_path.clone_from(&output.file_path);
            }
        }
        rendered.push_str(&diagnostic.to_string());
        rendered.push('\n');
    }
    rendered
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
