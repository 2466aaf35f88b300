//! Error codes for back-end diagnostics.
//!
//! Each code is a unique identifier (e.g. `RZ2000`) whose first digit gives
//! the producing phase. The numbering follows the upstream parser so that
//! codes carried by malformed-directive nodes and codes raised here share one
//! namespace.

use std::fmt;

/// Error codes for all back-end diagnostics.
///
/// Format: RZ#### where the first digit indicates the phase:
/// - RZ1xxx: Parse errors (carried in from upstream)
/// - RZ2xxx: Semantic / code generation errors
/// - RZ3xxx: Design-time tooling errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // Parse errors (RZ1xxx)
    /// Directive could not be fully parsed
    RZ1035,

    // Semantic errors (RZ2xxx)
    /// Code target has no extension for a node's capability
    RZ2000,
    /// Directive may only appear once per document
    RZ2001,
    /// Code blocks are not supported inside tag helper attributes
    RZ2006,
    /// Inline markup is not supported inside non-string tag helper attributes
    RZ2007,

    // Design-time errors (RZ3xxx)
    /// Directive token kind cannot be expressed in design-time code
    RZ3000,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::RZ1035,
        ErrorCode::RZ2000,
        ErrorCode::RZ2001,
        ErrorCode::RZ2006,
        ErrorCode::RZ2007,
        ErrorCode::RZ3000,
    ];

    /// The code as printed, e.g. `"RZ2000"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RZ1035 => "RZ1035",
            ErrorCode::RZ2000 => "RZ2000",
            ErrorCode::RZ2001 => "RZ2001",
            ErrorCode::RZ2006 => "RZ2006",
            ErrorCode::RZ2007 => "RZ2007",
            ErrorCode::RZ3000 => "RZ3000",
        }
    }

    /// Check if this code originates in the parser (RZ1xxx range).
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ErrorCode::RZ1035)
    }

    /// Check if this is a semantic / code generation code (RZ2xxx range).
    pub fn is_semantic_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::RZ2000 | ErrorCode::RZ2001 | ErrorCode::RZ2006 | ErrorCode::RZ2007
        )
    }

    /// Check if this is a design-time tooling code (RZ3xxx range).
    pub fn is_design_time_error(&self) -> bool {
        matches!(self, ErrorCode::RZ3000)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"RZ2000"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
