//! Source locations and spans.
//!
//! A [`SourceSpan`] identifies a region of an original template file by
//! absolute character offset plus zero-based line and column. Spans are
//! produced upstream by the parser and flow unchanged through the IR, the
//! pass pipeline and the renderer, which uses them for `#line` pragmas,
//! column padding and source mappings.

use std::fmt;

/// A point in a source (or generated) document.
///
/// All indices are zero-based and count characters, not bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// File the location belongs to, if known.
    pub file_path: Option<String>,
    /// Offset from the start of the document.
    pub absolute_index: usize,
    /// Zero-based line number.
    pub line_index: usize,
    /// Zero-based column on `line_index`.
    pub character_index: usize,
}

impl SourceLocation {
    /// Create a location without a file path.
    pub const fn new(absolute_index: usize, line_index: usize, character_index: usize) -> Self {
        SourceLocation {
            file_path: None,
            absolute_index,
            line_index,
            character_index,
        }
    }

    /// Attach a file path.
    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

/// A region of a document.
///
/// Layout mirrors the upstream parser's spans: start position plus length.
/// There is no "undefined" sentinel; absence is `Option<SourceSpan>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSpan {
    /// File the span belongs to, if known.
    pub file_path: Option<String>,
    /// Offset of the first character.
    pub absolute_index: usize,
    /// Zero-based line of the first character.
    pub line_index: usize,
    /// Zero-based column of the first character.
    pub character_index: usize,
    /// Length in characters.
    pub length: usize,
}

impl SourceSpan {
    /// Create a span without a file path.
    #[inline]
    pub const fn new(
        absolute_index: usize,
        line_index: usize,
        character_index: usize,
        length: usize,
    ) -> Self {
        SourceSpan {
            file_path: None,
            absolute_index,
            line_index,
            character_index,
            length,
        }
    }

    /// Create a span starting at `location`.
    pub fn from_location(location: &SourceLocation, length: usize) -> Self {
        SourceSpan {
            file_path: location.file_path.clone(),
            absolute_index: location.absolute_index,
            line_index: location.line_index,
            character_index: location.character_index,
            length,
        }
    }

    /// Attach a file path.
    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Offset one past the last character.
    #[inline]
    pub const fn end_index(&self) -> usize {
        self.absolute_index + self.length
    }

    /// Check if the span covers no characters.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check if an absolute offset falls inside the span.
    #[inline]
    pub const fn contains(&self, absolute_index: usize) -> bool {
        absolute_index >= self.absolute_index && absolute_index < self.end_index()
    }

    /// The start of the span as a location.
    pub fn start(&self) -> SourceLocation {
        SourceLocation {
            file_path: self.file_path.clone(),
            absolute_index: self.absolute_index,
            line_index: self.line_index,
            character_index: self.character_index,
        }
    }

    /// File path or the empty string.
    pub fn file_path_or_empty(&self) -> &str {
        self.file_path.as_deref().unwrap_or("")
    }
}

/// Renders as `path(line,column)` with one-based numbers, the shape most
/// build tools understand.
impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{})",
            self.file_path_or_empty(),
            self.line_index + 1,
            self.character_index + 1
        )
    }
}

#[cfg(test)]
mod tests;
