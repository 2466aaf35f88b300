//! Source documents handed to the back-end.
//!
//! The back-end never reads files. Hosts build a [`SourceDocument`] for the
//! template and each imports file, compute checksums with whatever hashing
//! they already use, and pass the bundle as a [`CodeDocument`].

use std::fmt;
use std::fmt::Write as _;

/// Hash algorithm of a source checksum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChecksumAlgorithm {
    Sha1,
    Sha256,
}

impl ChecksumAlgorithm {
    /// Algorithm GUID understood by `#pragma checksum`.
    pub fn guid(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha1 => "{ff1816ec-aa5e-4d10-87f7-6f4963833460}",
            ChecksumAlgorithm::Sha256 => "{8829d00f-11b8-4213-878b-770e8597ac16}",
        }
    }

    /// Name used by the source checksum attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha1 => "SHA1",
            ChecksumAlgorithm::Sha256 => "SHA256",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Digest of a source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub bytes: Vec<u8>,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm, bytes: Vec<u8>) -> Self {
        Checksum { algorithm, bytes }
    }

    /// Parse a hex digest. Returns `None` for odd lengths or non-hex input.
    pub fn from_hex(algorithm: ChecksumAlgorithm, hex: &str) -> Option<Self> {
        if hex.len() % 2 != 0 {
            return None;
        }
        let bytes = (0..hex.len())
            .step_by(2)
            .map(|i| hex.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
            .collect::<Option<Vec<u8>>>()?;
        Some(Checksum { algorithm, bytes })
    }

    /// Lowercase hex digest.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len() * 2);
        for byte in &self.bytes {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

/// Text of one template file, indexed by character.
#[derive(Clone, Debug, Default)]
pub struct SourceDocument {
    file_path: Option<String>,
    relative_path: Option<String>,
    text: String,
    chars: Vec<char>,
    checksum: Option<Checksum>,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        SourceDocument {
            file_path: None,
            relative_path: None,
            text,
            chars,
            checksum: None,
        }
    }

    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Project-relative path, used to build the compiled item identifier.
    #[must_use]
    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = Some(relative_path.into());
        self
    }

    #[must_use]
    pub fn with_checksum(mut self, checksum: Checksum) -> Self {
        self.checksum = Some(checksum);
        self
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn checksum(&self) -> Option<&Checksum> {
        self.checksum.as_ref()
    }

    /// Character at a zero-based character offset.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Length in characters.
    pub fn len_chars(&self) -> usize {
        self.chars.len()
    }

    /// Identifier used by the metadata attributes: `/` followed by the
    /// relative path with `\` normalized to `/`.
    pub fn identifier(&self) -> Option<String> {
        let relative = self.relative_path.as_deref()?;
        if relative.is_empty() {
            return None;
        }
        let normalized = relative.replace('\\', "/");
        if normalized.starts_with('/') {
            Some(normalized)
        } else {
            Some(format!("/{normalized}"))
        }
    }
}

/// Everything a pass may consult besides the tree itself.
#[derive(Clone, Debug, Default)]
pub struct CodeDocument {
    pub source: SourceDocument,
    /// Imports files applied to this document, outermost first.
    pub imports: Vec<SourceDocument>,
}

impl CodeDocument {
    pub fn new(source: SourceDocument) -> Self {
        CodeDocument {
            source,
            imports: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_import(mut self, import: SourceDocument) -> Self {
        self.imports.push(import);
        self
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
