//! Data model for parsed source documents.
//!
//! All entities are created fresh per generation pass and discarded once
//! the corresponding artifact or diagnostic has been emitted.

use std::path::{Path, PathBuf};

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::CiMap;

/// A source document supplied by the host build pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Path of the originating file.
    pub path: PathBuf,
    /// Raw document text.
    pub text: String,
}

impl Document {
    /// Create a document from a path and its raw text.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Whether the path carries the `.sql` extension, case-insensitively.
    ///
    /// The batch driver is extension-agnostic; hosts that mirror the
    /// original pipeline use this to pre-filter their file set.
    pub fn has_sql_extension(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
    }
}

/// A single named query extracted from a class span.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryEntry {
    /// Query text with interior comment lines preserved, outer whitespace
    /// trimmed.
    pub body: String,
    /// Leading comment block with markers stripped, newline-joined.
    pub summary: String,
}

/// All queries collected for one (namespace, class) pair.
///
/// Multiple tag occurrences of the same pair within a document accumulate
/// into the same group; query names are case-insensitive keys with
/// last-write-wins overwrite semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassGroup {
    /// Target namespace, display casing from its first tag occurrence.
    pub namespace: SmolStr,
    /// Target class name, display casing from its first tag occurrence.
    pub class: SmolStr,
    /// Query name → entry, insertion-ordered.
    pub queries: CiMap<QueryEntry>,
}

/// A successfully parsed document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFile {
    /// Path of the originating document.
    pub path: PathBuf,
    /// Class groups in discovery order.
    pub classes: Vec<ClassGroup>,
}

impl ParsedFile {
    /// Base name of the originating file, for diagnostics.
    pub fn file_name(&self) -> &str {
        base_name(&self.path)
    }

    /// File name without extension, for the documentation fallback.
    pub fn file_stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unknown")
    }
}

/// Base name of a path, or a placeholder when it has none.
pub(crate) fn base_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown file")
}

/// Failure to segment a document.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    /// Base name of the offending file.
    pub file: String,
    /// What went wrong.
    pub message: String,
}

/// Outcome of parsing one document.
///
/// The explicit variant replaces throw/catch across the batch boundary:
/// the driver matches on it instead of catching errors from siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The document does not participate: empty text or no activation
    /// marker. Not an error; no diagnostic is produced.
    Skipped,
    /// Segmentation succeeded.
    Parsed(ParsedFile),
    /// Segmentation failed; the file contributes no artifacts.
    Failed(ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_extension_filter() {
        assert!(Document::new("queries/users.sql", "").has_sql_extension());
        assert!(Document::new("queries/users.SQL", "").has_sql_extension());
        assert!(!Document::new("queries/users.txt", "").has_sql_extension());
        assert!(!Document::new("queries/users", "").has_sql_extension());
    }

    #[test]
    fn test_file_name_and_stem() {
        let file = ParsedFile {
            path: PathBuf::from("/db/queries/Users.sql"),
            classes: Vec::new(),
        };
        assert_eq!(file.file_name(), "Users.sql");
        assert_eq!(file.file_stem(), "Users");
    }
}
