//! Diagnostic reporting for parse and validation failures.
//!
//! Failures are isolated at the smallest meaningful unit (query entry,
//! class group, document) and surfaced to the host build pipeline as
//! structured diagnostics instead of aborting the batch.

use std::fmt;
use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A structured diagnostic event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic code (e.g. "HC0003").
    pub code: &'static str,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message carrying the offending name and the source
    /// file base name.
    pub message: Arc<str>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
pub mod codes {
    /// Unexpected failure outside the parse stage.
    pub const UNHANDLED_ERROR: &str = "HC0001";
    /// Document segmentation failed.
    pub const PARSE_ERROR: &str = "HC0002";
    /// Namespace is not a valid dotted identifier path.
    pub const INVALID_NAMESPACE: &str = "HC0003";
    /// Class name is not a valid identifier.
    pub const INVALID_CLASS_NAME: &str = "HC0004";
    /// Query name is not a valid identifier.
    pub const INVALID_QUERY_NAME: &str = "HC0005";
}

impl Diagnostic {
    /// An unexpected failure anywhere outside the parse stage.
    pub fn unhandled_error(file: &str, message: &str) -> Self {
        Self {
            code: codes::UNHANDLED_ERROR,
            severity: Severity::Error,
            message: Arc::from(format!("Failed to process '{file}'. Error: {message}.")),
        }
    }

    /// Document segmentation failed; the file contributes no artifacts.
    pub fn parse_error(file: &str, message: &str) -> Self {
        Self {
            code: codes::PARSE_ERROR,
            severity: Severity::Error,
            message: Arc::from(format!("Failed to parse '{file}'. Error: {message}.")),
        }
    }

    /// A class group was skipped because its namespace is invalid.
    pub fn invalid_namespace(name: &str, file: &str) -> Self {
        Self {
            code: codes::INVALID_NAMESPACE,
            severity: Severity::Warning,
            message: Arc::from(format!(
                "Invalid namespace '{name}' in file '{file}'. \
                 Namespaces must be valid identifiers separated by dots."
            )),
        }
    }

    /// A class group was skipped because its class name is invalid.
    pub fn invalid_class_name(name: &str, file: &str) -> Self {
        Self {
            code: codes::INVALID_CLASS_NAME,
            severity: Severity::Warning,
            message: Arc::from(format!(
                "Invalid class name '{name}' in file '{file}'. \
                 Class names must be valid identifiers."
            )),
        }
    }

    /// A query entry was skipped because its name is invalid. Sibling
    /// entries in the same class still emit.
    pub fn invalid_query_name(name: &str, file: &str) -> Self {
        Self {
            code: codes::INVALID_QUERY_NAME,
            severity: Severity::Warning,
            message: Arc::from(format!(
                "Invalid query name '{name}' in file '{file}'. \
                 Query names must be valid identifiers."
            )),
        }
    }
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a generation pass.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
