//! # hardcoded
//!
//! Core library for extracting tagged SQL blocks from source documents and
//! compiling them into generated classes of documented string constants.
//!
//! A participating document carries the `-- @hardcoded` activation marker
//! and annotates its queries with a three-level tag hierarchy:
//!
//! ```text
//! -- @hardcoded
//! -- @namespace Billing.Queries
//! -- @class Invoices
//! -- @name SelectOpen
//! -- Open invoices, newest first.
//! SELECT * FROM [dbo].[Invoice] WHERE [State] = 'Open'
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate → batch driver (parallel fan-out, ordered emission)
//!   ↓
//! emit     → artifact rendering (namespace/class/constant declarations)
//!   ↓
//! validate → identifier and namespace validation
//!   ↓
//! parse    → hierarchical tag parser (@namespace / @class / @name)
//!   ↓
//! model    → parsed-file data model
//!   ↓
//! base     → primitives (case-insensitive ordered maps)
//! ```

/// Foundation types: case-insensitive ordered maps
pub mod base;

/// Artifact rendering for validated class groups
pub mod emit;

/// Batch driver: parallel parsing, ordered emission
pub mod generate;

/// Data model: documents, class groups, query entries
pub mod model;

/// Hierarchical tag parser
pub mod parse;

/// Diagnostic reporting
pub mod report;

/// Identifier and namespace validation
pub mod validate;

// Re-export commonly needed items
pub use base::CiMap;
pub use emit::{Artifact, emit_file};
pub use generate::{GeneratorOutput, generate};
pub use model::{ClassGroup, Document, ParseError, ParseOutcome, ParsedFile, QueryEntry};
pub use parse::parse_document;
pub use report::{Diagnostic, DiagnosticCollector, Severity};
