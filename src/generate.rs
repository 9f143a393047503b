//! Batch driver: parallel per-document parsing, ordered emission.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::emit::{self, Artifact};
use crate::model::{self, Document, ParseError, ParseOutcome};
use crate::parse;
use crate::report::{Diagnostic, DiagnosticCollector};

/// Everything a generation pass produces for the host build pipeline.
#[derive(Clone, Debug, Default)]
pub struct GeneratorOutput {
    /// Rendered artifacts, one per surviving (namespace, class) pair.
    pub artifacts: Vec<Artifact>,
    /// Diagnostics in source-path order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Run a full generation pass over a batch of documents.
///
/// Documents are parsed independently in parallel; parsing is pure, so a
/// failure in one document never affects another's emission. Outcomes are
/// sorted by source path before the emission stage so diagnostics are
/// reproducible across runs regardless of scheduling.
pub fn generate(documents: &[Document]) -> GeneratorOutput {
    let mut outcomes: Vec<(&Path, ParseOutcome)> = documents
        .par_iter()
        .map(|doc| (doc.path.as_path(), parse_guarded(doc)))
        .collect();
    outcomes.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut diagnostics = DiagnosticCollector::new();
    let mut artifacts: Vec<Artifact> = Vec::new();
    for (path, outcome) in outcomes {
        match outcome {
            ParseOutcome::Skipped => {
                trace!(path = %path.display(), "document skipped");
            }
            ParseOutcome::Failed(err) => {
                debug!(path = %path.display(), error = %err, "parse failed");
                diagnostics.add(Diagnostic::parse_error(&err.file, &err.message));
            }
            ParseOutcome::Parsed(file) => {
                let emitted = panic::catch_unwind(AssertUnwindSafe(|| {
                    emit::emit_file(&file, &mut diagnostics)
                }));
                match emitted {
                    Ok(batch) => artifacts.extend(batch),
                    Err(payload) => {
                        diagnostics.add(Diagnostic::unhandled_error(
                            file.file_name(),
                            &panic_message(payload),
                        ));
                    }
                }
            }
        }
    }

    debug!(
        artifacts = artifacts.len(),
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "generation pass complete"
    );
    GeneratorOutput {
        artifacts,
        diagnostics: diagnostics.take(),
    }
}

/// Parse one document, converting a panic into a parse failure so one bad
/// document cannot take down the batch.
fn parse_guarded(doc: &Document) -> ParseOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| parse::parse_document(doc))) {
        Ok(outcome) => outcome,
        Err(payload) => ParseOutcome::Failed(ParseError {
            file: model::base_name(&doc.path).to_owned(),
            message: panic_message(payload),
        }),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_owned()
    }
}
