//! Artifact rendering for validated class groups.

mod artifact;

pub use artifact::{Artifact, ClassArtifactBuilder};

use tracing::debug;

use crate::model::ParsedFile;
use crate::report::{Diagnostic, DiagnosticCollector};
use crate::validate;

/// Render artifacts for every class group of a parsed file.
///
/// Groups with an invalid namespace or class name are skipped whole;
/// entries with an invalid query name are skipped individually. Each skip
/// produces a warning diagnostic, and siblings still emit: one bad
/// identifier never suppresses valid sibling output.
pub fn emit_file(file: &ParsedFile, diagnostics: &mut DiagnosticCollector) -> Vec<Artifact> {
    let file_name = file.file_name();
    let fallback_doc = format!("Query from {}.sql", file.file_stem());

    let mut artifacts = Vec::with_capacity(file.classes.len());
    for group in &file.classes {
        if validate::is_invalid_namespace(&group.namespace) {
            debug!(namespace = %group.namespace, file = file_name, "skipping group: invalid namespace");
            diagnostics.add(Diagnostic::invalid_namespace(&group.namespace, file_name));
            continue;
        }
        if validate::is_invalid_identifier(&group.class) {
            debug!(class = %group.class, file = file_name, "skipping group: invalid class name");
            diagnostics.add(Diagnostic::invalid_class_name(&group.class, file_name));
            continue;
        }

        let mut builder = ClassArtifactBuilder::new(group.namespace.clone(), group.class.clone());
        for (name, entry) in group.queries.iter() {
            if validate::is_invalid_identifier(name) {
                debug!(query = name, file = file_name, "skipping entry: invalid query name");
                diagnostics.add(Diagnostic::invalid_query_name(name, file_name));
                continue;
            }
            builder.push_const(name, &entry.body, doc_lines(&entry.summary, &fallback_doc));
        }
        artifacts.push(builder.finish());
    }
    artifacts
}

/// Documentation block lines: the entry's summary when non-empty, else a
/// synthesized one-liner referencing the originating file.
fn doc_lines(summary: &str, fallback: &str) -> Vec<String> {
    if summary.trim().is_empty() {
        vec![fallback.to_owned()]
    } else {
        summary
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
