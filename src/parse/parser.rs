//! Three-level span segmentation: namespaces, classes, named queries.

use crate::base::CiMap;
use crate::model::{ClassGroup, Document, ParseOutcome, ParsedFile, QueryEntry};

use super::tags::{self, CLASS_TAG, NAME_TAG, NAMESPACE_TAG};

type QueryMap = CiMap<QueryEntry>;
type ClassMap = CiMap<QueryMap>;
type NamespaceMap = CiMap<ClassMap>;

/// Parse one document into its class groups.
///
/// This is a pure function of the document path and text: no I/O, no
/// shared state, safe to run in parallel across documents. Returns
/// [`ParseOutcome::Skipped`] when the text is empty or carries no
/// activation marker.
pub fn parse_document(doc: &Document) -> ParseOutcome {
    let text = doc.text.trim();
    if text.is_empty() {
        return ParseOutcome::Skipped;
    }
    let Some(content) = tags::content_after_marker(text) else {
        return ParseOutcome::Skipped;
    };

    let namespaces = parse_namespaces(content);

    // Flatten the nested maps into one group per (namespace, class) pair,
    // keeping discovery order.
    let mut classes = Vec::new();
    for (namespace, class_map) in namespaces.into_entries() {
        for (class, queries) in class_map.into_entries() {
            classes.push(ClassGroup {
                namespace: namespace.clone(),
                class,
                queries,
            });
        }
    }

    ParseOutcome::Parsed(ParsedFile {
        path: doc.path.clone(),
        classes,
    })
}

/// Namespace pass: each `@namespace` tag scopes the content up to the
/// next one. Repeated names accumulate into the same entry.
fn parse_namespaces(content: &str) -> NamespaceMap {
    let mut namespaces = NamespaceMap::new();
    for tag in tags::scan(&NAMESPACE_TAG, content) {
        let classes = namespaces.get_or_insert_with(tag.token, ClassMap::new);
        parse_classes(tag.span, classes);
    }
    namespaces
}

/// Class pass within one namespace span.
fn parse_classes(span: &str, classes: &mut ClassMap) {
    for tag in tags::scan(&CLASS_TAG, span) {
        let queries = classes.get_or_insert_with(tag.token, QueryMap::new);
        parse_queries(tag.span, queries);
    }
}

/// Query pass within one class span. A repeated name overwrites the
/// earlier entry, last-write-wins.
fn parse_queries(span: &str, queries: &mut QueryMap) {
    for tag in tags::scan(&NAME_TAG, span) {
        queries.insert(tag.token, split_query_block(tag.span));
    }
}

/// Separate the leading comment summary from the query body.
///
/// A comment line counts as summary only while no body line has appeared;
/// after that, comment-looking lines are comments inside the query and
/// are kept verbatim. Empty lines are dropped by the splitter. Summary
/// lines lose their `--` marker and surrounding whitespace; the body is
/// newline-joined with indentation preserved and trimmed as a whole.
fn split_query_block(block: &str) -> QueryEntry {
    let mut summary = String::new();
    let mut body = String::new();

    for line in block.split(['\r', '\n']).filter(|line| !line.is_empty()) {
        let trimmed = line.trim();
        match trimmed.strip_prefix("--") {
            Some(stripped) if body.is_empty() => {
                summary.push_str(stripped.trim());
                summary.push('\n');
            }
            _ => {
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    QueryEntry {
        body: body.trim().to_owned(),
        summary: summary.trim().to_owned(),
    }
}
