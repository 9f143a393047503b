//! Structured builder for generated class artifacts.
//!
//! Declarations are collected first and rendered by a single formatting
//! pass, keeping tag parsing decoupled from output syntax.

use std::fmt::Write;

use smol_str::SmolStr;

/// A rendered output unit, one per (namespace, class) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Unique artifact name within the batch: `{namespace}.{class}.g.cs`.
    pub name: String,
    /// Full artifact text, UTF-8.
    pub text: String,
}

/// One documented constant declaration.
#[derive(Clone, Debug)]
struct ConstDecl {
    name: SmolStr,
    doc_lines: Vec<String>,
    /// Body already escaped for the verbatim-string convention.
    body: String,
}

/// Collects validated declarations for one class and renders them in
/// insertion order.
#[derive(Debug)]
pub struct ClassArtifactBuilder {
    namespace: SmolStr,
    class: SmolStr,
    consts: Vec<ConstDecl>,
}

impl ClassArtifactBuilder {
    /// Start an artifact for one (namespace, class) pair. Both names must
    /// already be validated.
    pub fn new(namespace: SmolStr, class: SmolStr) -> Self {
        Self {
            namespace,
            class,
            consts: Vec::new(),
        }
    }

    /// Add a documented constant. The raw body is escaped here.
    pub fn push_const(&mut self, name: &str, body: &str, doc_lines: Vec<String>) {
        self.consts.push(ConstDecl {
            name: SmolStr::from(name),
            doc_lines,
            body: escape_verbatim(body),
        });
    }

    /// Unique artifact identity within a batch.
    pub fn artifact_name(&self) -> String {
        format!("{}.{}.g.cs", self.namespace, self.class)
    }

    /// Render the artifact text.
    pub fn finish(self) -> Artifact {
        let name = self.artifact_name();
        let mut text = String::new();

        // Infallible: writing to a String cannot fail.
        let _ = writeln!(text, "namespace {};", self.namespace);
        text.push('\n');
        let _ = writeln!(text, "internal static partial class {}", self.class);
        text.push_str("{\n");

        for decl in &self.consts {
            text.push_str("    /// <summary>\n");
            for line in &decl.doc_lines {
                let _ = writeln!(text, "    /// {line}");
            }
            text.push_str("    /// </summary>\n");
            let _ = writeln!(
                text,
                "    internal const string {} = @\"{}\";",
                decl.name, decl.body
            );
            text.push('\n');
        }

        text.push_str("}\n");
        Artifact { name, text }
    }
}

/// Escape a body for embedding in a verbatim string literal: double every
/// quote character. Newlines and backslashes pass through untouched.
pub(crate) fn escape_verbatim(body: &str) -> String {
    body.replace('"', "\"\"")
}
