//! Identifier and namespace validation for the artifact target language.
//!
//! Generated artifacts are C# source, so every candidate name is checked
//! against the C# identifier grammar and reserved-keyword list before any
//! text is emitted. Both checks are pure predicates and never panic.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Reserved keywords of the artifact target language, matched exactly and
/// case-sensitively. Built once at first use.
static RESERVED_KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// True when `identifier` cannot be used as a generated class or constant
/// name.
///
/// Invalid when empty or whitespace-only, a reserved keyword, the first
/// character is not a letter or underscore, or any later character is not
/// a letter, digit, or underscore. Letter classification is the Unicode
/// is-letter general category, not ASCII.
pub fn is_invalid_identifier(identifier: &str) -> bool {
    if identifier.trim().is_empty() {
        return true;
    }
    if RESERVED_KEYWORDS.contains(identifier) {
        return true;
    }

    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.any(|c| !c.is_alphanumeric() && c != '_')
        }
        _ => true,
    }
}

/// True when `namespace` is not a valid dotted identifier path.
///
/// Splitting on `.` must yield segments that each pass
/// [`is_invalid_identifier`]; consecutive, leading, or trailing dots
/// produce empty segments and fail.
pub fn is_invalid_namespace(namespace: &str) -> bool {
    if namespace.trim().is_empty() {
        return true;
    }
    namespace.split('.').any(is_invalid_identifier)
}
