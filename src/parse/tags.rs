//! Tag patterns and the activation marker.

use std::sync::LazyLock;

use regex::Regex;

/// Literal marker a document must carry, at the start of a line, to
/// participate in generation.
pub const ACTIVATION_MARKER: &str = "-- @hardcoded";

/// `-- @namespace <token>` on an annotation line.
///
/// The trailing `\s` means a tag with no token, or one cut off at the end
/// of the content, does not match and is treated as ordinary content.
pub(crate) static NAMESPACE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[ \t]*@namespace[ \t]+(\S+)\s").expect("valid tag pattern"));

/// `-- @class <token>` on an annotation line.
pub(crate) static CLASS_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[ \t]*@class[ \t]+(\S+)\s").expect("valid tag pattern"));

/// `-- @name <token>` on an annotation line.
pub(crate) static NAME_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[ \t]*@name[ \t]+(\S+)\s").expect("valid tag pattern"));

/// One tag occurrence: its token and the span it scopes.
pub(crate) struct TagMatch<'a> {
    pub token: &'a str,
    /// Content from the end of this tag to the start of the next
    /// occurrence, or to the end of the scanned content for the last one.
    pub span: &'a str,
}

/// Find every occurrence of `tag` in `content` and attach its span under
/// the next-match-or-end rule.
pub(crate) fn scan<'a>(tag: &Regex, content: &'a str) -> Vec<TagMatch<'a>> {
    let captures: Vec<_> = tag.captures_iter(content).collect();

    let mut matches = Vec::with_capacity(captures.len());
    for (i, caps) in captures.iter().enumerate() {
        let whole = caps.get(0).expect("group 0 always participates");
        let token = caps.get(1).expect("tag pattern has one group").as_str();
        let end = match captures.get(i + 1) {
            Some(next) => next.get(0).expect("group 0 always participates").start(),
            None => content.len(),
        };
        matches.push(TagMatch {
            token,
            span: &content[whole.end()..end],
        });
    }
    matches
}

/// Working content of an activated document.
///
/// Returns the text after the first line that starts with the activation
/// marker, or `None` when no such line exists. Trailing content on the
/// marker line itself is ignored. The marker must be followed by
/// whitespace or the end of the line, so `-- @hardcodedX` does not count.
pub(crate) fn content_after_marker(text: &str) -> Option<&str> {
    let mut search = 0;
    loop {
        let at = search + text[search..].find(ACTIVATION_MARKER)?;
        let after = at + ACTIVATION_MARKER.len();

        let at_line_start = at == 0 || text.as_bytes()[at - 1] == b'\n';
        let delimited = text[after..]
            .chars()
            .next()
            .is_none_or(|c| c.is_whitespace());

        if at_line_start && delimited {
            let rest = &text[after..];
            return Some(match rest.find('\n') {
                Some(newline) => &rest[newline + 1..],
                None => "",
            });
        }
        search = after;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_at_start() {
        let content = content_after_marker("-- @hardcoded\n-- @namespace A\n");
        assert_eq!(content, Some("-- @namespace A\n"));
    }

    #[test]
    fn test_marker_trailing_content_ignored() {
        let content = content_after_marker("-- @hardcoded anything here\nSELECT 1\n");
        assert_eq!(content, Some("SELECT 1\n"));
    }

    #[test]
    fn test_marker_mid_line_does_not_activate() {
        assert_eq!(content_after_marker("SELECT '-- @hardcoded'\n"), None);
    }

    #[test]
    fn test_marker_must_be_delimited() {
        assert_eq!(content_after_marker("-- @hardcodedX\nSELECT 1\n"), None);
    }

    #[test]
    fn test_marker_on_later_line() {
        let content = content_after_marker("leading\n-- @hardcoded\nbody\n");
        assert_eq!(content, Some("body\n"));
    }

    #[test]
    fn test_marker_at_end_of_text() {
        assert_eq!(content_after_marker("-- @hardcoded"), Some(""));
    }

    #[test]
    fn test_scan_spans() {
        let content = "-- @name First\nSELECT 1\n-- @name Second\nSELECT 2\n";
        let matches = scan(&NAME_TAG, content);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].token, "First");
        assert_eq!(matches[0].span, "SELECT 1\n");
        assert_eq!(matches[1].token, "Second");
        assert_eq!(matches[1].span, "SELECT 2\n");
    }

    #[test]
    fn test_tag_without_token_does_not_match() {
        assert!(scan(&NAME_TAG, "-- @name\nSELECT 1\n").is_empty());
        assert!(scan(&NAME_TAG, "-- @name   \nSELECT 1\n").is_empty());
    }

    #[test]
    fn test_tag_cut_off_at_end_does_not_match() {
        // No trailing whitespace after the token
        assert!(scan(&NAME_TAG, "-- @name Last").is_empty());
    }

    #[test]
    fn test_tag_spacing_variants() {
        let matches = scan(&NAMESPACE_TAG, "--\t@namespace\tAlpha.Beta\n");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token, "Alpha.Beta");
    }
}
