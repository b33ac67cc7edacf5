//! Quoted and verbatim literal rendering for `&str`.
//!
//! Each encoder has an exact length counterpart: for every input,
//! `quoted_literal(s).len() == quoted_literal_len(s)` (and likewise for the
//! verbatim and clipped forms). The length functions never allocate, so the
//! allocating conveniences can pre-size their output exactly.

use super::ellipsis;
use super::escape::EscapeForm;

/// Append `s` as a quoted literal, escapes and surrounding quotes included.
pub fn append_quoted_literal(out: &mut String, s: &str) {
    out.push('"');
    append_quoted_body(out, s);
    out.push('"');
}

/// Render `s` as a quoted literal.
pub fn quoted_literal(s: &str) -> String {
    let mut out = String::with_capacity(quoted_literal_len(s));
    append_quoted_literal(&mut out, s);
    out
}

/// Exact byte length of [`quoted_literal`]`(s)`, computed without allocating.
pub fn quoted_literal_len(s: &str) -> usize {
    2 + quoted_body_len(s)
}

/// Append `s` as a verbatim literal (`@"..."`); the only transformation is
/// doubling embedded quotes.
pub fn append_verbatim_literal(out: &mut String, s: &str) {
    out.push_str("@\"");
    append_verbatim_body(out, s);
    out.push('"');
}

/// Render `s` as a verbatim literal.
pub fn verbatim_literal(s: &str) -> String {
    let mut out = String::with_capacity(verbatim_literal_len(s));
    append_verbatim_literal(&mut out, s);
    out
}

/// Exact byte length of [`verbatim_literal`]`(s)`.
pub fn verbatim_literal_len(s: &str) -> usize {
    3 + s.len() + s.bytes().filter(|&b| b == b'"').count()
}

/// Append a quoted literal of at most `head` leading and `tail` trailing
/// characters, with an ellipsis marker between the two windows. Emits the
/// full literal when the windows cover the whole string.
pub fn append_clipped_quoted_literal(
    out: &mut String,
    s: &str,
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) {
    match clip_bounds(s, head, tail) {
        None => append_quoted_literal(out, s),
        Some((head_end, tail_start)) => {
            out.push('"');
            append_quoted_body(out, &s[..head_end]);
            out.push_str(ellipsis(unicode_ellipsis));
            append_quoted_body(out, &s[tail_start..]);
            out.push('"');
        }
    }
}

/// Render a clipped quoted literal. See [`append_clipped_quoted_literal`].
pub fn clipped_quoted_literal(s: &str, head: usize, tail: usize, unicode_ellipsis: bool) -> String {
    let mut out = String::with_capacity(clipped_quoted_literal_len(s, head, tail, unicode_ellipsis));
    append_clipped_quoted_literal(&mut out, s, head, tail, unicode_ellipsis);
    out
}

/// Exact byte length of [`clipped_quoted_literal`] for the same arguments.
pub fn clipped_quoted_literal_len(s: &str, head: usize, tail: usize, unicode_ellipsis: bool) -> usize {
    match clip_bounds(s, head, tail) {
        None => quoted_literal_len(s),
        Some((head_end, tail_start)) => {
            2 + quoted_body_len(&s[..head_end])
                + ellipsis(unicode_ellipsis).len()
                + quoted_body_len(&s[tail_start..])
        }
    }
}

/// Clipped verbatim counterpart of [`append_clipped_quoted_literal`].
pub fn append_clipped_verbatim_literal(
    out: &mut String,
    s: &str,
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) {
    match clip_bounds(s, head, tail) {
        None => append_verbatim_literal(out, s),
        Some((head_end, tail_start)) => {
            out.push_str("@\"");
            append_verbatim_body(out, &s[..head_end]);
            out.push_str(ellipsis(unicode_ellipsis));
            append_verbatim_body(out, &s[tail_start..]);
            out.push('"');
        }
    }
}

/// Render a clipped verbatim literal.
pub fn clipped_verbatim_literal(s: &str, head: usize, tail: usize, unicode_ellipsis: bool) -> String {
    let mut out =
        String::with_capacity(clipped_verbatim_literal_len(s, head, tail, unicode_ellipsis));
    append_clipped_verbatim_literal(&mut out, s, head, tail, unicode_ellipsis);
    out
}

/// Exact byte length of [`clipped_verbatim_literal`] for the same arguments.
pub fn clipped_verbatim_literal_len(
    s: &str,
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) -> usize {
    match clip_bounds(s, head, tail) {
        None => verbatim_literal_len(s),
        Some((head_end, tail_start)) => {
            3 + verbatim_body_len(&s[..head_end])
                + ellipsis(unicode_ellipsis).len()
                + verbatim_body_len(&s[tail_start..])
        }
    }
}

fn append_quoted_body(out: &mut String, s: &str) {
    for c in s.chars() {
        EscapeForm::for_char(c).push_onto(out);
    }
}

fn quoted_body_len(s: &str) -> usize {
    s.chars().map(|c| EscapeForm::for_char(c).len()).sum()
}

fn append_verbatim_body(out: &mut String, s: &str) {
    for c in s.chars() {
        if c == '"' {
            out.push_str("\"\"");
        } else {
            out.push(c);
        }
    }
}

fn verbatim_body_len(s: &str) -> usize {
    s.len() + s.bytes().filter(|&b| b == b'"').count()
}

/// Byte bounds of the head and tail windows, or `None` when the windows
/// cover the whole string and no clipping happens.
fn clip_bounds(s: &str, head: usize, tail: usize) -> Option<(usize, usize)> {
    let total = s.chars().count();
    if head.saturating_add(tail) >= total {
        return None;
    }
    let head_end = char_offset(s, head);
    let tail_start = char_offset(s, total - tail);
    Some((head_end, tail_start))
}

/// Byte offset of the `n`-th character (`s.len()` when `n` is past the end).
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_escapes_controls_and_quotes() {
        assert_eq!(quoted_literal("a\nb"), "\"a\\nb\"");
        assert_eq!(quoted_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quoted_literal("tab\tand\\slash"), "\"tab\\tand\\\\slash\"");
    }

    #[test]
    fn quoted_keeps_printable_unicode() {
        assert_eq!(quoted_literal("café 語"), "\"café 語\"");
    }

    #[test]
    fn quoted_escapes_invisible_unicode() {
        assert_eq!(quoted_literal("a\u{200B}b"), "\"a\\u200Bb\"");
        assert_eq!(quoted_literal("x\u{01}"), "\"x\\x01\"");
    }

    #[test]
    fn verbatim_only_doubles_quotes() {
        assert_eq!(verbatim_literal("a\nb"), "@\"a\nb\"");
        assert_eq!(verbatim_literal("say \"hi\""), "@\"say \"\"hi\"\"\"");
    }

    #[test]
    fn empty_string_literals() {
        assert_eq!(quoted_literal(""), "\"\"");
        assert_eq!(verbatim_literal(""), "@\"\"");
        assert_eq!(quoted_literal_len(""), 2);
        assert_eq!(verbatim_literal_len(""), 3);
    }

    #[test]
    fn length_matches_content_for_samples() {
        let samples = [
            "",
            "plain",
            "with \"quotes\" and \\slashes\\",
            "controls \x01\x02\n\t",
            "unicode café 語 🎸",
            "invisible \u{200B}\u{FEFF}\u{E000}",
        ];
        for s in samples {
            assert_eq!(quoted_literal(s).len(), quoted_literal_len(s), "quoted {:?}", s);
            assert_eq!(verbatim_literal(s).len(), verbatim_literal_len(s), "verbatim {:?}", s);
        }
    }

    #[test]
    fn clipped_emits_head_ellipsis_tail() {
        assert_eq!(
            clipped_quoted_literal("abcdefghij", 3, 2, false),
            "\"abc...ij\""
        );
        assert_eq!(
            clipped_quoted_literal("abcdefghij", 3, 2, true),
            "\"abc\u{2026}ij\""
        );
    }

    #[test]
    fn clipped_emits_full_literal_when_windows_cover_input() {
        assert_eq!(clipped_quoted_literal("abcd", 2, 2, false), "\"abcd\"");
        assert_eq!(clipped_quoted_literal("abcd", 10, 0, false), "\"abcd\"");
    }

    #[test]
    fn clipped_windows_are_escaped() {
        assert_eq!(
            clipped_quoted_literal("\"aaaa\nzzzz\"", 2, 2, false),
            "\"\\\"a...z\\\"\""
        );
    }

    #[test]
    fn clipped_counts_characters_not_bytes() {
        assert_eq!(clipped_quoted_literal("語語語語語", 1, 1, false), "\"語...語\"");
    }

    #[test]
    fn clipped_verbatim_matches_length() {
        let s = "head \"quoted\" middle and tail";
        for (head, tail) in [(0, 0), (1, 0), (0, 1), (4, 4), (20, 20)] {
            for unicode in [false, true] {
                assert_eq!(
                    clipped_verbatim_literal(s, head, tail, unicode).len(),
                    clipped_verbatim_literal_len(s, head, tail, unicode),
                    "head={} tail={} unicode={}",
                    head,
                    tail,
                    unicode
                );
            }
        }
    }

    #[test]
    fn clipped_zero_windows_still_produce_marker() {
        assert_eq!(clipped_quoted_literal("abcdef", 0, 0, false), "\"...\"");
    }
}
