//! Quoted and verbatim literal rendering for raw UTF-16 code units.
//!
//! Mirrors [`crate::text::literal`] over `&[u16]`, which unlike `&str` can
//! be ill-formed. Well-formed surrogate pairs decode to one character;
//! unpaired surrogates are escaped as `\uHHHH` in quoted style and replaced
//! by U+FFFD in verbatim style (which has no escape channel). Clipping
//! windows never split a surrogate pair.
//!
//! The exact-length invariant of the `&str` encoders holds here too:
//! `quoted_utf16_literal(u).len() == quoted_utf16_literal_len(u)` for every
//! input, clipped or not.

use super::ellipsis;
use super::escape::EscapeForm;

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Append `units` as a quoted literal, quotes included.
pub fn append_quoted_utf16_literal(out: &mut String, units: &[u16]) {
    out.push('"');
    append_quoted_body(out, units);
    out.push('"');
}

/// Render `units` as a quoted literal.
pub fn quoted_utf16_literal(units: &[u16]) -> String {
    let mut out = String::with_capacity(quoted_utf16_literal_len(units));
    append_quoted_utf16_literal(&mut out, units);
    out
}

/// Exact byte length of [`quoted_utf16_literal`]`(units)`.
pub fn quoted_utf16_literal_len(units: &[u16]) -> usize {
    2 + quoted_body_len(units)
}

/// Append `units` as a verbatim literal. Unpaired surrogates become U+FFFD.
pub fn append_verbatim_utf16_literal(out: &mut String, units: &[u16]) {
    out.push_str("@\"");
    append_verbatim_body(out, units);
    out.push('"');
}

/// Render `units` as a verbatim literal.
pub fn verbatim_utf16_literal(units: &[u16]) -> String {
    let mut out = String::with_capacity(verbatim_utf16_literal_len(units));
    append_verbatim_utf16_literal(&mut out, units);
    out
}

/// Exact byte length of [`verbatim_utf16_literal`]`(units)`.
pub fn verbatim_utf16_literal_len(units: &[u16]) -> usize {
    3 + verbatim_body_len(units)
}

/// Clipped quoted literal over code units: at most `head` leading and
/// `tail` trailing units, with an ellipsis marker between the windows.
/// Windows grow by one unit rather than split a surrogate pair; the full
/// literal is emitted when the (adjusted) windows cover the input.
pub fn append_clipped_quoted_utf16_literal(
    out: &mut String,
    units: &[u16],
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) {
    match clip_bounds(units, head, tail) {
        None => append_quoted_utf16_literal(out, units),
        Some((head_end, tail_start)) => {
            out.push('"');
            append_quoted_body(out, &units[..head_end]);
            out.push_str(ellipsis(unicode_ellipsis));
            append_quoted_body(out, &units[tail_start..]);
            out.push('"');
        }
    }
}

/// Render a clipped quoted literal over code units.
pub fn clipped_quoted_utf16_literal(
    units: &[u16],
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) -> String {
    let mut out =
        String::with_capacity(clipped_quoted_utf16_literal_len(units, head, tail, unicode_ellipsis));
    append_clipped_quoted_utf16_literal(&mut out, units, head, tail, unicode_ellipsis);
    out
}

/// Exact byte length of [`clipped_quoted_utf16_literal`] for the same arguments.
pub fn clipped_quoted_utf16_literal_len(
    units: &[u16],
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) -> usize {
    match clip_bounds(units, head, tail) {
        None => quoted_utf16_literal_len(units),
        Some((head_end, tail_start)) => {
            2 + quoted_body_len(&units[..head_end])
                + ellipsis(unicode_ellipsis).len()
                + quoted_body_len(&units[tail_start..])
        }
    }
}

/// Clipped verbatim literal over code units.
pub fn append_clipped_verbatim_utf16_literal(
    out: &mut String,
    units: &[u16],
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) {
    match clip_bounds(units, head, tail) {
        None => append_verbatim_utf16_literal(out, units),
        Some((head_end, tail_start)) => {
            out.push_str("@\"");
            append_verbatim_body(out, &units[..head_end]);
            out.push_str(ellipsis(unicode_ellipsis));
            append_verbatim_body(out, &units[tail_start..]);
            out.push('"');
        }
    }
}

/// Render a clipped verbatim literal over code units.
pub fn clipped_verbatim_utf16_literal(
    units: &[u16],
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) -> String {
    let mut out = String::with_capacity(clipped_verbatim_utf16_literal_len(
        units,
        head,
        tail,
        unicode_ellipsis,
    ));
    append_clipped_verbatim_utf16_literal(&mut out, units, head, tail, unicode_ellipsis);
    out
}

/// Exact byte length of [`clipped_verbatim_utf16_literal`] for the same arguments.
pub fn clipped_verbatim_utf16_literal_len(
    units: &[u16],
    head: usize,
    tail: usize,
    unicode_ellipsis: bool,
) -> usize {
    match clip_bounds(units, head, tail) {
        None => verbatim_utf16_literal_len(units),
        Some((head_end, tail_start)) => {
            3 + verbatim_body_len(&units[..head_end])
                + ellipsis(unicode_ellipsis).len()
                + verbatim_body_len(&units[tail_start..])
        }
    }
}

fn append_quoted_body(out: &mut String, units: &[u16]) {
    for decoded in char::decode_utf16(units.iter().copied()) {
        let form = match decoded {
            Ok(c) => EscapeForm::for_char(c),
            Err(e) => EscapeForm::for_unpaired_surrogate(e.unpaired_surrogate()),
        };
        form.push_onto(out);
    }
}

fn quoted_body_len(units: &[u16]) -> usize {
    char::decode_utf16(units.iter().copied())
        .map(|decoded| match decoded {
            Ok(c) => EscapeForm::for_char(c).len(),
            Err(e) => EscapeForm::for_unpaired_surrogate(e.unpaired_surrogate()).len(),
        })
        .sum()
}

fn append_verbatim_body(out: &mut String, units: &[u16]) {
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok('"') => out.push_str("\"\""),
            Ok(c) => out.push(c),
            Err(_) => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
}

fn verbatim_body_len(units: &[u16]) -> usize {
    char::decode_utf16(units.iter().copied())
        .map(|decoded| match decoded {
            Ok('"') => 2,
            Ok(c) => c.len_utf8(),
            Err(_) => char::REPLACEMENT_CHARACTER.len_utf8(),
        })
        .sum()
}

/// Window bounds over code units, or `None` when no clipping happens.
/// A head boundary landing between a high surrogate and its low mate
/// extends the head by one unit; a tail boundary landing on the low of a
/// pair extends the tail backward by one unit.
fn clip_bounds(units: &[u16], head: usize, tail: usize) -> Option<(usize, usize)> {
    if head.saturating_add(tail) >= units.len() {
        return None;
    }
    let head_end = widen_past_pair(units, head);
    let tail_start = widen_before_pair(units, units.len() - tail);
    if head_end >= tail_start {
        return None;
    }
    Some((head_end, tail_start))
}

fn widen_past_pair(units: &[u16], boundary: usize) -> usize {
    if boundary > 0
        && boundary < units.len()
        && is_high_surrogate(units[boundary - 1])
        && is_low_surrogate(units[boundary])
    {
        boundary + 1
    } else {
        boundary
    }
}

fn widen_before_pair(units: &[u16], boundary: usize) -> usize {
    if boundary > 0
        && boundary < units.len()
        && is_high_surrogate(units[boundary - 1])
        && is_low_surrogate(units[boundary])
    {
        boundary - 1
    } else {
        boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units_of(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn well_formed_input_matches_str_encoder() {
        let s = "say \"hi\"\n café 🎸";
        assert_eq!(
            quoted_utf16_literal(&units_of(s)),
            crate::text::literal::quoted_literal(s)
        );
        assert_eq!(
            verbatim_utf16_literal(&units_of(s)),
            crate::text::literal::verbatim_literal(s)
        );
    }

    #[test]
    fn unpaired_surrogates_escape_in_quoted_style() {
        assert_eq!(quoted_utf16_literal(&[0x0061, 0xD800, 0x0062]), "\"a\\uD800b\"");
        assert_eq!(quoted_utf16_literal(&[0xDC00]), "\"\\uDC00\"");
    }

    #[test]
    fn unpaired_surrogates_replace_in_verbatim_style() {
        assert_eq!(
            verbatim_utf16_literal(&[0x0061, 0xD800, 0x0062]),
            "@\"a\u{FFFD}b\""
        );
    }

    #[test]
    fn surrogate_pair_decodes_to_one_char() {
        // U+1F3B8 GUITAR: D83C DFB8.
        assert_eq!(quoted_utf16_literal(&[0xD83C, 0xDFB8]), "\"🎸\"");
    }

    #[test]
    fn length_matches_content_with_ill_formed_input() {
        let samples: [&[u16]; 5] = [
            &[],
            &[0xD800],
            &[0xDC00, 0xD800],
            &[0x0041, 0xD83C, 0xDFB8, 0xD83C, 0x0042],
            &[0x0022, 0xDFB8, 0x000A],
        ];
        for units in samples {
            assert_eq!(
                quoted_utf16_literal(units).len(),
                quoted_utf16_literal_len(units),
                "quoted {:?}",
                units
            );
            assert_eq!(
                verbatim_utf16_literal(units).len(),
                verbatim_utf16_literal_len(units),
                "verbatim {:?}",
                units
            );
        }
    }

    #[test]
    fn clipping_does_not_split_surrogate_pairs() {
        // A + guitar pair + B + C: a head of 2 units would cut the pair, so
        // the head widens to include the low surrogate.
        let units = [0x0041, 0xD83C, 0xDFB8, 0x0042, 0x0043, 0x0044];
        assert_eq!(
            clipped_quoted_utf16_literal(&units, 2, 1, false),
            "\"A🎸...D\""
        );
        // A tail of 1 would start on the low surrogate; it widens backward
        // to keep the pair whole.
        let units = [0x0041, 0x0042, 0x0043, 0x0044, 0xD83C, 0xDFB8];
        assert_eq!(
            clipped_quoted_utf16_literal(&units, 1, 1, false),
            "\"A...🎸\""
        );
    }

    #[test]
    fn clipping_emits_full_literal_when_windows_meet() {
        let units = units_of("abcd");
        assert_eq!(clipped_quoted_utf16_literal(&units, 2, 2, false), "\"abcd\"");
    }

    #[test]
    fn clipped_length_matches_content() {
        let samples: [&[u16]; 4] = [
            &[0x0041, 0xD83C, 0xDFB8, 0x0042, 0x0043, 0x0044],
            &[0xD800, 0xD800, 0xDC00, 0xDC00, 0x0061],
            &[0x0022, 0x0022, 0x0022, 0x0022],
            &[0x000A, 0x200B, 0x0041, 0x0042, 0x0043],
        ];
        for units in samples {
            for head in 0..=units.len() {
                for tail in 0..=units.len() {
                    for unicode in [false, true] {
                        assert_eq!(
                            clipped_quoted_utf16_literal(units, head, tail, unicode).len(),
                            clipped_quoted_utf16_literal_len(units, head, tail, unicode),
                            "quoted {:?} head={} tail={}",
                            units,
                            head,
                            tail
                        );
                        assert_eq!(
                            clipped_verbatim_utf16_literal(units, head, tail, unicode).len(),
                            clipped_verbatim_utf16_literal_len(units, head, tail, unicode),
                            "verbatim {:?} head={} tail={}",
                            units,
                            head,
                            tail
                        );
                    }
                }
            }
        }
    }
}
