//! Character classification and escape-form selection for quoted literals.
//!
//! Both the literal encoders and their length counters are driven by the
//! single [`EscapeForm::for_char`] classifier, so the emitted text and the
//! pre-computed length cannot disagree on which form a character takes.

/// How one character is rendered inside a quoted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeForm {
    /// Printable; passes through unchanged.
    Verbatim(char),
    /// One of the short escapes (`\n`, `\t`, `\\`, `\"`, ...).
    Short(&'static str),
    /// `\xHH` for non-printable scalars below U+0100.
    Hex2(u32),
    /// `\uHHHH` for non-printable BMP scalars (and unpaired surrogates).
    Hex4(u32),
    /// Non-printable supplementary scalar, written as its UTF-16
    /// surrogate pair in two `\uHHHH` escapes.
    Pair(u16, u16),
}

impl EscapeForm {
    pub(crate) fn for_char(c: char) -> EscapeForm {
        if let Some(short) = short_escape(c) {
            return EscapeForm::Short(short);
        }
        if is_printable(c) {
            return EscapeForm::Verbatim(c);
        }
        let code = c as u32;
        if code < 0x100 {
            EscapeForm::Hex2(code)
        } else if code <= 0xFFFF {
            EscapeForm::Hex4(code)
        } else {
            let mut units = [0u16; 2];
            c.encode_utf16(&mut units);
            EscapeForm::Pair(units[0], units[1])
        }
    }

    /// Form for a UTF-16 code unit with no valid scalar value. Unpaired
    /// surrogates are never printable.
    pub(crate) fn for_unpaired_surrogate(unit: u16) -> EscapeForm {
        EscapeForm::Hex4(unit as u32)
    }

    /// Exact number of bytes [`push_onto`](Self::push_onto) will append.
    pub(crate) fn len(&self) -> usize {
        match self {
            EscapeForm::Verbatim(c) => c.len_utf8(),
            EscapeForm::Short(s) => s.len(),
            EscapeForm::Hex2(_) => 4,
            EscapeForm::Hex4(_) => 6,
            EscapeForm::Pair(_, _) => 12,
        }
    }

    pub(crate) fn push_onto(&self, out: &mut String) {
        match self {
            EscapeForm::Verbatim(c) => out.push(*c),
            EscapeForm::Short(s) => out.push_str(s),
            EscapeForm::Hex2(code) => {
                out.push_str("\\x");
                push_hex(out, *code, 2);
            }
            EscapeForm::Hex4(code) => {
                out.push_str("\\u");
                push_hex(out, *code, 4);
            }
            EscapeForm::Pair(high, low) => {
                out.push_str("\\u");
                push_hex(out, *high as u32, 4);
                out.push_str("\\u");
                push_hex(out, *low as u32, 4);
            }
        }
    }
}

fn push_hex(out: &mut String, code: u32, digits: u32) {
    for shift in (0..digits).rev() {
        let nibble = (code >> (shift * 4)) & 0xF;
        let digit = char::from_digit(nibble, 16).unwrap_or('0').to_ascii_uppercase();
        out.push(digit);
    }
}

fn short_escape(c: char) -> Option<&'static str> {
    Some(match c {
        '\0' => "\\0",
        '\u{07}' => "\\a",
        '\u{08}' => "\\b",
        '\t' => "\\t",
        '\n' => "\\n",
        '\u{0B}' => "\\v",
        '\u{0C}' => "\\f",
        '\r' => "\\r",
        '\\' => "\\\\",
        '"' => "\\\"",
        _ => return None,
    })
}

/// Whether a character may appear unescaped inside a quoted literal.
///
/// The non-printable set is a closed list: controls, line/paragraph
/// separators, space separators other than U+0020, format characters,
/// private-use areas, and noncharacters. Everything else prints.
pub(crate) fn is_printable(c: char) -> bool {
    if c.is_ascii() {
        return (' '..='~').contains(&c);
    }
    if c.is_control() {
        return false;
    }
    match c as u32 {
        // Format characters and bidi/joiner controls (includes U+2028/U+2029
        // line and paragraph separators).
        0x00AD | 0x061C | 0x180E | 0x200B..=0x200F | 0x2028..=0x202E | 0x2060..=0x2064
        | 0x2066..=0x206F | 0xFEFF | 0xFFF9..=0xFFFB => false,
        // Space separators other than plain space.
        0x00A0 | 0x1680 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000 => false,
        // Supplementary-plane format characters.
        0x110BD | 0x110CD | 0x13430..=0x13438 | 0x1BCA0..=0x1BCA3 | 0x1D173..=0x1D17A
        | 0xE0001 | 0xE0020..=0xE007F => false,
        // Private-use areas.
        0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD => false,
        // Noncharacters: U+FDD0..=U+FDEF plus the last two code points of
        // every plane.
        0xFDD0..=0xFDEF => false,
        code if code & 0xFFFE == 0xFFFE => false,
        _ => true,
    }
}
