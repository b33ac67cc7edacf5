//! Text and literal-formatting primitives.
//!
//! - `literal` - Quoted/verbatim literal rendering for `&str`
//! - `utf16` - The same rendering for raw (possibly ill-formed) UTF-16
//! - `utf8` - UTF-8 byte budgeting without encoding
//!
//! Every renderer has an exact, allocation-free length counterpart; the two
//! always agree on the output byte count.

mod escape;
pub mod literal;
pub mod utf16;
pub mod utf8;

const ASCII_ELLIPSIS: &str = "...";
const UNICODE_ELLIPSIS: &str = "\u{2026}";

/// Marker inserted between the head and tail windows of a clipped literal.
fn ellipsis(unicode: bool) -> &'static str {
    if unicode {
        UNICODE_ELLIPSIS
    } else {
        ASCII_ELLIPSIS
    }
}
