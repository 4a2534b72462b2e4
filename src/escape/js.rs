//! JavaScript string literal escaping.

use super::{is_ascii_alnum, push_hex};
use crate::normalize::CodepointSequence;

const MAX_CODEPOINT: u32 = 0x10FFFF;
const REPLACEMENT: u32 = 0xFFFD;

/// Only ASCII letters and digits.
pub fn is_safe(cp: u32) -> bool {
    is_ascii_alnum(cp)
}

/// Replace every unsafe codepoint with `\xHH` (up to 0xFF) or `\uHHHH`.
///
/// Codepoints beyond the BMP become a surrogate pair of `\u` escapes, since
/// a string literal escape carries exactly four hex digits. Values above
/// U+10FFFF are escaped as U+FFFD. The output never contains a quote, a line
/// terminator, or `<`, `>` and `/`.
///
/// ```
/// use escaper::CodepointSequence;
/// use escaper::escape::js;
///
/// assert_eq!(js::escape(&CodepointSequence::from("</script>")), "\\x3c\\x2fscript\\x3e");
/// ```
pub fn escape(codepoints: &CodepointSequence) -> String {
    let mut out = String::with_capacity(codepoints.len() * 4);
    for cp in codepoints.iter() {
        let cp = if cp > MAX_CODEPOINT { REPLACEMENT } else { cp };
        if is_safe(cp) {
            out.push(char::from(cp as u8));
        } else if cp <= 0xFF {
            out.push_str("\\x");
            push_hex(&mut out, cp, 2);
        } else if cp <= 0xFFFF {
            out.push_str("\\u");
            push_hex(&mut out, cp, 4);
        } else {
            let offset = cp - 0x10000;
            out.push_str("\\u");
            push_hex(&mut out, 0xD800 + (offset >> 10), 4);
            out.push_str("\\u");
            push_hex(&mut out, 0xDC00 + (offset & 0x3FF), 4);
        }
    }
    out
}
