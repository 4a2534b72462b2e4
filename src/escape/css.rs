//! CSS token escaping.

use super::{is_ascii_alnum, push_hex};
use crate::normalize::CodepointSequence;

/// Only ASCII letters and digits.
pub fn is_safe(cp: u32) -> bool {
    is_ascii_alnum(cp)
}

/// Replace every unsafe codepoint with `\<hex>` followed by a space.
///
/// CSS hex escapes are 1-6 digits long and parsers consume hex digits
/// greedily, so the terminating space is always written.
///
/// ```
/// use escaper::CodepointSequence;
/// use escaper::escape::css;
///
/// let seq = CodepointSequence::from("font-family: <Verdana>");
/// assert_eq!(css::escape(&seq), "font\\2d family\\3a \\20 \\3c Verdana\\3e ");
/// ```
pub fn escape(codepoints: &CodepointSequence) -> String {
    let mut out = String::with_capacity(codepoints.len() * 2);
    for cp in codepoints.iter() {
        if is_safe(cp) {
            out.push(char::from(cp as u8));
        } else {
            out.push('\\');
            push_hex(&mut out, cp, 0);
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_lt() {
        assert_eq!(escape(&CodepointSequence::from("<")), "\\3c ");
    }

    #[test]
    fn test_terminator_before_hex_looking_text() {
        // without the space, "\2d" followed by "abc" would read as U+2DABC
        assert_eq!(escape(&CodepointSequence::from("-abc")), "\\2d abc");
    }

    #[test]
    fn test_punctuation_is_never_safe() {
        assert!((0u32..0x80).filter(|&cp| is_safe(cp)).all(super::super::is_ascii_alnum));
        assert!(!is_safe(u32::from(b'-')));
        assert!(!is_safe(u32::from(b'_')));
    }

    #[test]
    fn test_wide_codepoints() {
        assert_eq!(escape(&CodepointSequence::from("é€😀")), "\\e9 \\20ac \\1f600 ");
    }

    proptest! {
        #[test]
        fn prop_every_escape_is_terminated(s in any::<String>()) {
            let escaped = escape(&CodepointSequence::from(s.as_str()));
            let mut expected = String::new();
            for c in s.chars() {
                if c.is_ascii_alphanumeric() {
                    expected.push(c);
                } else {
                    expected.push_str(&format!("\\{:x} ", u32::from(c)));
                }
            }
            prop_assert_eq!(escaped, expected);
        }
    }
}
