//! HTML attribute value escaping.

use super::is_ascii_alnum;
use crate::normalize::CodepointSequence;

/// ASCII letters, digits, and `,` `.` `-` `_`.
pub fn is_safe(cp: u32) -> bool {
    is_ascii_alnum(cp) || matches!(cp, 0x2C | 0x2D | 0x2E | 0x5F)
}

/// Replace every unsafe codepoint with a decimal numeric character reference.
///
/// ```
/// use escaper::CodepointSequence;
/// use escaper::escape::attr;
///
/// let seq = CodepointSequence::from("a b\"é");
/// assert_eq!(attr::escape(&seq), "a&#32;b&#34;&#233;");
/// ```
pub fn escape(codepoints: &CodepointSequence) -> String {
    let mut out = String::with_capacity(codepoints.len() * 2);
    for cp in codepoints.iter() {
        if is_safe(cp) {
            out.push(char::from(cp as u8));
        } else {
            out.push_str("&#");
            out.push_str(&cp.to_string());
            out.push(';');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Decode `&#NNN;` references back into characters.
    fn decode_refs(escaped: &str) -> Option<String> {
        let mut out = String::new();
        let mut rest = escaped;
        while let Some(start) = rest.find("&#") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find(';')?;
            let cp: u32 = after[..end].parse().ok()?;
            out.push(char::from_u32(cp)?);
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Some(out)
    }

    #[test]
    fn test_safe_set() {
        let safe: String = (0u32..0x80)
            .filter(|&cp| is_safe(cp))
            .filter_map(char::from_u32)
            .filter(|c| !c.is_ascii_alphanumeric())
            .collect();
        assert_eq!(safe, ",-._");
    }

    #[test]
    fn test_nothing_above_ascii_is_safe() {
        assert!((0x80u32..=0x10FFFF).all(|cp| !is_safe(cp)));
    }

    #[test]
    fn test_escape_punctuation() {
        let seq = CodepointSequence::from("x=\"1\" onload='y'");
        assert_eq!(
            escape(&seq),
            "x&#61;&#34;1&#34;&#32;onload&#61;&#39;y&#39;"
        );
    }

    #[test]
    fn test_escape_keeps_safe_punctuation() {
        assert_eq!(escape(&CodepointSequence::from("a-b_c.d,e")), "a-b_c.d,e");
    }

    #[test]
    fn test_escape_astral() {
        assert_eq!(escape(&CodepointSequence::from("😀")), "&#128512;");
    }

    #[test]
    fn test_not_idempotent() {
        let once = escape(&CodepointSequence::from("<"));
        let twice = escape(&CodepointSequence::from(once.as_str()));
        assert_eq!(once, "&#60;");
        assert_eq!(twice, "&#38;&#35;60&#59;");
    }

    proptest! {
        #[test]
        fn prop_ascii_output_alphabet_and_round_trip(s in "[\\x00-\\x7f]*") {
            let escaped = escape(&CodepointSequence::from(s.as_str()));
            let stripped: String = {
                let mut out = String::new();
                let mut rest = escaped.as_str();
                while let Some(start) = rest.find("&#") {
                    out.push_str(&rest[..start]);
                    let after = &rest[start + 2..];
                    let end = after.find(';').unwrap();
                    prop_assert!(after[..end].bytes().all(|b| b.is_ascii_digit()));
                    rest = &after[end + 1..];
                }
                out.push_str(rest);
                out
            };
            prop_assert!(stripped.chars().all(|c| c.is_ascii_alphanumeric() || ",.-_".contains(c)));
            prop_assert_eq!(decode_refs(&escaped), Some(s));
        }

        #[test]
        fn prop_any_text_round_trips(s in any::<String>()) {
            let escaped = escape(&CodepointSequence::from(s.as_str()));
            prop_assert!(escaped.is_ascii());
            prop_assert_eq!(decode_refs(&escaped), Some(s));
        }
    }
}
