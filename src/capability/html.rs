use super::HtmlSpecialChars;
use super::charset::Charset;
use crate::config::{DEFAULT_ENCODING, QuoteMode};

/// Entity-based HTML special character escaping.
///
/// `&`, `<` and `>` always become named entities; quotes follow the
/// [`QuoteMode`]. Existing entities are escaped again (`&amp;` becomes
/// `&amp;amp;`). Text that is malformed in the declared charset yields an
/// empty string rather than partially escaped output. An unknown charset
/// label falls back to UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntities;

impl HtmlSpecialChars for HtmlEntities {
    fn escape(&self, bytes: &[u8], quote_mode: QuoteMode, charset: &str) -> String {
        let charset = Charset::for_label(charset)
            .or_else(|| Charset::for_label(DEFAULT_ENCODING))
            .unwrap_or(Charset::Whatwg(encoding_rs::UTF_8));

        let Some(text) = charset.decode_strict(bytes) else {
            return String::new();
        };

        let mut result = String::with_capacity(text.len() + text.len() / 8);
        for c in text.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' if quote_mode.escapes_double() => result.push_str("&quot;"),
                '\'' if quote_mode.escapes_single() => result.push_str("&#039;"),
                _ => result.push(c),
            }
        }
        result
    }
}
