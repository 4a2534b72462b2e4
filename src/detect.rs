//! Charset detection for text of unknown origin.
//!
//! Detection runs in three stages:
//!
//! 1. A byte scan that recognizes plain ASCII and single-byte Latin-1 text
//!    without consulting any detector. This keeps already-safe input from
//!    being mistaken for a multi-byte form.
//! 2. Strict checks against [`STRICT_CANDIDATES`], widest form first, so text
//!    that is valid in a wider encoding is not filed under a narrower one.
//! 3. The detector's lenient guess.

use memchr::memchr;
use tracing::debug;

use crate::capability::EncodingDetect;

/// Strict detection order, widest to narrowest.
pub const STRICT_CANDIDATES: [&str; 5] = ["UTF-32", "UTF-16", "UTF-8", "ISO-8859-1", "ASCII"];

pub const ASCII: &str = "ASCII";
pub const ISO_8859_1: &str = "ISO-8859-1";

/// Recognize text that needs no detector at all.
///
/// Returns `"ASCII"` when every byte is non-NUL 7-bit, and `"ISO-8859-1"` when
/// there is no NUL, at least one high byte, and the bytes are not valid UTF-8.
/// The 0x80-0x9F controls and 0xAC are accepted here because strict Latin-1
/// detection rejects them.
///
/// Input that opens with a UTF-16 or UTF-32 byte-order mark is left to the
/// strict checks: UTF-16 text outside Latin-1 often has no NUL byte at all.
pub fn basic_charset(text: &[u8]) -> Option<&'static str> {
    if memchr(0, text).is_some() || starts_with_wide_bom(text) {
        return None;
    }
    if text.is_ascii() {
        return Some(ASCII);
    }
    if std::str::from_utf8(text).is_err() {
        return Some(ISO_8859_1);
    }
    None
}

/// `FE FF` and `FF FE` (which also opens the UTF-32LE mark), or `00 00 FE FF`.
fn starts_with_wide_bom(text: &[u8]) -> bool {
    matches!(text, [0xFE, 0xFF, ..] | [0xFF, 0xFE, ..] | [0x00, 0x00, 0xFE, 0xFF, ..])
}

/// Classifies the byte encoding of input strings.
#[derive(Clone, Copy)]
pub struct EncodingDetector<'a> {
    capability: Option<&'a dyn EncodingDetect>,
}

impl<'a> EncodingDetector<'a> {
    pub fn new(capability: Option<&'a dyn EncodingDetect>) -> Self {
        Self { capability }
    }

    /// Name the charset of `text`, or `None` when it cannot be determined.
    ///
    /// `None` is also the answer when no detection capability is installed
    /// and the fast path did not apply.
    pub fn detect(&self, text: &[u8]) -> Option<String> {
        if let Some(charset) = basic_charset(text) {
            debug!(charset, len = text.len(), "basic charset");
            return Some(charset.to_string());
        }

        let Some(capability) = self.capability else {
            debug!("no detection capability");
            return None;
        };

        if let Some(candidate) = STRICT_CANDIDATES
            .iter()
            .find(|candidate| capability.matches_strict(text, candidate))
        {
            debug!(charset = *candidate, "strict match");
            return Some((*candidate).to_string());
        }

        let guess = capability.detect_lenient(text);
        debug!(charset = ?guess, "lenient detection");
        guess
    }
}
