use tracing::trace;

use super::charset::{Charset, sniff};
use super::{EncodingConvert, EncodingDetect};
use crate::error::{Error, Result};
use crate::normalize::CodepointSequence;

/// Detection and conversion backed by `encoding_rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRs;

impl EncodingDetect for EncodingRs {
    fn matches_strict(&self, bytes: &[u8], candidate: &str) -> bool {
        let Some(charset) = Charset::for_label(candidate) else {
            return false;
        };
        let matched = charset.matches_strict(bytes);
        trace!(candidate, matched, "strict charset check");
        matched
    }

    fn detect_lenient(&self, bytes: &[u8]) -> Option<String> {
        sniff(bytes).map(|charset| charset.name().to_string())
    }
}

impl EncodingConvert for EncodingRs {
    fn to_codepoints(&self, bytes: &[u8], from: &str) -> Result<CodepointSequence> {
        let charset =
            Charset::for_label(from).ok_or_else(|| Error::UnsupportedEncoding(from.to_string()))?;
        Ok(CodepointSequence::from(charset.decode(bytes)))
    }
}
