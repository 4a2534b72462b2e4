//! Canonicalization of input bytes into whole codepoints.
//!
//! Per-character escapers must classify complete characters. Looking at the
//! bytes of a multi-byte character one at a time would let trailing bytes
//! pass an allow-list on their own and recombine with neighbouring output.
//! Every such escaper therefore works on a [`CodepointSequence`].

use tracing::debug;

use crate::capability::{EncodingConvert, EncodingDetect};
use crate::detect::EncodingDetector;
use crate::error::{Error, Result};

/// Fixed-width (UTF-32) view of a string: one element per character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodepointSequence(Vec<u32>);

impl CodepointSequence {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// The UTF-32 big-endian byte form.
    pub fn to_utf32_be(&self) -> Vec<u8> {
        self.0.iter().flat_map(|cp| cp.to_be_bytes()).collect()
    }
}

impl From<Vec<u32>> for CodepointSequence {
    fn from(codepoints: Vec<u32>) -> Self {
        Self(codepoints)
    }
}

impl From<&str> for CodepointSequence {
    fn from(text: &str) -> Self {
        Self(text.chars().map(u32::from).collect())
    }
}

impl IntoIterator for CodepointSequence {
    type Item = u32;
    type IntoIter = std::vec::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Detects the source charset and converts to codepoints.
#[derive(Clone, Copy)]
pub struct EncodingNormalizer<'a> {
    detector: EncodingDetector<'a>,
    convert: Option<&'a dyn EncodingConvert>,
}

impl<'a> EncodingNormalizer<'a> {
    pub fn new(
        detect: Option<&'a dyn EncodingDetect>,
        convert: Option<&'a dyn EncodingConvert>,
    ) -> Self {
        Self {
            detector: EncodingDetector::new(detect),
            convert,
        }
    }

    /// Convert `text` into a [`CodepointSequence`].
    ///
    /// Fails with [`Error::MissingCapability`] when there is no conversion
    /// capability, or when the source charset cannot be detected.
    pub fn normalize(&self, text: &[u8]) -> Result<CodepointSequence> {
        let convert = self
            .convert
            .ok_or(Error::MissingCapability("encoding conversion"))?;
        let encoding = self
            .detector
            .detect(text)
            .ok_or(Error::MissingCapability("encoding detection"))?;

        let codepoints = convert.to_codepoints(text, &encoding)?;
        debug!(
            encoding = %encoding,
            bytes = text.len(),
            codepoints = codepoints.len(),
            "normalized"
        );
        Ok(codepoints)
    }
}
