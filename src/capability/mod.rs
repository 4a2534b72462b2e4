//! Host capabilities the escaping core depends on but does not implement.
//!
//! The escapers never probe for functionality at call time. Instead an
//! [`Capabilities`] set is resolved once, when the [`crate::Escaper`] is built:
//!
//! - [`EncodingDetect`]: strict per-candidate checks plus a lenient fallback
//! - [`EncodingConvert`]: bytes in a named charset to fixed-width codepoints
//! - [`HtmlSpecialChars`]: `& < > " '` to entities, given quote mode and charset
//! - [`PercentEncode`]: URL component encoding
//!
//! Detection and conversion are optional. Without them, detection reports
//! `None` for anything past the ASCII/Latin-1 fast path and normalization
//! fails with [`crate::Error::MissingCapability`].

mod charset;
mod encoding;
mod html;
mod url;

use std::fmt;
use std::sync::Arc;

use crate::config::QuoteMode;
use crate::error::Result;
use crate::normalize::CodepointSequence;

pub use charset::{Charset, Endian};
pub use encoding::EncodingRs;
pub use html::HtmlEntities;
pub use url::FormUrlEncoding;

/// Classifies the charset of a byte string.
pub trait EncodingDetect: Send + Sync {
    /// Whether `bytes` are cleanly decodable as `candidate`, with no guessing.
    fn matches_strict(&self, bytes: &[u8], candidate: &str) -> bool;

    /// Best-effort guess when no strict candidate matched.
    fn detect_lenient(&self, bytes: &[u8]) -> Option<String>;
}

/// Converts bytes in a named charset into one codepoint per character.
pub trait EncodingConvert: Send + Sync {
    fn to_codepoints(&self, bytes: &[u8], from: &str) -> Result<CodepointSequence>;
}

/// Escapes HTML special characters in text declared to be in `charset`.
pub trait HtmlSpecialChars: Send + Sync {
    fn escape(&self, bytes: &[u8], quote_mode: QuoteMode, charset: &str) -> String;
}

/// Percent-encodes a URL component.
pub trait PercentEncode: Send + Sync {
    fn encode_component(&self, bytes: &[u8]) -> String;
}

/// The capability set an [`crate::Escaper`] is built with.
#[derive(Clone)]
pub struct Capabilities {
    pub(crate) detect: Option<Arc<dyn EncodingDetect>>,
    pub(crate) convert: Option<Arc<dyn EncodingConvert>>,
    pub(crate) html: Arc<dyn HtmlSpecialChars>,
    pub(crate) url: Arc<dyn PercentEncode>,
}

impl Default for Capabilities {
    /// Everything backed by the in-crate implementations.
    fn default() -> Self {
        Self {
            detect: Some(Arc::new(EncodingRs) as Arc<dyn EncodingDetect>),
            convert: Some(Arc::new(EncodingRs) as Arc<dyn EncodingConvert>),
            html: Arc::new(HtmlEntities),
            url: Arc::new(FormUrlEncoding),
        }
    }
}

impl Capabilities {
    /// Only the capabilities that need no charset support: HTML escaping and
    /// percent-encoding.
    pub fn minimal() -> Self {
        Self {
            detect: None,
            convert: None,
            ..Self::default()
        }
    }

    pub fn with_detect(mut self, detect: Option<Arc<dyn EncodingDetect>>) -> Self {
        self.detect = detect;
        self
    }

    pub fn with_convert(mut self, convert: Option<Arc<dyn EncodingConvert>>) -> Self {
        self.convert = convert;
        self
    }

    pub fn with_html(mut self, html: Arc<dyn HtmlSpecialChars>) -> Self {
        self.html = html;
        self
    }

    pub fn with_url(mut self, url: Arc<dyn PercentEncode>) -> Self {
        self.url = url;
        self
    }

    pub fn has_detect(&self) -> bool {
        self.detect.is_some()
    }

    pub fn has_convert(&self) -> bool {
        self.convert.is_some()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("detect", &self.has_detect())
            .field("convert", &self.has_convert())
            .finish_non_exhaustive()
    }
}
