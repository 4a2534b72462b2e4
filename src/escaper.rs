//! The [`Escaper`] facade.

use tracing::debug;

use crate::capability::Capabilities;
use crate::config::{EscaperConfig, QuoteMode};
use crate::detect::EncodingDetector;
use crate::error::Result;
use crate::escape::{self, Context};
use crate::normalize::{CodepointSequence, EncodingNormalizer};
use crate::text::AsText;

/// Escapes text for embedding into HTML, attributes, CSS, JavaScript and URLs.
///
/// Every operation is a pure function of the configuration and the input.
/// Configuration setters take `&mut self`, so an instance can be shared
/// across threads for escaping, but must be exclusively borrowed to be
/// reconfigured.
///
/// ```
/// use escaper::Escaper;
///
/// let escaper = Escaper::new();
/// assert_eq!(
///     escaper.escape_html("<a href=\"x\">").as_deref(),
///     Some("&lt;a href=&quot;x&quot;&gt;")
/// );
/// assert_eq!(escaper.escape_js("</script>").unwrap().as_deref(), Some("\\x3c\\x2fscript\\x3e"));
/// assert_eq!(escaper.escape_url("a b"), "a+b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Escaper {
    config: EscaperConfig,
    capabilities: Capabilities,
}

impl Escaper {
    /// An escaper with default configuration and the built-in capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EscaperConfig) -> Self {
        Self {
            config,
            capabilities: Capabilities::default(),
        }
    }

    pub fn with_capabilities(config: EscaperConfig, capabilities: Capabilities) -> Self {
        Self {
            config,
            capabilities,
        }
    }

    pub fn config(&self) -> &EscaperConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Set the charset declared to the HTML escaping capability.
    ///
    /// Empty or unrecognized labels are rejected and leave the current
    /// encoding in place.
    pub fn set_encoding(&mut self, encoding: &str) -> Result<()> {
        self.config.set_encoding(encoding)
    }

    pub fn encoding(&self) -> &str {
        self.config.encoding()
    }

    /// Set the HTML quote handling from a host quote flag (0, 2 or 3).
    pub fn set_html_quote_type(&mut self, quote_type: i64) -> Result<()> {
        let mode = QuoteMode::try_from(quote_type)?;
        self.config.set_quote_mode(mode);
        Ok(())
    }

    pub fn html_quote_type(&self) -> QuoteMode {
        self.config.quote_mode()
    }

    /// Detect the charset of `text`.
    ///
    /// `None` for non-text input, or when the charset cannot be determined.
    pub fn detect_encoding<T: AsText + ?Sized>(&self, text: &T) -> Option<String> {
        let bytes = text.as_text()?;
        EncodingDetector::new(self.capabilities.detect.as_deref()).detect(bytes)
    }

    /// Normalize `text` to its UTF-32 big-endian byte form.
    ///
    /// Non-text input normalizes to an empty byte string.
    pub fn normalize_encoding<T: AsText + ?Sized>(&self, text: &T) -> Result<Vec<u8>> {
        let bytes = text.as_text().unwrap_or_default();
        Ok(self.normalize(bytes)?.to_utf32_be())
    }

    fn normalize(&self, bytes: &[u8]) -> Result<CodepointSequence> {
        EncodingNormalizer::new(
            self.capabilities.detect.as_deref(),
            self.capabilities.convert.as_deref(),
        )
        .normalize(bytes)
    }

    /// Escape HTML special characters per the configured quote mode and
    /// encoding. Returns `None` only for non-text input.
    pub fn escape_html<T: AsText + ?Sized>(&self, text: &T) -> Option<String> {
        let bytes = text.as_text()?;
        Some(
            self.capabilities
                .html
                .escape(bytes, self.config.quote_mode(), self.config.encoding()),
        )
    }

    /// Escape an HTML attribute value.
    ///
    /// Returns `Ok(None)` for non-text and falsy input. Fails when the text
    /// cannot be normalized.
    pub fn escape_html_attr<T: AsText + ?Sized>(&self, text: &T) -> Result<Option<String>> {
        self.escape_normalized(text, Context::HtmlAttr, escape::attr::escape)
    }

    /// Escape text for a CSS token. Same sentinel and error rules as
    /// [`Escaper::escape_html_attr`].
    pub fn escape_css<T: AsText + ?Sized>(&self, text: &T) -> Result<Option<String>> {
        self.escape_normalized(text, Context::Css, escape::css::escape)
    }

    /// Escape text for a JavaScript string literal. Same sentinel and error
    /// rules as [`Escaper::escape_html_attr`].
    pub fn escape_js<T: AsText + ?Sized>(&self, text: &T) -> Result<Option<String>> {
        self.escape_normalized(text, Context::Js, escape::js::escape)
    }

    /// Percent-encode a URL component. Non-text input encodes to `""`.
    pub fn escape_url<T: AsText + ?Sized>(&self, text: &T) -> String {
        match text.as_text() {
            Some(bytes) => self.capabilities.url.encode_component(bytes),
            None => String::new(),
        }
    }

    /// Escape `text` for `context`, with the sentinel and error rules of the
    /// context-specific method.
    pub fn escape<T: AsText + ?Sized>(&self, context: Context, text: &T) -> Result<Option<String>> {
        match context {
            Context::Html => Ok(self.escape_html(text)),
            Context::HtmlAttr => self.escape_html_attr(text),
            Context::Css => self.escape_css(text),
            Context::Js => self.escape_js(text),
            Context::Url => Ok(text.as_text().map(|_| self.escape_url(text))),
        }
    }

    fn escape_normalized<T: AsText + ?Sized>(
        &self,
        text: &T,
        context: Context,
        escape: fn(&CodepointSequence) -> String,
    ) -> Result<Option<String>> {
        let Some(bytes) = text.as_text() else {
            return Ok(None);
        };
        if text.is_falsy() {
            debug!(%context, "falsy input passed through");
            return Ok(None);
        }
        let codepoints = self.normalize(bytes)?;
        Ok(Some(escape(&codepoints)))
    }
}
