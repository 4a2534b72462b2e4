//! Escaper configuration.

use std::fmt;

use crate::capability::Charset;
use crate::error::{Error, Result};

/// Encoding assumed when none is configured.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Which quote characters HTML escaping converts to entities.
///
/// The discriminants match the host quote flags (`ENT_NOQUOTES`,
/// `ENT_COMPAT`, `ENT_QUOTES`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum QuoteMode {
    /// Leave both `"` and `'` alone.
    None = 0,
    /// Convert `"` only.
    DoubleQuotes = 2,
    /// Convert both `"` and `'`.
    #[default]
    BothQuotes = 3,
}

impl QuoteMode {
    /// Whether `"` is converted to `&quot;`.
    pub fn escapes_double(self) -> bool {
        matches!(self, QuoteMode::DoubleQuotes | QuoteMode::BothQuotes)
    }

    /// Whether `'` is converted to `&#039;`.
    pub fn escapes_single(self) -> bool {
        self == QuoteMode::BothQuotes
    }
}

impl TryFrom<i64> for QuoteMode {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(QuoteMode::None),
            2 => Ok(QuoteMode::DoubleQuotes),
            3 => Ok(QuoteMode::BothQuotes),
            _ => Err(Error::InvalidArgument(format!(
                "The quoting type is not valid: {value}"
            ))),
        }
    }
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuoteMode::None => "none",
            QuoteMode::DoubleQuotes => "double",
            QuoteMode::BothQuotes => "both",
        };
        f.write_str(name)
    }
}

/// Per-instance settings read by every escape call.
///
/// Build it once and hand it to [`crate::Escaper::with_config`]:
///
/// ```
/// use escaper::{EscaperConfig, QuoteMode};
///
/// let config = EscaperConfig::new()
///     .with_encoding("iso-8859-1")
///     .unwrap()
///     .with_quote_mode(QuoteMode::DoubleQuotes);
/// assert_eq!(config.encoding(), "iso-8859-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct EscaperConfig {
    encoding: String,
    html_quote_type: QuoteMode,
}

impl Default for EscaperConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            html_quote_type: QuoteMode::default(),
        }
    }
}

impl EscaperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared charset, rejecting labels no backend can resolve.
    pub fn with_encoding(mut self, encoding: &str) -> Result<Self> {
        self.set_encoding(encoding)?;
        Ok(self)
    }

    pub fn with_quote_mode(mut self, mode: QuoteMode) -> Self {
        self.html_quote_type = mode;
        self
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn quote_mode(&self) -> QuoteMode {
        self.html_quote_type
    }

    pub(crate) fn set_encoding(&mut self, encoding: &str) -> Result<()> {
        let label = encoding.trim();
        if label.is_empty() {
            return Err(Error::InvalidArgument(
                "The character set must be a non-empty string".to_string(),
            ));
        }
        if Charset::for_label(label).is_none() {
            return Err(Error::InvalidArgument(format!(
                "The character set is not recognized: {label}"
            )));
        }
        self.encoding = label.to_string();
        Ok(())
    }

    pub(crate) fn set_quote_mode(&mut self, mode: QuoteMode) {
        self.html_quote_type = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EscaperConfig::new();
        assert_eq!(config.encoding(), "utf-8");
        assert_eq!(config.quote_mode(), QuoteMode::BothQuotes);
    }

    #[test]
    fn test_quote_mode_from_flag() {
        assert_eq!(QuoteMode::try_from(0), Ok(QuoteMode::None));
        assert_eq!(QuoteMode::try_from(2), Ok(QuoteMode::DoubleQuotes));
        assert_eq!(QuoteMode::try_from(3), Ok(QuoteMode::BothQuotes));
        assert!(matches!(
            QuoteMode::try_from(1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(QuoteMode::try_from(-3).is_err());
    }

    #[test]
    fn test_quote_mode_flags() {
        assert!(!QuoteMode::None.escapes_double());
        assert!(!QuoteMode::None.escapes_single());
        assert!(QuoteMode::DoubleQuotes.escapes_double());
        assert!(!QuoteMode::DoubleQuotes.escapes_single());
        assert!(QuoteMode::BothQuotes.escapes_double());
        assert!(QuoteMode::BothQuotes.escapes_single());
    }

    #[test]
    fn test_set_encoding_rejects_bad_labels() {
        let mut config = EscaperConfig::new();
        assert!(config.set_encoding("").is_err());
        assert!(config.set_encoding("   ").is_err());
        assert!(config.set_encoding("klingon-8").is_err());
        assert_eq!(config.encoding(), "utf-8");

        config.set_encoding("UTF-16").unwrap();
        assert_eq!(config.encoding(), "UTF-16");
    }
}
