//! # escaper
//!
//! Context-aware escaping of untrusted text for HTML, HTML attributes, CSS,
//! JavaScript string literals and URL components.
//!
//! ## Features
//!
//! - Charset detection for input of unknown origin (ASCII, ISO-8859-1,
//!   UTF-8, UTF-16 and UTF-32 with byte-order marks, legacy charsets)
//! - Normalization to whole codepoints before any per-character decision
//! - Allow-list escaping: only characters known to be safe pass through
//! - Pluggable host capabilities for detection, conversion, HTML entities
//!   and percent-encoding
//!
//! ## Quick Start
//!
//! ```
//! use escaper::Escaper;
//!
//! let escaper = Escaper::new();
//!
//! let attr = escaper.escape_html_attr("\" onmouseover=\"alert(1)").unwrap();
//! assert_eq!(
//!     attr.as_deref(),
//!     Some("&#34;&#32;onmouseover&#61;&#34;alert&#40;1&#41;")
//! );
//!
//! let css = escaper.escape_css("font-family: <Verdana>").unwrap();
//! assert_eq!(css.as_deref(), Some("font\\2d family\\3a \\20 \\3c Verdana\\3e "));
//! ```
//!
//! ## Pass-through Sentinel
//!
//! The attribute, CSS and JavaScript escapers return `Ok(None)` when there is
//! nothing to escape: the input is not text (see [`AsText`]) or is falsy (`""`
//! or `"0"`). That is distinct from a successfully escaped result and from an
//! error. [`Error::MissingCapability`] is always surfaced, never replaced by
//! unescaped output.
//!
//! ## Capabilities
//!
//! ```
//! use escaper::{Capabilities, Error, Escaper, EscaperConfig};
//!
//! // An escaper built without charset support can still escape HTML...
//! let escaper = Escaper::with_capabilities(EscaperConfig::new(), Capabilities::minimal());
//! assert_eq!(escaper.escape_html("<b>").as_deref(), Some("&lt;b&gt;"));
//!
//! // ...but refuses to guess for contexts that need normalization.
//! assert_eq!(
//!     escaper.escape_js("x"),
//!     Err(Error::MissingCapability("encoding conversion"))
//! );
//! ```

pub mod capability;
pub mod config;
pub mod detect;
pub mod error;
pub mod escape;
mod escaper;
pub mod normalize;
mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use capability::{
    Capabilities, EncodingConvert, EncodingDetect, HtmlSpecialChars, PercentEncode,
};
pub use config::{EscaperConfig, QuoteMode};
pub use detect::EncodingDetector;
pub use error::{Error, Result};
pub use escape::Context;
pub use escaper::Escaper;
pub use normalize::{CodepointSequence, EncodingNormalizer};
pub use text::AsText;
