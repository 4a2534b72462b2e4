//! Per-context escaping policies.
//!
//! Each submodule pairs a pure classification function (`is_safe`) with an
//! `escape` pass over a [`crate::CodepointSequence`]. All three are
//! allow-lists: a codepoint is passed through only when it is known safe in
//! the target context, and everything else is escaped.
//!
//! - [`attr`]: HTML attribute values, `&#<decimal>;`
//! - [`css`]: CSS tokens, `\<hex> `
//! - [`js`]: JavaScript string literals, `\xHH` / `\uHHHH`

pub mod attr;
pub mod css;
pub mod js;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// ASCII letters and digits, the base of every allow-list.
#[inline]
pub fn is_ascii_alnum(cp: u32) -> bool {
    matches!(cp, 0x30..=0x39 | 0x41..=0x5A | 0x61..=0x7A)
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Append `value` as lowercase hex, zero-padded to at least `width` digits.
pub(crate) fn push_hex(out: &mut String, value: u32, width: usize) {
    let digits = ((32 - value.leading_zeros()).div_ceil(4) as usize).max(width).max(1);
    for shift in (0..digits).rev() {
        let nibble = (value >> (shift * 4)) & 0xF;
        out.push(HEX_DIGITS[nibble as usize] as char);
    }
}

/// The syntactic context a piece of text is being embedded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum Context {
    Html,
    HtmlAttr,
    Css,
    Js,
    Url,
}

impl Context {
    pub const ALL: [Context; 5] = [
        Context::Html,
        Context::HtmlAttr,
        Context::Css,
        Context::Js,
        Context::Url,
    ];
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Context::Html => "html",
            Context::HtmlAttr => "attr",
            Context::Css => "css",
            Context::Js => "js",
            Context::Url => "url",
        };
        f.write_str(name)
    }
}

impl FromStr for Context {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Context::Html),
            "attr" | "html-attr" | "htmlattr" => Ok(Context::HtmlAttr),
            "css" => Ok(Context::Css),
            "js" | "javascript" => Ok(Context::Js),
            "url" => Ok(Context::Url),
            other => Err(Error::InvalidArgument(format!("unknown context: {other}"))),
        }
    }
}
