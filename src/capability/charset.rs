//! Charset resolution and the byte-level decoders behind the default
//! encoding backend.
//!
//! `encoding_rs` implements the WHATWG Encoding Standard, which has no UTF-32
//! and treats the `iso-8859-1` label as windows-1252. Those two, plus plain
//! ASCII and BOM-sniffing UTF-16, are decoded by hand here; every other label
//! goes to `encoding_rs`.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

/// Byte order of a UTF-16 or UTF-32 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// A resolved source charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// 7-bit US-ASCII.
    Ascii,
    /// ISO-8859-1 proper: byte value == codepoint.
    Latin1,
    /// UTF-32; `None` means "sniff the BOM, default big-endian".
    Utf32(Option<Endian>),
    /// UTF-16; `None` means "sniff the BOM, default big-endian".
    Utf16(Option<Endian>),
    /// Anything else `encoding_rs` knows about.
    Whatwg(&'static Encoding),
}

const REPLACEMENT: u32 = 0xFFFD;

impl Charset {
    /// Resolve a charset label, case-insensitively.
    pub fn for_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_ascii_lowercase();
        let charset = match lower.as_str() {
            "ascii" | "us-ascii" | "ansi_x3.4-1968" => Charset::Ascii,
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "l1" => Charset::Latin1,
            "utf-32" | "utf32" => Charset::Utf32(None),
            "utf-32be" => Charset::Utf32(Some(Endian::Big)),
            "utf-32le" => Charset::Utf32(Some(Endian::Little)),
            "utf-16" | "utf16" => Charset::Utf16(None),
            "utf-16be" => Charset::Utf16(Some(Endian::Big)),
            "utf-16le" => Charset::Utf16(Some(Endian::Little)),
            _ => Charset::Whatwg(Encoding::for_label(lower.as_bytes())?),
        };
        Some(charset)
    }

    /// Whether `bytes` decode cleanly in this charset, without guessing.
    ///
    /// The unmarked UTF-16/UTF-32 forms only match when a byte-order mark is
    /// present: almost any even-length byte string is "valid" UTF-16, so
    /// without a BOM there is nothing to be strict about.
    pub fn matches_strict(self, bytes: &[u8]) -> bool {
        match self {
            Charset::Latin1 => bytes.iter().all(|&b| is_latin1_text(b)),
            Charset::Utf32(None) if utf32_bom(bytes).is_none() => false,
            Charset::Utf16(None) if utf16_bom(bytes).is_none() => false,
            _ => self.decode_strict(bytes).is_some(),
        }
    }

    /// Decode `bytes` to a string, or `None` if any sequence is malformed.
    ///
    /// Unmarked UTF-16/UTF-32 default to big-endian here.
    pub fn decode_strict(self, bytes: &[u8]) -> Option<String> {
        match self {
            Charset::Ascii => bytes
                .is_ascii()
                .then(|| bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Utf32(endian) => {
                let endian = endian.or_else(|| utf32_bom(bytes)).unwrap_or(Endian::Big);
                let body = strip_utf32_bom(bytes, endian);
                if body.len() % 4 != 0 {
                    return None;
                }
                body.chunks_exact(4)
                    .map(|unit| char::from_u32(utf32_unit(unit, endian)))
                    .collect()
            }
            Charset::Utf16(endian) => {
                let endian = endian.or_else(|| utf16_bom(bytes)).unwrap_or(Endian::Big);
                let body = strip_utf16_bom(bytes, endian);
                if body.len() % 2 != 0 {
                    return None;
                }
                utf16_encoding(endian)
                    .decode_without_bom_handling_and_without_replacement(body)
                    .map(|text| text.into_owned())
            }
            Charset::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }

    /// Decode `bytes` to codepoints. Malformed input becomes U+FFFD.
    ///
    /// A UTF-16/UTF-32 byte-order mark is consumed as a marker. Any other
    /// leading U+FEFF is kept as a character, so it still gets escaped.
    pub fn decode(self, bytes: &[u8]) -> Vec<u32> {
        match self {
            Charset::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { u32::from(b) } else { REPLACEMENT })
                .collect(),
            Charset::Latin1 => bytes.iter().map(|&b| u32::from(b)).collect(),
            Charset::Utf32(endian) => {
                let endian = endian.or_else(|| utf32_bom(bytes)).unwrap_or(Endian::Big);
                let body = strip_utf32_bom(bytes, endian);
                let mut out: Vec<u32> = body
                    .chunks_exact(4)
                    .map(|unit| {
                        let value = utf32_unit(unit, endian);
                        if char::from_u32(value).is_some() {
                            value
                        } else {
                            REPLACEMENT
                        }
                    })
                    .collect();
                if body.len() % 4 != 0 {
                    out.push(REPLACEMENT);
                }
                out
            }
            Charset::Utf16(endian) => {
                let endian = endian.or_else(|| utf16_bom(bytes)).unwrap_or(Endian::Big);
                let body = strip_utf16_bom(bytes, endian);
                let (text, _malformed) = utf16_encoding(endian).decode_without_bom_handling(body);
                text.chars().map(u32::from).collect()
            }
            Charset::Whatwg(encoding) => {
                let (text, _malformed) = encoding.decode_without_bom_handling(bytes);
                text.chars().map(u32::from).collect()
            }
        }
    }

    /// Canonical display name, as reported by detection.
    pub fn name(self) -> &'static str {
        match self {
            Charset::Ascii => "ASCII",
            Charset::Latin1 => "ISO-8859-1",
            Charset::Utf32(None) => "UTF-32",
            Charset::Utf32(Some(Endian::Big)) => "UTF-32BE",
            Charset::Utf32(Some(Endian::Little)) => "UTF-32LE",
            Charset::Utf16(None) => "UTF-16",
            Charset::Utf16(Some(Endian::Big)) => "UTF-16BE",
            Charset::Utf16(Some(Endian::Little)) => "UTF-16LE",
            Charset::Whatwg(encoding) => encoding.name(),
        }
    }
}

/// Printable ISO-8859-1 plus tab, LF and CR. C1 controls do not count.
fn is_latin1_text(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | 0x20..=0x7E | 0xA0..=0xFF)
}

fn utf16_encoding(endian: Endian) -> &'static Encoding {
    match endian {
        Endian::Big => UTF_16BE,
        Endian::Little => UTF_16LE,
    }
}

fn utf32_bom(bytes: &[u8]) -> Option<Endian> {
    match bytes {
        [0x00, 0x00, 0xFE, 0xFF, ..] => Some(Endian::Big),
        [0xFF, 0xFE, 0x00, 0x00, ..] => Some(Endian::Little),
        _ => None,
    }
}

fn utf16_bom(bytes: &[u8]) -> Option<Endian> {
    match bytes {
        [0xFE, 0xFF, ..] => Some(Endian::Big),
        [0xFF, 0xFE, ..] => Some(Endian::Little),
        _ => None,
    }
}

fn strip_utf32_bom(bytes: &[u8], endian: Endian) -> &[u8] {
    if utf32_bom(bytes) == Some(endian) {
        &bytes[4..]
    } else {
        bytes
    }
}

fn strip_utf16_bom(bytes: &[u8], endian: Endian) -> &[u8] {
    if utf16_bom(bytes) == Some(endian) {
        &bytes[2..]
    } else {
        bytes
    }
}

fn utf32_unit(unit: &[u8], endian: Endian) -> u32 {
    let quad = [unit[0], unit[1], unit[2], unit[3]];
    match endian {
        Endian::Big => u32::from_be_bytes(quad),
        Endian::Little => u32::from_le_bytes(quad),
    }
}

/// Best-effort guess for input no strict candidate accepted.
///
/// Honors any byte-order mark, then looks for the NUL pattern of BOM-less
/// UTF-16 text that is mostly ASCII, and otherwise settles on windows-1252,
/// which maps every byte.
pub fn sniff(bytes: &[u8]) -> Option<Charset> {
    if let Some(endian) = utf32_bom(bytes) {
        return Some(Charset::Utf32(Some(endian)));
    }
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Some(Charset::for_label(encoding.name()).unwrap_or(Charset::Whatwg(encoding)));
    }
    if bytes.len() >= 2 && bytes.len() % 2 == 0 {
        let pairs = bytes.len() / 2;
        let even_nuls = bytes.iter().step_by(2).filter(|&&b| b == 0).count();
        let odd_nuls = bytes.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
        if odd_nuls * 2 > pairs && even_nuls == 0 {
            return Some(Charset::Utf16(Some(Endian::Little)));
        }
        if even_nuls * 2 > pairs && odd_nuls == 0 {
            return Some(Charset::Utf16(Some(Endian::Big)));
        }
    }
    if bytes.is_empty() {
        return None;
    }
    Some(Charset::Whatwg(encoding_rs::WINDOWS_1252))
}
