use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

use super::PercentEncode;

/// Everything except the RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// RFC 3986 component encoding, with a literal space written as `+`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormUrlEncoding;

impl PercentEncode for FormUrlEncoding {
    fn encode_component(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        for (i, segment) in bytes.split(|&b| b == b' ').enumerate() {
            if i > 0 {
                out.push('+');
            }
            out.extend(percent_encode(segment, COMPONENT));
        }
        out
    }
}
