//! Charset detection tests.
//!
//! Uses a counting detector double to observe which detection entry points
//! the escaper reaches for a given input.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use escaper::capability::EncodingRs;
use escaper::{Capabilities, EncodingDetect, Escaper, EscaperConfig};

#[derive(Default)]
struct CountingDetector {
    strict_calls: AtomicUsize,
    lenient_calls: AtomicUsize,
}

impl EncodingDetect for CountingDetector {
    fn matches_strict(&self, bytes: &[u8], candidate: &str) -> bool {
        self.strict_calls.fetch_add(1, Ordering::SeqCst);
        EncodingRs.matches_strict(bytes, candidate)
    }

    fn detect_lenient(&self, bytes: &[u8]) -> Option<String> {
        self.lenient_calls.fetch_add(1, Ordering::SeqCst);
        EncodingRs.detect_lenient(bytes)
    }
}

fn counting_escaper() -> (Escaper, Arc<CountingDetector>) {
    let detector = Arc::new(CountingDetector::default());
    let capabilities = Capabilities::default().with_detect(Some(detector.clone()));
    (
        Escaper::with_capabilities(EscaperConfig::new(), capabilities),
        detector,
    )
}

// ============================================================================
// Fast Path Tests
// ============================================================================

#[test]
fn test_ascii_skips_detector() {
    let (escaper, detector) = counting_escaper();

    assert_eq!(escaper.detect_encoding("<script>alert(1)</script>").as_deref(), Some("ASCII"));
    assert_eq!(detector.strict_calls.load(Ordering::SeqCst), 0);
    assert_eq!(detector.lenient_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_latin1_skips_detector() {
    let (escaper, detector) = counting_escaper();

    assert_eq!(escaper.detect_encoding(b"na\xEFve \x80").as_deref(), Some("ISO-8859-1"));
    assert_eq!(detector.strict_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_escaping_ascii_never_probes() {
    let (escaper, detector) = counting_escaper();

    escaper.escape_js("plain").unwrap();
    escaper.escape_css("plain").unwrap();
    escaper.escape_html_attr("plain").unwrap();
    assert_eq!(detector.strict_calls.load(Ordering::SeqCst), 0);
    assert_eq!(detector.lenient_calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Strict Candidate Tests
// ============================================================================

#[test]
fn test_utf8_stops_at_third_candidate() {
    let (escaper, detector) = counting_escaper();

    assert_eq!(escaper.detect_encoding("Grüße").as_deref(), Some("UTF-8"));
    // UTF-32, UTF-16, UTF-8
    assert_eq!(detector.strict_calls.load(Ordering::SeqCst), 3);
    assert_eq!(detector.lenient_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_wider_forms_win() {
    let escaper = Escaper::new();

    let utf16be = [0xFE, 0xFF, 0x00, 0x47, 0x00, 0xFC];
    assert_eq!(escaper.detect_encoding(&utf16be).as_deref(), Some("UTF-16"));

    let utf32le = [0xFF, 0xFE, 0x00, 0x00, 0x47, 0x00, 0x00, 0x00];
    assert_eq!(escaper.detect_encoding(&utf32le).as_deref(), Some("UTF-32"));
}

#[test]
fn test_bom_reaches_strict_candidates() {
    let (escaper, detector) = counting_escaper();

    // UTF-16LE "日" has no NUL byte but must not be read as Latin-1
    assert_eq!(escaper.detect_encoding(&[0xFF, 0xFE, 0xE5, 0x65]).as_deref(), Some("UTF-16"));
    // UTF-32, UTF-16
    assert_eq!(detector.strict_calls.load(Ordering::SeqCst), 2);

    assert_eq!(escaper.detect_encoding(&[0xFE, 0xFF, 0x20, 0xAC]).as_deref(), Some("UTF-16"));
}

#[test]
fn test_odd_length_after_bom_is_latin1() {
    let escaper = Escaper::new();
    assert_eq!(escaper.detect_encoding(b"\xFF\xFEA").as_deref(), Some("ISO-8859-1"));
    assert_eq!(escaper.escape_js(b"\xFF\xFEA").unwrap().as_deref(), Some("\\xff\\xfeA"));
}

#[test]
fn test_lenient_fallback() {
    let (escaper, detector) = counting_escaper();

    // BOM-less UTF-16LE with a non-ASCII character
    let bytes = [b'a', 0x00, 0xE9, 0x00, b'b', 0x00, 0x80, 0x00];
    assert_eq!(escaper.detect_encoding(&bytes).as_deref(), Some("UTF-16LE"));
    assert_eq!(detector.strict_calls.load(Ordering::SeqCst), 5);
    assert_eq!(detector.lenient_calls.load(Ordering::SeqCst), 1);

    assert_eq!(escaper.escape_js(&bytes).unwrap().as_deref(), Some("a\\xe9b\\x80"));
}

// ============================================================================
// Missing Capability Tests
// ============================================================================

#[test]
fn test_no_detector_returns_none() {
    let capabilities = Capabilities::default().with_detect(None);
    let escaper = Escaper::with_capabilities(EscaperConfig::new(), capabilities);

    assert_eq!(escaper.detect_encoding("ascii").as_deref(), Some("ASCII"));
    assert_eq!(escaper.detect_encoding("Grüße"), None);
    assert!(escaper.escape_js("Grüße").is_err());
}
