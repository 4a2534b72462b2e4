//! WASM bindings for browser-side escaping.
//!
//! This module exposes the escapers to JavaScript via wasm-bindgen. Inputs
//! arrive as raw bytes so charset detection sees exactly what the caller has;
//! the pass-through sentinel maps to `undefined`.

use wasm_bindgen::prelude::*;

use crate::{Escaper, EscaperConfig, QuoteMode};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn escaper(encoding: Option<String>, quote_type: Option<i32>) -> Result<Escaper, JsValue> {
    let mut config = EscaperConfig::new();
    if let Some(encoding) = encoding {
        config = config
            .with_encoding(&encoding)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
    }
    if let Some(quote_type) = quote_type {
        let mode = QuoteMode::try_from(i64::from(quote_type))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        config = config.with_quote_mode(mode);
    }
    Ok(Escaper::with_config(config))
}

/// Escape HTML special characters.
#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(
    data: &[u8],
    encoding: Option<String>,
    quote_type: Option<i32>,
) -> Result<String, JsValue> {
    let escaper = escaper(encoding, quote_type)?;
    Ok(escaper.escape_html(data).unwrap_or_default())
}

/// Escape an HTML attribute value. Returns `undefined` for empty input.
#[wasm_bindgen(js_name = escapeHtmlAttr)]
pub fn escape_html_attr(data: &[u8]) -> Result<Option<String>, JsValue> {
    Escaper::new()
        .escape_html_attr(data)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Escape a CSS token. Returns `undefined` for empty input.
#[wasm_bindgen(js_name = escapeCss)]
pub fn escape_css(data: &[u8]) -> Result<Option<String>, JsValue> {
    Escaper::new()
        .escape_css(data)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Escape a JavaScript string literal body. Returns `undefined` for empty input.
#[wasm_bindgen(js_name = escapeJs)]
pub fn escape_js(data: &[u8]) -> Result<Option<String>, JsValue> {
    Escaper::new()
        .escape_js(data)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Percent-encode a URL component.
#[wasm_bindgen(js_name = escapeUrl)]
pub fn escape_url(data: &[u8]) -> String {
    Escaper::new().escape_url(data)
}

/// Detect the charset of raw bytes.
#[wasm_bindgen(js_name = detectEncoding)]
pub fn detect_encoding(data: &[u8]) -> Option<String> {
    Escaper::new().detect_encoding(data)
}
