//! WASM bindings for tabclip
//!
//! This module provides JavaScript-accessible functions for table detection
//! and HTML conversion. Clipboard access is left to the browser side
//! (`navigator.clipboard.write` with a `text/html` blob).

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{ConversionError, ConvertOptions, Delimiter};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsConvertOptions {
    /// Render the first row as header cells
    #[serde(default = "default_true")]
    pub has_header: bool,
    /// `auto`, `tsv`, `csv`, `spaces`, `markdown` or `boxdraw`
    #[serde(default = "default_format")]
    pub format: String,
    /// Turn literal `\t`, `\n`, `\r` sequences into control characters
    #[serde(default = "default_true")]
    pub unescape_literals: bool,
}

#[cfg(feature = "wasm")]
impl Default for JsConvertOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            format: default_format(),
            unescape_literals: true,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
fn default_format() -> String {
    "auto".to_string()
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The HTML table fragment
    pub output: String,
    /// The format the input was parsed as
    pub format: Option<String>,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl ConvertResult {
    fn failure(error: ConversionError) -> Self {
        ConvertResult {
            output: String::new(),
            format: None,
            success: false,
            error: Some(error.to_string()),
            warnings: vec![],
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert tabular text to an HTML table
///
/// # Arguments
/// * `input` - Tabular text
/// * `has_header` - Render the first row as header cells
/// * `format` - `auto` or a format name
///
/// # Returns
/// HTML table fragment; unknown format names fall back to `auto`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "toHtmlTable")]
pub fn to_html_table_wasm(input: &str, has_header: bool, format: &str) -> String {
    let delimiter = format.parse::<Delimiter>().unwrap_or_default();
    crate::to_html_table(input, has_header, delimiter)
}

/// Detect the table format (tsv, csv, spaces, markdown or boxdraw)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_wasm(input: &str) -> String {
    crate::detect_format(input).to_string()
}

/// Run the full conversion pipeline with options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convert")]
pub fn convert_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: JsConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match opts.format.parse::<Delimiter>() {
        Ok(delimiter) => {
            let convert_opts = ConvertOptions {
                has_header: opts.has_header,
                delimiter,
                unescape_literals: opts.unescape_literals,
            };
            match crate::convert(input, &convert_opts) {
                Ok(output) => ConvertResult {
                    format: Some(output.format.to_string()),
                    warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
                    output: output.html,
                    success: true,
                    error: None,
                },
                Err(e) => ConvertResult::failure(e),
            }
        }
        Err(e) => ConvertResult::failure(e),
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
