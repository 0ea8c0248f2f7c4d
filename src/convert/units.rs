use std::borrow::Cow;

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::types::PIXEL_BASE;

// A digit run with an optional fraction, followed by a standalone `px` unit
const PIXEL_PATTERN: &str = r"([0-9]+(?:\.[0-9]+)?)px\b";

static PIXEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PIXEL_PATTERN).expect("pixel pattern is valid"));

// Stylesheets are not guaranteed to be UTF-8, so files are rewritten as raw bytes
static PIXEL_BYTES_RE: Lazy<regex::bytes::Regex> =
    Lazy::new(|| regex::bytes::Regex::new(PIXEL_PATTERN).expect("pixel pattern is valid"));

/// Convert a pixel magnitude to a rem value with two decimals, e.g. `20.0` to `"1.25rem"`
pub fn px_to_rem(px: f64) -> String {
    format!("{:.2}rem", px / PIXEL_BASE)
}

/// Replace every pixel length in `text` with its rem equivalent.
///
/// Text without pixel lengths is returned borrowed and untouched.
pub fn rewrite_pixels(text: &str) -> Cow<'_, str> {
    rewrite_pixels_counted(text).0
}

/// Same as [`rewrite_pixels`], also returning how many values were replaced
pub fn rewrite_pixels_counted(text: &str) -> (Cow<'_, str>, usize) {
    let mut replaced = 0;

    let rewritten = PIXEL_RE.replace_all(text, |caps: &Captures| {
        replaced += 1;
        px_to_rem(parse_pixels(&caps[1]))
    });

    (rewritten, replaced)
}

/// Byte-level [`rewrite_pixels_counted`]; bytes outside pixel lengths are kept
/// verbatim, whatever their encoding
pub fn rewrite_pixel_bytes(content: &[u8]) -> (Cow<'_, [u8]>, usize) {
    let mut replaced = 0;

    let rewritten = PIXEL_BYTES_RE.replace_all(content, |caps: &regex::bytes::Captures| {
        replaced += 1;
        // The capture is ASCII digits and a dot
        let number = String::from_utf8_lossy(&caps[1]);
        px_to_rem(parse_pixels(&number)).into_bytes()
    });

    (rewritten, replaced)
}

// The pattern only admits plain decimals, so a failure here converts as zero
fn parse_pixels(number: &str) -> f64 {
    number.parse::<f64>().unwrap_or_else(|e| {
        trace!("Could not parse pixel value {:?}: {}", number, e);
        0.0
    })
}
