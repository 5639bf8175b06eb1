//! WCAG 2.x relative-luminance contrast.

use crate::color::{parse_hex, Srgb};
use crate::Result;

/// Minimum ratio for normal text at WCAG level AA.
pub const WCAG_AA: f64 = 4.5;

fn to_linear(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(color: Srgb) -> f64 {
    let r = to_linear(color.red);
    let g = to_linear(color.green);
    let b = to_linear(color.blue);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Ratio between 1 and 21, independent of argument order.
pub fn contrast_ratio(a: Srgb, b: Srgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };

    (lighter + 0.05) / (darker + 0.05)
}

pub fn contrast(hex_a: &str, hex_b: &str) -> Result<f64> {
    Ok(contrast_ratio(parse_hex(hex_a)?, parse_hex(hex_b)?))
}

pub fn passes_aa(ratio: f64) -> bool {
    ratio >= WCAG_AA
}
