use serde::{Deserialize, Serialize};

use crate::color::{hue_degrees, parse_hex, srgb_to_oklch, Srgb};
use crate::contrast::contrast_ratio;

/// OKLCH values scaled for display: `l` and `c` are multiplied by 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LchReport {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl LchReport {
    pub fn from_srgb(color: Srgb) -> Self {
        let color = srgb_to_oklch(color);

        LchReport {
            l: color.l * 100.0,
            c: color.chroma * 100.0,
            h: hue_degrees(&color),
        }
    }

    /// Reads the report back from an encoded hex, so it describes what is
    /// actually displayed rather than the pre-quantization value.
    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex(hex).ok().map(Self::from_srgb)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchResult {
    pub stop: u32,
    pub hex: String,
    pub lch: LchReport,
    /// Contrast against the next swatch in the list, 0 for the last one.
    pub contrast_with_next: f64,
    pub is_anchor: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_original: bool,
}

impl SwatchResult {
    pub fn new(stop: u32, hex: String, lch: LchReport) -> Self {
        SwatchResult {
            stop,
            hex,
            lch,
            contrast_with_next: 0.0,
            is_anchor: false,
            is_original: false,
        }
    }
}

/// Sorts ascending and drops duplicate stops.
pub(crate) fn sorted_stops(stops: &[u32]) -> Vec<u32> {
    let mut sorted = stops.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// Marks the swatch at `anchor_stop` as the anchor. When that stop was not
/// requested, the middle swatch is marked instead.
pub(crate) fn mark_anchor(swatches: &mut [SwatchResult], anchor_stop: u32) {
    if swatches.is_empty() {
        return;
    }

    let index = swatches
        .iter()
        .position(|s| s.stop == anchor_stop && !s.is_original)
        .unwrap_or(swatches.len() / 2);

    swatches[index].is_anchor = true;
}

pub(crate) fn annotate_contrast(swatches: &mut [SwatchResult]) {
    let colors: Vec<_> = swatches.iter().map(|s| parse_hex(&s.hex).ok()).collect();

    for (i, swatch) in swatches.iter_mut().enumerate() {
        swatch.contrast_with_next = match (colors[i], colors.get(i + 1).copied().flatten()) {
            (Some(current), Some(next)) => contrast_ratio(current, next),
            _ => 0.0,
        };
    }
}
