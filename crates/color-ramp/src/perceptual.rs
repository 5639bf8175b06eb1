//! Hue-driven palettes with a fixed lightness curve.
//!
//! Every stop shares the requested hue. Lightness is a function of the stop
//! number alone, so stop 500 lands on the same lightness for every hue, and
//! chroma is pushed as far as sRGB allows before `vividness` scales it down.

use crate::color::{oklch, oklch_to_hex};
use crate::gamut::find_max_chroma;
use crate::swatch::{annotate_contrast, mark_anchor, sorted_stops, LchReport, SwatchResult};

pub const ANCHOR_STOP: u32 = 500;

pub const DEFAULT_STOPS: [u32; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// OKLCH lightness for a stop, clamped to `[0, 1]`.
///
/// ```text
///    0..100   1.00 -> 0.90   near white
///  100..500   0.90 -> 0.55   light range
///       500   0.45           anchor
///  501..900   0.40 -> 0.10   dark range
///      900+   0.10 -> 0.00   near black
/// ```
pub fn lightness_for_stop(stop: u32) -> f64 {
    let s = f64::from(stop);

    let l = if stop < 100 {
        1.00 - (s / 100.0) * 0.10
    } else if stop < 500 {
        0.90 - ((s - 100.0) / 400.0) * 0.35
    } else if stop == 500 {
        0.45
    } else if stop <= 900 {
        0.40 - ((s - 600.0) / 300.0) * 0.30
    } else {
        0.10 - ((s - 900.0) / 100.0) * 0.10
    };

    l.clamp(0.0, 1.0)
}

/// Generates one swatch per stop at constant `hue`.
///
/// `vividness` is clamped to `[0, 1]` and multiplies the maximum in-gamut
/// chroma of each stop. The reported hue is `hue` itself, untouched by any
/// conversion.
pub fn generate_perceptual(hue: f64, stops: &[u32], vividness: f64) -> Vec<SwatchResult> {
    let vividness = vividness.clamp(0.0, 1.0);

    let mut swatches: Vec<SwatchResult> = sorted_stops(stops)
        .into_iter()
        .map(|stop| {
            let l = lightness_for_stop(stop);
            let chroma = find_max_chroma(l, hue) * vividness;
            let hex = oklch_to_hex(oklch(l, chroma, hue));

            log::trace!("stop {}: l={:.4} c={:.4} -> {}", stop, l, chroma, hex);

            SwatchResult::new(
                stop,
                hex,
                LchReport {
                    l: l * 100.0,
                    c: chroma * 100.0,
                    h: hue,
                },
            )
        })
        .collect();

    mark_anchor(&mut swatches, ANCHOR_STOP);
    annotate_contrast(&mut swatches);

    log::debug!(
        "generated {} perceptual swatches for hue {} at vividness {}",
        swatches.len(),
        hue,
        vividness
    );

    swatches
}
