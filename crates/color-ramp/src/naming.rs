//! Human-readable names for generated palettes.

use palette::convert::FromColorUnclamped;

use crate::color::{parse_hex, Hsl, Srgb};
use crate::legacy::PaletteConfig;
use crate::swatch::SwatchResult;
use crate::PaletteMode;

/// Below this HSL saturation a color is named as a neutral.
const NEUTRAL_SATURATION: f64 = 0.20;

const REFERENCE_COLORS: &[(&str, [f64; 3])] = &[
    ("Red", [1.0, 0.0, 0.0]),
    ("Orange", [1.0, 0.5, 0.0]),
    ("Yellow", [1.0, 1.0, 0.0]),
    ("Lime", [0.5, 1.0, 0.0]),
    ("Green", [0.0, 1.0, 0.0]),
    ("Teal", [0.0, 0.5, 0.5]),
    ("Cyan", [0.0, 1.0, 1.0]),
    ("Blue", [0.0, 0.0, 1.0]),
    ("Indigo", [0.29, 0.0, 0.51]),
    ("Purple", [0.5, 0.0, 0.5]),
    ("Pink", [1.0, 0.75, 0.8]),
    ("Rose", [1.0, 0.0, 0.5]),
    ("Gray", [0.5, 0.5, 0.5]),
    ("White", [1.0, 1.0, 1.0]),
    ("Black", [0.0, 0.0, 0.0]),
];

/// Names a color after the closest reference color in RGB space.
///
/// Low-saturation colors are always named White, Black or Gray so that tinted
/// neutrals don't get picked up as a hue.
pub fn color_name(color: Srgb) -> &'static str {
    let hsl = Hsl::from_color_unclamped(color);

    if hsl.saturation < NEUTRAL_SATURATION {
        return if hsl.lightness > 0.96 {
            "White"
        } else if hsl.lightness < 0.12 {
            "Black"
        } else {
            "Gray"
        };
    }

    let distance = |[r, g, b]: [f64; 3]| {
        ((color.red - r).powi(2) + (color.green - g).powi(2) + (color.blue - b).powi(2)).sqrt()
    };

    REFERENCE_COLORS
        .iter()
        .min_by(|a, b| distance(a.1).total_cmp(&distance(b.1)))
        .map(|(name, _)| *name)
        .unwrap_or("Gray")
}

/// Names an OKLCH hue by band.
pub fn hue_name(hue: f64) -> &'static str {
    let hue = crate::color::normalize_hue(hue);

    if !(15.0..345.0).contains(&hue) {
        "Red"
    } else if hue < 45.0 {
        "Orange"
    } else if hue < 75.0 {
        "Yellow"
    } else if hue < 150.0 {
        "Green"
    } else if hue < 190.0 {
        "Teal"
    } else if hue < 260.0 {
        "Blue"
    } else if hue < 300.0 {
        "Indigo"
    } else {
        "Purple"
    }
}

/// Display name for a generated palette.
pub fn palette_name(config: &PaletteConfig, swatches: &[SwatchResult]) -> &'static str {
    match config.palette_mode {
        PaletteMode::Oklch => hue_name(config.oklch_hue),
        PaletteMode::Legacy => {
            let hex = swatches
                .iter()
                .find(|s| s.is_anchor)
                .map(|s| s.hex.as_str())
                .unwrap_or(&config.base_color);

            parse_hex(hex).map(color_name).unwrap_or("Gray")
        }
    }
}
