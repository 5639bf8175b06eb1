//! Seed-driven palettes anchored on a contrast target.
//!
//! The seed contributes only its chroma and hue. The anchor stop gets the
//! lightness at which that chroma and hue reach AA contrast against the theme
//! background; every other stop steps away from it by a fixed contrast factor
//! per 100 stop units.

use serde::{Deserialize, Serialize};

use crate::color::{
    format_hex, hex_to_oklch, hue_degrees, oklch, oklch_to_srgb, quantize, Oklch, Srgb,
};
use crate::contrast::{contrast_ratio, WCAG_AA};
use crate::gamut::to_gamut;
use crate::overrides::{apply_override, Override, OverrideKey, Overrides};
use crate::perceptual::DEFAULT_STOPS;
use crate::swatch::{annotate_contrast, mark_anchor, sorted_stops, LchReport, SwatchResult};
use crate::{Error, PaletteMode, Result};

/// Per-step lightness factor. Three steps compound to roughly 1.35.
pub const MULTIPLIER: f64 = 1.105;

const ANCHOR_SEARCH_ITERATIONS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorTheme {
    #[default]
    Light,
    Dark,
}

impl AnchorTheme {
    pub fn background(self) -> Srgb {
        match self {
            AnchorTheme::Light => Srgb::new(1.0, 1.0, 1.0),
            AnchorTheme::Dark => Srgb::new(0.0, 0.0, 0.0),
        }
    }

    pub fn background_hex(self) -> &'static str {
        match self {
            AnchorTheme::Light => "#ffffff",
            AnchorTheme::Dark => "#000000",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    /// Seed color as `#rrggbb`. Ignored in OKLCH mode.
    #[serde(default)]
    pub base_color: String,
    #[serde(default = "default_stops")]
    pub stops: Vec<u32>,
    #[serde(default)]
    pub overrides: Overrides,
    /// Insert the seed itself as an extra swatch next to the anchor.
    #[serde(default)]
    pub show_original: bool,
    #[serde(default = "default_anchor_stop")]
    pub anchor_stop: u32,
    #[serde(default)]
    pub anchor_theme: AnchorTheme,
    #[serde(default)]
    pub palette_mode: PaletteMode,
    #[serde(default)]
    pub oklch_hue: f64,
    #[serde(default = "default_vividness")]
    pub oklch_vividness: f64,
}

fn default_stops() -> Vec<u32> {
    DEFAULT_STOPS.to_vec()
}

fn default_anchor_stop() -> u32 {
    500
}

fn default_vividness() -> f64 {
    1.0
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig {
            base_color: String::new(),
            stops: default_stops(),
            overrides: Overrides::new(),
            show_original: false,
            anchor_stop: default_anchor_stop(),
            anchor_theme: AnchorTheme::default(),
            palette_mode: PaletteMode::default(),
            oklch_hue: 0.0,
            oklch_vividness: default_vividness(),
        }
    }
}

impl PaletteConfig {
    pub fn new(base_color: impl Into<String>) -> Self {
        PaletteConfig {
            base_color: base_color.into(),
            ..Default::default()
        }
    }
}

/// Gamut maps `color` and encodes it, returning the displayed sRGB with its hex.
fn render(color: Oklch) -> (Srgb, String) {
    let displayed = quantize(oklch_to_srgb(to_gamut(color)));
    (displayed, format_hex(displayed))
}

/// Lightness at which `(chroma, hue)` reaches AA contrast against the theme
/// background.
///
/// Against white, contrast falls as lightness rises, so the search keeps the
/// lightest passing value. Against black it keeps the darkest passing value.
pub fn anchor_lightness(chroma: f64, hue: f64, theme: AnchorTheme) -> f64 {
    let background = theme.background();
    let passes = |l: f64| {
        let (displayed, _) = render(oklch(l, chroma, hue));
        contrast_ratio(displayed, background) >= WCAG_AA
    };

    let mut low = 0.0;
    let mut high = 1.0;

    for _ in 0..ANCHOR_SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;

        match (theme, passes(mid)) {
            (AnchorTheme::Light, true) | (AnchorTheme::Dark, false) => low = mid,
            (AnchorTheme::Light, false) | (AnchorTheme::Dark, true) => high = mid,
        }
    }

    match theme {
        AnchorTheme::Light => low,
        AnchorTheme::Dark => high,
    }
}

/// Lightness `steps` hundreds away from the anchor. Negative steps are lighter.
pub fn stepped_lightness(anchor_l: f64, steps: f64) -> f64 {
    let l = if steps < 0.0 {
        (anchor_l + 0.05) * MULTIPLIER.powf(-steps) - 0.05
    } else if steps > 0.0 {
        (anchor_l + 0.05) / MULTIPLIER.powf(steps) - 0.05
    } else {
        anchor_l
    };

    l.clamp(0.0, 1.0)
}

fn swatch(stop: u32, base: Oklch, over: Option<&Override>) -> SwatchResult {
    if let Some(over) = over {
        log::trace!("stop {}: applying {} override", stop, over.model());
    }

    let (displayed, hex) = render(apply_override(base, over));

    SwatchResult::new(stop, hex, LchReport::from_srgb(displayed))
}

/// Builds a palette from the seed color in `config`.
///
/// Fails only when the seed cannot be parsed; nothing is generated in that case.
pub fn generate_legacy(config: &PaletteConfig) -> Result<Vec<SwatchResult>> {
    let seed = hex_to_oklch(&config.base_color)
        .map_err(|_| Error::InvalidSeedColor(config.base_color.clone()))?;

    let chroma = seed.chroma;
    let hue = hue_degrees(&seed);
    let anchor_l = anchor_lightness(chroma, hue, config.anchor_theme);

    log::debug!(
        "seed {} (c={:.4}, h={:.2}) anchors stop {} at l={:.4} against {:?}",
        config.base_color,
        chroma,
        hue,
        config.anchor_stop,
        anchor_l,
        config.anchor_theme
    );

    let mut swatches: Vec<SwatchResult> = sorted_stops(&config.stops)
        .into_iter()
        .map(|stop| {
            let steps = (f64::from(stop) - f64::from(config.anchor_stop)) / 100.0;
            let l = stepped_lightness(anchor_l, steps);

            swatch(
                stop,
                oklch(l, chroma, hue),
                config.overrides.get(&OverrideKey::Stop(stop)),
            )
        })
        .collect();

    mark_anchor(&mut swatches, config.anchor_stop);

    if config.show_original {
        let mut original = swatch(
            config.anchor_stop,
            oklch(seed.l, chroma, hue),
            config.overrides.get(&OverrideKey::Seed),
        );
        original.is_original = true;

        let index = swatches.partition_point(|s| s.stop <= config.anchor_stop);
        swatches.insert(index, original);
    }

    annotate_contrast(&mut swatches);

    Ok(swatches)
}
