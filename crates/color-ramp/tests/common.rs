#![allow(dead_code)]

use color_ramp::{AnchorTheme, Override, OverrideKey, PaletteConfig, PaletteMode, SwatchResult};

pub const HUES: [f64; 8] = [0.0, 29.5, 60.0, 110.0, 145.0, 210.0, 265.0, 330.0];

pub const SEEDS: [&str; 6] = ["#18A0FB", "#9600ff", "#ff0000", "#0f5132", "#fafafa", "#222222"];

/// Primaries, secondaries and a dark green, all with a channel pinned at 0 or 255.
pub const SATURATED: [&str; 7] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff", "#ff00ff", "#007e00",
];

pub struct ConfigBuilder {
    config: PaletteConfig,
}

impl ConfigBuilder {
    pub fn legacy(seed: &str) -> Self {
        ConfigBuilder {
            config: PaletteConfig::new(seed),
        }
    }

    pub fn perceptual(hue: f64) -> Self {
        ConfigBuilder {
            config: PaletteConfig {
                palette_mode: PaletteMode::Oklch,
                oklch_hue: hue,
                ..PaletteConfig::default()
            },
        }
    }

    pub fn with_stops(mut self, stops: &[u32]) -> Self {
        self.config.stops = stops.to_vec();
        self
    }

    pub fn with_anchor(mut self, stop: u32) -> Self {
        self.config.anchor_stop = stop;
        self
    }

    pub fn with_theme(mut self, theme: AnchorTheme) -> Self {
        self.config.anchor_theme = theme;
        self
    }

    pub fn with_override(mut self, key: OverrideKey, over: Override) -> Self {
        self.config.overrides.insert(key, over);
        self
    }

    pub fn showing_original(mut self) -> Self {
        self.config.show_original = true;
        self
    }

    pub fn build(self) -> PaletteConfig {
        self.config
    }
}

pub fn is_hex6(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn hexes(swatches: &[SwatchResult]) -> Vec<String> {
    swatches.iter().map(|s| s.hex.clone()).collect()
}

pub fn anchors(swatches: &[SwatchResult]) -> Vec<u32> {
    swatches
        .iter()
        .filter(|s| s.is_anchor)
        .map(|s| s.stop)
        .collect()
}
