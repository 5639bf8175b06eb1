//! Palette generation for design-system color ramps.
//!
//! Two generators produce a list of [`SwatchResult`]s, one per stop:
//!
//! * [`generate_perceptual`] walks a fixed OKLCH lightness curve at a single hue,
//!   pushing chroma to the edge of the sRGB gamut.
//! * [`generate_legacy`] starts from a seed color, solves the lightness that
//!   gives AA contrast against the theme background at the anchor stop, and
//!   steps outward from there.
//!
//! [`generate`] picks between them based on [`PaletteConfig::palette_mode`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod color;
pub mod contrast;
pub mod export;
pub mod gamut;
pub mod legacy;
pub mod naming;
pub mod overrides;
pub mod perceptual;
pub mod swatch;

pub use contrast::{contrast, WCAG_AA};
pub use export::{ExportPayload, ExportSwatch};
pub use legacy::{generate_legacy, AnchorTheme, PaletteConfig};
pub use naming::palette_name;
pub use overrides::{Override, OverrideKey, Overrides};
pub use perceptual::{generate_perceptual, DEFAULT_STOPS};
pub use swatch::{LchReport, SwatchResult};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid seed color `{0}`")]
    InvalidSeedColor(String),
    #[error("Invalid color `{0}`, expected a hex color like #18a0fb")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    /// Seed color with a contrast-solved anchor.
    #[default]
    Legacy,
    /// Fixed lightness curve at a single hue.
    Oklch,
}

/// Generates the palette described by `config`.
///
/// In [`PaletteMode::Oklch`] the seed, overrides and anchor settings are
/// ignored and this never fails.
pub fn generate(config: &PaletteConfig) -> Result<Vec<SwatchResult>> {
    match config.palette_mode {
        PaletteMode::Oklch => Ok(generate_perceptual(
            config.oklch_hue,
            &config.stops,
            config.oklch_vividness,
        )),
        PaletteMode::Legacy => generate_legacy(config),
    }
}
