//! The payload handed to a host that turns swatches into named variables.

use serde::{Deserialize, Serialize};

use crate::color::parse_hex;
use crate::contrast::{contrast_ratio, passes_aa};
use crate::legacy::AnchorTheme;
use crate::swatch::SwatchResult;
use crate::Result;

/// sRGB channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbChannels {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSwatch {
    pub stop: u32,
    pub hex: String,
    pub color: RgbChannels,
    /// Contrast against the theme background.
    pub contrast: f64,
    pub is_pass: bool,
    pub is_anchor: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_original: bool,
}

impl ExportSwatch {
    pub fn from_swatch(swatch: &SwatchResult, theme: AnchorTheme) -> Result<Self> {
        let color = parse_hex(&swatch.hex)?;
        let contrast = contrast_ratio(color, theme.background());

        Ok(ExportSwatch {
            stop: swatch.stop,
            hex: swatch.hex.clone(),
            color: RgbChannels {
                r: color.red,
                g: color.green,
                b: color.blue,
            },
            contrast,
            is_pass: passes_aa(contrast),
            is_anchor: swatch.is_anchor,
            is_original: swatch.is_original,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub name: String,
    pub create_variables: bool,
    pub swatches: Vec<ExportSwatch>,
}

impl ExportPayload {
    pub fn new(
        name: impl Into<String>,
        swatches: &[SwatchResult],
        theme: AnchorTheme,
        create_variables: bool,
    ) -> Result<Self> {
        let swatches = swatches
            .iter()
            .map(|s| ExportSwatch::from_swatch(s, theme))
            .collect::<Result<Vec<_>>>()?;

        Ok(ExportPayload {
            name: name.into(),
            create_variables,
            swatches,
        })
    }
}
