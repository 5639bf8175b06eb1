//! Per-stop user adjustments layered on top of a generated color.
//!
//! An override names one color model and carries only the channels the user
//! changed. Missing channels are read from the color as it would otherwise be
//! rendered, converted into that same model. Editing the HSL saturation of a
//! stop therefore keeps the HSL hue and lightness of that stop as displayed,
//! not the hue and lightness of the underlying OKLCH value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use palette::convert::FromColorUnclamped;
use palette::RgbHue;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{
    hsl_to_oklch, hsv_to_oklch, normalize_hue, oklch_to_srgb, quantize, rgb_to_oklch, Hsl, Hsv,
    Oklch, Srgb,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Override {
    /// OKLCH channels. Lightness is 0-100, chroma in OKLCH units.
    Lch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hue: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        chroma: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lightness: Option<f64>,
    },
    /// Saturation and lightness are 0-1.
    Hsl {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hue: Option<f64>,
        #[serde(default, rename = "s", skip_serializing_if = "Option::is_none")]
        saturation: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lightness: Option<f64>,
    },
    /// Channels are 0-1.
    Rgb {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        r: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        g: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        b: Option<f64>,
    },
    /// HSV under its design-tool name. Saturation and brightness are 0-1.
    Hsb {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hue: Option<f64>,
        #[serde(default, rename = "s", skip_serializing_if = "Option::is_none")]
        saturation: Option<f64>,
        #[serde(default, rename = "v", skip_serializing_if = "Option::is_none")]
        brightness: Option<f64>,
    },
}

impl Override {
    pub fn model(&self) -> &'static str {
        match self {
            Override::Lch { .. } => "lch",
            Override::Hsl { .. } => "hsl",
            Override::Rgb { .. } => "rgb",
            Override::Hsb { .. } => "hsb",
        }
    }

    pub fn is_empty(&self) -> bool {
        match *self {
            Override::Lch {
                hue,
                chroma,
                lightness,
            } => hue.is_none() && chroma.is_none() && lightness.is_none(),
            Override::Hsl {
                hue,
                saturation,
                lightness,
            } => hue.is_none() && saturation.is_none() && lightness.is_none(),
            Override::Rgb { r, g, b } => r.is_none() && g.is_none() && b.is_none(),
            Override::Hsb {
                hue,
                saturation,
                brightness,
            } => hue.is_none() && saturation.is_none() && brightness.is_none(),
        }
    }
}

/// Which swatch an override targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverrideKey {
    Stop(u32),
    /// The original seed color, shown when the original swatch is requested.
    Seed,
}

pub type Overrides = BTreeMap<OverrideKey, Override>;

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideKey::Stop(stop) => write!(f, "{}", stop),
            OverrideKey::Seed => write!(f, "seed"),
        }
    }
}

impl FromStr for OverrideKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("seed") {
            return Ok(OverrideKey::Seed);
        }

        s.trim()
            .parse::<u32>()
            .map(OverrideKey::Stop)
            .map_err(|_| format!("Invalid override key `{}`", s))
    }
}

impl Serialize for OverrideKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OverrideKey::Stop(stop) => serializer.serialize_u32(*stop),
            OverrideKey::Seed => serializer.serialize_str("seed"),
        }
    }
}

impl<'de> Deserialize<'de> for OverrideKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = OverrideKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a stop number or \"seed\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<OverrideKey, E> {
                u32::try_from(v)
                    .map(OverrideKey::Stop)
                    .map_err(|_| E::custom(format!("stop {} out of range", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<OverrideKey, E> {
                u32::try_from(v)
                    .map(OverrideKey::Stop)
                    .map_err(|_| E::custom(format!("stop {} out of range", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<OverrideKey, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// The color as it is displayed: clamped into sRGB and quantized to 8 bits.
fn rendered(color: Oklch) -> Srgb {
    quantize(oklch_to_srgb(color))
}

/// Applies `over` to `base`. Without an override the base is returned untouched.
pub fn apply_override(base: Oklch, over: Option<&Override>) -> Oklch {
    let Some(over) = over else {
        return base;
    };

    match *over {
        Override::Lch {
            hue,
            chroma,
            lightness,
        } => {
            let mut color = base;
            if let Some(h) = hue {
                color.hue = normalize_hue(h).into();
            }
            if let Some(c) = chroma {
                color.chroma = c;
            }
            if let Some(l) = lightness {
                color.l = l / 100.0;
            }
            color
        }
        Override::Hsl {
            hue,
            saturation,
            lightness,
        } => {
            let current = Hsl::from_color_unclamped(rendered(base));
            let next = Hsl::new(
                hue.map(RgbHue::from_degrees).unwrap_or(current.hue),
                saturation.unwrap_or(current.saturation),
                lightness.unwrap_or(current.lightness),
            );
            hsl_to_oklch(next)
        }
        Override::Rgb { r, g, b } => {
            let current = rendered(base);
            let next = Srgb::new(
                r.unwrap_or(current.red),
                g.unwrap_or(current.green),
                b.unwrap_or(current.blue),
            );
            rgb_to_oklch(next)
        }
        Override::Hsb {
            hue,
            saturation,
            brightness,
        } => {
            let current = Hsv::from_color_unclamped(rendered(base));
            let next = Hsv::new(
                hue.map(RgbHue::from_degrees).unwrap_or(current.hue),
                saturation.unwrap_or(current.saturation),
                brightness.unwrap_or(current.value),
            );
            hsv_to_oklch(next)
        }
    }
}
