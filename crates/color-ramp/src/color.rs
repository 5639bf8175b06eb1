//! Color model conversions used by the generators.
//!
//! Every conversion goes through sRGB as the hub, so each pair below is one hop
//! away from `Srgb`. Conversions are unclamped: an out-of-gamut OKLCH value
//! produces sRGB channels outside `[0, 1]`, which is what the gamut mapper
//! needs to see. Clamping happens only when encoding to hex.

use palette::convert::FromColorUnclamped;
use palette::encoding;
use palette::white_point::D65;
use palette::OklabHue;

use crate::{Error, Result};

pub type Oklch = palette::Oklch<f64>;
pub type Srgb = palette::Srgb<f64>;
pub type Hsl = palette::Hsl<encoding::Srgb, f64>;
pub type Hsv = palette::Hsv<encoding::Srgb, f64>;
pub type Lch = palette::Lch<D65, f64>;

/// Below this chroma a color is treated as achromatic and its hue reported as 0.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Parses a `#rgb`, `#rrggbb` or `#rrggbbaa` string, case-insensitively.
///
/// The leading `#` is required. Alpha is accepted but discarded.
pub fn parse_hex(hex: &str) -> Result<Srgb> {
    if !hex.starts_with('#') {
        return Err(Error::InvalidColor(hex.to_string()));
    }

    let c = csscolorparser::parse(hex).map_err(|_| Error::InvalidColor(hex.to_string()))?;

    Ok(Srgb::new(c.r, c.g, c.b))
}

/// A `0..=1` channel as an 8-bit value, clamped.
pub fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encodes as lowercase `#rrggbb`, clamping each channel into range first.
pub fn format_hex(color: Srgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(color.red),
        to_byte(color.green),
        to_byte(color.blue)
    )
}

/// The color exactly as its hex encoding displays it.
pub fn quantize(color: Srgb) -> Srgb {
    let channel = |v: f64| f64::from(to_byte(v)) / 255.0;

    Srgb::new(channel(color.red), channel(color.green), channel(color.blue))
}

pub fn oklch(l: f64, chroma: f64, hue: f64) -> Oklch {
    Oklch::new(l, chroma, OklabHue::from_degrees(hue))
}

/// Hue in `[0, 360)`, or 0 for achromatic colors.
pub fn hue_degrees(color: &Oklch) -> f64 {
    if color.chroma < ACHROMATIC_CHROMA {
        return 0.0;
    }

    normalize_hue(color.hue.into_degrees())
}

pub fn normalize_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(360.0);
    if h.is_nan() {
        0.0
    } else {
        h
    }
}

pub fn srgb_to_oklch(color: Srgb) -> Oklch {
    let converted = Oklch::from_color_unclamped(color.into_linear());
    let hue = hue_degrees(&converted);

    oklch(converted.l, converted.chroma, hue)
}

pub fn oklch_to_srgb(color: Oklch) -> Srgb {
    let linear = palette::LinSrgb::<f64>::from_color_unclamped(color);
    Srgb::from_linear(linear)
}

pub fn hex_to_oklch(hex: &str) -> Result<Oklch> {
    parse_hex(hex).map(srgb_to_oklch)
}

pub fn oklch_to_hex(color: Oklch) -> String {
    format_hex(oklch_to_srgb(color))
}

pub fn hex_to_rgb(hex: &str) -> Result<Srgb> {
    parse_hex(hex)
}

pub fn rgb_to_oklch(color: Srgb) -> Oklch {
    srgb_to_oklch(color)
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    parse_hex(hex).map(Hsl::from_color_unclamped)
}

pub fn hsl_to_oklch(color: Hsl) -> Oklch {
    srgb_to_oklch(Srgb::from_color_unclamped(color))
}

pub fn hex_to_hsv(hex: &str) -> Result<Hsv> {
    parse_hex(hex).map(Hsv::from_color_unclamped)
}

pub fn hsv_to_oklch(color: Hsv) -> Oklch {
    srgb_to_oklch(Srgb::from_color_unclamped(color))
}

/// CIE LCh (D65), lightness 0-100.
pub fn hex_to_lch(hex: &str) -> Result<Lch> {
    parse_hex(hex).map(|srgb| Lch::from_color_unclamped(srgb.into_linear()))
}

pub fn lch_to_oklch(color: Lch) -> Oklch {
    let linear = palette::LinSrgb::<f64>::from_color_unclamped(color);
    srgb_to_oklch(Srgb::from_linear(linear))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!((a - b).abs() < tolerance, "{} != {} (±{})", a, b, tolerance);
    }

    #[test]
    fn parses_short_and_long_hex() {
        let long = parse_hex("#FFAA00").unwrap();
        let short = parse_hex("#fa0").unwrap();

        assert_eq!(format_hex(long), "#ffaa00");
        assert_eq!(format_hex(short), "#ffaa00");
    }

    #[test]
    fn requires_leading_hash() {
        assert!(matches!(parse_hex("ffaa00"), Err(Error::InvalidColor(_))));
        assert!(matches!(parse_hex("not-a-color"), Err(Error::InvalidColor(_))));
        assert!(matches!(parse_hex("#zzzzzz"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn bytes_are_rounded_and_clamped() {
        assert_eq!(to_byte(-0.2), 0);
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(0.6), 153);
        assert_eq!(to_byte(1.7), 255);
    }

    #[test]
    fn format_clamps_out_of_range_channels() {
        assert_eq!(format_hex(Srgb::new(1.2, -0.3, 0.5)), "#ff0080");
    }

    #[test]
    fn quantize_matches_the_hex_encoding() {
        let color = Srgb::new(0.123, 0.456, 1.3);
        let quantized = quantize(color);

        assert_eq!(format_hex(quantized), format_hex(color));
        assert_eq!(parse_hex(&format_hex(color)).unwrap(), quantized);
    }

    #[test]
    fn white_and_black_oklch() {
        let white = hex_to_oklch("#ffffff").unwrap();
        let black = hex_to_oklch("#000000").unwrap();

        assert_close(white.l, 1.0, 1e-4);
        assert_close(white.chroma, 0.0, 1e-4);
        assert_close(black.l, 0.0, 1e-9);
        assert_eq!(hue_degrees(&white), 0.0);
    }

    #[test]
    fn hex_survives_every_model_round_trip() {
        for hex in ["#18a0fb", "#9600ff", "#ff0000", "#0f5132", "#fafafa"] {
            let hsl = hex_to_hsl(hex).unwrap();
            let hsv = hex_to_hsv(hex).unwrap();
            let rgb = hex_to_rgb(hex).unwrap();
            let lch = hex_to_lch(hex).unwrap();

            assert_eq!(oklch_to_hex(hsl_to_oklch(hsl)), hex);
            assert_eq!(oklch_to_hex(hsv_to_oklch(hsv)), hex);
            assert_eq!(oklch_to_hex(rgb_to_oklch(rgb)), hex);
            assert_eq!(oklch_to_hex(lch_to_oklch(lch)), hex);
            assert_eq!(oklch_to_hex(hex_to_oklch(hex).unwrap()), hex);
        }
    }

    #[test]
    fn normalizes_negative_hues() {
        assert_close(normalize_hue(-30.0), 330.0, 1e-9);
        assert_close(normalize_hue(720.0), 0.0, 1e-9);
    }
}
