use color_ramp::naming::hue_name;
use color_ramp::{generate_perceptual, AnchorTheme, SwatchResult, DEFAULT_STOPS};
use rayon::prelude::*;

use crate::output::{write_palettes, OutputFormat};
use crate::{Error, Result};

pub struct SweepArgs<'a, W: std::io::Write> {
    /// Number of evenly spaced hues, starting at `start`.
    pub count: usize,
    pub start: f64,
    pub stops: Vec<u32>,
    pub vividness: f64,
    pub theme: AnchorTheme,
    pub format: OutputFormat,
    pub stdout: &'a mut W,
}

/// `count` hues spaced evenly around the wheel.
fn hues(start: f64, count: usize) -> Vec<f64> {
    let spacing = 360.0 / count as f64;

    (0..count)
        .map(|i| (start + spacing * i as f64).rem_euclid(360.0))
        .collect()
}

/// Previews a perceptual palette for each of several hues.
pub fn run<W: std::io::Write>(args: SweepArgs<W>) -> Result<()> {
    if args.count == 0 {
        return Err(Error::General(String::from(
            "A sweep needs at least one hue",
        )));
    }

    let stops = if args.stops.is_empty() {
        DEFAULT_STOPS.to_vec()
    } else {
        args.stops
    };

    let start = std::time::Instant::now();

    let palettes: Vec<(String, Vec<SwatchResult>)> = hues(args.start, args.count)
        .par_iter()
        .map(|&hue| {
            let swatches = generate_perceptual(hue, &stops, args.vividness);
            (format!("{} {:.0}°", hue_name(hue), hue), swatches)
        })
        .collect();

    log::debug!(
        "generated {} palettes in {:?}",
        palettes.len(),
        start.elapsed()
    );

    write_palettes(args.stdout, &palettes, args.theme, args.format)
}
