use color_ramp::{generate, palette_name, AnchorTheme, PaletteConfig, PaletteMode, DEFAULT_STOPS};

use crate::output::{write_palette, OutputFormat};
use crate::Result;

pub struct PerceptualArgs<'a, W: std::io::Write> {
    pub hue: f64,
    /// Empty means the default 100..=900 ramp.
    pub stops: Vec<u32>,
    pub vividness: f64,
    pub theme: AnchorTheme,
    pub format: OutputFormat,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: PerceptualArgs<W>) -> Result<()> {
    let config = PaletteConfig {
        palette_mode: PaletteMode::Oklch,
        oklch_hue: args.hue,
        oklch_vividness: args.vividness,
        stops: if args.stops.is_empty() {
            DEFAULT_STOPS.to_vec()
        } else {
            args.stops
        },
        anchor_theme: args.theme,
        ..PaletteConfig::default()
    };

    let swatches = generate(&config)?;

    write_palette(
        args.stdout,
        palette_name(&config, &swatches),
        &swatches,
        config.anchor_theme,
        args.format,
    )
}
