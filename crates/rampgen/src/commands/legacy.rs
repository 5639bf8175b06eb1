use color_ramp::{generate_legacy, palette_name, AnchorTheme, PaletteConfig, PaletteMode};
use std::path::Path;

use crate::output::{write_palette, OutputFormat};
use crate::{config, Error, Result};

pub struct LegacyArgs<'a, W: std::io::Write> {
    /// Seed color. Required unless the config file sets `baseColor`.
    pub seed: Option<String>,
    /// Flags below override the config file when set.
    pub stops: Vec<u32>,
    pub anchor_stop: Option<u32>,
    pub theme: Option<AnchorTheme>,
    pub show_original: bool,
    pub config: Option<&'a Path>,
    pub format: OutputFormat,
    pub stdout: &'a mut W,
}

fn resolve_config<W: std::io::Write>(args: &mut LegacyArgs<W>) -> Result<PaletteConfig> {
    let mut config = match args.config {
        Some(path) => config::load(path)?,
        None => PaletteConfig::default(),
    };

    if let Some(seed) = args.seed.take() {
        config.base_color = seed;
    }
    if config.base_color.is_empty() {
        return Err(Error::General(String::from(
            "No seed color given. Pass one as an argument or set `baseColor` in the config file",
        )));
    }

    if !args.stops.is_empty() {
        config.stops = std::mem::take(&mut args.stops);
    }
    if let Some(anchor_stop) = args.anchor_stop {
        config.anchor_stop = anchor_stop;
    }
    if let Some(theme) = args.theme {
        config.anchor_theme = theme;
    }
    config.show_original |= args.show_original;
    config.palette_mode = PaletteMode::Legacy;

    Ok(config)
}

pub fn run<W: std::io::Write>(mut args: LegacyArgs<W>) -> Result<()> {
    let config = resolve_config(&mut args)?;
    let swatches = generate_legacy(&config)?;

    write_palette(
        args.stdout,
        palette_name(&config, &swatches),
        &swatches,
        config.anchor_theme,
        args.format,
    )
}
