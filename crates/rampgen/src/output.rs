use color_ramp::color::to_byte;
use color_ramp::{AnchorTheme, ExportPayload, SwatchResult};
use owo_colors::{OwoColorize as _, Stream};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored rows, one per swatch.
    #[default]
    Table,
    /// The export payload a host would receive.
    Json,
}

fn write_table<W: std::io::Write>(stdout: &mut W, payload: &ExportPayload) -> Result<()> {
    writeln!(
        stdout,
        "{}",
        payload.name.if_supports_color(Stream::Stdout, |s| s.bold())
    )?;

    for swatch in &payload.swatches {
        let (r, g, b) = (
            to_byte(swatch.color.r),
            to_byte(swatch.color.g),
            to_byte(swatch.color.b),
        );

        let verdict = if swatch.is_pass {
            format!("{}", "AA".if_supports_color(Stream::Stdout, |s| s.green()))
        } else {
            format!("{}", "--".if_supports_color(Stream::Stdout, |s| s.red()))
        };

        let marker = if swatch.is_anchor {
            " anchor"
        } else if swatch.is_original {
            " original"
        } else {
            ""
        };

        writeln!(
            stdout,
            "  {:>5} {} {} {:>6.2}:1 {}{}",
            swatch.stop,
            "    ".if_supports_color(Stream::Stdout, |s| s.on_truecolor(r, g, b)),
            swatch.hex,
            swatch.contrast,
            verdict,
            marker
        )?;
    }

    Ok(())
}

/// Writes one palette to `stdout`.
///
/// Contrast and pass flags are measured against the `theme` background.
pub(crate) fn write_palette<W: std::io::Write>(
    stdout: &mut W,
    name: &str,
    swatches: &[SwatchResult],
    theme: AnchorTheme,
    format: OutputFormat,
) -> Result<()> {
    let payload = ExportPayload::new(name, swatches, theme, true)?;

    match format {
        OutputFormat::Table => write_table(stdout, &payload),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *stdout, &payload)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

/// Writes several palettes. JSON output is a single array of payloads.
pub(crate) fn write_palettes<W: std::io::Write>(
    stdout: &mut W,
    palettes: &[(String, Vec<SwatchResult>)],
    theme: AnchorTheme,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for (i, (name, swatches)) in palettes.iter().enumerate() {
                if i > 0 {
                    writeln!(stdout)?;
                }
                write_palette(stdout, name, swatches, theme, format)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let payloads = palettes
                .iter()
                .map(|(name, swatches)| ExportPayload::new(name.as_str(), swatches, theme, true))
                .collect::<color_ramp::Result<Vec<_>>>()?;

            serde_json::to_writer_pretty(&mut *stdout, &payloads)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}
