use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use color_ramp::AnchorTheme;
use rampgen::commands::contrast::{run as contrast, ContrastArgs};
use rampgen::commands::legacy::{run as legacy, LegacyArgs};
use rampgen::commands::perceptual::{run as perceptual, PerceptualArgs};
use rampgen::commands::sweep::{run as sweep, SweepArgs};
use rampgen::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(about = "Rampgen, a color ramp generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[clap(long, global = true, default_value = "table")]
    format: Format,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Format {
    Table,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputFormat::Table,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Theme {
    Light,
    Dark,
}

impl From<Theme> for AnchorTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => AnchorTheme::Light,
            Theme::Dark => AnchorTheme::Dark,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Generate a palette from a hue on a fixed lightness curve
    Perceptual {
        /// OKLCH hue in degrees
        #[arg(long, allow_negative_numbers = true)]
        hue: f64,
        /// Comma separated stops. Defaults to 100,200,...,900
        #[arg(long, value_delimiter = ',')]
        stops: Vec<u32>,
        /// Fraction of the maximum in-gamut chroma, 0 to 1
        #[arg(long, default_value_t = 1.0)]
        vividness: f64,
        /// Background the pass/fail flags are measured against
        #[arg(long, default_value = "light")]
        theme: Theme,
    },
    /// Generate a palette from a seed color, anchored at AA contrast
    Legacy {
        /// Seed color such as "#18a0fb"
        seed: Option<String>,
        #[arg(long, value_delimiter = ',')]
        stops: Vec<u32>,
        /// Stop that receives the contrast-solved lightness [default: 500]
        #[arg(long)]
        anchor_stop: Option<u32>,
        /// Background the anchor is solved against [default: light]
        #[arg(long)]
        theme: Option<Theme>,
        /// Also show the seed color next to the anchor
        #[arg(long)]
        show_original: bool,
        /// Palette config file, JSON or YAML. Flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Preview perceptual palettes for evenly spaced hues
    Sweep {
        #[arg(long, default_value_t = 12)]
        count: usize,
        /// First hue of the sweep
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long, value_delimiter = ',')]
        stops: Vec<u32>,
        #[arg(long, default_value_t = 1.0)]
        vividness: f64,
        #[arg(long, default_value = "light")]
        theme: Theme,
    },
    /// Print the WCAG contrast ratio between two colors
    Contrast { first: String, second: String },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    args.color.init();

    let format = OutputFormat::from(args.format);
    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Perceptual {
            hue,
            stops,
            vividness,
            theme,
        }) => perceptual(PerceptualArgs {
            hue,
            stops,
            vividness,
            theme: theme.into(),
            format,
            stdout: &mut stdout,
        }),
        Some(Commands::Legacy {
            seed,
            stops,
            anchor_stop,
            theme,
            show_original,
            config,
        }) => legacy(LegacyArgs {
            seed,
            stops,
            anchor_stop,
            theme: theme.map(Into::into),
            show_original,
            config: config.as_deref(),
            format,
            stdout: &mut stdout,
        }),
        Some(Commands::Sweep {
            count,
            start,
            stops,
            vividness,
            theme,
        }) => sweep(SweepArgs {
            count,
            start,
            stops,
            vividness,
            theme: theme.into(),
            format,
            stdout: &mut stdout,
        }),
        Some(Commands::Contrast { first, second }) => contrast(ContrastArgs {
            first: &first,
            second: &second,
            stdout: &mut stdout,
        }),
        None => {
            Args::command().print_help().unwrap();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
