use color_ramp::contrast::{contrast, passes_aa};
use owo_colors::{OwoColorize as _, Stream};

use crate::Result;

pub struct ContrastArgs<'a, W: std::io::Write> {
    pub first: &'a str,
    pub second: &'a str,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ContrastArgs<W>) -> Result<()> {
    let ratio = contrast(args.first, args.second)?;

    write!(
        args.stdout,
        "{} on {}: {:.2}:1 ",
        args.first, args.second, ratio
    )?;

    if passes_aa(ratio) {
        writeln!(
            args.stdout,
            "{}",
            "passes AA".if_supports_color(Stream::Stdout, |s| s.green())
        )?;
    } else {
        writeln!(
            args.stdout,
            "{}",
            "fails AA".if_supports_color(Stream::Stdout, |s| s.red())
        )?;
    }

    Ok(())
}
