use crate::color::{oklch, oklch_to_srgb, Oklch};

/// Chroma removed per gamut-mapping step.
pub const CHROMA_STEP: f64 = 0.005;
/// Gamut mapping gives up after this many steps.
pub const MAX_STEPS: usize = 50;
/// Upper bound of the chroma search. OKLCH chroma for sRGB tops out near 0.37.
pub const MAX_CHROMA: f64 = 0.4;
const SEARCH_TOLERANCE: f64 = 0.001;

/// Slack for channels that land a hair outside `[0, 1]` through float error.
/// An OKLCH round trip of a saturated hex drifts by up to ~2e-6.
pub const EPSILON: f64 = 1e-5;

pub fn is_in_gamut(color: Oklch) -> bool {
    let rgb = oklch_to_srgb(color);

    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|c| (-EPSILON..=1.0 + EPSILON).contains(c))
}

/// Steps chroma down until the color fits in sRGB.
///
/// Lightness and hue are left untouched. If the step budget runs out the color
/// is returned as it stands; hex encoding clamps whatever is left over.
pub fn to_gamut(color: Oklch) -> Oklch {
    let mut mapped = color;
    let mut attempts = 0;

    while !is_in_gamut(mapped) && mapped.chroma > 0.0 && attempts < MAX_STEPS {
        mapped.chroma -= CHROMA_STEP;
        attempts += 1;
    }

    if attempts == MAX_STEPS && !is_in_gamut(mapped) {
        log::warn!(
            "gamut mapping gave up after {} steps at l={:.4} c={:.4}",
            MAX_STEPS,
            mapped.l,
            mapped.chroma
        );
    }

    mapped
}

/// Largest chroma at `(l, hue)` that is still displayable in sRGB.
pub fn find_max_chroma(l: f64, hue: f64) -> f64 {
    let mut low = 0.0;
    let mut high = MAX_CHROMA;

    while high - low > SEARCH_TOLERANCE {
        let mid = (low + high) / 2.0;

        if is_in_gamut(oklch(l, mid, hue)) {
            low = mid;
        } else {
            high = mid;
        }
    }

    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex_to_oklch, oklch_to_hex};

    #[test]
    fn grays_are_in_gamut() {
        assert!(is_in_gamut(oklch(0.5, 0.0, 0.0)));
        assert!(is_in_gamut(oklch(0.0, 0.0, 0.0)));
    }

    #[test]
    fn saturated_colors_fall_out_of_gamut() {
        assert!(!is_in_gamut(oklch(0.5, 0.4, 140.0)));
    }

    #[test]
    fn to_gamut_only_touches_chroma() {
        let input = oklch(0.7, 0.25, 250.0);
        let mapped = to_gamut(input);

        assert!(is_in_gamut(mapped));
        assert_eq!(mapped.l, input.l);
        assert_eq!(mapped.hue, input.hue);
        assert!(mapped.chroma < input.chroma);
    }

    #[test]
    fn to_gamut_steps_in_fixed_increments() {
        let input = oklch(0.7, 0.25, 250.0);
        let mapped = to_gamut(input);

        let steps = ((input.chroma - mapped.chroma) / CHROMA_STEP).round();
        assert!((input.chroma - steps * CHROMA_STEP - mapped.chroma).abs() < 1e-9);
        assert!(steps <= MAX_STEPS as f64);
    }

    #[test]
    fn in_gamut_colors_pass_through() {
        let input = oklch(0.6, 0.05, 30.0);
        assert_eq!(to_gamut(input), input);
    }

    #[test]
    fn max_chroma_is_in_gamut_and_tight() {
        for hue in [0.0, 60.0, 120.0, 210.0, 300.0] {
            let c = find_max_chroma(0.6, hue);

            assert!(is_in_gamut(oklch(0.6, c, hue)));
            assert!(!is_in_gamut(oklch(0.6, c + 0.002, hue)));
        }
    }

    #[test]
    fn max_chroma_at_the_extremes_encodes_as_white_and_black() {
        for hue in [0.0, 120.0, 210.0, 300.0] {
            let white = find_max_chroma(1.0, hue);
            let black = find_max_chroma(0.0, hue);

            assert_eq!(oklch_to_hex(oklch(1.0, white, hue)), "#ffffff");
            assert_eq!(oklch_to_hex(oklch(0.0, black, hue)), "#000000");
        }
    }

    #[test]
    fn saturated_hex_colors_are_in_gamut() {
        for hex in [
            "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff", "#ff00ff", "#007e00",
            "#ffffff", "#000000",
        ] {
            let color = hex_to_oklch(hex).unwrap();

            assert!(is_in_gamut(color), "{} fell out of gamut", hex);
            assert_eq!(to_gamut(color), color, "{} lost chroma", hex);
        }
    }
}
