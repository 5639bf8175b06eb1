mod common;

use color_ramp::naming::palette_name;
use color_ramp::{
    generate, generate_legacy, generate_perceptual, AnchorTheme, Error, ExportPayload,
    PaletteConfig, DEFAULT_STOPS, WCAG_AA,
};
use common::{anchors, is_hex6, ConfigBuilder};
use pretty_assertions::assert_eq;

#[test]
fn perceptual_default_ramp() {
    let result = generate_perceptual(210.0, &DEFAULT_STOPS, 1.0);

    assert_eq!(result.len(), 9);
    assert!(result[0].lch.l > result[8].lch.l);
    assert!(result.iter().find(|s| s.stop == 500).unwrap().is_anchor);
    assert_eq!(result[8].contrast_with_next, 0.0);
    assert!(result[..8].iter().all(|s| s.contrast_with_next >= 1.0));
}

#[test]
fn legacy_three_stops() {
    let config = ConfigBuilder::legacy("#18A0FB")
        .with_stops(&[100, 500, 900])
        .with_anchor(500)
        .build();
    let result = generate_legacy(&config).unwrap();

    let stops: Vec<_> = result.iter().map(|s| s.stop).collect();
    assert_eq!(stops, vec![100, 500, 900]);
    assert!(result.iter().all(|s| is_hex6(&s.hex)), "{:?}", result);
    assert_eq!(anchors(&result), vec![500]);
}

#[test]
fn legacy_rejects_an_unparsable_seed() {
    let config = ConfigBuilder::legacy("not-a-color").with_stops(&[500]).build();

    assert_eq!(
        generate_legacy(&config),
        Err(Error::InvalidSeedColor("not-a-color".to_string()))
    );
}

#[test]
fn legacy_output_is_sorted_whatever_the_input_order() {
    let config = ConfigBuilder::legacy("#18a0fb")
        .with_stops(&[900, 100, 500, 300, 100])
        .build();
    let stops: Vec<_> = generate_legacy(&config)
        .unwrap()
        .iter()
        .map(|s| s.stop)
        .collect();

    assert_eq!(stops, vec![100, 300, 500, 900]);
}

#[test]
fn dark_theme_anchor_passes_against_black() {
    let config = ConfigBuilder::legacy("#9600ff")
        .with_theme(AnchorTheme::Dark)
        .build();
    let swatches = generate_legacy(&config).unwrap();
    let payload = ExportPayload::new("Purple", &swatches, AnchorTheme::Dark, true).unwrap();

    let anchor = payload.swatches.iter().find(|s| s.is_anchor).unwrap();
    assert_eq!(anchor.stop, 500);
    assert!(anchor.is_pass);
    assert!(anchor.contrast >= WCAG_AA);
}

#[test]
fn host_config_round_trip_through_yaml() {
    let yaml = r##"
baseColor: "#18a0fb"
stops: [100, 300, 500, 700, 900]
showOriginal: true
overrides:
  seed:
    mode: rgb
    r: 0
  700:
    mode: lch
    lightness: 30
"##;
    let config: PaletteConfig = serde_yaml::from_str(yaml).unwrap();
    let swatches = generate(&config).unwrap();

    assert_eq!(swatches.len(), 6);
    assert_eq!(swatches.iter().filter(|s| s.is_original).count(), 1);

    let name = palette_name(&config, &swatches);
    assert_ne!(name, "Gray");

    let payload = ExportPayload::new(name, &swatches, AnchorTheme::Light, true).unwrap();
    let json = serde_json::to_string(&payload).unwrap();
    let back: ExportPayload = serde_json::from_str(&json).unwrap();

    let summary = |p: &ExportPayload| -> Vec<(u32, String, bool, bool)> {
        p.swatches
            .iter()
            .map(|s| (s.stop, s.hex.clone(), s.is_anchor, s.is_original))
            .collect()
    };
    assert_eq!(back.name, payload.name);
    assert_eq!(summary(&back), summary(&payload));
}
