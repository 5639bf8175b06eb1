use color_ramp::PaletteConfig;
use std::path::Path;

use crate::Result;

/// Reads a palette config. `.json` files are parsed as JSON, anything else as YAML.
pub fn load(path: &Path) -> Result<PaletteConfig> {
    let contents = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        serde_json::from_str(&contents)?
    } else {
        serde_yaml::from_str(&contents)?
    };

    log::debug!("loaded palette config from {}", path.display());

    Ok(config)
}
