use thiserror::Error;

pub mod commands {
    pub mod contrast;
    pub mod legacy;
    pub mod perceptual;
    pub mod sweep;
}

pub mod config;
mod output;

pub use output::OutputFormat;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ColorRamp(#[from] color_ramp::Error),
    #[error("Could not read YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    General(String),
}
