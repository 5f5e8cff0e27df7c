use thiserror::Error;

#[derive(Debug, Error)]
pub enum DimensaError {
    #[error("invalid viewport dimension {name}={value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("invalid size input {name}={value}")]
    InvalidSize { name: &'static str, value: f64 },

    #[error("unknown font weight: {0}")]
    UnknownWeight(String),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown screen category: {0}")]
    UnknownCategory(String),

    #[error("unknown typography preset: {0}")]
    UnknownPreset(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DimensaError>;
