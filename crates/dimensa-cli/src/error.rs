use std::process::ExitCode;

use dimensa_core::DimensaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] DimensaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Engine(
                DimensaError::InvalidDimension { .. }
                | DimensaError::InvalidSize { .. }
                | DimensaError::UnknownWeight(_)
                | DimensaError::UnknownPlatform(_)
                | DimensaError::UnknownCategory(_)
                | DimensaError::UnknownPreset(_),
            ) => ExitCode::from(2),
            _ => ExitCode::from(1),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
