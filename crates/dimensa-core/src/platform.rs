//! Target-platform capabilities.
//!
//! Each target gets one [`PlatformTraits`] implementation, chosen once when
//! the engine is built. Sizing code asks the traits object instead of
//! branching on the platform itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DimensaError;

/// Android renders type slightly larger than iOS/web at the same nominal size.
pub const ANDROID_SIZE_FACTOR: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Web,
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    pub fn traits(self) -> &'static dyn PlatformTraits {
        match self {
            Platform::Web => &WebTraits,
            Platform::Ios => &IosTraits,
            Platform::Android => &AndroidTraits,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DimensaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" => Ok(Platform::Web),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(DimensaError::UnknownPlatform(s.to_string())),
        }
    }
}

pub trait PlatformTraits: fmt::Debug + Send + Sync {
    fn platform(&self) -> Platform;

    /// Multiplier applied to every resolved font size.
    fn size_factor(&self) -> f64 {
        1.0
    }

    /// Render a concrete family variant name the way the target expects it.
    fn format_family(&self, variant: &str) -> String {
        variant.to_string()
    }
}

/// CSS needs the hyphenated variant name quoted.
#[derive(Debug, Clone, Copy)]
pub struct WebTraits;

impl PlatformTraits for WebTraits {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn format_family(&self, variant: &str) -> String {
        format!("\"{variant}\"")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IosTraits;

impl PlatformTraits for IosTraits {
    fn platform(&self) -> Platform {
        Platform::Ios
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AndroidTraits;

impl PlatformTraits for AndroidTraits {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn size_factor(&self) -> f64 {
        ANDROID_SIZE_FACTOR
    }
}
