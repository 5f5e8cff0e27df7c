use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DimensaError;

pub const DEFAULT_FAMILY: &str = "Inter";

/// Symbolic font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeightKey {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeightKey {
    pub const ALL: [FontWeightKey; 9] = [
        FontWeightKey::Thin,
        FontWeightKey::ExtraLight,
        FontWeightKey::Light,
        FontWeightKey::Regular,
        FontWeightKey::Medium,
        FontWeightKey::SemiBold,
        FontWeightKey::Bold,
        FontWeightKey::ExtraBold,
        FontWeightKey::Black,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontWeightKey::Thin => "thin",
            FontWeightKey::ExtraLight => "extraLight",
            FontWeightKey::Light => "light",
            FontWeightKey::Regular => "regular",
            FontWeightKey::Medium => "medium",
            FontWeightKey::SemiBold => "semiBold",
            FontWeightKey::Bold => "bold",
            FontWeightKey::ExtraBold => "extraBold",
            FontWeightKey::Black => "black",
        }
    }

    /// CSS-style numeric weight, `"100"` through `"900"`.
    pub fn numeric(self) -> &'static str {
        match self {
            FontWeightKey::Thin => "100",
            FontWeightKey::ExtraLight => "200",
            FontWeightKey::Light => "300",
            FontWeightKey::Regular => "400",
            FontWeightKey::Medium => "500",
            FontWeightKey::SemiBold => "600",
            FontWeightKey::Bold => "700",
            FontWeightKey::ExtraBold => "800",
            FontWeightKey::Black => "900",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            FontWeightKey::Thin => "Thin",
            FontWeightKey::ExtraLight => "ExtraLight",
            FontWeightKey::Light => "Light",
            FontWeightKey::Regular => "Regular",
            FontWeightKey::Medium => "Medium",
            FontWeightKey::SemiBold => "SemiBold",
            FontWeightKey::Bold => "Bold",
            FontWeightKey::ExtraBold => "ExtraBold",
            FontWeightKey::Black => "Black",
        }
    }

    /// Concrete variant name, e.g. `Inter-SemiBold` or `Inter-LightItalic`.
    /// Regular italic is plain `Inter-Italic`.
    pub fn variant_name(self, family: &str, italic: bool) -> String {
        match (self, italic) {
            (FontWeightKey::Regular, true) => format!("{family}-Italic"),
            (_, true) => format!("{family}-{}Italic", self.suffix()),
            (_, false) => format!("{family}-{}", self.suffix()),
        }
    }
}

impl fmt::Display for FontWeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the symbolic name in any case, or the numeric weight.
impl FromStr for FontWeightKey {
    type Err = DimensaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontWeightKey::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s) || w.numeric() == s)
            .ok_or_else(|| DimensaError::UnknownWeight(s.to_string()))
    }
}
