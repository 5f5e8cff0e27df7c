//! Typography presets.
//!
//! Sizes and line heights are hand-picked per preset; nothing here is
//! derived from a modular scale. Line heights go through the same size
//! resolution as the font size, so they track platform and accessibility
//! scaling together.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DimensaError;
use crate::font::FontWeightKey;
use crate::platform::PlatformTraits;
use crate::size::SizeRequest;
use crate::style::{resolve_style, ResolvedStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyPreset {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body,
    Subtitle,
    Caption,
    Button,
    Label,
    Overline,
}

/// Base values for one preset, before any scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSpec {
    pub weight: FontWeightKey,
    pub size: f64,
    pub line_height: f64,
}

const fn spec(weight: FontWeightKey, size: f64, line_height: f64) -> PresetSpec {
    PresetSpec {
        weight,
        size,
        line_height,
    }
}

/// Indexed by declaration order of [`TypographyPreset`].
const PRESETS: [(TypographyPreset, PresetSpec); 12] = [
    (TypographyPreset::H1, spec(FontWeightKey::Bold, 32.0, 40.0)),
    (TypographyPreset::H2, spec(FontWeightKey::Bold, 28.0, 36.0)),
    (TypographyPreset::H3, spec(FontWeightKey::SemiBold, 24.0, 32.0)),
    (TypographyPreset::H4, spec(FontWeightKey::SemiBold, 20.0, 28.0)),
    (TypographyPreset::H5, spec(FontWeightKey::Medium, 18.0, 24.0)),
    (TypographyPreset::H6, spec(FontWeightKey::Medium, 16.0, 22.0)),
    (TypographyPreset::Body, spec(FontWeightKey::Regular, 16.0, 24.0)),
    (TypographyPreset::Subtitle, spec(FontWeightKey::Medium, 18.0, 26.0)),
    (TypographyPreset::Caption, spec(FontWeightKey::Regular, 12.0, 16.0)),
    (TypographyPreset::Button, spec(FontWeightKey::SemiBold, 16.0, 20.0)),
    (TypographyPreset::Label, spec(FontWeightKey::Medium, 14.0, 20.0)),
    (TypographyPreset::Overline, spec(FontWeightKey::SemiBold, 10.0, 14.0)),
];

/// Every preset, resolved.
pub type Typography = BTreeMap<TypographyPreset, ResolvedStyle>;

impl TypographyPreset {
    pub const ALL: [TypographyPreset; 12] = [
        TypographyPreset::H1,
        TypographyPreset::H2,
        TypographyPreset::H3,
        TypographyPreset::H4,
        TypographyPreset::H5,
        TypographyPreset::H6,
        TypographyPreset::Body,
        TypographyPreset::Subtitle,
        TypographyPreset::Caption,
        TypographyPreset::Button,
        TypographyPreset::Label,
        TypographyPreset::Overline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypographyPreset::H1 => "h1",
            TypographyPreset::H2 => "h2",
            TypographyPreset::H3 => "h3",
            TypographyPreset::H4 => "h4",
            TypographyPreset::H5 => "h5",
            TypographyPreset::H6 => "h6",
            TypographyPreset::Body => "body",
            TypographyPreset::Subtitle => "subtitle",
            TypographyPreset::Caption => "caption",
            TypographyPreset::Button => "button",
            TypographyPreset::Label => "label",
            TypographyPreset::Overline => "overline",
        }
    }

    pub fn spec(self) -> PresetSpec {
        PRESETS[self as usize].1
    }
}

impl fmt::Display for TypographyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypographyPreset {
    type Err = DimensaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypographyPreset::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DimensaError::UnknownPreset(s.to_string()))
    }
}

/// Resolve one preset. `accessibility_scale` applies to both the font size
/// and the line height.
pub fn preset_style(
    traits: &dyn PlatformTraits,
    family: &str,
    preset: TypographyPreset,
    accessibility_scale: Option<f64>,
) -> ResolvedStyle {
    let spec = preset.spec();
    let with_a11y = |base: f64| {
        let request = SizeRequest::new(base);
        match accessibility_scale {
            Some(factor) => request.accessibility_scale(factor),
            None => request,
        }
    };

    let mut style = resolve_style(traits, family, spec.weight, false, &with_a11y(spec.size));
    style.line_height = Some(with_a11y(spec.line_height).resolve(traits));
    style
}

pub fn typography(
    traits: &dyn PlatformTraits,
    family: &str,
    accessibility_scale: Option<f64>,
) -> Typography {
    TypographyPreset::ALL
        .into_iter()
        .map(|preset| (preset, preset_style(traits, family, preset, accessibility_scale)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn test_table_covers_every_preset() {
        for (i, preset) in TypographyPreset::ALL.into_iter().enumerate() {
            assert_eq!(PRESETS[i].0, preset, "table out of order at {preset}");
            assert_eq!(preset as usize, i);
        }
    }

    #[test]
    fn test_headings_descend() {
        let sizes: Vec<f64> = [
            TypographyPreset::H1,
            TypographyPreset::H2,
            TypographyPreset::H3,
            TypographyPreset::H4,
            TypographyPreset::H5,
            TypographyPreset::H6,
        ]
        .iter()
        .map(|p| p.spec().size)
        .collect();
        assert!(sizes.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_web_typography() {
        let t = typography(Platform::Web.traits(), "Inter", None);
        assert_eq!(t.len(), 12);

        let h1 = &t[&TypographyPreset::H1];
        assert_eq!(h1.font_family, "\"Inter-Bold\"");
        assert_eq!(h1.font_weight, "700");
        assert_eq!(h1.font_size, 32.0);
        assert_eq!(h1.line_height, Some(40.0));

        let body = &t[&TypographyPreset::Body];
        assert_eq!(body.font_family, "\"Inter-Regular\"");
        assert_eq!(body.font_size, 16.0);
        assert_eq!(body.line_height, Some(24.0));
    }

    #[test]
    fn test_android_scales_line_height_too() {
        let caption = preset_style(
            Platform::Android.traits(),
            "Inter",
            TypographyPreset::Caption,
            Some(2.0),
        );
        assert!((caption.font_size - 12.0 * 0.95 * 2.0).abs() < 1e-9);
        assert!((caption.line_height.unwrap() - 16.0 * 0.95 * 2.0).abs() < 1e-9);
        assert_eq!(caption.font_family, "Inter-Regular");
    }

    #[test]
    fn test_json_keys() {
        let t = typography(Platform::Ios.traits(), "Inter", None);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["overline"]["fontWeight"], "600");
        assert_eq!(json["h3"]["lineHeight"], 32.0);
        assert!(json.get("subtitle").is_some());
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("H2".parse::<TypographyPreset>().unwrap(), TypographyPreset::H2);
        assert!("display".parse::<TypographyPreset>().is_err());
    }
}
