//! Text style composition: family variant + weight + resolved size.

use serde::{Deserialize, Serialize};

use crate::font::FontWeightKey;
use crate::platform::PlatformTraits;
use crate::size::SizeRequest;

/// Fully resolved text style, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub font_family: String,
    pub font_weight: String,
    pub font_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

/// Compose a style for `weight`/`italic` at the size described by `request`.
pub fn resolve_style(
    traits: &dyn PlatformTraits,
    family: &str,
    weight: FontWeightKey,
    italic: bool,
    request: &SizeRequest,
) -> ResolvedStyle {
    ResolvedStyle {
        font_family: traits.format_family(&weight.variant_name(family, italic)),
        font_weight: weight.numeric().to_string(),
        font_size: request.resolve(traits),
        line_height: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn test_web_style() {
        let style = resolve_style(
            Platform::Web.traits(),
            "Inter",
            FontWeightKey::Bold,
            false,
            &SizeRequest::new(24.0),
        );
        assert_eq!(style.font_family, "\"Inter-Bold\"");
        assert_eq!(style.font_weight, "700");
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.line_height, None);
    }

    #[test]
    fn test_native_italic_style() {
        let style = resolve_style(
            Platform::Android.traits(),
            "Inter",
            FontWeightKey::Light,
            true,
            &SizeRequest::new(20.0).accessibility_scale(1.5),
        );
        assert_eq!(style.font_family, "Inter-LightItalic");
        assert_eq!(style.font_weight, "300");
        assert!((style.font_size - 28.5).abs() < 1e-9);
    }

    #[test]
    fn test_pure() {
        let traits = Platform::Ios.traits();
        let request = SizeRequest::new(15.0).scale(1.1).accessibility_scale(1.3);
        let a = resolve_style(traits, "Inter", FontWeightKey::Medium, true, &request);
        let b = resolve_style(traits, "Inter", FontWeightKey::Medium, true, &request);
        assert_eq!(a, b);
        assert_eq!(a.font_size.to_bits(), b.font_size.to_bits());
    }

    #[test]
    fn test_json_shape() {
        let style = resolve_style(
            Platform::Ios.traits(),
            "Inter",
            FontWeightKey::Regular,
            false,
            &SizeRequest::new(16.0),
        );
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["fontFamily"], "Inter-Regular");
        assert_eq!(json["fontWeight"], "400");
        assert_eq!(json["fontSize"], 16.0);
        assert!(json.get("lineHeight").is_none());
    }
}
