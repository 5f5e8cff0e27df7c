//! Font size resolution.

use serde::{Deserialize, Serialize};

use crate::error::{DimensaError, Result};
use crate::platform::PlatformTraits;

/// Inputs for a single size lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRequest {
    pub base_size: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_scale: Option<f64>,
}

fn default_scale() -> f64 {
    1.0
}

impl SizeRequest {
    pub fn new(base_size: f64) -> Self {
        Self {
            base_size,
            scale: 1.0,
            accessibility_scale: None,
        }
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn accessibility_scale(mut self, factor: f64) -> Self {
        self.accessibility_scale = Some(factor);
        self
    }

    /// Reject inputs that would produce a meaningless size: non-finite
    /// values, a negative base, or a non-positive factor.
    pub fn validate(&self) -> Result<()> {
        if !self.base_size.is_finite() || self.base_size < 0.0 {
            return Err(DimensaError::InvalidSize {
                name: "base_size",
                value: self.base_size,
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(DimensaError::InvalidSize {
                name: "scale",
                value: self.scale,
            });
        }
        match self.accessibility_scale {
            Some(a) if !a.is_finite() || a <= 0.0 => Err(DimensaError::InvalidSize {
                name: "accessibility_scale",
                value: a,
            }),
            _ => Ok(()),
        }
    }

    /// `base * scale * platform factor`, times the accessibility scale when
    /// present. No rounding; out-of-range inputs flow through unchanged.
    pub fn resolve(&self, traits: &dyn PlatformTraits) -> f64 {
        let effective = self.base_size * self.scale * traits.size_factor();
        match self.accessibility_scale {
            Some(factor) => effective * factor,
            None => effective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identity_scale() {
        for platform in [Platform::Web, Platform::Ios, Platform::Android] {
            let traits = platform.traits();
            for base in [0.0, 10.0, 14.0, 16.0, 32.5] {
                let size = SizeRequest::new(base).resolve(traits);
                assert!(close(size, base * traits.size_factor()));
            }
        }
    }

    #[test]
    fn test_platform_examples() {
        assert!(close(SizeRequest::new(16.0).resolve(Platform::Android.traits()), 15.2));
        assert_eq!(SizeRequest::new(16.0).resolve(Platform::Web.traits()), 16.0);
        assert_eq!(SizeRequest::new(16.0).resolve(Platform::Ios.traits()), 16.0);
    }

    #[test]
    fn test_factors_compose() {
        let traits = Platform::Android.traits();
        for (base, scale, a11y) in [(16.0, 1.25, 1.5), (12.0, 0.8, 2.0), (24.0, 2.0, 0.9)] {
            let unit = SizeRequest::new(base).resolve(traits);
            let full = SizeRequest::new(base)
                .scale(scale)
                .accessibility_scale(a11y)
                .resolve(traits);
            assert!(close(full, unit * scale * a11y), "{base} {scale} {a11y}");
        }
    }

    #[test]
    fn test_degenerate_inputs_pass_through() {
        let traits = Platform::Web.traits();
        assert_eq!(SizeRequest::new(-8.0).resolve(traits), -8.0);
        assert!(SizeRequest::new(f64::NAN).resolve(traits).is_nan());
    }

    #[test]
    fn test_validate() {
        assert!(SizeRequest::new(16.0).scale(1.5).accessibility_scale(1.2).validate().is_ok());
        assert!(SizeRequest::new(0.0).validate().is_ok());
        assert!(SizeRequest::new(-1.0).validate().is_err());
        assert!(SizeRequest::new(16.0).scale(0.0).validate().is_err());
        assert!(matches!(
            SizeRequest::new(16.0).accessibility_scale(f64::INFINITY).validate(),
            Err(DimensaError::InvalidSize { name: "accessibility_scale", .. })
        ));
    }

    #[test]
    fn test_request_json_defaults() {
        let req: SizeRequest = serde_json::from_str(r#"{"baseSize": 18}"#).unwrap();
        assert_eq!(req, SizeRequest::new(18.0));
    }
}
