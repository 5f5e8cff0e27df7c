//! JavaScript bindings for the web host.
//!
//! The page owns one `ResponsiveEngine` instance, feeds it every `resize`
//! event through `updateScreenDimensions`, and reads sizes from it while
//! rendering. Styles come back as JSON strings.

use dimensa_core::{FontWeightKey, Platform, ResponsiveEngine};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = ResponsiveEngine)]
pub struct WebEngine {
    inner: ResponsiveEngine,
}

#[wasm_bindgen(js_class = ResponsiveEngine)]
impl WebEngine {
    /// `platform` is `"web"`, `"ios"` or `"android"`; defaults to web.
    #[wasm_bindgen(constructor)]
    pub fn new(platform: Option<String>, family: Option<String>) -> Result<WebEngine, JsError> {
        let platform = parse_platform(platform.as_deref()).map_err(|e| JsError::new(&e))?;
        let mut inner = ResponsiveEngine::new(platform);
        if let Some(family) = family {
            inner = inner.with_family(family);
        }
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = updateScreenDimensions)]
    pub fn update_screen_dimensions(&mut self, width: f64, height: f64) {
        self.inner.update_screen_dimensions(width, height);
    }

    #[wasm_bindgen(js_name = getResponsiveSize)]
    pub fn responsive_size(
        &self,
        base_size: f64,
        scale: Option<f64>,
        accessibility_scale: Option<f64>,
    ) -> f64 {
        self.inner
            .responsive_size(base_size, scale.unwrap_or(1.0), accessibility_scale)
    }

    /// Unknown weight names are rejected rather than silently mapped.
    #[wasm_bindgen(js_name = getResponsiveStyle)]
    pub fn responsive_style(
        &self,
        weight: Option<String>,
        base_size: f64,
        scale: Option<f64>,
        italic: Option<bool>,
        accessibility_scale: Option<f64>,
    ) -> Result<String, JsError> {
        let weight = parse_weight(weight.as_deref()).map_err(|e| JsError::new(&e))?;
        Ok(self.style_json(
            weight,
            base_size,
            scale.unwrap_or(1.0),
            italic.unwrap_or(false),
            accessibility_scale,
        ))
    }

    #[wasm_bindgen(js_name = getResponsiveTypography)]
    pub fn responsive_typography(&self) -> String {
        serde_json::to_string(&self.inner.responsive_typography())
            .unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = getResponsiveSpacing)]
    pub fn responsive_spacing(&self, base_spacing: f64) -> f64 {
        self.inner.responsive_spacing(base_spacing)
    }

    #[wasm_bindgen(js_name = getScreenSizeCategory)]
    pub fn screen_size_category(&self) -> String {
        self.inner.screen_size_category().to_string()
    }

    #[wasm_bindgen(js_name = isMobileScreen)]
    pub fn is_mobile_screen(&self) -> bool {
        self.inner.is_mobile_screen()
    }

    #[wasm_bindgen(js_name = isTabletScreen)]
    pub fn is_tablet_screen(&self) -> bool {
        self.inner.is_tablet_screen()
    }

    #[wasm_bindgen(js_name = isDesktopScreen)]
    pub fn is_desktop_screen(&self) -> bool {
        self.inner.is_desktop_screen()
    }

    #[wasm_bindgen(js_name = isSmallScreen)]
    pub fn is_small_screen(&self) -> bool {
        self.inner.is_small_screen()
    }
}

impl WebEngine {
    fn style_json(
        &self,
        weight: FontWeightKey,
        base_size: f64,
        scale: f64,
        italic: bool,
        accessibility_scale: Option<f64>,
    ) -> String {
        let style =
            self.inner
                .responsive_style(weight, base_size, scale, italic, accessibility_scale);
        serde_json::to_string(&style).unwrap_or_else(|_| "{}".to_string())
    }
}

fn parse_platform(name: Option<&str>) -> Result<Platform, String> {
    name.map_or(Ok(Platform::Web), |n| n.parse().map_err(|e| format!("{e}")))
}

fn parse_weight(name: Option<&str>) -> Result<FontWeightKey, String> {
    name.map_or(Ok(FontWeightKey::Regular), |n| {
        n.parse().map_err(|e| format!("{e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(parse_platform(None), Ok(Platform::Web));
        assert_eq!(parse_weight(None), Ok(FontWeightKey::Regular));
        assert_eq!(parse_weight(Some("bold")), Ok(FontWeightKey::Bold));
        assert_eq!(
            parse_platform(Some("amiga")),
            Err("unknown platform: amiga".to_string())
        );
    }

    #[test]
    fn test_engine_roundtrip() {
        let mut engine = WebEngine::new(Some("android".into()), None).ok().unwrap();
        engine.update_screen_dimensions(320.0, 640.0);
        assert_eq!(engine.screen_size_category(), "smallMobile");
        assert!(engine.is_small_screen() && engine.is_mobile_screen());
        assert_eq!(engine.responsive_spacing(16.0), 11.0);
        assert!((engine.responsive_size(16.0, None, None) - 15.2).abs() < 1e-9);
    }

    #[test]
    fn test_style_json() {
        let engine = WebEngine::new(None, Some("Lato".into())).ok().unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&engine.style_json(FontWeightKey::SemiBold, 14.0, 1.0, true, None))
                .unwrap();
        assert_eq!(json["fontFamily"], "\"Lato-SemiBoldItalic\"");
        assert_eq!(json["fontWeight"], "600");
        assert_eq!(json["fontSize"], 14.0);

        let typography: serde_json::Value =
            serde_json::from_str(&engine.responsive_typography()).unwrap();
        assert_eq!(typography["h1"]["lineHeight"], 40.0);
    }
}
