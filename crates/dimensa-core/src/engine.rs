//! The engine facade used by host UI layers.
//!
//! A [`ResponsiveEngine`] owns the tracked viewport and the platform traits
//! chosen at startup. Hosts call [`update_screen_dimensions`] on every
//! resize before resolving sizes for that render pass.
//!
//! [`update_screen_dimensions`]: ResponsiveEngine::update_screen_dimensions

use std::sync::{Arc, RwLock};

use crate::breakpoint::{classify, ResponsiveValue, ScreenCategory, ScreenGroup};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::font::{FontWeightKey, DEFAULT_FAMILY};
use crate::platform::{Platform, PlatformTraits};
use crate::scale;
use crate::size::SizeRequest;
use crate::style::{resolve_style, ResolvedStyle};
use crate::typography::{self, Typography, TypographyPreset};
use crate::viewport::{Orientation, Viewport, ViewportContext};

#[derive(Debug)]
pub struct ResponsiveEngine {
    viewport: ViewportContext,
    traits: &'static dyn PlatformTraits,
    family: String,
    default_accessibility_scale: Option<f64>,
    strict: bool,
}

impl Default for ResponsiveEngine {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl ResponsiveEngine {
    pub fn new(platform: Platform) -> Self {
        Self::with_traits(platform.traits())
    }

    /// Build around any traits object, e.g. a host-specific one.
    pub fn with_traits(traits: &'static dyn PlatformTraits) -> Self {
        Self {
            viewport: ViewportContext::default(),
            traits,
            family: DEFAULT_FAMILY.to_string(),
            default_accessibility_scale: None,
            strict: false,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        tracing::debug!(
            platform = %config.platform.target,
            family = %config.fonts.family,
            strict = config.validation.strict,
            "building responsive engine"
        );
        Self {
            viewport: ViewportContext::new(config.viewport.viewport()),
            traits: config.platform.target.traits(),
            family: config.fonts.family.clone(),
            default_accessibility_scale: config.accessibility.font_scale,
            strict: config.validation.strict,
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport.update(width, height);
        self
    }

    pub fn platform(&self) -> Platform {
        self.traits.platform()
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    // ── Viewport ─────────────────────────────────────────────────────

    /// Record the latest viewport.
    ///
    /// In strict mode malformed values are logged and dropped; otherwise
    /// they are stored as given.
    pub fn update_screen_dimensions(&mut self, width: f64, height: f64) {
        if self.strict {
            let _ = self.viewport.try_update(width, height);
        } else {
            self.viewport.update(width, height);
        }
    }

    pub fn try_update_screen_dimensions(&mut self, width: f64, height: f64) -> Result<()> {
        self.viewport.try_update(width, height)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    pub fn orientation(&self) -> Orientation {
        self.viewport().orientation()
    }

    // ── Breakpoints ──────────────────────────────────────────────────

    pub fn screen_size_category(&self) -> ScreenCategory {
        classify(self.viewport().width)
    }

    pub fn screen_group(&self) -> ScreenGroup {
        self.screen_size_category().group()
    }

    pub fn is_mobile_screen(&self) -> bool {
        self.screen_size_category().is_mobile()
    }

    pub fn is_tablet_screen(&self) -> bool {
        self.screen_size_category().is_tablet()
    }

    pub fn is_desktop_screen(&self) -> bool {
        self.screen_size_category().is_desktop()
    }

    pub fn is_small_screen(&self) -> bool {
        self.screen_size_category().is_small()
    }

    /// Pick the value for the current screen group.
    pub fn select<'a, T>(&self, value: &'a ResponsiveValue<T>) -> &'a T {
        value.resolve(self.screen_group())
    }

    // ── Sizing ───────────────────────────────────────────────────────

    /// Font size for `base_size`. The category's size multiplier is flat, so
    /// only the caller's factors and the platform factor change the result.
    pub fn responsive_size(
        &self,
        base_size: f64,
        scale: f64,
        accessibility_scale: Option<f64>,
    ) -> f64 {
        self.request(base_size, scale, accessibility_scale)
            .resolve(self.traits)
    }

    pub fn try_responsive_size(
        &self,
        base_size: f64,
        scale: f64,
        accessibility_scale: Option<f64>,
    ) -> Result<f64> {
        let request = self.request(base_size, scale, accessibility_scale);
        request.validate()?;
        Ok(request.resolve(self.traits))
    }

    pub fn responsive_style(
        &self,
        weight: FontWeightKey,
        base_size: f64,
        scale: f64,
        italic: bool,
        accessibility_scale: Option<f64>,
    ) -> ResolvedStyle {
        let request = self.request(base_size, scale, accessibility_scale);
        resolve_style(self.traits, &self.family, weight, italic, &request)
    }

    pub fn try_responsive_style(
        &self,
        weight: FontWeightKey,
        base_size: f64,
        scale: f64,
        italic: bool,
        accessibility_scale: Option<f64>,
    ) -> Result<ResolvedStyle> {
        let request = self.request(base_size, scale, accessibility_scale);
        request.validate()?;
        Ok(resolve_style(self.traits, &self.family, weight, italic, &request))
    }

    pub fn responsive_typography(&self) -> Typography {
        typography::typography(self.traits, &self.family, self.default_accessibility_scale)
    }

    pub fn preset(&self, preset: TypographyPreset) -> ResolvedStyle {
        typography::preset_style(
            self.traits,
            &self.family,
            preset,
            self.default_accessibility_scale,
        )
    }

    /// Spacing scaled by the current category and rounded to whole pixels.
    pub fn responsive_spacing(&self, base_spacing: f64) -> f64 {
        scale::spacing(base_spacing, self.screen_size_category())
    }

    fn request(&self, base_size: f64, scale: f64, accessibility_scale: Option<f64>) -> SizeRequest {
        SizeRequest {
            base_size,
            scale: scale * scale::size_multiplier(self.screen_size_category()),
            accessibility_scale: accessibility_scale.or(self.default_accessibility_scale),
        }
    }
}

/// Engine handle for hosts that resize and render on different threads.
pub type SharedEngine = Arc<RwLock<ResponsiveEngine>>;

pub fn shared_engine(engine: ResponsiveEngine) -> SharedEngine {
    Arc::new(RwLock::new(engine))
}
