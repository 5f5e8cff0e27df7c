//! Responsive sizing for web and native front-ends.
//!
//! Font sizes, line heights and spacing are resolved from a tracked viewport
//! and the target platform. Start from [`ResponsiveEngine`].

pub mod breakpoint;
pub mod config;
pub mod engine;
pub mod error;
pub mod font;
pub mod platform;
pub mod scale;
pub mod size;
pub mod style;
pub mod typography;
pub mod viewport;

pub use breakpoint::{classify, ResponsiveValue, ScreenCategory, ScreenGroup};
pub use config::EngineConfig;
pub use engine::{shared_engine, ResponsiveEngine, SharedEngine};
pub use error::{DimensaError, Result};
pub use font::FontWeightKey;
pub use platform::{Platform, PlatformTraits};
pub use size::SizeRequest;
pub use style::ResolvedStyle;
pub use typography::{Typography, TypographyPreset};
pub use viewport::{Orientation, Viewport, ViewportContext};
