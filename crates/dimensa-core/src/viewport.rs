//! Viewport tracking.
//!
//! The host UI layer pushes every resize or orientation change into a
//! [`ViewportContext`]; sizing queries read whatever was written last.
//! There is no history and no versioning.

use serde::{Deserialize, Serialize};

use crate::error::{DimensaError, Result};

pub const DEFAULT_WIDTH: f64 = 375.0;
pub const DEFAULT_HEIGHT: f64 = 667.0;

/// Logical size of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square surfaces count as portrait.
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Reject negative or non-finite dimensions.
    pub fn validate(&self) -> Result<()> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DimensaError::InvalidDimension { name, value })
    }
}

/// Last-write-wins holder for the current viewport.
///
/// Owned by whoever composes the engine; there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct ViewportContext {
    current: Viewport,
}

impl ViewportContext {
    pub fn new(initial: Viewport) -> Self {
        Self { current: initial }
    }

    /// Overwrite the tracked viewport. Values are stored as given.
    pub fn update(&mut self, width: f64, height: f64) {
        self.current = Viewport::new(width, height);
        tracing::debug!(width, height, "viewport updated");
    }

    /// Like [`update`](Self::update), but leaves the state untouched when
    /// either dimension is negative or non-finite.
    pub fn try_update(&mut self, width: f64, height: f64) -> Result<()> {
        let next = Viewport::new(width, height);
        if let Err(e) = next.validate() {
            tracing::warn!("Ignoring viewport update: {e}");
            return Err(e);
        }
        self.current = next;
        tracing::debug!(width, height, "viewport updated");
        Ok(())
    }

    pub fn current(&self) -> Viewport {
        self.current
    }
}
