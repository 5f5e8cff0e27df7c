//! Width breakpoints and the screen groups built on top of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DimensaError;

/// Screen-size bucket, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenCategory {
    SmallMobile,
    Mobile,
    LargeMobile,
    SmallTablet,
    Tablet,
    Desktop,
    LargeDesktop,
    XlDesktop,
}

/// Inclusive upper bound for each category below `XlDesktop`.
const BREAKPOINTS: [(f64, ScreenCategory); 7] = [
    (320.0, ScreenCategory::SmallMobile),
    (375.0, ScreenCategory::Mobile),
    (414.0, ScreenCategory::LargeMobile),
    (768.0, ScreenCategory::SmallTablet),
    (1024.0, ScreenCategory::Tablet),
    (1280.0, ScreenCategory::Desktop),
    (1440.0, ScreenCategory::LargeDesktop),
];

/// Map a width to its category.
///
/// Total over `f64`: NaN compares false against every bound and lands in
/// `XlDesktop`.
pub fn classify(width: f64) -> ScreenCategory {
    BREAKPOINTS
        .iter()
        .find(|(max, _)| width <= *max)
        .map(|(_, category)| *category)
        .unwrap_or(ScreenCategory::XlDesktop)
}

impl ScreenCategory {
    pub const ALL: [ScreenCategory; 8] = [
        ScreenCategory::SmallMobile,
        ScreenCategory::Mobile,
        ScreenCategory::LargeMobile,
        ScreenCategory::SmallTablet,
        ScreenCategory::Tablet,
        ScreenCategory::Desktop,
        ScreenCategory::LargeDesktop,
        ScreenCategory::XlDesktop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenCategory::SmallMobile => "smallMobile",
            ScreenCategory::Mobile => "mobile",
            ScreenCategory::LargeMobile => "largeMobile",
            ScreenCategory::SmallTablet => "smallTablet",
            ScreenCategory::Tablet => "tablet",
            ScreenCategory::Desktop => "desktop",
            ScreenCategory::LargeDesktop => "largeDesktop",
            ScreenCategory::XlDesktop => "xlDesktop",
        }
    }

    /// Upper width bound, or `None` for the open-ended top category.
    pub fn max_width(self) -> Option<f64> {
        BREAKPOINTS
            .iter()
            .find(|(_, category)| *category == self)
            .map(|(max, _)| *max)
    }

    pub fn group(self) -> ScreenGroup {
        match self {
            ScreenCategory::SmallMobile | ScreenCategory::Mobile | ScreenCategory::LargeMobile => {
                ScreenGroup::Mobile
            }
            ScreenCategory::SmallTablet | ScreenCategory::Tablet => ScreenGroup::Tablet,
            ScreenCategory::Desktop | ScreenCategory::LargeDesktop | ScreenCategory::XlDesktop => {
                ScreenGroup::Desktop
            }
        }
    }

    pub fn is_mobile(self) -> bool {
        self.group() == ScreenGroup::Mobile
    }

    pub fn is_tablet(self) -> bool {
        self.group() == ScreenGroup::Tablet
    }

    pub fn is_desktop(self) -> bool {
        self.group() == ScreenGroup::Desktop
    }

    /// Overlaps the mobile group on purpose: `SmallMobile` is both small
    /// and mobile.
    pub fn is_small(self) -> bool {
        self == ScreenCategory::SmallMobile
    }
}

impl fmt::Display for ScreenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenCategory {
    type Err = DimensaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DimensaError::UnknownCategory(s.to_string()))
    }
}

/// Coarse partition of the categories used by layout code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenGroup {
    Mobile,
    Tablet,
    Desktop,
}

/// Per-group values, resolved against the current group.
///
/// Missing entries fall back to the next narrower group, so a value given
/// only for mobile applies everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveValue<T> {
    pub mobile: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<T>,
}

impl<T> ResponsiveValue<T> {
    pub fn new(mobile: T) -> Self {
        Self {
            mobile,
            tablet: None,
            desktop: None,
        }
    }

    pub fn tablet(mut self, value: T) -> Self {
        self.tablet = Some(value);
        self
    }

    pub fn desktop(mut self, value: T) -> Self {
        self.desktop = Some(value);
        self
    }

    pub fn resolve(&self, group: ScreenGroup) -> &T {
        match group {
            ScreenGroup::Desktop => self
                .desktop
                .as_ref()
                .or(self.tablet.as_ref())
                .unwrap_or(&self.mobile),
            ScreenGroup::Tablet => self.tablet.as_ref().unwrap_or(&self.mobile),
            ScreenGroup::Mobile => &self.mobile,
        }
    }
}
