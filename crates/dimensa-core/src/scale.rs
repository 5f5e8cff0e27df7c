//! Per-category multipliers.
//!
//! Only spacing follows the screen category. Font sizes stay at 1.0 for
//! every category and scale through caller factors and the platform factor
//! instead. Keep the two tables separate: making type follow the category
//! would change every rendered size.

use crate::breakpoint::ScreenCategory;

pub fn spacing_multiplier(category: ScreenCategory) -> f64 {
    match category {
        ScreenCategory::SmallMobile => 0.7,
        ScreenCategory::Mobile => 0.8,
        ScreenCategory::LargeMobile => 0.85,
        ScreenCategory::SmallTablet => 0.9,
        ScreenCategory::Tablet => 0.95,
        ScreenCategory::Desktop => 1.0,
        ScreenCategory::LargeDesktop => 1.05,
        ScreenCategory::XlDesktop => 1.1,
    }
}

/// Flat on purpose: font sizes do not follow the screen category.
pub(crate) fn size_multiplier(_category: ScreenCategory) -> f64 {
    1.0
}

/// Scale a spacing value for a category, rounded half-up to a whole pixel.
pub fn spacing(base: f64, category: ScreenCategory) -> f64 {
    round_half_up(base * spacing_multiplier(category))
}

/// Ties go towards +inf, so -2.5 rounds to -2 (unlike [`f64::round`]).
///
/// Compares the fractional part instead of adding 0.5, which can itself
/// round up just below a half or for large odd integers.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_examples() {
        assert_eq!(spacing(16.0, ScreenCategory::Desktop), 16.0);
        assert_eq!(spacing(16.0, ScreenCategory::SmallMobile), 11.0);
        assert_eq!(spacing(16.0, ScreenCategory::XlDesktop), 18.0);
        assert_eq!(spacing(20.0, ScreenCategory::LargeMobile), 17.0);
    }

    #[test]
    fn test_spacing_non_decreasing() {
        for base in [0.0, 1.0, 4.0, 8.0, 13.0, 16.0, 24.0, 48.0, 100.0] {
            let values: Vec<f64> = ScreenCategory::ALL
                .iter()
                .map(|c| spacing(base, *c))
                .collect();
            assert!(
                values.windows(2).all(|w| w[0] <= w[1]),
                "spacing({base}) not monotonic: {values:?}"
            );
        }
        let multipliers: Vec<f64> = ScreenCategory::ALL
            .iter()
            .map(|c| spacing_multiplier(*c))
            .collect();
        assert!(multipliers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_size_multiplier_is_flat() {
        for category in ScreenCategory::ALL {
            assert_eq!(size_multiplier(category), 1.0);
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(11.2), 11.0);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(4503599627370497.0), 4503599627370497.0);
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_spacing_near_half() {
        assert_eq!(spacing(0.49999999999999994, ScreenCategory::Desktop), 0.0);
        assert_eq!(spacing(4503599627370497.0, ScreenCategory::Desktop), 4503599627370497.0);
    }
}
