//! Catalog entries and the horizon positions derived from them.

use serde::{Deserialize, Serialize};

/// A named fixed object with ICRS coordinates.
///
/// Entries are not validated on construction: the catalog is static data and
/// a bad entry must degrade to a fallback position instead of failing the
/// whole response (see [`crate::services::sky`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    pub name: String,
    /// Right ascension, ICRS, [0, 360)
    pub ra: qtty::angular::Degrees,
    /// Declination, ICRS, [-90, 90]
    pub dec: qtty::angular::Degrees,
    /// Apparent visual magnitude
    pub magnitude: f64,
    pub constellation: String,
}

impl CelestialObject {
    pub fn new(
        name: impl Into<String>,
        ra_deg: f64,
        dec_deg: f64,
        magnitude: f64,
        constellation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ra: qtty::angular::Degrees::new(ra_deg),
            dec: qtty::angular::Degrees::new(dec_deg),
            magnitude,
            constellation: constellation.into(),
        }
    }
}

/// Observer-relative position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonPosition {
    /// Clockwise from north, [0, 360)
    pub azimuth: qtty::angular::Degrees,
    /// Above the local horizontal plane, [-90, 90]
    pub altitude: qtty::angular::Degrees,
}

impl HorizonPosition {
    /// Substituted for a star whose transform failed.
    pub const STAR_FALLBACK: HorizonPosition = HorizonPosition {
        azimuth: qtty::angular::Degrees::new(0.0),
        altitude: qtty::angular::Degrees::new(45.0),
    };
}

/// Altitude threshold deciding the `visible` flag.
///
/// Stars in the full listing use a lenient cut so objects just under the
/// horizon still render; constellation stars and the Moon use the geometric
/// horizon. Each call site picks its rule explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRule {
    /// altitude > -5°
    BrightStars,
    /// altitude > 0°
    Horizon,
}

impl VisibilityRule {
    pub fn threshold(self) -> qtty::angular::Degrees {
        match self {
            VisibilityRule::BrightStars => qtty::angular::Degrees::new(-5.0),
            VisibilityRule::Horizon => qtty::angular::Degrees::new(0.0),
        }
    }

    /// Strictly above the threshold.
    pub fn is_visible(self, altitude: qtty::angular::Degrees) -> bool {
        altitude.value() > self.threshold().value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_star_threshold_is_exclusive() {
        assert!(!VisibilityRule::BrightStars.is_visible(qtty::angular::Degrees::new(-5.0)));
        assert!(VisibilityRule::BrightStars.is_visible(qtty::angular::Degrees::new(-4.999)));
        assert!(VisibilityRule::BrightStars.is_visible(qtty::angular::Degrees::new(-1.0)));
    }

    #[test]
    fn test_horizon_threshold_is_exclusive() {
        assert!(!VisibilityRule::Horizon.is_visible(qtty::angular::Degrees::new(0.0)));
        assert!(VisibilityRule::Horizon.is_visible(qtty::angular::Degrees::new(0.001)));
        assert!(!VisibilityRule::Horizon.is_visible(qtty::angular::Degrees::new(-1.0)));
    }

    #[test]
    fn test_nan_altitude_is_not_visible() {
        assert!(!VisibilityRule::BrightStars.is_visible(qtty::angular::Degrees::new(f64::NAN)));
        assert!(!VisibilityRule::Horizon.is_visible(qtty::angular::Degrees::new(f64::NAN)));
    }

    #[test]
    fn test_star_fallback_values() {
        assert_eq!(HorizonPosition::STAR_FALLBACK.azimuth.value(), 0.0);
        assert_eq!(HorizonPosition::STAR_FALLBACK.altitude.value(), 45.0);
    }

    #[test]
    fn test_celestial_object_new() {
        let vega = CelestialObject::new("Vega", 279.234, 38.784, 0.03, "Lira");
        assert_eq!(vega.name, "Vega");
        assert_eq!(vega.ra.value(), 279.234);
        assert_eq!(vega.dec.value(), 38.784);
        assert_eq!(vega.constellation, "Lira");
    }
}
