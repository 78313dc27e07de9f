use serde::{Deserialize, Serialize};
use siderust::coordinates::centers::Geodetic;
use siderust::coordinates::frames::ECEF;

use crate::config::ConfigError;

/// Geographic position of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Geodetic latitude (-90 to 90, north positive)
    pub latitude: qtty::angular::Degrees,
    /// Longitude (-180 to 180, east positive)
    pub longitude: qtty::angular::Degrees,
    /// Elevation above sea level
    pub elevation: qtty::length::Meters,
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Result<Self, ConfigError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ConfigError::InvalidLocation(
                "Latitude must be between -90 and 90 degrees".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ConfigError::InvalidLocation(
                "Longitude must be between -180 and 180 degrees".to_string(),
            ));
        }
        if !elevation_m.is_finite() {
            return Err(ConfigError::InvalidLocation(
                "Elevation must be a finite number of meters".to_string(),
            ));
        }
        Ok(Self {
            latitude: qtty::angular::Degrees::new(latitude_deg),
            longitude: qtty::angular::Degrees::new(longitude_deg),
            elevation: qtty::length::Meters::new(elevation_m),
        })
    }

    /// Central London, the default observing site.
    pub fn london() -> Self {
        Self {
            latitude: qtty::angular::Degrees::new(51.5074),
            longitude: qtty::angular::Degrees::new(-0.1278),
            elevation: qtty::length::Meters::new(0.0),
        }
    }

    /// WGS84 geodetic site for the siderust pipelines.
    ///
    /// Constructor takes (lon, lat, height).
    pub fn to_site(&self) -> Geodetic<ECEF> {
        Geodetic::<ECEF>::new(self.longitude, self.latitude, self.elevation)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.latitude.value().is_finite()
            && self.longitude.value().is_finite()
            && self.elevation.value().is_finite()
    }
}
