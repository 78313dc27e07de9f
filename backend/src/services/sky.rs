//! Response assembler.
//!
//! Runs every catalog object through the transform and packages the results
//! into the four payloads served over HTTP. Per-object failures are replaced
//! with documented fallback positions here, explicitly, and logged; only a
//! catalog failure reaches the caller as an error.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use super::moon::moon_position;
use super::transform::transform;
use crate::api::{ConstellationRecord, ConstellationStarRecord, MoonRecord, SkyData, StarRecord};
use crate::catalog::{CatalogError, CatalogProvider, StaticCatalog};
use crate::config::SkyConfig;
use crate::models::{CelestialObject, HorizonPosition, VisibilityRule};

/// Result type for assembler operations
pub type SkyResult<T> = Result<T, SkyError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkyError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Computes sky payloads for one fixed observer and instant.
#[derive(Clone)]
pub struct SkyService {
    catalog: Arc<dyn CatalogProvider>,
    config: SkyConfig,
}

impl SkyService {
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: SkyConfig) -> Self {
        Self { catalog, config }
    }

    /// Service over the compiled-in catalog.
    pub fn with_static_catalog(config: SkyConfig) -> Self {
        Self::new(Arc::new(StaticCatalog::new()), config)
    }

    pub fn config(&self) -> &SkyConfig {
        &self.config
    }

    /// Every catalog star, in catalog order, visible or not.
    pub fn get_stars(&self) -> SkyResult<Vec<StarRecord>> {
        let objects = self.catalog.list_objects()?;
        let stars: Vec<StarRecord> = objects
            .into_iter()
            .map(|object| {
                let (position, visible) = self.place(&object, VisibilityRule::BrightStars);
                StarRecord {
                    name: object.name,
                    ra: object.ra,
                    dec: object.dec,
                    magnitude: object.magnitude,
                    azimuth: position.azimuth,
                    altitude: position.altitude,
                    constellation: object.constellation,
                    visible,
                }
            })
            .collect();

        debug!(
            "Computed {} stars ({} visible)",
            stars.len(),
            stars.iter().filter(|s| s.visible).count()
        );
        Ok(stars)
    }

    /// Constellation figures with per-star horizon positions.
    pub fn get_constellations(&self) -> SkyResult<BTreeMap<String, ConstellationRecord>> {
        let figures = self.catalog.list_constellations()?;
        Ok(figures
            .into_iter()
            .map(|(name, figure)| {
                let stars = figure
                    .objects
                    .into_iter()
                    .map(|object| {
                        let (position, visible) = self.place(&object, VisibilityRule::Horizon);
                        ConstellationStarRecord {
                            name: object.name,
                            ra: object.ra,
                            dec: object.dec,
                            magnitude: object.magnitude,
                            azimuth: position.azimuth,
                            altitude: position.altitude,
                            visible,
                        }
                    })
                    .collect();
                let record = ConstellationRecord {
                    stars,
                    highlighted: figure.highlighted,
                    color: figure.color,
                };
                (name, record)
            })
            .collect())
    }

    /// Moon position and phase, or [`MoonRecord::FALLBACK`] if the model fails.
    pub fn get_moon(&self) -> MoonRecord {
        match moon_position(&self.config.observer, &self.config.instant) {
            Ok(moon) => MoonRecord {
                ra: moon.ra,
                dec: moon.dec,
                azimuth: moon.horizon.azimuth,
                altitude: moon.horizon.altitude,
                visible: VisibilityRule::Horizon.is_visible(moon.horizon.altitude),
                phase: moon.phase,
            },
            Err(e) => {
                warn!("Could not get moon position: {}", e);
                MoonRecord::FALLBACK
            }
        }
    }

    /// Stars, constellations and Moon together with the observation labels.
    pub fn get_sky_data(&self) -> SkyResult<SkyData> {
        Ok(SkyData {
            stars: self.get_stars()?,
            constellations: self.get_constellations()?,
            moon: self.get_moon(),
            observation_date: self.config.observation_date.clone(),
            observation_time: self.config.observation_time.clone(),
        })
    }

    /// Horizon position and visibility, substituting the fallback on failure.
    ///
    /// The fallback (azimuth 0°, altitude 45°, visible) looks like real data
    /// to clients; the warning is the only trace of the substitution.
    fn place(&self, object: &CelestialObject, rule: VisibilityRule) -> (HorizonPosition, bool) {
        match transform(object, &self.config.observer, &self.config.instant) {
            Ok(position) => (position, rule.is_visible(position.altitude)),
            Err(e) => {
                warn!("Could not transform coordinates for {}: {}", object.name, e);
                (HorizonPosition::STAR_FALLBACK, true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogResult, Constellation};
    use crate::models::Observer;

    /// Catalog with one good and one broken entry, both in a figure too.
    struct MixedCatalog;

    impl MixedCatalog {
        fn objects() -> Vec<CelestialObject> {
            vec![
                CelestialObject::new("Vega", 279.234, 38.784, 0.03, "Lira"),
                CelestialObject::new("Broken", 12.0, f64::NAN, 9.9, "Nowhere"),
            ]
        }
    }

    impl CatalogProvider for MixedCatalog {
        fn list_objects(&self) -> CatalogResult<Vec<CelestialObject>> {
            Ok(Self::objects())
        }

        fn list_constellations(&self) -> CatalogResult<BTreeMap<String, Constellation>> {
            let mut map = BTreeMap::new();
            map.insert(
                "Mixed".to_string(),
                Constellation {
                    name: "Mixed".to_string(),
                    objects: Self::objects(),
                    highlighted: false,
                    color: "#123456".to_string(),
                },
            );
            Ok(map)
        }
    }

    struct FailingCatalog;

    impl CatalogProvider for FailingCatalog {
        fn list_objects(&self) -> CatalogResult<Vec<CelestialObject>> {
            Err(CatalogError::Unavailable("catalog file missing".to_string()))
        }

        fn list_constellations(&self) -> CatalogResult<BTreeMap<String, Constellation>> {
            Err(CatalogError::Unavailable("catalog file missing".to_string()))
        }
    }

    fn service() -> SkyService {
        SkyService::with_static_catalog(SkyConfig::default())
    }

    #[test]
    fn test_stars_cover_whole_catalog_in_order() {
        let stars = service().get_stars().unwrap();
        let catalog = StaticCatalog::new().list_objects().unwrap();
        assert_eq!(stars.len(), catalog.len());
        for (record, object) in stars.iter().zip(catalog.iter()) {
            assert_eq!(record.name, object.name);
        }
    }

    #[test]
    fn test_stars_include_below_horizon() {
        let stars = service().get_stars().unwrap();
        assert!(stars.iter().any(|s| !s.visible));
        assert!(stars.iter().any(|s| s.visible));
    }

    #[test]
    fn test_star_visibility_uses_bright_star_rule() {
        for star in service().get_stars().unwrap() {
            assert_eq!(star.visible, star.altitude.value() > -5.0, "{}", star.name);
        }
    }

    #[test]
    fn test_constellation_visibility_uses_horizon_rule() {
        for (_, figure) in service().get_constellations().unwrap() {
            for star in figure.stars {
                assert_eq!(star.visible, star.altitude.value() > 0.0, "{}", star.name);
            }
        }
    }

    #[test]
    fn test_broken_star_gets_fallback_and_batch_continues() {
        let sky = SkyService::new(Arc::new(MixedCatalog), SkyConfig::default());
        let stars = sky.get_stars().unwrap();
        assert_eq!(stars.len(), 2);

        assert_eq!(stars[0].name, "Vega");
        assert!((stars[0].altitude.value() - 66.09).abs() < 0.2);

        let broken = &stars[1];
        assert_eq!(broken.name, "Broken");
        assert_eq!(broken.azimuth.value(), 0.0);
        assert_eq!(broken.altitude.value(), 45.0);
        assert!(broken.visible);
        assert_eq!(broken.magnitude, 9.9);
        assert_eq!(broken.constellation, "Nowhere");
    }

    #[test]
    fn test_broken_constellation_star_gets_fallback() {
        let sky = SkyService::new(Arc::new(MixedCatalog), SkyConfig::default());
        let figures = sky.get_constellations().unwrap();
        let mixed = &figures["Mixed"];
        assert_eq!(mixed.stars.len(), 2);
        assert_eq!(mixed.stars[1].azimuth.value(), 0.0);
        assert_eq!(mixed.stars[1].altitude.value(), 45.0);
        assert!(mixed.stars[1].visible);
        assert_eq!(mixed.color, "#123456");
        assert!(!mixed.highlighted);
    }

    #[test]
    fn test_catalog_failure_propagates() {
        let sky = SkyService::new(Arc::new(FailingCatalog), SkyConfig::default());
        let err = sky.get_stars().unwrap_err();
        assert_eq!(err.to_string(), "Catalog unavailable: catalog file missing");
        assert!(sky.get_constellations().is_err());
        assert!(sky.get_sky_data().is_err());
    }

    #[test]
    fn test_moon_fallback_on_bad_observer() {
        let config = SkyConfig {
            observer: Observer {
                latitude: qtty::angular::Degrees::new(f64::NAN),
                ..Observer::london()
            },
            ..SkyConfig::default()
        };
        let moon = SkyService::with_static_catalog(config).get_moon();
        assert_eq!(moon, MoonRecord::FALLBACK);
    }

    #[test]
    fn test_moon_below_horizon_is_not_visible() {
        let moon = service().get_moon();
        assert!(moon.altitude.value() < 0.0);
        assert!(!moon.visible);
    }

    #[test]
    fn test_sky_data_matches_parts() {
        let sky = service();
        let data = sky.get_sky_data().unwrap();
        assert_eq!(data.stars, sky.get_stars().unwrap());
        assert_eq!(data.constellations, sky.get_constellations().unwrap());
        assert_eq!(data.moon, sky.get_moon());
        assert_eq!(data.observation_date, "2024-07-01");
        assert_eq!(data.observation_time, "22:00:00 UTC");
    }
}
