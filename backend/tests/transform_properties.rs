use proptest::prelude::*;

use sky_interactive::config::SkyConfig;
use sky_interactive::models::{CelestialObject, ObservationInstant, Observer};
use sky_interactive::services::{moon_phase, moon_position, transform};

fn instant_from(seconds: i64) -> ObservationInstant {
    ObservationInstant::new(
        chrono::DateTime::from_timestamp(seconds, 0).unwrap_or(chrono::DateTime::UNIX_EPOCH),
    )
}

proptest! {
    #[test]
    fn horizon_position_in_range(
        ra in 0.0..360.0f64,
        dec in -90.0..=90.0f64,
        lat in -90.0..=90.0f64,
        lon in -180.0..=180.0f64,
        seconds in 946_684_800i64..2_524_608_000i64,
    ) {
        let object = CelestialObject::new("Test", ra, dec, 1.0, "None");
        let observer = Observer::new(lat, lon, 0.0).unwrap();
        let position = transform(&object, &observer, &instant_from(seconds)).unwrap();

        let az = position.azimuth.value();
        let alt = position.altitude.value();
        prop_assert!((0.0..360.0).contains(&az), "azimuth {}", az);
        prop_assert!((-90.0..=90.0).contains(&alt), "altitude {}", alt);
    }

    #[test]
    fn transform_is_deterministic(
        ra in 0.0..360.0f64,
        dec in -90.0..=90.0f64,
    ) {
        let object = CelestialObject::new("Test", ra, dec, 1.0, "None");
        let config = SkyConfig::default();
        let a = transform(&object, &config.observer, &config.instant).unwrap();
        let b = transform(&object, &config.observer, &config.instant).unwrap();
        prop_assert_eq!(a.azimuth.value().to_bits(), b.azimuth.value().to_bits());
        prop_assert_eq!(a.altitude.value().to_bits(), b.altitude.value().to_bits());
    }

    #[test]
    fn moon_phase_in_unit_interval(seconds in 0i64..4_102_444_800i64) {
        let phase = moon_phase(&instant_from(seconds));
        prop_assert!((0.0..1.0).contains(&phase), "phase {}", phase);
    }

    #[test]
    fn moon_position_in_range(
        lat in -90.0..=90.0f64,
        lon in -180.0..=180.0f64,
        seconds in 946_684_800i64..2_524_608_000i64,
    ) {
        let observer = Observer::new(lat, lon, 0.0).unwrap();
        let moon = moon_position(&observer, &instant_from(seconds)).unwrap();
        prop_assert!((0.0..360.0).contains(&moon.ra.value()));
        prop_assert!((-90.0..=90.0).contains(&moon.dec.value()));
        prop_assert!((0.0..360.0).contains(&moon.horizon.azimuth.value()));
        prop_assert!((-90.0..=90.0).contains(&moon.horizon.altitude.value()));
    }
}
