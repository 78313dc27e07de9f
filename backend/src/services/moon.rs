//! Moon position and phase.
//!
//! The geocentric position comes from siderust's ELP2000-82B lunar theory.
//! Horizon coordinates are topocentric (parallax, precession and nutation
//! applied); RA/Dec are geocentric on the J2000 mean equator so they share
//! the star catalog's frame. The phase is a plain synodic-month fraction
//! counted from a fixed new-moon epoch.

use qtty::angular::Degrees;
use qtty::length::Kilometer;
use siderust::bodies::solar_system::Moon;
use siderust::coordinates::centers::Geocentric;
use siderust::coordinates::transform::TransformFrame;
use siderust::coordinates::{cartesian, frames};

use super::transform::{
    ensure_finite, normalize_angle, observation_jd, validate_observer, TransformError,
    TransformResult,
};
use crate::models::{HorizonPosition, JulianDate, ObservationInstant, Observer};

/// Mean synodic month used for the phase estimate, in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Epoch the phase is counted from (2024-06-30 16:48 UTC).
pub const REFERENCE_NEW_MOON_JD: f64 = 2_460_492.2;

/// Equatorial radius of the Earth.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Full Moon model output for one observer and instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Geocentric right ascension, J2000 equator
    pub ra: Degrees,
    /// Geocentric declination, J2000 equator
    pub dec: Degrees,
    /// Topocentric horizon position
    pub horizon: HorizonPosition,
    /// Fraction of the synodic month, [0, 1)
    pub phase: f64,
}

/// Synodic phase at `jd`: 0 ≈ new moon, 0.5 ≈ full moon.
pub fn moon_phase_at(jd: JulianDate) -> f64 {
    let days_since_new_moon = (jd.value() - REFERENCE_NEW_MOON_JD).rem_euclid(SYNODIC_MONTH_DAYS);
    let phase = days_since_new_moon / SYNODIC_MONTH_DAYS;
    // rem_euclid may round up to the modulus itself.
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

/// Moon phase for an instant (UTC Julian date).
pub fn moon_phase(instant: &ObservationInstant) -> f64 {
    moon_phase_at(instant.julian_date())
}

/// Moon position, horizon coordinates and phase for `observer` at `instant`.
pub fn moon_position(observer: &Observer, instant: &ObservationInstant) -> TransformResult<MoonPosition> {
    validate_observer(observer)?;

    let jd_tt = observation_jd(instant)?;

    let ecliptic: cartesian::Position<Geocentric, frames::EclipticMeanJ2000, Kilometer> =
        Moon::get_geo_position::<Kilometer>(jd_tt);
    let equatorial: cartesian::Position<Geocentric, frames::EquatorialMeanJ2000, Kilometer> =
        TransformFrame::to_frame(&ecliptic);
    let geocentric = equatorial.to_spherical();

    let distance_km = geocentric.distance.value();
    if !distance_km.is_finite() || distance_km <= EARTH_RADIUS_KM {
        return Err(TransformError::NumericFailure(format!(
            "lunar distance {} km is not physical",
            distance_km
        )));
    }

    let topocentric = Moon::get_horizontal::<Kilometer>(jd_tt, observer.to_site());
    let horizon = HorizonPosition {
        azimuth: normalize_angle(topocentric.az()),
        altitude: topocentric.alt(),
    };
    ensure_finite("Moon", &horizon)?;

    Ok(MoonPosition {
        ra: normalize_angle(geocentric.ra()),
        dec: geocentric.dec(),
        horizon,
        phase: moon_phase(instant),
    })
}
