//! Equatorial (ICRS) to horizontal (azimuth/altitude) transform.
//!
//! Built on siderust's apparent-place pipeline: IAU 2006 precession,
//! IAU 2000B nutation, annual aberration and Greenwich apparent sidereal
//! time. Atmospheric refraction is not applied.

use qtty::angular::{Degree, Degrees, Radians};
use siderust::coordinates::spherical::direction;
use siderust::event::altitude::AltitudeProvider;
use siderust::event::azimuth::AzimuthProvider;
use siderust::time::{ConversionError, JulianDate, ModifiedJulianDate};
use thiserror::Error;

use crate::models::{CelestialObject, HorizonPosition, ObservationInstant, Observer};

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("Invalid coordinate for {name}: {reason}")]
    InvalidCoordinate { name: String, reason: String },
    #[error("Invalid observer: {0}")]
    InvalidObserver(String),
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),
    #[error("Numeric failure: {0}")]
    NumericFailure(String),
}

/// Transform a catalog object for `observer` at `instant`.
///
/// Deterministic: identical inputs give bit-identical output.
pub fn transform(
    object: &CelestialObject,
    observer: &Observer,
    instant: &ObservationInstant,
) -> TransformResult<HorizonPosition> {
    validate_observer(observer)?;
    validate_coordinate(object)?;

    let site = observer.to_site();
    let mjd = observation_mjd(instant)?;
    let target = direction::ICRS::new(object.ra, object.dec);

    let position = horizon_from_radians(target.azimuth_at(&site, mjd), target.altitude_at(&site, mjd));

    ensure_finite(&object.name, &position)?;
    Ok(position)
}

/// TT modified Julian date of `instant`.
pub(crate) fn observation_mjd(instant: &ObservationInstant) -> TransformResult<ModifiedJulianDate> {
    instant
        .tt_modified_julian_date()
        .map_err(|e| invalid_instant(instant, e))
}

/// TT Julian date of `instant`.
pub(crate) fn observation_jd(instant: &ObservationInstant) -> TransformResult<JulianDate> {
    instant.tt_julian_date().map_err(|e| invalid_instant(instant, e))
}

fn invalid_instant(instant: &ObservationInstant, err: ConversionError) -> TransformError {
    TransformError::InvalidInstant(format!("{}: {}", instant.datetime(), err))
}

pub(crate) fn horizon_from_radians(azimuth: Radians, altitude: Radians) -> HorizonPosition {
    HorizonPosition {
        azimuth: normalize_angle(azimuth.to::<Degree>()),
        altitude: altitude.to::<Degree>(),
    }
}

pub(crate) fn validate_observer(observer: &Observer) -> TransformResult<()> {
    if !observer.is_finite() {
        return Err(TransformError::InvalidObserver(
            "observer position is not finite".to_string(),
        ));
    }
    if observer.latitude.value().abs() > 90.0 {
        return Err(TransformError::InvalidObserver(format!(
            "latitude {} out of range",
            observer.latitude.value()
        )));
    }
    Ok(())
}

fn validate_coordinate(object: &CelestialObject) -> TransformResult<()> {
    let ra = object.ra.value();
    let dec = object.dec.value();
    let reason = if !ra.is_finite() {
        Some(format!("right ascension {} is not finite", ra))
    } else if !dec.is_finite() {
        Some(format!("declination {} is not finite", dec))
    } else if dec.abs() > 90.0 {
        Some(format!("declination {} outside [-90, 90]", dec))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(TransformError::InvalidCoordinate {
            name: object.name.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

pub(crate) fn ensure_finite(name: &str, position: &HorizonPosition) -> TransformResult<()> {
    if position.azimuth.value().is_finite() && position.altitude.value().is_finite() {
        Ok(())
    } else {
        Err(TransformError::NumericFailure(format!(
            "non-finite horizon position for {}",
            name
        )))
    }
}

/// Wrap into [0, 360); rounding can push a tiny negative angle to exactly 360.
pub(crate) fn normalize_angle(angle: Degrees) -> Degrees {
    let wrapped = angle.wrap_pos();
    if wrapped.value() >= 360.0 {
        Degrees::new(0.0)
    } else {
        wrapped
    }
}
