use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use siderust::time::{ConversionError, ModifiedJulianDate as TtModifiedJulianDate};

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date on the UTC scale.
/// JD 0 = 4713-01-01 12:00:00 BC (proleptic Julian calendar)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(qtty::time::Days);

impl JulianDate {
    /// Create a new JD value.
    pub fn new<V: Into<qtty::time::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / SECONDS_PER_DAY + UNIX_EPOCH_JD)
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}

/// The fixed UTC instant every position is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObservationInstant(DateTime<Utc>);

impl ObservationInstant {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Build an instant from calendar fields. Returns `None` for impossible dates.
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Julian Date on the UTC scale.
    pub fn julian_date(&self) -> JulianDate {
        let secs = self.0.timestamp() as f64 + self.0.timestamp_subsec_nanos() as f64 / 1e9;
        JulianDate::from_unix_timestamp(secs)
    }

    /// Julian Date on the TT axis, with leap seconds applied.
    pub fn tt_julian_date(&self) -> Result<siderust::time::JulianDate, ConversionError> {
        siderust::time::JulianDate::try_from_chrono(self.0)
    }

    /// Modified Julian Date on the TT axis, as the altitude and azimuth
    /// providers take it.
    pub fn tt_modified_julian_date(&self) -> Result<TtModifiedJulianDate, ConversionError> {
        TtModifiedJulianDate::try_from_chrono(self.0)
    }
}

impl From<DateTime<Utc>> for ObservationInstant {
    fn from(at: DateTime<Utc>) -> Self {
        ObservationInstant::new(at)
    }
}
