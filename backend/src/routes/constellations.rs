use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A constellation member star with its horizon position.
///
/// Magnitude goes out as `mag` here, unlike [`crate::api::StarRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationStarRecord {
    pub name: String,
    pub ra: qtty::angular::Degrees,
    pub dec: qtty::angular::Degrees,
    #[serde(rename = "mag")]
    pub magnitude: f64,
    pub azimuth: qtty::angular::Degrees,
    pub altitude: qtty::angular::Degrees,
    pub visible: bool,
}

/// Constellation figure with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationRecord {
    pub stars: Vec<ConstellationStarRecord>,
    pub highlighted: bool,
    pub color: String,
}

/// `GET /api/constellations` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationsResponse {
    pub constellations: BTreeMap<String, ConstellationRecord>,
}

/// Route path constant
pub const GET_CONSTELLATIONS: &str = "/api/constellations";
