use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::constellations::ConstellationRecord;
use super::moon::MoonRecord;
use super::stars::StarRecord;

/// Everything in one payload, `GET /api/sky-data` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyData {
    pub stars: Vec<StarRecord>,
    pub constellations: BTreeMap<String, ConstellationRecord>,
    pub moon: MoonRecord,
    pub observation_date: String,
    pub observation_time: String,
}

/// Route path constant
pub const GET_SKY_DATA: &str = "/api/sky-data";
