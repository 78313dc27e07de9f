use serde::{Deserialize, Serialize};

/// One bright star with its horizon position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    pub name: String,
    pub ra: qtty::angular::Degrees,
    pub dec: qtty::angular::Degrees,
    pub magnitude: f64,
    pub azimuth: qtty::angular::Degrees,
    pub altitude: qtty::angular::Degrees,
    pub constellation: String,
    pub visible: bool,
}

/// `GET /api/stars` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarsResponse {
    pub stars: Vec<StarRecord>,
}

/// Route path constant
pub const GET_STARS: &str = "/api/stars";
