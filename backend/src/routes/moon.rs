use serde::{Deserialize, Serialize};

/// Moon position and phase, `GET /api/moon` body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonRecord {
    pub ra: qtty::angular::Degrees,
    pub dec: qtty::angular::Degrees,
    pub azimuth: qtty::angular::Degrees,
    pub altitude: qtty::angular::Degrees,
    pub visible: bool,
    /// 0 = new moon, 0.5 = full moon
    pub phase: f64,
}

impl MoonRecord {
    /// Substituted when the Moon model fails.
    pub const FALLBACK: MoonRecord = MoonRecord {
        ra: qtty::angular::Degrees::new(180.0),
        dec: qtty::angular::Degrees::new(0.0),
        azimuth: qtty::angular::Degrees::new(180.0),
        altitude: qtty::angular::Degrees::new(30.0),
        visible: true,
        phase: 0.5,
    };
}

/// Route path constant
pub const GET_MOON: &str = "/api/moon";
