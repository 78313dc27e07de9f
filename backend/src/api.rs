//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::constellations::ConstellationRecord;
pub use crate::routes::constellations::ConstellationStarRecord;
pub use crate::routes::constellations::ConstellationsResponse;
pub use crate::routes::moon::MoonRecord;
pub use crate::routes::sky_data::SkyData;
pub use crate::routes::stars::StarRecord;
pub use crate::routes::stars::StarsResponse;

pub use crate::models::{CelestialObject, HorizonPosition, ObservationInstant, Observer};
