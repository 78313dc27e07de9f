//! Data Transfer Objects for the HTTP API.
//!
//! The sky payloads are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    ConstellationRecord, ConstellationStarRecord, ConstellationsResponse, MoonRecord, SkyData,
    StarRecord, StarsResponse,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}
