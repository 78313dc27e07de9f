//! # Sky Interactive Backend
//!
//! Night sky data for a fixed observer and instant: bright star positions,
//! highlighted constellations, and the Moon's position and phase. The
//! backend exposes a small read-only JSON API via Axum for the web viewer.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Observer, observation instant, catalog objects and horizon positions
//! - [`catalog`]: Catalog provider trait and the compiled-in star lists
//! - [`services`]: Coordinate transform, Moon model and response assembly
//! - [`routes`]: Route-specific response types and paths
//! - [`api`]: Flat re-export of the response types
//! - [`config`]: Server and observation configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Error handling
//!
//! A failed transform for a single object never fails a request: the
//! assembler substitutes a fixed fallback position and logs a warning.
//! Only catalog failures surface as errors (HTTP 500).

pub mod api;

pub mod catalog;
pub mod config;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
