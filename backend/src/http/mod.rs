//! HTTP server module for the sky backend.
//!
//! This module provides an axum-based HTTP server that exposes the sky
//! service as a read-only JSON API, plus the static web viewer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, tracing, error mapping              │
//! │  - Static page and assets                                 │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::SkyService)                     │
//! │  - Coordinate transform and Moon model                    │
//! │  - Per-object fallback policy                             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Catalog Layer (catalog::CatalogProvider)                 │
//! │  - StaticCatalog                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
