//! Service layer: coordinate transform, Moon model and response assembly.
//!
//! The HTTP handlers call into [`SkyService`] only; the transform and Moon
//! model are pure functions of their arguments.

pub mod moon;
pub mod sky;
pub mod transform;

pub use moon::{moon_phase, moon_position, MoonPosition};
pub use sky::{SkyError, SkyResult, SkyService};
pub use transform::{transform, TransformError, TransformResult};
