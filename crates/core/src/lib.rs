//! # TrekAtlas Core
//!
//! Core types and the trail catalog for the TrekAtlas trekking browser.
//!
//! This crate provides:
//! - `Trail`: one catalog entry describing a trekking route and its metadata
//! - `Catalog`: the immutable, load-time-constant collection of trails
//! - `GeoPoint` / `BoundingBox`: minimal WGS-84 geometry for routes
//! - Error types shared across the workspace

pub mod catalog;
pub mod data;
pub mod error;
pub mod geo;
pub mod trail;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use geo::{mean_center, BoundingBox, GeoPoint};
pub use trail::{Difficulty, ElevationPoint, EmergencyInfo, Lodge, Review, Trail};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::{Error, Result};
    pub use crate::geo::{mean_center, BoundingBox, GeoPoint};
    pub use crate::trail::{Difficulty, ElevationPoint, EmergencyInfo, Lodge, Review, Trail};
}
