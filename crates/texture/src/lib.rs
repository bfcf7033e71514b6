//! Texture class conversion.
//!
//! Maps soil texture class names (USDA by default) to representative sand,
//! silt and clay percentages, and plugs into
//! [`SoilLayer::infer_fractions_from_texture`](soilprof_profile::SoilLayer::infer_fractions_from_texture)
//! through the [`TextureClassifier`](soilprof_profile::TextureClassifier) trait.
//!
//! Tables are TOML documents:
//!
//! ```toml
//! [metadata]
//! system = "USDA"
//!
//! [centroids.loam]
//! sand = 41.0
//! silt = 40.0
//! clay = 19.0
//!
//! [ranges.loam.sand]
//! mean = 37.5
//! min = 23.0
//! max = 52.0
//! std = 8.4
//! # ... silt, clay
//!
//! [aliases]
//! l = "loam"
//! ```

pub mod converter;
pub mod error;
pub mod table;

pub use converter::{Method, TextureConverter};
pub use error::TextureError;
pub use table::{Centroid, ClassRanges, FractionRange, TableMetadata};
