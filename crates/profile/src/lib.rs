//! Soil layers and layered soil profiles.
//!
//! A [`SoilProfile`] is an ordered stack of [`SoilLayer`]s described by the
//! bottom depth of each layer. Layers carry Van Genuchten parameters, texture
//! fractions, provenance metadata and an optional
//! [`Discretization`](soilprof_discretize::Discretization) policy.
//!
//! ```text
//! SoilProfile::get_sublayer_depths()
//!   ├─ layer_bounds()                   running (top, bottom) per layer
//!   ├─ SoilLayer::get_sublayer_boundaries()
//!   │    └─ soilprof_discretize::compute_boundaries()
//!   └─ flatten, sort, dedup
//! ```
//!
//! External services are injected through two traits: [`TextureClassifier`]
//! (texture class → fractions) and [`Pedotransfer`] (fractions → hydraulic
//! parameters).
//!
//! # Quick start
//!
//! ```
//! use soilprof_discretize::Discretization;
//! use soilprof_profile::{SoilLayer, SoilProfile};
//!
//! let even = Discretization::even(2, 1).unwrap();
//! let top = SoilLayer::builder("Ap").with_discretization(even).build().unwrap();
//! let sub = SoilLayer::builder("Bt").with_discretization(even).build().unwrap();
//! let profile = SoilProfile::new("pit", vec![top, sub], vec![50.0, 100.0]).unwrap();
//!
//! assert_eq!(profile.get_sublayer_depths(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
//! ```

pub mod capability;
pub mod error;
pub mod fractions;
pub mod layer;
pub mod metadata;
pub mod profile;

pub use capability::{HydraulicPrediction, Pedotransfer, TextureClassifier};
pub use error::ProfileError;
pub use fractions::{
    DEFAULT_NORMALIZE_TOLERANCE, NORMALIZED_EPSILON, TEXTURE_SUM_TOLERANCE, TextureFractions,
};
pub use layer::{DEFAULT_L, LayerBuilder, SoilLayer};
pub use metadata::{LayerMetadata, Property, SourceType};
pub use profile::{Point, SoilProfile};
