//! Sublayer discretization for soil layers.
//!
//! A layer spanning `[top, bottom]` is split into sublayers for numerical
//! simulation. The [`Discretization`] policy chooses the spacing rule and the
//! sublayer count; [`compute_boundaries`] places the boundaries.
//!
//! | Kind | Resolution |
//! |------|------------|
//! | `Even` | uniform |
//! | `LogTop` | fine near the top |
//! | `LogBottom` | fine near the bottom |
//! | `LogBoth` | fine at both ends, coarse in the middle |
//!
//! # Quick start
//!
//! ```
//! use soilprof_discretize::{Discretization, DiscretizationKind, compute_boundaries};
//!
//! let policy = Discretization::logarithmic(DiscretizationKind::LogTop, 4, 1, 2.0).unwrap();
//! let boundaries = compute_boundaries(0.0, 50.0, &policy);
//!
//! assert_eq!(boundaries.len(), 5);
//! assert_eq!(boundaries[0], 0.0);
//! assert_eq!(boundaries[4], 50.0);
//! ```
//!
//! The engine performs no I/O and does not validate `top < bottom`; callers
//! that own the layer geometry guarantee a positive thickness.

pub mod boundaries;
pub mod error;
pub mod policy;

pub use boundaries::{compute_boundaries, sublayer_thicknesses};
pub use error::DiscretizeError;
pub use policy::{Discretization, DiscretizationKind};
