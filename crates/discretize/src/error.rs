//! Error types for the soilprof-discretize crate.

/// Error type for all fallible operations in the soilprof-discretize crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiscretizeError {
    /// Returned when the number of sublayers is zero.
    #[error("num_sublayers must be >= 1, got {n}")]
    InvalidSublayers {
        /// The invalid sublayer count.
        n: usize,
    },

    /// Returned when the number of compartments is zero.
    #[error("num_compartments must be >= 1, got {n}")]
    InvalidCompartments {
        /// The invalid compartment count.
        n: usize,
    },

    /// Returned when a logarithmic policy has a non-positive or non-finite density.
    #[error("log_density must be finite and positive for {kind} discretization, got {density}")]
    InvalidLogDensity {
        /// Name of the discretization kind.
        kind: &'static str,
        /// The invalid density.
        density: f64,
    },

    /// Returned when a discretization kind name is not recognised.
    #[error("unknown discretization kind: {name:?}")]
    UnknownKind {
        /// The unrecognised name.
        name: String,
    },
}
