//! Error types for the soilprof-dov crate.

use soilprof_profile::ProfileError;

/// Error type for all fallible operations in the soilprof-dov crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DovError {
    /// Returned when the payload is not valid JSON or lacks the GeoJSON shape.
    #[error("invalid DOV response: {reason}")]
    Json {
        /// Parser or shape error message.
        reason: String,
    },

    /// Returned when the response does not hold one feature per texture layer.
    #[error("expected {expected} features (clay, silt, sand), got {got}")]
    MissingFeatures {
        /// Number of features required.
        expected: usize,
        /// Number of features found.
        got: usize,
    },

    /// Returned when a property key is not one of the DOV depth intervals.
    #[error("unknown DOV depth key: {key:?}")]
    UnknownDepthKey {
        /// The offending key.
        key: String,
    },

    /// Returned when a depth interval does not start where the previous one
    /// ends (or at the surface, for the first one).
    #[error("DOV depth interval {key:?} starts at {top} cm, expected {expected} cm")]
    NonContiguousDepth {
        /// Key of the interval.
        key: String,
        /// Top of the interval [cm].
        top: f64,
        /// Bottom of the previous interval [cm].
        expected: f64,
    },

    /// Returned when a feature lacks a numeric value for a property.
    #[error("missing numeric property {key:?} in DOV feature")]
    MissingProperty {
        /// The missing key.
        key: String,
    },

    /// Layer or profile construction failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl From<serde_json::Error> for DovError {
    fn from(e: serde_json::Error) -> Self {
        DovError::Json {
            reason: e.to_string(),
        }
    }
}
