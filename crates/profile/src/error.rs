//! Error types for the soilprof-profile crate.

/// Error type for all fallible operations in the soilprof-profile crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// Returned when a layer or profile name is empty.
    #[error("{entity} name must not be empty")]
    EmptyName {
        /// `"layer"` or `"profile"`.
        entity: &'static str,
    },

    /// Returned when a parameter lies outside its declared range.
    #[error("{field} = {value} is outside {bounds}")]
    OutOfRange {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable admissible range.
        bounds: &'static str,
    },

    /// Returned when a parameter is NaN or infinite.
    #[error("non-finite value in {field}")]
    NonFinite {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// Returned when residual water content is not below saturated water content.
    #[error(
        "residual water content {theta_res} must be less than saturated water content {theta_sat}"
    )]
    WaterContentOrder {
        /// Residual water content.
        theta_res: f64,
        /// Saturated water content.
        theta_sat: f64,
    },

    /// Returned when sand, silt and clay add up to more than 100%.
    #[error("clay, silt and sand contents sum to {sum}%, exceeding 100%")]
    TextureSumExceeded {
        /// The offending sum.
        sum: f64,
    },

    /// Returned when an operation needs all three texture fractions.
    #[error("sand, silt and clay contents must all be set")]
    MissingFractions,

    /// Returned when fractions cannot be rescaled.
    #[error("sum of fractions is zero or negative: {sum}")]
    DegenerateFractions {
        /// The offending sum.
        sum: f64,
    },

    /// Returned when texture inference is requested for a layer without a class.
    #[error("layer has no texture class")]
    MissingTextureClass,

    /// Returned when a texture class is not in the classification table.
    #[error("unknown texture class {class:?}, available classes: {}", available.join(", "))]
    UnknownTextureClass {
        /// The class as given by the caller.
        class: String,
        /// Valid class names.
        available: Vec<String>,
    },

    /// Returned when the pedotransfer predictor fails.
    #[error("pedotransfer prediction failed: {reason}")]
    Prediction {
        /// Description of the failure.
        reason: String,
    },

    /// Returned when the predictor returns the wrong number of results.
    #[error("pedotransfer returned {got} predictions for {expected} layers")]
    PredictionCount {
        /// Number of layers submitted.
        expected: usize,
        /// Number of predictions returned.
        got: usize,
    },

    /// Returned when a profile has no layer bottoms.
    #[error("layer_bottoms must not be empty")]
    EmptyProfile,

    /// Returned when the bottom depths do not match the layers one to one.
    #[error("{bottoms} bottom depths given for {layers} layers")]
    LengthMismatch {
        /// Number of layers.
        layers: usize,
        /// Number of bottom depths.
        bottoms: usize,
    },

    /// Returned when bottom depths are not strictly increasing.
    #[error("layer {index}: bottom depth {bottom} must be greater than previous bottom {previous}")]
    NonIncreasingBottom {
        /// Zero-based layer index.
        index: usize,
        /// The offending bottom depth.
        bottom: f64,
        /// Bottom of the layer above (0 for the first layer).
        previous: f64,
    },

    /// A layer-level error raised while processing a whole profile.
    #[error("layer {index}: {error}")]
    Layer {
        /// Zero-based layer index.
        index: usize,
        /// The underlying error.
        error: Box<ProfileError>,
    },
}

impl ProfileError {
    /// Wraps this error with the index of the layer it belongs to.
    pub fn at_layer(self, index: usize) -> Self {
        ProfileError::Layer {
            index,
            error: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_name() {
        let e = ProfileError::EmptyName { entity: "layer" };
        assert_eq!(e.to_string(), "layer name must not be empty");
    }

    #[test]
    fn error_out_of_range() {
        let e = ProfileError::OutOfRange {
            field: "theta_sat",
            value: 1.5,
            bounds: "[0, 1]",
        };
        assert_eq!(e.to_string(), "theta_sat = 1.5 is outside [0, 1]");
    }

    #[test]
    fn error_non_finite() {
        let e = ProfileError::NonFinite { field: "alpha" };
        assert_eq!(e.to_string(), "non-finite value in alpha");
    }

    #[test]
    fn error_water_content_order() {
        let e = ProfileError::WaterContentOrder {
            theta_res: 0.5,
            theta_sat: 0.4,
        };
        assert_eq!(
            e.to_string(),
            "residual water content 0.5 must be less than saturated water content 0.4"
        );
    }

    #[test]
    fn error_texture_sum_exceeded() {
        let e = ProfileError::TextureSumExceeded { sum: 101.5 };
        assert_eq!(
            e.to_string(),
            "clay, silt and sand contents sum to 101.5%, exceeding 100%"
        );
    }

    #[test]
    fn error_degenerate_fractions() {
        let e = ProfileError::DegenerateFractions { sum: 0.0 };
        assert_eq!(e.to_string(), "sum of fractions is zero or negative: 0");
    }

    #[test]
    fn error_unknown_texture_class() {
        let e = ProfileError::UnknownTextureClass {
            class: "gravel".to_string(),
            available: vec!["clay".to_string(), "loam".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "unknown texture class \"gravel\", available classes: clay, loam"
        );
    }

    #[test]
    fn error_prediction_count() {
        let e = ProfileError::PredictionCount {
            expected: 3,
            got: 2,
        };
        assert_eq!(e.to_string(), "pedotransfer returned 2 predictions for 3 layers");
    }

    #[test]
    fn error_length_mismatch() {
        let e = ProfileError::LengthMismatch {
            layers: 2,
            bottoms: 3,
        };
        assert_eq!(e.to_string(), "3 bottom depths given for 2 layers");
    }

    #[test]
    fn error_non_increasing_bottom() {
        let e = ProfileError::NonIncreasingBottom {
            index: 1,
            bottom: 50.0,
            previous: 100.0,
        };
        assert_eq!(
            e.to_string(),
            "layer 1: bottom depth 50 must be greater than previous bottom 100"
        );
    }

    #[test]
    fn error_at_layer() {
        let e = ProfileError::MissingFractions.at_layer(2);
        assert_eq!(
            e.to_string(),
            "layer 2: sand, silt and clay contents must all be set"
        );
        assert!(matches!(e, ProfileError::Layer { index: 2, .. }));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ProfileError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ProfileError>();
    }
}
