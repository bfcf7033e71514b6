//! Error types for the soilprof-swap crate.

/// Error type for all fallible operations in the soilprof-swap crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwapError {
    /// Returned when a layer lacks a parameter the hydraulic table needs.
    #[error("layer {layer:?} has no {parameter}, required for the SWAP hydraulic table")]
    MissingHydraulicParameter {
        /// Name of the layer.
        layer: String,
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Returned when writing the output fails.
    #[error("failed to write SWAP soil file: {reason}")]
    Io {
        /// OS error message.
        reason: String,
    },
}

impl From<std::io::Error> for SwapError {
    fn from(e: std::io::Error) -> Self {
        SwapError::Io {
            reason: e.to_string(),
        }
    }
}
