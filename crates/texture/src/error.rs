//! Error types for the soilprof-texture crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the soilprof-texture crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextureError {
    /// Returned when a class name does not resolve to a table entry.
    #[error("unknown texture class {class:?}, available classes: {}", available.join(", "))]
    UnknownClass {
        /// The class as given by the caller.
        class: String,
        /// Valid class names.
        available: Vec<String>,
    },

    /// Returned when a lookup method name is not recognised.
    #[error("unknown method {name:?}, use \"centroid\" or \"mean\"")]
    UnknownMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a table document cannot be parsed.
    #[error("failed to parse texture table: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },

    /// Returned when a table is internally inconsistent.
    #[error("invalid texture table: {reason}")]
    InvalidTable {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a table file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path of the table file.
        path: PathBuf,
        /// OS error message.
        reason: String,
    },
}
