//! Error types for reading and writing JSON artifacts.

/// Errors from loading the input list or writing an output artifact.
///
/// Writes go through a temp file and a rename, so when one of these is
/// returned from a write the destination is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Filesystem failure.
    #[error("I/O error at {path}: {details}")]
    Io {
        /// Path that caused the error
        path: String,
        /// Details about the I/O error
        details: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed or serialized.
    #[error("Serialization error at {path}: {details}")]
    Serialization {
        /// Path of the document
        path: String,
        /// Details about the serialization error
        details: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

impl ArtifactError {
    /// Create an `Io` error.
    pub fn io(path: impl Into<String>, details: impl Into<String>, source: std::io::Error) -> Self {
        ArtifactError::Io {
            path: path.into(),
            details: details.into(),
            source,
        }
    }

    /// Create a `Serialization` error.
    pub fn serialization(
        path: impl Into<String>,
        details: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        ArtifactError::Serialization {
            path: path.into(),
            details: details.into(),
            source,
        }
    }
}
