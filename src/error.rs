//! Error types for the reconstruction pipeline.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document contains no fragments at all.
    #[error("document contains no fragments")]
    EmptyDocument,

    /// No fragment of a content-bearing type exists, so the text area
    /// cannot be estimated.
    #[error("no content-bearing fragments to estimate the text area from")]
    NoContentFragments,

    /// Failed to deserialize a partitioner boundary record.
    #[error("malformed fragment record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}
