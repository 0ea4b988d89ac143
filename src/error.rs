use thiserror::Error;

/// Errors returned by the extraction and clustering pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Input point sequence is empty (no points detected).
    #[error("no points detected")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the point set.
    #[error("invalid cluster count: requested {requested}, but point set has {n_items} points")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of points in the set.
        n_items: usize,
    },

    /// Raster has a channel layout the extractor does not accept.
    #[error("unsupported raster layout: expected 8-bit single-channel, found {found}")]
    UnsupportedLayout {
        /// Description of the layout that was passed in.
        found: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
