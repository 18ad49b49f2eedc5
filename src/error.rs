//! Error types for reference direction generation

/// Errors that can occur while building or loading reference directions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dimension, ceiling or tolerance outside its valid range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No resolution below the ceiling produces enough directions
    #[error("No resolution below {max_sections} reaches {n_refs} directions for {n_obj} objectives")]
    ResolutionNotFound {
        n_obj: usize,
        n_refs: usize,
        max_sections: usize,
    },

    /// Direction length does not match the requested dimension
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Lattice size does not fit into `usize`
    #[error("Number of directions for {n_obj} objectives and {n_sections} sections overflows")]
    CountOverflow { n_obj: usize, n_sections: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored direction row could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// A batch worker thread panicked
    #[error("Batch worker panicked")]
    WorkerPanicked,
}

/// Result type for reference direction operations
pub type Result<T> = std::result::Result<T, Error>;
