use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    /// The expression tree nests deeper than the configured limit.
    #[error("Filter expression exceeds the maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    /// A JSON filter document could not be decoded. Unknown operators are
    /// reported through this variant.
    #[error("Invalid filter document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
