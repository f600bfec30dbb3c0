use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The operator name is not part of the catalog.
    #[error("Operator not implemented: {0}")]
    UnsupportedOperator(String),

    #[error("Field path must contain at least one step")]
    EmptyPath,

    #[error("Field path step {index} is empty")]
    EmptyStep { index: usize },
}
