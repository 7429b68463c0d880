use thiserror::Error;

/// Errors returned by [`LinearProbingMap`](crate::LinearProbingMap) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// An argument was rejected before the table was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The key has no live entry in the map.
    #[error("the key was not present in the map")]
    NotFound,
}
